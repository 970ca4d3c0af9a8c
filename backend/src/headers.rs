use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{ContentType, Header, Status};
use rocket::{Request, Response};

pub const NO_CACHE: &str = "no-cache";
pub const LONG_CACHE: &str = "public, max-age=604800";

/// Keeps `index.html` revalidated so new deploys are picked up. Hashed bundle files can be cached.
pub struct CacheControl;

pub fn cache_policy(content_type: Option<&ContentType>) -> &'static str {
    match content_type {
        Some(content_type) if !content_type.is_html() => LONG_CACHE,
        _ => NO_CACHE,
    }
}

#[rocket::async_trait]
impl Fairing for CacheControl {
    fn info(&self) -> Info {
        Info {
            name: "Cache-Control",
            kind: Kind::Response
        }
    }

    async fn on_response<'r>(&self, _req: &'r Request<'_>, res: &mut Response<'r>) {
        if res.status() != Status::Ok {
            return;
        }
        let policy = cache_policy(res.content_type().as_ref());
        res.set_header(Header::new("Cache-Control", policy));
    }
}
