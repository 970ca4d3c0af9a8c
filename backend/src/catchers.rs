use rocket::{Request, catch, serde::json::Json};
use serde::Serialize;
use tracing::{error, warn};

#[derive(Serialize)]
pub struct ErrorMessage {
    error: String,
    status: u16,
}

#[catch(500)]
pub fn internal_error(req: &Request) -> Json<ErrorMessage> {
    error!("Internal error serving {}", req.uri());
    Json(ErrorMessage {
        error: "An internal server error occurred.".into(),
        status: 500
    })
}

#[catch(404)]
pub fn not_found(req: &Request) -> Json<ErrorMessage> {
    warn!("Nothing to serve for {}", req.uri());
    Json(ErrorMessage {
        error: "The requested resource was not found.".into(),
        status: 404
    })
}
