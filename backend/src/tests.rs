#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use rocket::http::{ContentType, Status};
    use rocket::local::blocking::Client;
    use uuid::Uuid;
    use crate::assets::{extract_bundle, INDEX_FILE};
    use crate::build_rocket;
    use crate::headers::{cache_policy, LONG_CACHE, NO_CACHE};

    const INDEX_BODY: &str = "<!DOCTYPE html><html><body>SamosaTech</body></html>";
    const SCRIPT: &str = "frontend-5f2a9c.js";
    const SCRIPT_PATH: &str = "/frontend-5f2a9c.js";

    /// Removes its directory when dropped so test runs leave nothing in the temp dir.
    struct TempRoot(PathBuf);

    impl Drop for TempRoot {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    fn static_root(with_index: bool) -> TempRoot {
        let root = std::env::temp_dir().join(format!("samosatech_test_{}", Uuid::new_v4()));
        fs::create_dir_all(&root).unwrap();
        if with_index {
            fs::write(root.join(INDEX_FILE), INDEX_BODY).unwrap();
        }
        fs::write(root.join(SCRIPT), "export default function init() {}").unwrap();
        TempRoot(root)
    }

    /// The root is returned alongside the client and must outlive it.
    fn client(with_index: bool) -> (Client, TempRoot) {
        let root = static_root(with_index);
        let client = Client::tracked(build_rocket(root.0.clone())).expect("valid rocket instance");
        (client, root)
    }

    #[test]
    fn test_serves_bundle_files() {
        let (client, _root) = client(true);
        let response = client.get(SCRIPT_PATH).dispatch();
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.content_type(), Some(ContentType::JavaScript));
        assert_eq!(response.headers().get_one("Cache-Control"), Some(LONG_CACHE));
        assert!(response.into_string().unwrap().contains("init"));
    }

    #[test]
    fn test_root_serves_index() {
        let (client, _root) = client(true);
        let response = client.get("/").dispatch();
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.content_type(), Some(ContentType::HTML));
        assert_eq!(response.headers().get_one("Cache-Control"), Some(NO_CACHE));
        assert_eq!(response.into_string().as_deref(), Some(INDEX_BODY));
    }

    #[test]
    fn test_client_routes_fall_back_to_index() {
        let (client, _root) = client(true);
        for path in ["/register", "/date-time", "/game", "/about", "/no/such/page"] {
            let response = client.get(path).dispatch();
            assert_eq!(response.status(), Status::Ok, "{}", path);
            assert_eq!(response.into_string().as_deref(), Some(INDEX_BODY), "{}", path);
        }
    }

    #[test]
    fn test_missing_index_returns_json_404() {
        let (client, _root) = client(false);
        let response = client.get("/register").dispatch();
        assert_eq!(response.status(), Status::NotFound);
        assert_eq!(response.content_type(), Some(ContentType::JSON));
        assert!(response.headers().get_one("Cache-Control").is_none());

        let body: serde_json::Value = serde_json::from_str(&response.into_string().unwrap()).unwrap();
        assert_eq!(body["status"], 404);
        assert_eq!(body["error"], "The requested resource was not found.");
    }

    #[test]
    fn test_cache_policy_by_type() {
        assert_eq!(cache_policy(Some(&ContentType::HTML)), NO_CACHE);
        assert_eq!(cache_policy(Some(&ContentType::WASM)), LONG_CACHE);
        assert_eq!(cache_policy(None), NO_CACHE);
    }

    #[test]
    fn test_extracts_embedded_bundle() {
        let first = TempRoot(extract_bundle().unwrap());
        let second = TempRoot(extract_bundle().unwrap());
        assert!(first.0.is_dir());
        assert_ne!(first.0, second.0, "each extraction gets its own directory");
    }

    #[test]
    fn test_temp_roots_are_removed() {
        let (client, root) = client(true);
        let path = root.0.clone();
        assert!(path.join(INDEX_FILE).is_file());
        drop(client);
        drop(root);
        assert!(!path.exists());

        let extracted = TempRoot(extract_bundle().unwrap());
        let path = extracted.0.clone();
        drop(extracted);
        assert!(!path.exists());
    }
}
