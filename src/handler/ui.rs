//! Static UI page responder

use crate::config::UiConfig;
use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

/// Body sent when the page cannot be read
pub const ERROR_BODY: &str = "error!\n";

/// Serve the configured page verbatim
///
/// A read failure still answers 200, with `ERROR_BODY` as the body.
pub async fn serve_ui(cfg: &UiConfig) -> Response<Full<Bytes>> {
    let path = Path::new(&cfg.file);
    match fs::read(path).await {
        Ok(content) => http::build_file_response(Bytes::from(content), mime::content_type_for(path)),
        Err(e) => {
            logger::log_error(&format!("Failed to read file '{}': {e}", path.display()));
            http::build_text_response(ERROR_BODY)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    fn ui_config(file: &Path) -> UiConfig {
        UiConfig {
            route: "/ui".to_string(),
            file: file.to_string_lossy().into_owned(),
        }
    }

    #[tokio::test]
    async fn test_serves_exact_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("ui.html");
        let page = b"<html><body>\xe2\x84\x83 <b>21</b></body></html>\n";
        std::fs::write(&file, page).unwrap();

        let resp = serve_ui(&ui_config(&file)).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers()["content-length"],
            page.len().to_string().as_str()
        );
        assert_eq!(resp.headers()["content-type"], "text/html; charset=utf-8");
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], &page[..]);
    }

    #[tokio::test]
    async fn test_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("ui.html");
        std::fs::write(&file, b"").unwrap();

        let resp = serve_ui(&ui_config(&file)).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["content-length"], "0");
    }

    #[tokio::test]
    async fn test_missing_file_returns_error_text() {
        let dir = tempfile::tempdir().unwrap();
        let resp = serve_ui(&ui_config(&dir.path().join("absent.html"))).await;
        assert_eq!(resp.status(), 200);
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"error!\n");
    }

    #[tokio::test]
    async fn test_directory_is_a_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let resp = serve_ui(&ui_config(dir.path())).await;
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"error!\n");
    }
}
