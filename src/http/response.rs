//! HTTP response building module
//!
//! Every handler answers with one of these builders. Build failures are
//! logged and degrade to an empty response instead of panicking.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use super::mime::TEXT_PLAIN;

/// Body of the 404 response for unregistered paths
pub const NOT_FOUND_BODY: &str = "404 page not found\n";

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", TEXT_PLAIN)
        .header("X-Content-Type-Options", "nosniff")
        .body(Full::new(Bytes::from_static(NOT_FOUND_BODY.as_bytes())))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from_static(NOT_FOUND_BODY.as_bytes())))
        })
}

/// Build 200 response carrying file bytes with an explicit length
pub fn build_file_response(data: Bytes, content_type: &str) -> Response<Full<Bytes>> {
    let content_length = data.len();

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(data))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 200 plain-text response
///
/// Used for command output and for the fallback bodies, which are
/// reported with status 200 as well.
pub fn build_text_response(body: impl Into<Bytes>) -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-Type", TEXT_PLAIN)
        .body(Full::new(body.into()))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_404_response() {
        let resp = build_404_response();
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.headers()["content-type"], TEXT_PLAIN);
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"404 page not found\n");
    }

    #[tokio::test]
    async fn test_file_response_sets_length() {
        let resp = build_file_response(Bytes::from_static(b"<p>hi</p>"), "text/html");
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["content-length"], "9");
        assert_eq!(resp.headers()["content-type"], "text/html");
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"<p>hi</p>");
    }

    #[test]
    fn test_text_response_is_200() {
        let resp = build_text_response("Don't know!\n");
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["content-type"], TEXT_PLAIN);
    }
}
