//! HTTP front end: an upload form and a download endpoint.
//!
//! # Routes
//!
//! - `GET /` - the upload form
//! - `POST /` - process an uploaded CSV, store the result, link to it
//! - `GET /download?file=NAME` - fetch a stored result
//!
//! Results are written into [`ServerConfig::output_dir`]; requested names are
//! reduced to bare file names so they cannot escape it.

mod handlers;
mod page;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;

pub use handlers::ServerError;

/// Settings fixed before the server starts and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on
    pub addr: SocketAddr,
    /// Directory holding processed files
    pub output_dir: PathBuf,
    /// Largest accepted request body, in bytes
    pub max_upload_bytes: usize,
}

/// Build the application router.
pub fn router(config: ServerConfig) -> Router {
    let body_limit = DefaultBodyLimit::max(config.max_upload_bytes);
    Router::new()
        .route("/", get(handlers::form_page).post(handlers::submit))
        .route("/download", get(handlers::download))
        .layer(body_limit)
        .with_state(Arc::new(config))
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: ServerConfig) -> Result<()> {
    tokio::fs::create_dir_all(&config.output_dir)
        .await
        .with_context(|| format!("Cannot create output directory '{}'", config.output_dir.display()))?;

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("Cannot listen on {}", config.addr))?;

    tracing::info!("Serving on http://{}", listener.local_addr()?);
    axum::serve(listener, router(config))
        .await
        .context("HTTP server stopped")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use tower::ServiceExt;

    const BOUNDARY: &str = "gridshift-test-boundary";

    fn test_config(name: &str) -> ServerConfig {
        let output_dir = std::env::temp_dir().join(format!(
            "gridshift-server-{}-{}",
            std::process::id(),
            name
        ));
        let _ = std::fs::remove_dir_all(&output_dir);
        std::fs::create_dir_all(&output_dir).unwrap();
        ServerConfig {
            addr: "127.0.0.1:0".parse().unwrap(),
            output_dir,
            max_upload_bytes: 1024 * 1024,
        }
    }

    /// Build a multipart/form-data body from text fields and an optional file.
    fn multipart_request(fields: &[(&str, &str)], file: Option<&str>) -> Request<Body> {
        let mut body = String::new();
        for (name, value) in fields {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            ));
        }
        if let Some(contents) = file {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"inputcsv\"; filename=\"in.csv\"\r\nContent-Type: text/csv\r\n\r\n{contents}\r\n"
            ));
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));

        Request::builder()
            .method("POST")
            .uri("/")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_form_page() {
        let app = router(test_config("form"));
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let text = body_text(response).await;
        assert!(text.contains("enctype=\"multipart/form-data\""));
        assert!(!text.contains("Download Output"));
    }

    #[tokio::test]
    async fn test_submit_processes_upload() {
        let config = test_config("submit");
        let output_dir = config.output_dir.clone();
        let request = multipart_request(
            &[("nrow", "1"), ("ncol", "1"), ("outputcsv", "result.csv")],
            Some("a,b\nc,d\n"),
        );

        let response = router(config).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let text = body_text(response).await;
        assert!(text.contains("/download?file=result.csv"));
        assert_eq!(
            std::fs::read_to_string(output_dir.join("result.csv")).unwrap(),
            "a,,b\n,,\nc,,d\n,,\n"
        );
    }

    #[tokio::test]
    async fn test_submit_center_rotation() {
        let config = test_config("submit-center");
        let output_dir = config.output_dir.clone();
        let request = multipart_request(
            &[
                ("nrow", "9"),
                ("ncol", "9"),
                ("rotation", "center3x3"),
                ("outputcsv", "out.csv"),
            ],
            Some("a,b,c\nd,e,f\ng,h,i\n"),
        );

        let response = router(config).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            std::fs::read_to_string(output_dir.join("out.csv")).unwrap(),
            "c,f,i\nb,e,h\na,d,g\n"
        );
    }

    #[tokio::test]
    async fn test_submit_strips_output_directories() {
        let config = test_config("submit-traversal");
        let output_dir = config.output_dir.clone();
        let request = multipart_request(
            &[("nrow", "1"), ("ncol", "1"), ("outputcsv", "../escape.csv")],
            Some("a\n"),
        );

        let response = router(config).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(output_dir.join("escape.csv").exists());
    }

    #[tokio::test]
    async fn test_submit_rejects_zero_period() {
        let request = multipart_request(
            &[("nrow", "0"), ("ncol", "1"), ("outputcsv", "out.csv")],
            Some("a,b\n"),
        );

        let response = router(test_config("zero")).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response).await.contains("nrow"));
    }

    #[tokio::test]
    async fn test_submit_rejects_ragged_csv() {
        let request = multipart_request(
            &[("nrow", "1"), ("ncol", "1"), ("outputcsv", "out.csv")],
            Some("a,b\nc\n"),
        );

        let response = router(test_config("ragged")).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_submit_requires_file() {
        let request = multipart_request(&[("nrow", "1"), ("ncol", "1"), ("outputcsv", "out.csv")], None);

        let response = router(test_config("no-file")).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_download_stored_file() {
        let config = test_config("download");
        std::fs::write(config.output_dir.join("done.csv"), "x,y\n").unwrap();

        let response = router(config)
            .oneshot(
                Request::get("/download?file=done.csv")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"done.csv\""
        );
        assert_eq!(body_text(response).await, "x,y\n");
    }

    #[tokio::test]
    async fn test_download_missing_file() {
        let response = router(test_config("download-missing"))
            .oneshot(
                Request::get("/download?file=nothing.csv")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_download_cannot_escape_output_dir() {
        let config = test_config("download-traversal");
        let parent = config.output_dir.parent().unwrap().to_path_buf();
        let outside = parent.join(format!("gridshift-outside-{}.csv", std::process::id()));
        std::fs::write(&outside, "secret\n").unwrap();

        let uri = format!(
            "/download?file=..%2F{}",
            outside.file_name().unwrap().to_str().unwrap()
        );
        let response = router(config)
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let _ = std::fs::remove_file(outside);
    }
}
