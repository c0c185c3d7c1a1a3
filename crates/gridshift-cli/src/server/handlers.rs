//! Request handlers for the upload form and downloads.

use std::io;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use gridshift_core::{parse_grid, Pipeline};
use serde::Deserialize;
use thiserror::Error;
use tokio::task::JoinError;

use super::page::render_form;
use super::ServerConfig;
use crate::batch::{self, BatchError};
use crate::params::{parse_period, parse_rotation, sanitize_file_name};

/// Errors returned to HTTP clients.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Batch(#[from] BatchError),

    #[error("Malformed upload: {0}")]
    Multipart(#[from] MultipartError),

    #[error("No such file: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Processing task failed: {0}")]
    Task(#[from] JoinError),
}

impl ServerError {
    fn status(&self) -> StatusCode {
        match self {
            ServerError::Batch(BatchError::InputUnparseable(_))
            | ServerError::Batch(BatchError::InvalidParameter { .. })
            | ServerError::Multipart(_) => StatusCode::BAD_REQUEST,
            ServerError::Batch(BatchError::InputNotFound { .. }) | ServerError::NotFound(_) => {
                StatusCode::NOT_FOUND
            }
            ServerError::Batch(BatchError::OutputWriteFailure { .. })
            | ServerError::Io(_)
            | ServerError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {self}");
        } else {
            tracing::warn!("Request rejected: {self}");
        }
        (status, self.to_string()).into_response()
    }
}

/// Form fields as received, before validation.
#[derive(Debug, Default)]
struct Upload {
    csv: Option<Bytes>,
    file_name: Option<String>,
    nrow: String,
    ncol: String,
    rotation: String,
    output: String,
}

impl Upload {
    async fn read(mut multipart: Multipart) -> Result<Self, ServerError> {
        let mut upload = Upload::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };
            match name.as_str() {
                "inputcsv" => {
                    upload.file_name = field.file_name().map(str::to_owned);
                    upload.csv = Some(field.bytes().await?);
                }
                "nrow" => upload.nrow = field.text().await?,
                "ncol" => upload.ncol = field.text().await?,
                "rotation" => upload.rotation = field.text().await?,
                "outputcsv" => upload.output = field.text().await?,
                _ => tracing::debug!("Ignoring form field {name}"),
            }
        }

        Ok(upload)
    }
}

/// `GET /`
pub async fn form_page() -> Html<String> {
    Html(render_form(None))
}

/// `POST /`: transform the uploaded CSV and store it for download.
///
/// Each request decodes its own grid from its own upload buffer.
pub async fn submit(
    State(config): State<Arc<ServerConfig>>,
    multipart: Multipart,
) -> Result<Html<String>, ServerError> {
    let upload = Upload::read(multipart).await?;

    let csv = upload.csv.ok_or(BatchError::InvalidParameter {
        name: "inputcsv",
        reason: "no file uploaded".to_string(),
    })?;
    let pipeline = Pipeline::new(
        parse_period("nrow", &upload.nrow)?,
        parse_period("ncol", &upload.ncol)?,
    )
    .with_rotation(parse_rotation(&upload.rotation)?);
    let output_name = sanitize_file_name("outputcsv", &upload.output)?;
    let output_path = config.output_dir.join(&output_name);

    tracing::info!(
        "Processing upload {} ({} bytes) into {}",
        upload.file_name.as_deref().unwrap_or("<unnamed>"),
        csv.len(),
        output_path.display()
    );

    tokio::task::spawn_blocking(move || -> Result<(), BatchError> {
        let grid = parse_grid(&csv)?;
        let grid = batch::transform(grid, &pipeline);
        batch::store_grid(&grid, &output_path)
    })
    .await??;

    Ok(Html(render_form(Some(&output_name))))
}

#[derive(Debug, Deserialize)]
pub struct DownloadQuery {
    file: String,
}

/// `GET /download?file=NAME`: serve a stored output as an attachment.
pub async fn download(
    State(config): State<Arc<ServerConfig>>,
    Query(query): Query<DownloadQuery>,
) -> Result<Response, ServerError> {
    let name = sanitize_file_name("file", &query.file)?;
    let path = config.output_dir.join(&name);

    let bytes = tokio::fs::read(&path).await.map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => ServerError::NotFound(name.clone()),
        _ => ServerError::Io(err),
    })?;

    let headers = [
        (header::CONTENT_TYPE, "text/csv".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{name}\""),
        ),
    ];
    Ok((headers, bytes).into_response())
}
