use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::models::filter::UnknownFilter;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Errors surfaced by request handlers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("template error: {0}")]
    Template(#[from] handlebars::RenderError),

    #[error(transparent)]
    Filter(#[from] UnknownFilter),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Template(e) => {
                tracing::error!("template render failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(format!("template error: {e}")),
                )
                    .into_response()
            }
            AppError::Filter(e) => (
                StatusCode::BAD_REQUEST,
                Html(format!(
                    r#"<div class="text-danger">{}</div>"#,
                    handlebars::html_escape(&e.to_string())
                )),
            )
                .into_response(),
        }
    }
}
