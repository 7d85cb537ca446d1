//! Renderer
//!
//! Views are produced by an external renderer. The default emits the view
//! name and its data as JSON.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::presentation::dto::PageData;

pub trait Renderer: Send + Sync + 'static {
    fn render(&self, status: StatusCode, view: &str, data: &PageData) -> Response;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, status: StatusCode, view: &str, data: &PageData) -> Response {
        (
            status,
            Json(serde_json::json!({
                "view": view,
                "data": data,
            })),
        )
            .into_response()
    }
}
