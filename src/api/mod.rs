//! REST API module.
//!
//! Contains all API routes and handlers. Response bodies are plain JSON objects.

mod content;
mod system;

pub use content::*;
pub use system::*;

use axum::Json;

use crate::errors::AppError;

/// Handler result: a JSON body or an [`AppError`] rendered as an error response.
pub type ApiResult<T> = Result<Json<T>, AppError>;
