//! HTTP route handlers

pub mod chat;
pub mod health;
pub mod review;
pub mod voice;

use crate::error::ApiError;

/// Fallback for unroutable paths.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("endpoint not found".to_string())
}
