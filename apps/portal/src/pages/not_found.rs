use axum::http::Uri;

use crate::errors::AppError;

/// Fallback for every path outside the route table.
pub async fn handle_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No page at {}", uri.path()))
}
