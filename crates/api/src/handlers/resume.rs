//! Handler for the résumé (CV) upload endpoint.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Multipart form field that carries the CV file.
pub const CV_FIELD: &str = "cvFile";

/// POST /api/upload-cv
///
/// Accepts a single file from the `cvFile` multipart field and replaces
/// the stored résumé. Responds in plain text; a request without that
/// field is a 400 and leaves the stored file untouched.
pub async fn upload_cv(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, String)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some(CV_FIELD) {
            continue;
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        state.resume.replace(&data).await?;

        return Ok((StatusCode::OK, "CV updated successfully.".to_string()));
    }

    Ok((StatusCode::BAD_REQUEST, "No file uploaded.".to_string()))
}
