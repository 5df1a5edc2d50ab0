//! Photo upload request handlers.

use axum::Json;
use axum::extract::{Multipart, State};

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::PhotoResponse;

/// `POST /fotos/` — multipart photo upload, returns the public URL of the
/// stored file.
pub async fn upload_photo_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<PhotoResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let original = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        let stored = state.media.store(&bytes, &original).await?;
        return Ok(Json(PhotoResponse {
            ruta: state.config.photo_url(&stored.filename),
        }));
    }

    Err(AppError::Validation("Missing 'file' part".into()))
}
