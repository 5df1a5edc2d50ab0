//! Package lookup request handlers.

use axum::Json;
use axum::extract::{Path, State};

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::PackageResponse;

/// `GET /paquetes/{id}` — package metadata by ID.
pub async fn get_package_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<PackageResponse>> {
    let package = paquexpress_core::packages::get_package(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Package {id} not found")))?;

    Ok(Json(PackageResponse {
        id: package.id,
        paquete_uid: package.paquete_uid,
        direccion: package.direccion,
        lat: package.lat,
        lon: package.lon,
    }))
}
