//! Service status endpoint — bootstrap health check.

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::error::AppResult;
use crate::models::StatusResponse;

/// `GET /` — reports service liveness and DB connectivity.
pub async fn status_handler(State(state): State<AppState>) -> AppResult<Json<StatusResponse>> {
    let db_connected = sqlx::query("SELECT 1").execute(&state.pool).await.is_ok();

    Ok(Json(StatusResponse {
        status: "API Paquexpress Online".into(),
        db_connected,
    }))
}
