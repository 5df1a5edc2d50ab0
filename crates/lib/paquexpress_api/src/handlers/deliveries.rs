//! Delivery confirmation request handlers.

use axum::Json;
use axum::extract::State;
use paquexpress_core::models::delivery::NewDelivery;
use tracing::info;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthenticatedAgent;
use crate::models::{ConfirmDeliveryRequest, MsgResponse};

/// `POST /entregas/confirmar` — record a proof-of-delivery for the
/// authenticated agent. The referenced package must exist.
pub async fn confirm_delivery_handler(
    State(state): State<AppState>,
    axum::Extension(agent): axum::Extension<AuthenticatedAgent>,
    Json(body): Json<ConfirmDeliveryRequest>,
) -> AppResult<Json<MsgResponse>> {
    if !paquexpress_core::packages::package_exists(&state.pool, body.paquete_id).await? {
        return Err(AppError::NotFound(format!(
            "Package {} not found",
            body.paquete_id
        )));
    }

    let record = paquexpress_core::deliveries::insert_delivery(
        &state.pool,
        &NewDelivery {
            paquete_id: body.paquete_id,
            agente_id: agent.0.id,
            foto_url: body.foto_url,
            gps_lat: body.gps_lat,
            gps_lon: body.gps_lon,
        },
    )
    .await?;

    info!(
        delivery_id = record.id,
        paquete_id = record.paquete_id,
        agente_id = record.agente_id,
        "delivery confirmed"
    );

    Ok(Json(MsgResponse {
        msg: "Delivery confirmed".into(),
    }))
}
