//! API wire models.
//!
//! Field names follow the public contract (Spanish, as the mobile client
//! expects them); internal domain models live in `paquexpress_core::models`.

use serde::{Deserialize, Serialize};

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// `POST /auth/register` form body.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterForm {
    pub nombre: String,
    pub email: String,
    pub password: String,
}

/// `POST /auth/login` form body (OAuth2 password-grant shape).
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// `POST /auth/login` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Generic `{msg}` acknowledgment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MsgResponse {
    pub msg: String,
}

/// `GET /paquetes/{id}` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageResponse {
    pub id: i64,
    pub paquete_uid: String,
    pub direccion: String,
    pub lat: f64,
    pub lon: f64,
}

/// `POST /fotos/` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoResponse {
    /// Publicly resolvable URL of the stored photo.
    pub ruta: String,
}

/// `POST /entregas/confirmar` JSON body.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmDeliveryRequest {
    pub paquete_id: i64,
    pub gps_lat: f64,
    pub gps_lon: f64,
    pub foto_url: String,
}

/// `GET /` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub db_connected: bool,
}
