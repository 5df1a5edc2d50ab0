//! Authentication middleware — Bearer token extraction, JWT verification,
//! and agent resolution.

use axum::http::header::AUTHORIZATION;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use paquexpress_core::models::auth::Agent;

use crate::AppState;
use crate::error::AppError;
use crate::services::auth::verify_access_token;

/// Key used to store the resolved `Agent` in request extensions.
#[derive(Debug, Clone)]
pub struct AuthenticatedAgent(pub Agent);

/// Axum middleware: extracts `Authorization: Bearer <token>`, verifies the
/// JWT, resolves the subject to a live agent, and injects
/// `AuthenticatedAgent` into request extensions.
///
/// A token whose subject no longer exists is rejected: every delivery record
/// must reference an agent that existed at confirmation time.
pub async fn require_agent(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".into()))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Invalid authorization scheme".into()))?;

    let claims = verify_access_token(token, state.config.jwt_secret.as_bytes())
        .ok_or_else(|| AppError::Unauthorized("Invalid or expired token".into()))?;

    let agent = paquexpress_core::auth::queries::get_agent_by_email(&state.pool, &claims.sub)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Unknown agent".into()))?;

    request.extensions_mut().insert(AuthenticatedAgent(agent));

    Ok(next.run(request).await)
}
