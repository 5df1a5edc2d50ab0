//! Authentication service — register/login flows delegating to
//! `paquexpress_core::auth`.

use sqlx::PgPool;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::{MsgResponse, TokenResponse};

pub use paquexpress_core::auth::jwt::verify_access_token;

/// Register a new delivery agent.
pub async fn register(
    pool: &PgPool,
    nombre: &str,
    email: &str,
    password: &str,
) -> AppResult<MsgResponse> {
    if nombre.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err(AppError::Validation(
            "nombre, email and password are required".into(),
        ));
    }

    if paquexpress_core::auth::queries::email_exists(pool, email).await? {
        return Err(AppError::Conflict("Email already registered".into()));
    }

    let pw_hash = paquexpress_core::auth::password::hash_password(password)?;
    let agent_id =
        paquexpress_core::auth::queries::create_agent(pool, nombre, email, &pw_hash).await?;

    info!(agent_id, email, "agent registered");
    Ok(MsgResponse {
        msg: "Agent created".into(),
    })
}

/// Authenticate with email + password, issuing a bearer token.
pub async fn login(
    pool: &PgPool,
    email: &str,
    password: &str,
    jwt_secret: &[u8],
) -> AppResult<TokenResponse> {
    let row = paquexpress_core::auth::queries::find_agent_by_email(pool, email).await?;

    // Same generic error for unknown email and wrong password.
    let record = match row {
        None => return Err(AppError::Unauthorized("Invalid credentials".into())),
        Some(r) => r,
    };

    if !paquexpress_core::auth::password::verify_password(password, &record.password_hash)? {
        return Err(AppError::Unauthorized("Invalid credentials".into()));
    }

    let access_token =
        paquexpress_core::auth::jwt::generate_access_token(&record.agent.email, jwt_secret)?;

    Ok(TokenResponse {
        access_token,
        token_type: "bearer".into(),
    })
}
