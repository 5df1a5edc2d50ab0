//! Authentication request handlers.

use axum::Json;
use axum::extract::{Form, State};

use crate::AppState;
use crate::error::AppResult;
use crate::models::{LoginForm, MsgResponse, RegisterForm, TokenResponse};
use crate::services::auth;

/// `POST /auth/register` — create a new agent account (form fields
/// `nombre`, `email`, `password`).
pub async fn register_handler(
    State(state): State<AppState>,
    Form(body): Form<RegisterForm>,
) -> AppResult<Json<MsgResponse>> {
    let resp = auth::register(&state.pool, &body.nombre, &body.email, &body.password).await?;
    Ok(Json(resp))
}

/// `POST /auth/login` — authenticate with the OAuth2 password-grant form
/// (`username` carries the email).
pub async fn login_handler(
    State(state): State<AppState>,
    Form(body): Form<LoginForm>,
) -> AppResult<Json<TokenResponse>> {
    let resp = auth::login(
        &state.pool,
        &body.username,
        &body.password,
        state.config.jwt_secret.as_bytes(),
    )
    .await?;
    Ok(Json(resp))
}
