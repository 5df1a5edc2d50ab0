//! Agent credential queries.

use sqlx::PgPool;

use super::AuthError;
use crate::models::auth::{Agent, AgentWithPassword};

/// Check whether an email is already registered.
pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool, AuthError> {
    let exists =
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM agents WHERE email = $1)")
            .bind(email)
            .fetch_one(pool)
            .await?;
    Ok(exists)
}

/// Create a new agent, returning the agent ID.
pub async fn create_agent(
    pool: &PgPool,
    nombre: &str,
    email: &str,
    password_hash: &str,
) -> Result<i64, AuthError> {
    let agent_id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO agents (nombre, email, password_hash) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(nombre)
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await?;
    Ok(agent_id)
}

/// Fetch an agent with its password hash, for login verification.
pub async fn find_agent_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<AgentWithPassword>, AuthError> {
    let row = sqlx::query_as::<_, (i64, String, String)>(
        "SELECT id, nombre, password_hash FROM agents WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(|(id, nombre, password_hash)| AgentWithPassword {
        agent: Agent {
            id,
            nombre,
            email: email.to_string(),
        },
        password_hash,
    }))
}

/// Fetch an agent by email, without credentials.
pub async fn get_agent_by_email(pool: &PgPool, email: &str) -> Result<Option<Agent>, AuthError> {
    let row =
        sqlx::query_as::<_, (i64, String)>("SELECT id, nombre FROM agents WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await?;
    Ok(row.map(|(id, nombre)| Agent {
        id,
        nombre,
        email: email.to_string(),
    }))
}

/// Delete an agent by ID. Agents are immutable in production; tests use
/// this to exercise tokens whose subject no longer exists.
pub async fn delete_agent(pool: &PgPool, agent_id: i64) -> Result<(), AuthError> {
    sqlx::query("DELETE FROM agents WHERE id = $1")
        .bind(agent_id)
        .execute(pool)
        .await?;
    Ok(())
}
