//! Package directory queries.
//!
//! Packages are provisioned by an external process; this module only reads.

use sqlx::PgPool;

use crate::models::delivery::Package;

/// Fetch a package by ID.
pub async fn get_package(pool: &PgPool, id: i64) -> Result<Option<Package>, sqlx::Error> {
    sqlx::query_as::<_, Package>(
        "SELECT id, paquete_uid, direccion, lat, lon FROM packages WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Check whether a package exists.
pub async fn package_exists(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM packages WHERE id = $1)")
        .bind(id)
        .fetch_one(pool)
        .await
}

/// Insert a package. Provisioning is out of band in production; tests use
/// this to seed fixtures.
pub async fn insert_package(
    pool: &PgPool,
    paquete_uid: &str,
    direccion: &str,
    lat: f64,
    lon: f64,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO packages (paquete_uid, direccion, lat, lon) \
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(paquete_uid)
    .bind(direccion)
    .bind(lat)
    .bind(lon)
    .fetch_one(pool)
    .await
}
