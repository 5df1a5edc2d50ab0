//! Delivery record persistence.

use sqlx::PgPool;

use crate::models::delivery::{DeliveryRecord, NewDelivery};

/// Insert a delivery record, returning the created row.
///
/// `fecha` is assigned by the database; records are never updated or
/// deleted afterwards.
pub async fn insert_delivery(
    pool: &PgPool,
    delivery: &NewDelivery,
) -> Result<DeliveryRecord, sqlx::Error> {
    sqlx::query_as::<_, DeliveryRecord>(
        "INSERT INTO deliveries (paquete_id, agente_id, foto_url, gps_lat, gps_lon) \
         VALUES ($1, $2, $3, $4, $5) \
         RETURNING id, paquete_id, agente_id, foto_url, gps_lat, gps_lon, fecha",
    )
    .bind(delivery.paquete_id)
    .bind(delivery.agente_id)
    .bind(&delivery.foto_url)
    .bind(delivery.gps_lat)
    .bind(delivery.gps_lon)
    .fetch_one(pool)
    .await
}

/// Fetch the most recent delivery record for a package. The confirm
/// endpoint returns no record body; tests use this to verify what was
/// persisted.
pub async fn latest_delivery_for_package(
    pool: &PgPool,
    paquete_id: i64,
) -> Result<Option<DeliveryRecord>, sqlx::Error> {
    sqlx::query_as::<_, DeliveryRecord>(
        "SELECT id, paquete_id, agente_id, foto_url, gps_lat, gps_lon, fecha \
         FROM deliveries WHERE paquete_id = $1 ORDER BY fecha DESC, id DESC LIMIT 1",
    )
    .bind(paquete_id)
    .fetch_optional(pool)
    .await
}
