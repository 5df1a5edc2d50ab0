//! Package and delivery domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A shippable package with a known destination.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Package {
    pub id: i64,
    pub paquete_uid: String,
    pub direccion: String,
    pub lat: f64,
    pub lon: f64,
}

/// A persisted proof-of-delivery record.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DeliveryRecord {
    pub id: i64,
    pub paquete_id: i64,
    pub agente_id: i64,
    pub foto_url: String,
    pub gps_lat: f64,
    pub gps_lon: f64,
    pub fecha: DateTime<Utc>,
}

/// Input for creating a delivery record. `fecha` is set by the database.
#[derive(Debug, Clone)]
pub struct NewDelivery {
    pub paquete_id: i64,
    pub agente_id: i64,
    pub foto_url: String,
    pub gps_lat: f64,
    pub gps_lon: f64,
}
