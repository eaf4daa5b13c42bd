//! Modelo de Tour y ScheduledTour
//!
//! Los tours no tienen tope de capacidad: las reservas contra una salida
//! de tour nunca pasan por el guardián de plazas.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Tour principal - mapea exactamente a la tabla tours
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tour {
    pub id: Uuid,
    pub agency_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// ScheduledTour - mapea exactamente a la tabla scheduled_tours
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ScheduledTour {
    pub id: Uuid,
    pub tour_id: Uuid,
    pub departure_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Salida de tour con el nombre y la agencia del tour, para el espejo de
/// caja y los reportes
#[derive(Debug, Clone, FromRow)]
pub struct ScheduledTourDetail {
    pub id: Uuid,
    pub tour_id: Uuid,
    pub agency_id: Uuid,
    pub name: String,
    pub departure_at: DateTime<Utc>,
}

/// Request para crear un tour
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTourRequest {
    pub agency_id: Uuid,

    #[validate(length(min = 2, max = 200))]
    pub name: String,

    pub description: Option<String>,
}

/// Request para programar una salida de tour
#[derive(Debug, Deserialize, Validate)]
pub struct CreateScheduledTourRequest {
    pub tour_id: Uuid,
    pub departure_at: DateTime<Utc>,
}
