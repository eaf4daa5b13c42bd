//! Modelo de Vehicle
//!
//! La capacidad de plazas del vehículo asignado a una salida de ruta es el
//! tope duro de ocupación que protege el guardián de capacidad. El pago al
//! conductor alimenta los cálculos de utilidad por ruta.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub license_plate: String,
    pub seats: i32,
    pub driver_payment: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

/// Request para crear un nuevo vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 5, max = 20))]
    pub license_plate: String,

    #[validate(range(min = 0, max = 100))]
    pub seats: i32,

    pub driver_payment: Option<Decimal>,
}

/// Request para actualizar un vehículo existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 5, max = 20))]
    pub license_plate: Option<String>,

    #[validate(range(min = 0, max = 100))]
    pub seats: Option<i32>,

    pub driver_payment: Option<Decimal>,
}
