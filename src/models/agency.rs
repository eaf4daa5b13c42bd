//! Modelo de Agency
//!
//! Agencias de venta y operación. Una de ellas es la agencia casa,
//! designada por configuración (HOUSE_AGENCY_ID), y es el eje contra el
//! que se clasifican todos los escenarios de liquidación.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Agency principal - mapea exactamente a la tabla agencies
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Agency {
    pub id: Uuid,
    pub name: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request para crear una nueva agencia
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAgencyRequest {
    #[validate(length(min = 2, max = 150))]
    pub name: String,

    #[validate(length(min = 5, max = 30))]
    pub phone: Option<String>,
}
