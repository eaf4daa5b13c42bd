//! Modelo de Service
//!
//! Unidad vendible del catálogo: precio base, descuento opcional y precio
//! con descuento derivado. El precio con descuento nunca se edita de forma
//! independiente; se recalcula en cada escritura de base o descuento.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;
use validator::Validate;

/// Tipo de servicio - mapea al ENUM service_type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "service_type", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum ServiceType {
    /// Precio por pasajero, con tarifa de niño rebajada
    Collective,
    /// Precio plano por unidad, sin importar el conteo de pasajeros
    Private,
}

/// Service principal - mapea exactamente a la tabla services
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Service {
    pub id: Uuid,
    pub route_id: Option<Uuid>,
    pub tour_id: Option<Uuid>,
    pub base_price: Decimal,
    pub discount_percent: Option<Decimal>,
    pub discounted_price: Decimal,
    pub service_type: ServiceType,
    pub created_at: DateTime<Utc>,
}

/// Request para crear un servicio del catálogo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateServiceRequest {
    pub route_id: Option<Uuid>,
    pub tour_id: Option<Uuid>,

    pub base_price: Decimal,

    pub discount_percent: Option<Decimal>,

    pub service_type: ServiceType,
}

/// Request para actualizar precio base o descuento de un servicio.
/// El precio con descuento no es editable: siempre se deriva.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateServiceRequest {
    pub base_price: Option<Decimal>,
    pub discount_percent: Option<Decimal>,
}
