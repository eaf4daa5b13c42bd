//! Modelo de Route y ScheduledRoute
//!
//! Una ruta es la plantilla origen-destino de una agencia; una salida
//! programada (ScheduledRoute) es su instancia con vehículo y fecha.
//! La capacidad de la salida se deriva del vehículo asignado.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;
use validator::Validate;

/// Estado de la salida de ruta - mapea al ENUM route_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "route_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RouteStatus {
    Activated,
    Full,
    InExecution,
    Liquidating,
    Liquidated,
    Suspended,
}

impl RouteStatus {
    /// Interpretar una etiqueta externa. Las etiquetas históricas en español
    /// se aceptan; lo desconocido cae al estado inicial.
    pub fn from_label(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "activated" | "activada" => Self::Activated,
            "full" | "llena" => Self::Full,
            "in_execution" | "en ejecucion" | "en ejecución" => Self::InExecution,
            "liquidating" | "liquidandose" | "liquidándose" => Self::Liquidating,
            "liquidated" | "liquidada" => Self::Liquidated,
            "suspended" | "suspendida" => Self::Suspended,
            _ => Self::Activated,
        }
    }
}

/// Route principal - mapea exactamente a la tabla routes
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Route {
    pub id: Uuid,
    pub agency_id: Uuid,
    pub origin: String,
    pub destination: String,
    pub created_at: DateTime<Utc>,
}

/// ScheduledRoute - mapea exactamente a la tabla scheduled_routes
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ScheduledRoute {
    pub id: Uuid,
    pub route_id: Uuid,
    pub vehicle_id: Option<Uuid>,
    pub departure_at: DateTime<Utc>,
    pub status: RouteStatus,
    pub created_at: DateTime<Utc>,
}

/// Salida de ruta con los datos derivados que consumen el espejo de caja
/// y los reportes: endpoints de la plantilla, plazas y pago al conductor.
#[derive(Debug, Clone, FromRow)]
pub struct ScheduledRouteDetail {
    pub id: Uuid,
    pub route_id: Uuid,
    pub agency_id: Uuid,
    pub origin: String,
    pub destination: String,
    pub departure_at: DateTime<Utc>,
    pub status: RouteStatus,
    pub vehicle_id: Option<Uuid>,
    pub seats: i32,
    pub driver_payment: Option<rust_decimal::Decimal>,
}

/// Request para crear una ruta
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRouteRequest {
    pub agency_id: Uuid,

    #[validate(length(min = 2, max = 200))]
    pub origin: String,

    #[validate(length(min = 2, max = 200))]
    pub destination: String,
}

/// Request para programar una salida de ruta
#[derive(Debug, Deserialize, Validate)]
pub struct CreateScheduledRouteRequest {
    pub route_id: Uuid,
    pub vehicle_id: Option<Uuid>,
    pub departure_at: DateTime<Utc>,
}

/// Request para cambiar el estado de una salida
#[derive(Debug, Deserialize)]
pub struct UpdateRouteStatusRequest {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_label_accepts_historic_spanish_names() {
        assert_eq!(RouteStatus::from_label("Liquidándose"), RouteStatus::Liquidating);
        assert_eq!(RouteStatus::from_label("liquidada"), RouteStatus::Liquidated);
        assert_eq!(RouteStatus::from_label("En Ejecución"), RouteStatus::InExecution);
    }

    #[test]
    fn from_label_unknown_falls_back_to_activated() {
        assert_eq!(RouteStatus::from_label("???"), RouteStatus::Activated);
        assert_eq!(RouteStatus::from_label(""), RouteStatus::Activated);
    }
}
