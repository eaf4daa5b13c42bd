//! Modelo de Reservation
//!
//! Una reserva apunta exactamente a una salida de ruta o a una salida de
//! tour (unión etiquetada `ReservationTarget`), lleva la mezcla de
//! pasajeros y el importe cobrado, y se excluye por soft-delete: las
//! cancelaciones nunca borran la fila.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;
use validator::Validate;

/// Estado de la reserva - mapea al ENUM reservation_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "reservation_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Pending,
    ToConfirm,
    Received,
    Paid,
    Cancelled,
}

impl ReservationStatus {
    /// Interpretar una etiqueta externa. Las etiquetas históricas en español
    /// se aceptan; lo desconocido cae a Pending.
    pub fn from_label(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "to_confirm" | "por confirmar" => Self::ToConfirm,
            "received" | "recibida" => Self::Received,
            "paid" | "pagada" => Self::Paid,
            "cancelled" | "cancelada" => Self::Cancelled,
            _ => Self::Pending,
        }
    }
}

/// Destino de la reserva: exactamente una salida de ruta o de tour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationTarget {
    Route(Uuid),
    Tour(Uuid),
}

impl ReservationTarget {
    /// Reconstruir la unión desde las dos columnas nullable del schema.
    /// Devuelve None si ninguna o ambas están pobladas.
    pub fn from_columns(route: Option<Uuid>, tour: Option<Uuid>) -> Option<Self> {
        match (route, tour) {
            (Some(id), None) => Some(Self::Route(id)),
            (None, Some(id)) => Some(Self::Tour(id)),
            _ => None,
        }
    }

    pub fn scheduled_route_id(&self) -> Option<Uuid> {
        match self {
            Self::Route(id) => Some(*id),
            Self::Tour(_) => None,
        }
    }

    pub fn scheduled_tour_id(&self) -> Option<Uuid> {
        match self {
            Self::Tour(id) => Some(*id),
            Self::Route(_) => None,
        }
    }
}

/// Reservation principal - mapea exactamente a la tabla reservations
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    pub id: Uuid,
    pub service_id: Uuid,
    pub adults: i32,
    pub children: i32,
    pub charge: Decimal,
    pub boarding_address: Option<String>,
    pub scheduled_route_id: Option<Uuid>,
    pub scheduled_tour_id: Option<Uuid>,
    pub transfer_agency_id: Option<Uuid>,
    pub status: ReservationStatus,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    /// Unión etiquetada del destino. Las filas persistidas siempre cumplen
    /// el CHECK de exactamente-uno, por lo que None indica datos corruptos.
    pub fn target(&self) -> Option<ReservationTarget> {
        ReservationTarget::from_columns(self.scheduled_route_id, self.scheduled_tour_id)
    }

    pub fn total_pax(&self) -> i32 {
        self.adults + self.children
    }
}

/// Request para crear una reserva
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReservationRequest {
    pub service_id: Uuid,

    #[validate(range(min = 0))]
    pub adults: i32,

    #[validate(range(min = 0))]
    pub children: Option<i32>,

    /// Importe explícito; si viene y no es cero, gana sobre el derivado
    pub explicit_charge: Option<Decimal>,

    #[validate(length(max = 300))]
    pub boarding_address: Option<String>,

    pub scheduled_route_id: Option<Uuid>,
    pub scheduled_tour_id: Option<Uuid>,
    pub transfer_agency_id: Option<Uuid>,

    /// Etiqueta de estado inicial; lo desconocido cae a pending
    pub status: Option<String>,
}

/// Request para actualizar una reserva
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateReservationRequest {
    pub service_id: Option<Uuid>,

    #[validate(range(min = 0))]
    pub adults: Option<i32>,

    #[validate(range(min = 0))]
    pub children: Option<i32>,

    pub explicit_charge: Option<Decimal>,

    #[validate(length(max = 300))]
    pub boarding_address: Option<String>,

    pub transfer_agency_id: Option<Uuid>,

    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_union_requires_exactly_one_side() {
        let route = Uuid::new_v4();
        let tour = Uuid::new_v4();

        assert_eq!(
            ReservationTarget::from_columns(Some(route), None),
            Some(ReservationTarget::Route(route))
        );
        assert_eq!(
            ReservationTarget::from_columns(None, Some(tour)),
            Some(ReservationTarget::Tour(tour))
        );
        assert_eq!(ReservationTarget::from_columns(None, None), None);
        assert_eq!(ReservationTarget::from_columns(Some(route), Some(tour)), None);
    }

    #[test]
    fn status_from_label_is_permissive() {
        assert_eq!(ReservationStatus::from_label("Pagada"), ReservationStatus::Paid);
        assert_eq!(
            ReservationStatus::from_label("Por Confirmar"),
            ReservationStatus::ToConfirm
        );
        assert_eq!(ReservationStatus::from_label("recibida"), ReservationStatus::Received);
        assert_eq!(ReservationStatus::from_label("whatever"), ReservationStatus::Pending);
    }
}
