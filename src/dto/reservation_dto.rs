use serde::Serialize;

use crate::models::reservation::{Reservation, ReservationStatus};

/// Response de reserva para la API: la fila persistida con el importe
/// resuelto por el motor
#[derive(Debug, Serialize)]
pub struct ReservationResponse {
    pub id: String,
    pub service_id: String,
    pub adults: i32,
    pub children: i32,
    pub charge: String,
    pub boarding_address: Option<String>,
    pub scheduled_route_id: Option<String>,
    pub scheduled_tour_id: Option<String>,
    pub transfer_agency_id: Option<String>,
    pub status: ReservationStatus,
    pub deleted: bool,
    pub created_at: String,
}

impl From<Reservation> for ReservationResponse {
    fn from(reservation: Reservation) -> Self {
        Self {
            id: reservation.id.to_string(),
            service_id: reservation.service_id.to_string(),
            adults: reservation.adults,
            children: reservation.children,
            charge: reservation.charge.to_string(),
            boarding_address: reservation.boarding_address,
            scheduled_route_id: reservation.scheduled_route_id.map(|v| v.to_string()),
            scheduled_tour_id: reservation.scheduled_tour_id.map(|v| v.to_string()),
            transfer_agency_id: reservation.transfer_agency_id.map(|v| v.to_string()),
            status: reservation.status,
            deleted: reservation.deleted,
            created_at: reservation.created_at.to_rfc3339(),
        }
    }
}
