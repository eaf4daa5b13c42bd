//! Espejo de caja diaria
//!
//! Al crear una reserva pagada, operada por la casa y sin traspaso, se
//! apunta una fila desnormalizada en la caja del día: snapshot de origen y
//! destino, fecha de servicio, tarifa unitaria vigente, mezcla de
//! pasajeros e importe resuelto. La fila se escribe una sola vez; los
//! cambios posteriores de la reserva no se propagan.
//!
//! Es un efecto secundario best-effort: un fallo del espejo se loguea y
//! jamás tumba ni revierte la escritura de la reserva. El check de
//! existencia previa lo hace idempotente ante reintentos.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::cash_ledger::NewCashLedgerEntry;
use crate::models::reservation::{Reservation, ReservationStatus, ReservationTarget};
use crate::models::service::Service;
use crate::repositories::cash_ledger_repository::CashLedgerRepository;
use crate::repositories::route_repository::RouteRepository;
use crate::repositories::service_repository::ServiceRepository;
use crate::repositories::tour_repository::TourRepository;
use crate::utils::errors::AppError;

/// Regla de calificación del espejo: solo reservas pagadas, sin traspaso y
/// operadas por la agencia casa llegan a la caja diaria.
pub fn qualifies_for_mirror(
    status: ReservationStatus,
    transfer_agency: Option<Uuid>,
    operating_agency: Option<Uuid>,
    house_agency: Uuid,
) -> bool {
    status == ReservationStatus::Paid
        && transfer_agency.is_none()
        && operating_agency == Some(house_agency)
}

pub struct CashLedgerService {
    house_agency_id: Uuid,
    ledger_repository: CashLedgerRepository,
    service_repository: ServiceRepository,
    route_repository: RouteRepository,
    tour_repository: TourRepository,
}

impl CashLedgerService {
    pub fn new(pool: PgPool, house_agency_id: Uuid) -> Self {
        Self {
            house_agency_id,
            ledger_repository: CashLedgerRepository::new(pool.clone()),
            service_repository: ServiceRepository::new(pool.clone()),
            route_repository: RouteRepository::new(pool.clone()),
            tour_repository: TourRepository::new(pool),
        }
    }

    /// Espejar la reserva a caja si califica. Nunca devuelve error: el
    /// fallo se loguea y el reintento queda a cargo del operador.
    pub async fn maybe_mirror(&self, reservation: &Reservation, service: &Service) {
        match self.try_mirror(reservation, service).await {
            Ok(true) => {
                log::info!(
                    "💰 Reserva {} espejada a caja diaria",
                    reservation.id
                );
            }
            Ok(false) => {}
            Err(e) => {
                log::error!(
                    "Fallo al espejar la reserva {} a caja diaria: {}",
                    reservation.id,
                    e
                );
            }
        }
    }

    async fn try_mirror(
        &self,
        reservation: &Reservation,
        service: &Service,
    ) -> Result<bool, AppError> {
        // El filtro barato primero; la agencia operadora cuesta una consulta
        if reservation.status != ReservationStatus::Paid
            || reservation.transfer_agency_id.is_some()
        {
            return Ok(false);
        }

        let operating = self
            .service_repository
            .operating_agency(reservation.service_id)
            .await?;
        if !qualifies_for_mirror(
            reservation.status,
            reservation.transfer_agency_id,
            operating,
            self.house_agency_id,
        ) {
            return Ok(false);
        }

        if self
            .ledger_repository
            .exists_for_reservation(reservation.id)
            .await?
        {
            return Ok(false);
        }

        let target = reservation.target().ok_or_else(|| {
            AppError::ReferentialIntegrity(format!(
                "Reservation '{}' has no resolvable route/tour target",
                reservation.id
            ))
        })?;

        let (origin, destination, service_date) = match target {
            ReservationTarget::Route(id) => {
                let detail = self
                    .route_repository
                    .find_scheduled_detail(id)
                    .await?
                    .ok_or_else(|| {
                        AppError::ReferentialIntegrity(format!(
                            "Scheduled route with id '{}' does not exist",
                            id
                        ))
                    })?;
                (
                    detail.origin,
                    detail.destination,
                    detail.departure_at.date_naive(),
                )
            }
            ReservationTarget::Tour(id) => {
                let detail = self
                    .tour_repository
                    .find_scheduled_detail(id)
                    .await?
                    .ok_or_else(|| {
                        AppError::ReferentialIntegrity(format!(
                            "Scheduled tour with id '{}' does not exist",
                            id
                        ))
                    })?;
                (
                    "Tour".to_string(),
                    detail.name,
                    detail.departure_at.date_naive(),
                )
            }
        };

        self.ledger_repository
            .insert(NewCashLedgerEntry {
                reservation_id: reservation.id,
                origin,
                destination,
                service_date,
                adults: reservation.adults,
                children: reservation.children,
                unit_price: service.discounted_price,
                total_price: reservation.charge,
                status: reservation.status,
            })
            .await?;

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_paid_house_reservations_without_transfer_qualify() {
        let house = Uuid::new_v4();

        assert!(qualifies_for_mirror(
            ReservationStatus::Paid,
            None,
            Some(house),
            house
        ));
    }

    #[test]
    fn transfer_target_never_mirrors() {
        let house = Uuid::new_v4();
        let other = Uuid::new_v4();

        // con traspaso no hay espejo, sin importar el estado
        assert!(!qualifies_for_mirror(
            ReservationStatus::Paid,
            Some(other),
            Some(house),
            house
        ));
        assert!(!qualifies_for_mirror(
            ReservationStatus::Paid,
            Some(house),
            Some(house),
            house
        ));
    }

    #[test]
    fn non_house_operator_never_mirrors() {
        let house = Uuid::new_v4();
        let other = Uuid::new_v4();

        assert!(!qualifies_for_mirror(
            ReservationStatus::Paid,
            None,
            Some(other),
            house
        ));
        assert!(!qualifies_for_mirror(
            ReservationStatus::Paid,
            None,
            None,
            house
        ));
    }

    #[test]
    fn unpaid_states_never_mirror() {
        let house = Uuid::new_v4();

        for status in [
            ReservationStatus::Pending,
            ReservationStatus::ToConfirm,
            ReservationStatus::Received,
            ReservationStatus::Cancelled,
        ] {
            assert!(!qualifies_for_mirror(status, None, Some(house), house));
        }
    }
}
