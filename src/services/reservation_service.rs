//! Orquestador de reservas
//!
//! Camino de escritura del motor: valida referencias, resuelve la unión
//! ruta/tour, calcula el importe, inserta bajo el guardián de capacidad y
//! después espeja a caja diaria. El espejo corre fuera de la transacción
//! de capacidad: su fallo nunca revierte la reserva.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::reservation::{
    CreateReservationRequest, Reservation, ReservationStatus, ReservationTarget,
    UpdateReservationRequest,
};
use crate::models::service::Service;
use crate::repositories::agency_repository::AgencyRepository;
use crate::repositories::reservation_repository::{
    NewReservation, ReservationChanges, ReservationRepository,
};
use crate::repositories::service_repository::ServiceRepository;
use crate::services::cash_ledger_service::CashLedgerService;
use crate::services::pricing_service;
use crate::utils::errors::{not_found_error, referential_error, AppError};
use crate::utils::validation::validate_pax;

pub struct ReservationService {
    reservation_repository: ReservationRepository,
    service_repository: ServiceRepository,
    agency_repository: AgencyRepository,
    cash_ledger_service: CashLedgerService,
}

impl ReservationService {
    pub fn new(pool: PgPool, house_agency_id: Uuid) -> Self {
        Self {
            reservation_repository: ReservationRepository::new(pool.clone()),
            service_repository: ServiceRepository::new(pool.clone()),
            agency_repository: AgencyRepository::new(pool.clone()),
            cash_ledger_service: CashLedgerService::new(pool, house_agency_id),
        }
    }

    pub async fn create(
        &self,
        request: CreateReservationRequest,
    ) -> Result<Reservation, AppError> {
        let adults = request.adults;
        let children = request.children.unwrap_or(0);
        Self::check_pax(adults, children)?;

        // Exactamente una salida de ruta o de tour; ninguna o ambas es
        // falta de integridad y se rechaza antes de clasificar nada
        let target = ReservationTarget::from_columns(
            request.scheduled_route_id,
            request.scheduled_tour_id,
        )
        .ok_or_else(|| {
            AppError::ReferentialIntegrity(
                "La reserva debe apuntar exactamente a una salida de ruta o de tour"
                    .to_string(),
            )
        })?;

        let service = self.require_service(request.service_id).await?;

        if let Some(agency_id) = request.transfer_agency_id {
            self.require_agency(agency_id).await?;
        }

        let status = request
            .status
            .as_deref()
            .map(ReservationStatus::from_label)
            .unwrap_or(ReservationStatus::Pending);

        let charge =
            pricing_service::resolve_charge(&service, adults, children, request.explicit_charge);

        let reservation = self
            .reservation_repository
            .create_guarded(NewReservation {
                service_id: service.id,
                adults,
                children,
                charge,
                boarding_address: request.boarding_address,
                target,
                transfer_agency_id: request.transfer_agency_id,
                status,
            })
            .await?;

        self.cash_ledger_service
            .maybe_mirror(&reservation, &service)
            .await;

        Ok(reservation)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateReservationRequest,
    ) -> Result<Reservation, AppError> {
        let current = self
            .reservation_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Reservation", &id.to_string()))?;

        if current.deleted {
            return Err(AppError::Conflict(
                "No se puede modificar una reserva cancelada".to_string(),
            ));
        }

        let service_id = request.service_id.unwrap_or(current.service_id);
        let service = self.require_service(service_id).await?;

        let adults = request.adults.unwrap_or(current.adults);
        let children = request.children.unwrap_or(current.children);
        Self::check_pax(adults, children)?;

        let transfer_agency_id = request.transfer_agency_id.or(current.transfer_agency_id);
        if let Some(agency_id) = request.transfer_agency_id {
            self.require_agency(agency_id).await?;
        }

        let status = request
            .status
            .as_deref()
            .map(ReservationStatus::from_label)
            .unwrap_or(current.status);

        // El importe se recalcula solo cuando cambia la mezcla de pasajeros
        // o el servicio; un importe explícito distinto de cero gana siempre
        let pricing_inputs_changed = adults != current.adults
            || children != current.children
            || service_id != current.service_id;

        let charge = match request.explicit_charge {
            Some(explicit) if !explicit.is_zero() => explicit,
            _ if pricing_inputs_changed => {
                pricing_service::resolve_charge(&service, adults, children, None)
            }
            _ => current.charge,
        };

        self.reservation_repository
            .update_guarded(
                id,
                ReservationChanges {
                    service_id,
                    adults,
                    children,
                    charge,
                    boarding_address: request.boarding_address.or(current.boarding_address),
                    transfer_agency_id,
                    status,
                },
            )
            .await
    }

    /// Cancelar: soft-delete. La fila se conserva para auditoría y deja de
    /// contar en ocupación e ingresos.
    pub async fn cancel(&self, id: Uuid) -> Result<Reservation, AppError> {
        self.reservation_repository.soft_delete(id).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Reservation, AppError> {
        self.reservation_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Reservation", &id.to_string()))
    }

    async fn require_service(&self, id: Uuid) -> Result<Service, AppError> {
        let service = self
            .service_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| referential_error("Service", &id.to_string()))?;

        // Un servicio sin enlace a ruta ni tour dejaría la reserva sin
        // agencia operadora resoluble; se rechaza aquí
        if self
            .service_repository
            .operating_agency(service.id)
            .await?
            .is_none()
        {
            return Err(AppError::ReferentialIntegrity(format!(
                "Service with id '{}' has no route or tour link",
                service.id
            )));
        }

        Ok(service)
    }

    async fn require_agency(&self, id: Uuid) -> Result<(), AppError> {
        self.agency_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| referential_error("Agency", &id.to_string()))?;
        Ok(())
    }

    fn check_pax(adults: i32, children: i32) -> Result<(), AppError> {
        if let Err(e) = validate_pax(adults, children) {
            let mut errors = validator::ValidationErrors::new();
            errors.add("pax", e);
            return Err(AppError::Validation(errors));
        }
        Ok(())
    }
}
