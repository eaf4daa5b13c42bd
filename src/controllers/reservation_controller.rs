use crate::dto::common::ApiResponse;
use crate::dto::reservation_dto::ReservationResponse;
use crate::models::reservation::{CreateReservationRequest, UpdateReservationRequest};
use crate::services::reservation_service::ReservationService;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct ReservationController {
    service: ReservationService,
}

impl ReservationController {
    pub fn new(pool: PgPool, house_agency_id: Uuid) -> Self {
        Self {
            service: ReservationService::new(pool, house_agency_id),
        }
    }

    pub async fn create(
        &self,
        request: CreateReservationRequest,
    ) -> Result<ApiResponse<ReservationResponse>, AppError> {
        request.validate()?;

        let reservation = self.service.create(request).await?;

        Ok(ApiResponse::success_with_message(
            reservation.into(),
            "Reserva creada exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ReservationResponse, AppError> {
        let reservation = self.service.find_by_id(id).await?;
        Ok(reservation.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateReservationRequest,
    ) -> Result<ApiResponse<ReservationResponse>, AppError> {
        request.validate()?;

        let reservation = self.service.update(id, request).await?;

        Ok(ApiResponse::success_with_message(
            reservation.into(),
            "Reserva actualizada exitosamente".to_string(),
        ))
    }

    pub async fn cancel(
        &self,
        id: Uuid,
    ) -> Result<ApiResponse<ReservationResponse>, AppError> {
        let reservation = self.service.cancel(id).await?;

        Ok(ApiResponse::success_with_message(
            reservation.into(),
            "Reserva cancelada".to_string(),
        ))
    }
}
