use crate::dto::common::ApiResponse;
use crate::models::tour::{
    CreateScheduledTourRequest, CreateTourRequest, ScheduledTour, Tour,
};
use crate::repositories::agency_repository::AgencyRepository;
use crate::repositories::tour_repository::TourRepository;
use crate::utils::errors::{referential_error, AppError};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct TourController {
    repository: TourRepository,
    agency_repository: AgencyRepository,
}

impl TourController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TourRepository::new(pool.clone()),
            agency_repository: AgencyRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateTourRequest) -> Result<ApiResponse<Tour>, AppError> {
        request.validate()?;

        if self
            .agency_repository
            .find_by_id(request.agency_id)
            .await?
            .is_none()
        {
            return Err(referential_error("Agency", &request.agency_id.to_string()));
        }

        let tour = self
            .repository
            .create_tour(request.agency_id, request.name, request.description)
            .await?;

        Ok(ApiResponse::success_with_message(
            tour,
            "Tour creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Tour, AppError> {
        self.repository
            .find_tour(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Tour no encontrado".to_string()))
    }

    pub async fn list(&self) -> Result<Vec<Tour>, AppError> {
        self.repository.list_tours().await
    }

    pub async fn schedule(
        &self,
        request: CreateScheduledTourRequest,
    ) -> Result<ApiResponse<ScheduledTour>, AppError> {
        request.validate()?;

        if self.repository.find_tour(request.tour_id).await?.is_none() {
            return Err(referential_error("Tour", &request.tour_id.to_string()));
        }

        let scheduled = self
            .repository
            .create_scheduled(request.tour_id, request.departure_at)
            .await?;

        Ok(ApiResponse::success_with_message(
            scheduled,
            "Salida de tour programada exitosamente".to_string(),
        ))
    }
}
