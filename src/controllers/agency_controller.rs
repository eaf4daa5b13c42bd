use crate::dto::common::ApiResponse;
use crate::models::agency::{Agency, CreateAgencyRequest};
use crate::repositories::agency_repository::AgencyRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct AgencyController {
    repository: AgencyRepository,
}

impl AgencyController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AgencyRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateAgencyRequest,
    ) -> Result<ApiResponse<Agency>, AppError> {
        request.validate()?;

        if self.repository.name_exists(&request.name).await? {
            return Err(AppError::Conflict(
                "Ya existe una agencia con ese nombre".to_string(),
            ));
        }

        let agency = self.repository.create(request.name, request.phone).await?;

        Ok(ApiResponse::success_with_message(
            agency,
            "Agencia creada exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Agency, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Agencia no encontrada".to_string()))
    }

    pub async fn list(&self) -> Result<Vec<Agency>, AppError> {
        self.repository.list().await
    }
}
