use crate::dto::common::ApiResponse;
use crate::models::route_expense::{CreateRouteExpenseRequest, RouteExpense};
use crate::repositories::route_expense_repository::RouteExpenseRepository;
use crate::repositories::route_repository::RouteRepository;
use crate::utils::errors::{referential_error, AppError};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct ExpenseController {
    repository: RouteExpenseRepository,
    route_repository: RouteRepository,
}

impl ExpenseController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: RouteExpenseRepository::new(pool.clone()),
            route_repository: RouteRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateRouteExpenseRequest,
    ) -> Result<ApiResponse<RouteExpense>, AppError> {
        request.validate()?;

        if request.amount < Decimal::ZERO {
            return Err(AppError::BadRequest(
                "El monto del gasto no puede ser negativo".to_string(),
            ));
        }

        if self
            .route_repository
            .find_scheduled(request.scheduled_route_id)
            .await?
            .is_none()
        {
            return Err(referential_error(
                "Scheduled route",
                &request.scheduled_route_id.to_string(),
            ));
        }

        let expense = self
            .repository
            .create(
                request.scheduled_route_id,
                request.amount,
                request.motive,
                request.description,
                request.created_by,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            expense,
            "Gasto registrado exitosamente".to_string(),
        ))
    }

    pub async fn list_by_scheduled_route(
        &self,
        scheduled_route_id: Uuid,
    ) -> Result<Vec<RouteExpense>, AppError> {
        self.repository
            .list_by_scheduled_route(scheduled_route_id)
            .await
    }
}
