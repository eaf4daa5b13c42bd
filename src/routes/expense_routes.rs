use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::expense_controller::ExpenseController;
use crate::dto::common::ApiResponse;
use crate::models::route_expense::{CreateRouteExpenseRequest, RouteExpense};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_expense_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_expense))
        .route("/route/:id", get(list_by_scheduled_route))
}

async fn create_expense(
    State(state): State<AppState>,
    Json(request): Json<CreateRouteExpenseRequest>,
) -> Result<Json<ApiResponse<RouteExpense>>, AppError> {
    let controller = ExpenseController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_by_scheduled_route(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<RouteExpense>>, AppError> {
    let controller = ExpenseController::new(state.pool.clone());
    let response = controller.list_by_scheduled_route(id).await?;
    Ok(Json(response))
}
