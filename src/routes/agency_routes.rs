use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::agency_controller::AgencyController;
use crate::dto::common::ApiResponse;
use crate::models::agency::{Agency, CreateAgencyRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_agency_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_agency))
        .route("/", get(list_agencies))
        .route("/:id", get(get_agency))
}

async fn create_agency(
    State(state): State<AppState>,
    Json(request): Json<CreateAgencyRequest>,
) -> Result<Json<ApiResponse<Agency>>, AppError> {
    let controller = AgencyController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_agency(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Agency>, AppError> {
    let controller = AgencyController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_agencies(
    State(state): State<AppState>,
) -> Result<Json<Vec<Agency>>, AppError> {
    let controller = AgencyController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}
