use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::tour_controller::TourController;
use crate::dto::common::ApiResponse;
use crate::models::tour::{
    CreateScheduledTourRequest, CreateTourRequest, ScheduledTour, Tour,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_tour_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_tour))
        .route("/", get(list_tours))
        .route("/:id", get(get_tour))
        .route("/scheduled", post(schedule_tour))
}

async fn create_tour(
    State(state): State<AppState>,
    Json(request): Json<CreateTourRequest>,
) -> Result<Json<ApiResponse<Tour>>, AppError> {
    let controller = TourController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_tour(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Tour>, AppError> {
    let controller = TourController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_tours(State(state): State<AppState>) -> Result<Json<Vec<Tour>>, AppError> {
    let controller = TourController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn schedule_tour(
    State(state): State<AppState>,
    Json(request): Json<CreateScheduledTourRequest>,
) -> Result<Json<ApiResponse<ScheduledTour>>, AppError> {
    let controller = TourController::new(state.pool.clone());
    let response = controller.schedule(request).await?;
    Ok(Json(response))
}
