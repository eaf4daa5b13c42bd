use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::route_controller::RouteController;
use crate::dto::common::ApiResponse;
use crate::models::route::{
    CreateRouteRequest, CreateScheduledRouteRequest, Route, ScheduledRoute,
    UpdateRouteStatusRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_route_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_route))
        .route("/", get(list_routes))
        .route("/:id", get(get_route))
        .route("/scheduled", post(schedule_route))
        .route("/scheduled/:id", get(get_scheduled_route))
        .route("/scheduled/:id/status", put(update_scheduled_status))
}

async fn create_route(
    State(state): State<AppState>,
    Json(request): Json<CreateRouteRequest>,
) -> Result<Json<ApiResponse<Route>>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_route(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Route>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_routes(
    State(state): State<AppState>,
) -> Result<Json<Vec<Route>>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn schedule_route(
    State(state): State<AppState>,
    Json(request): Json<CreateScheduledRouteRequest>,
) -> Result<Json<ApiResponse<ScheduledRoute>>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    let response = controller.schedule(request).await?;
    Ok(Json(response))
}

async fn get_scheduled_route(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ScheduledRoute>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    let response = controller.get_scheduled(id).await?;
    Ok(Json(response))
}

async fn update_scheduled_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateRouteStatusRequest>,
) -> Result<Json<ApiResponse<ScheduledRoute>>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    let response = controller.update_scheduled_status(id, request).await?;
    Ok(Json(response))
}
