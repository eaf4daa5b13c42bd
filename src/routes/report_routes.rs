use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::controllers::report_controller::ReportController;
use crate::dto::report_dto::{
    AccountingReport, DailyCashReport, OccupancyReport, RouteSettlementReport,
    SalesControlReport,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

#[derive(Debug, Deserialize)]
struct DateQuery {
    date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RangeQuery {
    from: String,
    to: String,
}

pub fn create_report_router() -> Router<AppState> {
    Router::new()
        .route("/occupancy", get(occupancy))
        .route("/daily-cash", get(daily_cash))
        .route("/sales-control/:scheduled_route_id", get(sales_control))
        .route("/accounting", get(agency_accounting))
        .route("/settlement/:scheduled_route_id", get(route_settlement))
        .route("/reservation/:id/scenario", get(scenario))
        .route("/reservation/:id/payment-method", get(payment_method))
        .route("/route/:id/settled", get(is_settled))
}

fn controller(state: &AppState) -> ReportController {
    ReportController::new(state.pool.clone(), state.house_agency_id())
}

async fn occupancy(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<Json<Vec<OccupancyReport>>, AppError> {
    let response = controller(&state).occupancy(query.date).await?;
    Ok(Json(response))
}

async fn daily_cash(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<Json<DailyCashReport>, AppError> {
    let date = query
        .date
        .ok_or_else(|| AppError::BadRequest("Falta el parámetro 'date'".to_string()))?;
    let response = controller(&state).daily_cash(date).await?;
    Ok(Json(response))
}

async fn sales_control(
    State(state): State<AppState>,
    Path(scheduled_route_id): Path<Uuid>,
) -> Result<Json<SalesControlReport>, AppError> {
    let response = controller(&state).sales_control(scheduled_route_id).await?;
    Ok(Json(response))
}

async fn agency_accounting(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<AccountingReport>, AppError> {
    let response = controller(&state)
        .agency_accounting(query.from, query.to)
        .await?;
    Ok(Json(response))
}

async fn route_settlement(
    State(state): State<AppState>,
    Path(scheduled_route_id): Path<Uuid>,
) -> Result<Json<RouteSettlementReport>, AppError> {
    let response = controller(&state)
        .route_settlement(scheduled_route_id)
        .await?;
    Ok(Json(response))
}

async fn scenario(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let scenario = controller(&state).scenario(id).await?;
    Ok(Json(json!({ "reservation_id": id, "scenario": scenario })))
}

async fn payment_method(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let method = controller(&state).payment_method(id).await?;
    Ok(Json(json!({ "reservation_id": id, "payment_method": method })))
}

async fn is_settled(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let settled = controller(&state).is_settled(id).await?;
    Ok(Json(json!({ "scheduled_route_id": id, "settled": settled })))
}
