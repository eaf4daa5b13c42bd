//! Modelo de RouteExpense
//!
//! Gastos cargados a una salida de ruta. Solo los consume el reporte de
//! liquidación; el motor nunca los recalcula.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// RouteExpense principal - mapea exactamente a la tabla route_expenses
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RouteExpense {
    pub id: Uuid,
    pub scheduled_route_id: Uuid,
    pub amount: Decimal,
    pub motive: String,
    pub description: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

/// Request para registrar un gasto de ruta
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRouteExpenseRequest {
    pub scheduled_route_id: Uuid,

    pub amount: Decimal,

    #[validate(length(min = 2, max = 150))]
    pub motive: String,

    pub description: Option<String>,

    #[validate(length(min = 2, max = 150))]
    pub created_by: String,
}
