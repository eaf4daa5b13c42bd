//! DTOs de reportes
//!
//! Modelos de lectura delgados construidos sobre las salidas del motor:
//! ocupación, caja diaria, control de ventas y contabilidad por agencia.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::models::cash_ledger::CashLedgerEntry;
use crate::models::reservation::ReservationStatus;
use crate::models::route::RouteStatus;
use crate::services::payment_service::PaymentMethod;
use crate::services::scenario_service::SettlementScenario;

/// Ocupación de una salida de ruta
#[derive(Debug, Serialize)]
pub struct OccupancyReport {
    pub scheduled_route_id: Uuid,
    pub origin: String,
    pub destination: String,
    pub departure_at: DateTime<Utc>,
    pub status: RouteStatus,
    pub capacity: i32,
    pub occupied: i64,
    pub available: i64,
    pub settled: bool,
}

/// Caja del día: feed de filas espejadas más totales
#[derive(Debug, Serialize)]
pub struct DailyCashReport {
    pub date: NaiveDate,
    pub entries: Vec<CashLedgerEntry>,
    pub total_amount: Decimal,
    pub total_pax: i64,
}

/// Fila del control de ventas de una salida
#[derive(Debug, Serialize)]
pub struct SalesControlRow {
    pub reservation_id: Uuid,
    pub adults: i32,
    pub children: i32,
    pub total_pax: i32,
    pub charge: Decimal,
    pub status: ReservationStatus,
    pub payment_method: PaymentMethod,
}

/// Control de ventas de una salida de ruta
#[derive(Debug, Serialize)]
pub struct SalesControlReport {
    pub scheduled_route_id: Uuid,
    pub rows: Vec<SalesControlRow>,
    pub total_charged: Decimal,
}

/// Fila contable: reserva clasificada contra la agencia casa
#[derive(Debug, Serialize)]
pub struct AccountingReportRow {
    pub reservation_id: Uuid,
    pub operating_agency_id: Uuid,
    pub transfer_agency_id: Option<Uuid>,
    pub scenario: SettlementScenario,
    pub payment_method: PaymentMethod,
    pub charge: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Totales por agencia operadora
#[derive(Debug, Serialize)]
pub struct AgencySummary {
    pub agency_id: Uuid,
    pub reservations: i64,
    pub revenue: Decimal,
}

/// Contabilidad por agencia para un rango de fechas
#[derive(Debug, Serialize)]
pub struct AccountingReport {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    pub rows: Vec<AccountingReportRow>,
    pub by_agency: Vec<AgencySummary>,
}

/// Liquidación de una salida de ruta: ingresos contra costos
#[derive(Debug, Serialize)]
pub struct RouteSettlementReport {
    pub scheduled_route_id: Uuid,
    pub origin: String,
    pub destination: String,
    pub departure_at: DateTime<Utc>,
    pub status: RouteStatus,
    pub settled: bool,
    pub revenue: Decimal,
    pub driver_payment: Decimal,
    pub expenses_total: Decimal,
    pub profit: Decimal,
}
