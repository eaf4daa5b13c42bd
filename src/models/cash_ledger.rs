//! Modelo de CashLedgerEntry
//!
//! Fila de caja diaria: copia puntual de una reserva pagada en casa al
//! momento de su creación. Nunca se actualiza retroactivamente cuando la
//! reserva de origen cambia después.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::reservation::ReservationStatus;

/// CashLedgerEntry principal - mapea exactamente a la tabla cash_ledger_entries
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CashLedgerEntry {
    pub id: Uuid,
    pub reservation_id: Uuid,
    pub origin: String,
    pub destination: String,
    pub service_date: NaiveDate,
    pub adults: i32,
    pub children: i32,
    pub total_pax: i32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
    pub status: ReservationStatus,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
}

/// Datos para insertar una fila de caja (snapshot de la reserva)
#[derive(Debug, Clone)]
pub struct NewCashLedgerEntry {
    pub reservation_id: Uuid,
    pub origin: String,
    pub destination: String,
    pub service_date: NaiveDate,
    pub adults: i32,
    pub children: i32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
    pub status: ReservationStatus,
}
