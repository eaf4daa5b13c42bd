use crate::models::cash_ledger::{CashLedgerEntry, NewCashLedgerEntry};
use crate::utils::errors::AppError;
use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

pub struct CashLedgerRepository {
    pool: PgPool,
}

impl CashLedgerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insertar una fila de caja. La fila es un snapshot inmutable: nunca
    /// hay updates sobre esta tabla.
    pub async fn insert(&self, entry: NewCashLedgerEntry) -> Result<CashLedgerEntry, AppError> {
        let total_pax = entry.adults + entry.children;
        let row = sqlx::query_as::<_, CashLedgerEntry>(
            r#"
            INSERT INTO cash_ledger_entries (id, reservation_id, origin, destination,
                                             service_date, adults, children, total_pax,
                                             unit_price, total_price, status, deleted, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, FALSE, $12)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(entry.reservation_id)
        .bind(entry.origin)
        .bind(entry.destination)
        .bind(entry.service_date)
        .bind(entry.adults)
        .bind(entry.children)
        .bind(total_pax)
        .bind(entry.unit_price)
        .bind(entry.total_price)
        .bind(entry.status)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Una reserva produce a lo sumo una fila de caja; este check hace el
    /// espejo idempotente ante reintentos.
    pub async fn exists_for_reservation(&self, reservation_id: Uuid) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM cash_ledger_entries
                WHERE reservation_id = $1 AND deleted = FALSE
            )
            "#,
        )
        .bind(reservation_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn find_by_service_date(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<CashLedgerEntry>, AppError> {
        let entries = sqlx::query_as::<_, CashLedgerEntry>(
            r#"
            SELECT * FROM cash_ledger_entries
            WHERE service_date = $1 AND deleted = FALSE
            ORDER BY created_at
            "#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }
}
