use crate::models::route_expense::RouteExpense;
use crate::utils::errors::AppError;
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct RouteExpenseRepository {
    pool: PgPool,
}

impl RouteExpenseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        scheduled_route_id: Uuid,
        amount: Decimal,
        motive: String,
        description: Option<String>,
        created_by: String,
    ) -> Result<RouteExpense, AppError> {
        let expense = sqlx::query_as::<_, RouteExpense>(
            r#"
            INSERT INTO route_expenses (id, scheduled_route_id, amount, motive,
                                        description, created_by, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(scheduled_route_id)
        .bind(amount)
        .bind(motive)
        .bind(description)
        .bind(created_by)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(expense)
    }

    pub async fn list_by_scheduled_route(
        &self,
        scheduled_route_id: Uuid,
    ) -> Result<Vec<RouteExpense>, AppError> {
        let expenses = sqlx::query_as::<_, RouteExpense>(
            r#"
            SELECT * FROM route_expenses
            WHERE scheduled_route_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(scheduled_route_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(expenses)
    }

    pub async fn total_for_scheduled_route(
        &self,
        scheduled_route_id: Uuid,
    ) -> Result<Decimal, AppError> {
        let total: Decimal = sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(amount), 0)
            FROM route_expenses
            WHERE scheduled_route_id = $1
            "#,
        )
        .bind(scheduled_route_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }
}
