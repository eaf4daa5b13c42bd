use crate::models::tour::{ScheduledTour, ScheduledTourDetail, Tour};
use crate::utils::errors::AppError;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

pub struct TourRepository {
    pool: PgPool,
}

impl TourRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_tour(
        &self,
        agency_id: Uuid,
        name: String,
        description: Option<String>,
    ) -> Result<Tour, AppError> {
        let tour = sqlx::query_as::<_, Tour>(
            r#"
            INSERT INTO tours (id, agency_id, name, description, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(agency_id)
        .bind(name)
        .bind(description)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(tour)
    }

    pub async fn find_tour(&self, id: Uuid) -> Result<Option<Tour>, AppError> {
        let tour = sqlx::query_as::<_, Tour>("SELECT * FROM tours WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(tour)
    }

    pub async fn list_tours(&self) -> Result<Vec<Tour>, AppError> {
        let tours = sqlx::query_as::<_, Tour>("SELECT * FROM tours ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        Ok(tours)
    }

    pub async fn create_scheduled(
        &self,
        tour_id: Uuid,
        departure_at: DateTime<Utc>,
    ) -> Result<ScheduledTour, AppError> {
        let scheduled = sqlx::query_as::<_, ScheduledTour>(
            r#"
            INSERT INTO scheduled_tours (id, tour_id, departure_at, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(tour_id)
        .bind(departure_at)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(scheduled)
    }

    pub async fn find_scheduled(&self, id: Uuid) -> Result<Option<ScheduledTour>, AppError> {
        let scheduled =
            sqlx::query_as::<_, ScheduledTour>("SELECT * FROM scheduled_tours WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(scheduled)
    }

    /// Salida con el nombre y la agencia del tour
    pub async fn find_scheduled_detail(
        &self,
        id: Uuid,
    ) -> Result<Option<ScheduledTourDetail>, AppError> {
        let detail = sqlx::query_as::<_, ScheduledTourDetail>(
            r#"
            SELECT st.id, st.tour_id, t.agency_id, t.name, st.departure_at
            FROM scheduled_tours st
            JOIN tours t ON t.id = st.tour_id
            WHERE st.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(detail)
    }
}
