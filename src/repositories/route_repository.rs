use crate::models::route::{Route, RouteStatus, ScheduledRoute, ScheduledRouteDetail};
use crate::utils::errors::AppError;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// Fila de ocupación por salida de ruta para el reporte de dashboard
#[derive(Debug, FromRow, serde::Serialize)]
pub struct OccupancyRow {
    pub id: Uuid,
    pub origin: String,
    pub destination: String,
    pub departure_at: DateTime<Utc>,
    pub status: RouteStatus,
    pub capacity: i32,
    pub occupied: i64,
}

pub struct RouteRepository {
    pool: PgPool,
}

impl RouteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_route(
        &self,
        agency_id: Uuid,
        origin: String,
        destination: String,
    ) -> Result<Route, AppError> {
        let route = sqlx::query_as::<_, Route>(
            r#"
            INSERT INTO routes (id, agency_id, origin, destination, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(agency_id)
        .bind(origin)
        .bind(destination)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(route)
    }

    pub async fn find_route(&self, id: Uuid) -> Result<Option<Route>, AppError> {
        let route = sqlx::query_as::<_, Route>("SELECT * FROM routes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(route)
    }

    pub async fn list_routes(&self) -> Result<Vec<Route>, AppError> {
        let routes = sqlx::query_as::<_, Route>("SELECT * FROM routes ORDER BY origin, destination")
            .fetch_all(&self.pool)
            .await?;

        Ok(routes)
    }

    pub async fn create_scheduled(
        &self,
        route_id: Uuid,
        vehicle_id: Option<Uuid>,
        departure_at: DateTime<Utc>,
    ) -> Result<ScheduledRoute, AppError> {
        let scheduled = sqlx::query_as::<_, ScheduledRoute>(
            r#"
            INSERT INTO scheduled_routes (id, route_id, vehicle_id, departure_at, status, created_at)
            VALUES ($1, $2, $3, $4, 'activated', $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(route_id)
        .bind(vehicle_id)
        .bind(departure_at)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(scheduled)
    }

    pub async fn find_scheduled(&self, id: Uuid) -> Result<Option<ScheduledRoute>, AppError> {
        let scheduled =
            sqlx::query_as::<_, ScheduledRoute>("SELECT * FROM scheduled_routes WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(scheduled)
    }

    /// Salida con endpoints de la plantilla, plazas y pago al conductor
    pub async fn find_scheduled_detail(
        &self,
        id: Uuid,
    ) -> Result<Option<ScheduledRouteDetail>, AppError> {
        let detail = sqlx::query_as::<_, ScheduledRouteDetail>(
            r#"
            SELECT sr.id, sr.route_id, r.agency_id, r.origin, r.destination,
                   sr.departure_at, sr.status, sr.vehicle_id,
                   COALESCE(v.seats, 0) AS seats, v.driver_payment
            FROM scheduled_routes sr
            JOIN routes r ON r.id = sr.route_id
            LEFT JOIN vehicles v ON v.id = sr.vehicle_id
            WHERE sr.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(detail)
    }

    pub async fn update_scheduled_status(
        &self,
        id: Uuid,
        status: RouteStatus,
    ) -> Result<ScheduledRoute, AppError> {
        let scheduled = sqlx::query_as::<_, ScheduledRoute>(
            r#"
            UPDATE scheduled_routes
            SET status = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Salida de ruta no encontrada".to_string()))?;

        Ok(scheduled)
    }

    /// Ocupación por salida: capacidad del vehículo contra la suma de
    /// pasajeros de reservas no eliminadas. Filtra por fecha si se indica.
    pub async fn occupancy_rows(
        &self,
        date: Option<NaiveDate>,
    ) -> Result<Vec<OccupancyRow>, AppError> {
        let rows = sqlx::query_as::<_, OccupancyRow>(
            r#"
            SELECT sr.id, r.origin, r.destination, sr.departure_at, sr.status,
                   COALESCE(v.seats, 0) AS capacity,
                   COALESCE(occ.pax, 0) AS occupied
            FROM scheduled_routes sr
            JOIN routes r ON r.id = sr.route_id
            LEFT JOIN vehicles v ON v.id = sr.vehicle_id
            LEFT JOIN (
                SELECT scheduled_route_id, SUM(adults + children)::BIGINT AS pax
                FROM reservations
                WHERE deleted = FALSE
                GROUP BY scheduled_route_id
            ) occ ON occ.scheduled_route_id = sr.id
            WHERE $1::DATE IS NULL OR (sr.departure_at AT TIME ZONE 'UTC')::DATE = $1
            ORDER BY sr.departure_at
            "#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
