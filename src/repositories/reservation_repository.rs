//! Repositorio de reservas
//!
//! La secuencia leer-ocupación → decidir → escribir se ejecuta dentro de
//! una sola transacción con lock de fila (`FOR UPDATE`) sobre la salida de
//! ruta, serializando las escrituras concurrentes contra la misma salida.
//! La ocupación nunca puede superar las plazas del vehículo.

use crate::models::reservation::{
    Reservation, ReservationStatus, ReservationTarget,
};
use crate::services::capacity_service::check_capacity;
use crate::utils::errors::AppError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use uuid::Uuid;

/// Datos ya resueltos para insertar una reserva (el importe llega calculado)
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub service_id: Uuid,
    pub adults: i32,
    pub children: i32,
    pub charge: Decimal,
    pub boarding_address: Option<String>,
    pub target: ReservationTarget,
    pub transfer_agency_id: Option<Uuid>,
    pub status: ReservationStatus,
}

/// Datos ya resueltos para reescribir una reserva existente
#[derive(Debug, Clone)]
pub struct ReservationChanges {
    pub service_id: Uuid,
    pub adults: i32,
    pub children: i32,
    pub charge: Decimal,
    pub boarding_address: Option<String>,
    pub transfer_agency_id: Option<Uuid>,
    pub status: ReservationStatus,
}

/// Fila de contabilidad: reserva no eliminada con su agencia operadora
/// resuelta por el enlace ruta/tour del servicio
#[derive(Debug, FromRow)]
pub struct AccountingRow {
    pub id: Uuid,
    pub service_id: Uuid,
    pub adults: i32,
    pub children: i32,
    pub charge: Decimal,
    pub status: ReservationStatus,
    pub transfer_agency_id: Option<Uuid>,
    pub operating_agency_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

pub struct ReservationRepository {
    pool: PgPool,
}

impl ReservationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insertar una reserva con el guardián de capacidad aplicado dentro de
    /// la misma transacción. Los tours no tienen tope y solo se verifica que
    /// la salida exista.
    pub async fn create_guarded(&self, data: NewReservation) -> Result<Reservation, AppError> {
        let mut tx = self.pool.begin().await?;

        match data.target {
            ReservationTarget::Route(scheduled_route_id) => {
                let capacity =
                    Self::lock_scheduled_route(&mut tx, scheduled_route_id).await?;
                let occupied =
                    Self::occupancy_in_tx(&mut tx, scheduled_route_id, None).await?;
                let requested = (data.adults + data.children) as i64;
                check_capacity(capacity, occupied, requested)?;
            }
            ReservationTarget::Tour(scheduled_tour_id) => {
                let exists: (bool,) = sqlx::query_as(
                    "SELECT EXISTS(SELECT 1 FROM scheduled_tours WHERE id = $1)",
                )
                .bind(scheduled_tour_id)
                .fetch_one(&mut *tx)
                .await?;

                if !exists.0 {
                    return Err(AppError::ReferentialIntegrity(format!(
                        "Scheduled tour with id '{}' does not exist",
                        scheduled_tour_id
                    )));
                }
            }
        }

        let now = Utc::now();
        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            INSERT INTO reservations (id, service_id, adults, children, charge,
                                      boarding_address, scheduled_route_id, scheduled_tour_id,
                                      transfer_agency_id, status, deleted, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, FALSE, $11, $11)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.service_id)
        .bind(data.adults)
        .bind(data.children)
        .bind(data.charge)
        .bind(data.boarding_address)
        .bind(data.target.scheduled_route_id())
        .bind(data.target.scheduled_tour_id())
        .bind(data.transfer_agency_id)
        .bind(data.status)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(reservation)
    }

    /// Reescribir una reserva. Si crece el total de pasajeros sobre una
    /// salida de ruta, la capacidad se reverifica bajo el mismo lock,
    /// excluyendo los pasajeros actuales de la propia reserva.
    pub async fn update_guarded(
        &self,
        id: Uuid,
        changes: ReservationChanges,
    ) -> Result<Reservation, AppError> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, Reservation>(
            "SELECT * FROM reservations WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Reservation with id '{}' not found", id)))?;

        if current.deleted {
            return Err(AppError::Conflict(
                "No se puede modificar una reserva cancelada".to_string(),
            ));
        }

        let new_total = (changes.adults + changes.children) as i64;
        if let Some(scheduled_route_id) = current.scheduled_route_id {
            if new_total > current.total_pax() as i64 {
                let capacity =
                    Self::lock_scheduled_route(&mut tx, scheduled_route_id).await?;
                let occupied =
                    Self::occupancy_in_tx(&mut tx, scheduled_route_id, Some(id)).await?;
                check_capacity(capacity, occupied, new_total)?;
            }
        }

        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            UPDATE reservations
            SET service_id = $2, adults = $3, children = $4, charge = $5,
                boarding_address = $6, transfer_agency_id = $7, status = $8,
                updated_at = $9
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(changes.service_id)
        .bind(changes.adults)
        .bind(changes.children)
        .bind(changes.charge)
        .bind(changes.boarding_address)
        .bind(changes.transfer_agency_id)
        .bind(changes.status)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(reservation)
    }

    /// Cancelación: soft-delete, nunca borrado físico. La fila queda fuera
    /// de ocupación y de ingresos.
    pub async fn soft_delete(&self, id: Uuid) -> Result<Reservation, AppError> {
        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            UPDATE reservations
            SET deleted = TRUE, status = 'cancelled', updated_at = $2
            WHERE id = $1 AND deleted = FALSE
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Reservation with id '{}' not found or already cancelled",
                id
            ))
        })?;

        Ok(reservation)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Reservation>, AppError> {
        let reservation =
            sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(reservation)
    }

    pub async fn list_by_scheduled_route(
        &self,
        scheduled_route_id: Uuid,
    ) -> Result<Vec<Reservation>, AppError> {
        let reservations = sqlx::query_as::<_, Reservation>(
            r#"
            SELECT * FROM reservations
            WHERE scheduled_route_id = $1 AND deleted = FALSE
            ORDER BY created_at
            "#,
        )
        .bind(scheduled_route_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reservations)
    }

    /// Ingresos de una salida: suma de importes de reservas no eliminadas
    pub async fn revenue_for_scheduled_route(
        &self,
        scheduled_route_id: Uuid,
    ) -> Result<Decimal, AppError> {
        let revenue: Decimal = sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(charge), 0)
            FROM reservations
            WHERE scheduled_route_id = $1 AND deleted = FALSE
            "#,
        )
        .bind(scheduled_route_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(revenue)
    }

    /// Reservas de un rango de fechas con su agencia operadora resuelta,
    /// para el reporte de contabilidad por agencia
    pub async fn accounting_rows(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<AccountingRow>, AppError> {
        let rows = sqlx::query_as::<_, AccountingRow>(
            r#"
            SELECT res.id, res.service_id, res.adults, res.children, res.charge,
                   res.status, res.transfer_agency_id,
                   COALESCE(r.agency_id, t.agency_id) AS operating_agency_id,
                   res.created_at
            FROM reservations res
            JOIN services s ON s.id = res.service_id
            LEFT JOIN routes r ON r.id = s.route_id
            LEFT JOIN tours t ON t.id = s.tour_id
            WHERE res.deleted = FALSE
              AND res.created_at >= $1
              AND res.created_at < $2
            ORDER BY res.created_at
            "#,
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Lock de la fila de la salida de ruta; devuelve las plazas del
    /// vehículo asignado (0 si no hay vehículo)
    async fn lock_scheduled_route(
        tx: &mut Transaction<'_, Postgres>,
        scheduled_route_id: Uuid,
    ) -> Result<i32, AppError> {
        let seats: Option<i32> = sqlx::query_scalar(
            r#"
            SELECT COALESCE(v.seats, 0)
            FROM scheduled_routes sr
            LEFT JOIN vehicles v ON v.id = sr.vehicle_id
            WHERE sr.id = $1
            FOR UPDATE OF sr
            "#,
        )
        .bind(scheduled_route_id)
        .fetch_optional(&mut **tx)
        .await?;

        seats.ok_or_else(|| {
            AppError::ReferentialIntegrity(format!(
                "Scheduled route with id '{}' does not exist",
                scheduled_route_id
            ))
        })
    }

    /// Ocupación actual de una salida, opcionalmente excluyendo una reserva
    /// (la propia, al reverificar un update)
    async fn occupancy_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        scheduled_route_id: Uuid,
        exclude: Option<Uuid>,
    ) -> Result<i64, AppError> {
        let occupied: i64 = sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(adults + children), 0)::BIGINT
            FROM reservations
            WHERE scheduled_route_id = $1
              AND deleted = FALSE
              AND ($2::UUID IS NULL OR id <> $2)
            "#,
        )
        .bind(scheduled_route_id)
        .bind(exclude)
        .fetch_one(&mut **tx)
        .await?;

        Ok(occupied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::reservation::ReservationStatus;
    use crate::models::service::ServiceType;
    use crate::repositories::agency_repository::AgencyRepository;
    use crate::repositories::route_repository::RouteRepository;
    use crate::repositories::service_repository::ServiceRepository;
    use crate::repositories::vehicle_repository::VehicleRepository;
    use crate::services::pricing_service;

    // Requiere una base Postgres con DATABASE_URL exportada:
    //   DATABASE_URL=postgres://... cargo test -- --ignored
    #[tokio::test]
    #[ignore]
    async fn concurrent_bookings_never_overbook() {
        let pool = sqlx::PgPool::connect(
            &std::env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
        )
        .await
        .expect("failed to connect");
        sqlx::migrate!("./migrations").run(&pool).await.ok();

        let agencies = AgencyRepository::new(pool.clone());
        let vehicles = VehicleRepository::new(pool.clone());
        let routes = RouteRepository::new(pool.clone());
        let services = ServiceRepository::new(pool.clone());
        let reservations = ReservationRepository::new(pool.clone());

        let suffix = Uuid::new_v4().to_string();
        let agency = agencies
            .create(format!("Agencia {}", suffix), None)
            .await
            .unwrap();
        let vehicle = vehicles
            .create(format!("BUS-{}", &suffix[..8]), 20, None)
            .await
            .unwrap();
        let route = routes
            .create_route(agency.id, "Terminal".into(), "Aeropuerto".into())
            .await
            .unwrap();
        let scheduled = routes
            .create_scheduled(route.id, Some(vehicle.id), Utc::now())
            .await
            .unwrap();
        let base = Decimal::new(100, 0);
        let service = services
            .create(
                Some(route.id),
                None,
                base,
                None,
                pricing_service::discounted_price(base, None),
                ServiceType::Collective,
            )
            .await
            .unwrap();

        let booking = |adults: i32| NewReservation {
            service_id: service.id,
            adults,
            children: 0,
            charge: Decimal::from(adults) * base,
            boarding_address: None,
            target: ReservationTarget::Route(scheduled.id),
            transfer_agency_id: None,
            status: ReservationStatus::Pending,
        };

        // 18 de 20 plazas ocupadas; dos reservas concurrentes de 2 pax:
        // el lock de fila serializa y exactamente una entra
        reservations.create_guarded(booking(18)).await.unwrap();

        let (a, b) = tokio::join!(
            reservations.create_guarded(booking(2)),
            reservations.create_guarded(booking(2)),
        );

        let successes = [&a, &b].iter().filter(|r| r.is_ok()).count();
        assert_eq!(successes, 1, "exactly one of the two bookings must win");

        let failure = if a.is_err() { a } else { b };
        match failure.unwrap_err() {
            AppError::CapacityExceeded {
                capacity,
                occupied,
                requested,
            } => {
                assert_eq!(capacity, 20);
                assert_eq!(occupied, 20);
                assert_eq!(requested, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
