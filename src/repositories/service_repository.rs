use crate::models::service::{Service, ServiceType};
use crate::utils::errors::AppError;
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct ServiceRepository {
    pool: PgPool,
}

impl ServiceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        route_id: Option<Uuid>,
        tour_id: Option<Uuid>,
        base_price: Decimal,
        discount_percent: Option<Decimal>,
        discounted_price: Decimal,
        service_type: ServiceType,
    ) -> Result<Service, AppError> {
        let service = sqlx::query_as::<_, Service>(
            r#"
            INSERT INTO services (id, route_id, tour_id, base_price, discount_percent,
                                  discounted_price, service_type, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(route_id)
        .bind(tour_id)
        .bind(base_price)
        .bind(discount_percent)
        .bind(discounted_price)
        .bind(service_type)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(service)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Service>, AppError> {
        let service = sqlx::query_as::<_, Service>("SELECT * FROM services WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(service)
    }

    pub async fn list(&self) -> Result<Vec<Service>, AppError> {
        let services =
            sqlx::query_as::<_, Service>("SELECT * FROM services ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(services)
    }

    /// Reescribir precios. El precio con descuento llega ya derivado;
    /// esta es la única vía por la que cambia.
    pub async fn update_prices(
        &self,
        id: Uuid,
        base_price: Decimal,
        discount_percent: Option<Decimal>,
        discounted_price: Decimal,
    ) -> Result<Service, AppError> {
        let service = sqlx::query_as::<_, Service>(
            r#"
            UPDATE services
            SET base_price = $2, discount_percent = $3, discounted_price = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(base_price)
        .bind(discount_percent)
        .bind(discounted_price)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Servicio no encontrado".to_string()))?;

        Ok(service)
    }

    /// Agencia operadora del servicio, resuelta transitivamente por la ruta
    /// o el tour que vende. El Ok(None) interno señala un servicio sin
    /// ninguno de los dos enlaces: falta de integridad referencial.
    pub async fn operating_agency(&self, service_id: Uuid) -> Result<Option<Uuid>, AppError> {
        let agency: Option<Option<Uuid>> = sqlx::query_scalar(
            r#"
            SELECT COALESCE(r.agency_id, t.agency_id)
            FROM services s
            LEFT JOIN routes r ON r.id = s.route_id
            LEFT JOIN tours t ON t.id = s.tour_id
            WHERE s.id = $1
            "#,
        )
        .bind(service_id)
        .fetch_optional(&self.pool)
        .await?;

        match agency {
            None => Err(AppError::ReferentialIntegrity(format!(
                "Service with id '{}' does not exist",
                service_id
            ))),
            Some(inner) => Ok(inner),
        }
    }
}
