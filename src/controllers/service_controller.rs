//! Controlador del catálogo de servicios
//!
//! El precio con descuento nunca llega del cliente: se deriva aquí en cada
//! alta o cambio de precio base/descuento.

use crate::dto::common::ApiResponse;
use crate::models::service::{CreateServiceRequest, Service, UpdateServiceRequest};
use crate::repositories::route_repository::RouteRepository;
use crate::repositories::service_repository::ServiceRepository;
use crate::repositories::tour_repository::TourRepository;
use crate::services::pricing_service;
use crate::utils::errors::{referential_error, AppError};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct ServiceController {
    repository: ServiceRepository,
    route_repository: RouteRepository,
    tour_repository: TourRepository,
}

impl ServiceController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ServiceRepository::new(pool.clone()),
            route_repository: RouteRepository::new(pool.clone()),
            tour_repository: TourRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateServiceRequest,
    ) -> Result<ApiResponse<Service>, AppError> {
        request.validate()?;
        Self::check_prices(request.base_price, request.discount_percent)?;

        // Un servicio vende exactamente una ruta o un tour
        match (request.route_id, request.tour_id) {
            (Some(route_id), None) => {
                if self.route_repository.find_route(route_id).await?.is_none() {
                    return Err(referential_error("Route", &route_id.to_string()));
                }
            }
            (None, Some(tour_id)) => {
                if self.tour_repository.find_tour(tour_id).await?.is_none() {
                    return Err(referential_error("Tour", &tour_id.to_string()));
                }
            }
            _ => {
                return Err(AppError::ReferentialIntegrity(
                    "El servicio debe enlazar exactamente una ruta o un tour".to_string(),
                ));
            }
        }

        let discounted =
            pricing_service::discounted_price(request.base_price, request.discount_percent);

        let service = self
            .repository
            .create(
                request.route_id,
                request.tour_id,
                request.base_price,
                request.discount_percent,
                discounted,
                request.service_type,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            service,
            "Servicio creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Service, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Servicio no encontrado".to_string()))
    }

    pub async fn list(&self) -> Result<Vec<Service>, AppError> {
        self.repository.list().await
    }

    /// Cambiar precio base o descuento; el precio con descuento se rederiva
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateServiceRequest,
    ) -> Result<ApiResponse<Service>, AppError> {
        request.validate()?;

        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Servicio no encontrado".to_string()))?;

        let base_price = request.base_price.unwrap_or(current.base_price);
        let discount_percent = request.discount_percent.or(current.discount_percent);
        Self::check_prices(base_price, discount_percent)?;

        let discounted = pricing_service::discounted_price(base_price, discount_percent);

        let service = self
            .repository
            .update_prices(id, base_price, discount_percent, discounted)
            .await?;

        Ok(ApiResponse::success_with_message(
            service,
            "Precios del servicio actualizados".to_string(),
        ))
    }

    fn check_prices(base_price: Decimal, discount_percent: Option<Decimal>) -> Result<(), AppError> {
        if base_price < Decimal::ZERO {
            return Err(AppError::BadRequest(
                "El precio base no puede ser negativo".to_string(),
            ));
        }
        if let Some(d) = discount_percent {
            if d < Decimal::ZERO || d > Decimal::ONE_HUNDRED {
                return Err(AppError::BadRequest(
                    "El descuento debe estar entre 0 y 100".to_string(),
                ));
            }
        }
        Ok(())
    }
}
