use crate::dto::common::ApiResponse;
use crate::models::route::{
    CreateRouteRequest, CreateScheduledRouteRequest, Route, RouteStatus, ScheduledRoute,
    UpdateRouteStatusRequest,
};
use crate::repositories::agency_repository::AgencyRepository;
use crate::repositories::route_repository::RouteRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{referential_error, AppError};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct RouteController {
    repository: RouteRepository,
    agency_repository: AgencyRepository,
    vehicle_repository: VehicleRepository,
}

impl RouteController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: RouteRepository::new(pool.clone()),
            agency_repository: AgencyRepository::new(pool.clone()),
            vehicle_repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateRouteRequest,
    ) -> Result<ApiResponse<Route>, AppError> {
        request.validate()?;

        if self
            .agency_repository
            .find_by_id(request.agency_id)
            .await?
            .is_none()
        {
            return Err(referential_error("Agency", &request.agency_id.to_string()));
        }

        let route = self
            .repository
            .create_route(request.agency_id, request.origin, request.destination)
            .await?;

        Ok(ApiResponse::success_with_message(
            route,
            "Ruta creada exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Route, AppError> {
        self.repository
            .find_route(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Ruta no encontrada".to_string()))
    }

    pub async fn list(&self) -> Result<Vec<Route>, AppError> {
        self.repository.list_routes().await
    }

    pub async fn schedule(
        &self,
        request: CreateScheduledRouteRequest,
    ) -> Result<ApiResponse<ScheduledRoute>, AppError> {
        request.validate()?;

        if self
            .repository
            .find_route(request.route_id)
            .await?
            .is_none()
        {
            return Err(referential_error("Route", &request.route_id.to_string()));
        }

        if let Some(vehicle_id) = request.vehicle_id {
            if self
                .vehicle_repository
                .find_by_id(vehicle_id)
                .await?
                .is_none()
            {
                return Err(referential_error("Vehicle", &vehicle_id.to_string()));
            }
        }

        let scheduled = self
            .repository
            .create_scheduled(request.route_id, request.vehicle_id, request.departure_at)
            .await?;

        Ok(ApiResponse::success_with_message(
            scheduled,
            "Salida programada exitosamente".to_string(),
        ))
    }

    pub async fn get_scheduled(&self, id: Uuid) -> Result<ScheduledRoute, AppError> {
        self.repository
            .find_scheduled(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Salida de ruta no encontrada".to_string()))
    }

    /// Cambiar el estado de ciclo de vida de una salida. Las etiquetas
    /// desconocidas caen al estado inicial.
    pub async fn update_scheduled_status(
        &self,
        id: Uuid,
        request: UpdateRouteStatusRequest,
    ) -> Result<ApiResponse<ScheduledRoute>, AppError> {
        let status = RouteStatus::from_label(&request.status);

        let scheduled = self
            .repository
            .update_scheduled_status(id, status)
            .await?;

        Ok(ApiResponse::success_with_message(
            scheduled,
            "Estado de la salida actualizado".to_string(),
        ))
    }
}
