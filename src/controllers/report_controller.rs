//! Controlador de reportes
//!
//! Expone las derivaciones consultables del motor: ocupación, caja diaria,
//! control de ventas, contabilidad por agencia, liquidación de rutas y las
//! derivaciones puntuales por reserva/salida.

use chrono::{NaiveDate, TimeZone, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::report_dto::{
    AccountingReport, DailyCashReport, OccupancyReport, RouteSettlementReport,
    SalesControlReport,
};
use crate::services::payment_service::PaymentMethod;
use crate::services::report_service::ReportService;
use crate::services::scenario_service::SettlementScenario;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_date;

pub struct ReportController {
    service: ReportService,
}

impl ReportController {
    pub fn new(pool: PgPool, house_agency_id: Uuid) -> Self {
        Self {
            service: ReportService::new(pool, house_agency_id),
        }
    }

    pub async fn occupancy(
        &self,
        date: Option<String>,
    ) -> Result<Vec<OccupancyReport>, AppError> {
        let date = date.map(|d| Self::parse_date(&d)).transpose()?;
        self.service.occupancy(date).await
    }

    pub async fn daily_cash(&self, date: String) -> Result<DailyCashReport, AppError> {
        let date = Self::parse_date(&date)?;
        self.service.daily_cash(date).await
    }

    pub async fn sales_control(
        &self,
        scheduled_route_id: Uuid,
    ) -> Result<SalesControlReport, AppError> {
        self.service.sales_control(scheduled_route_id).await
    }

    /// Contabilidad por agencia en [from, to], ambas fechas inclusive
    pub async fn agency_accounting(
        &self,
        from: String,
        to: String,
    ) -> Result<AccountingReport, AppError> {
        let from = Self::parse_date(&from)?;
        let to = Self::parse_date(&to)?;

        if to < from {
            return Err(AppError::BadRequest(
                "El rango de fechas está invertido".to_string(),
            ));
        }

        let from_dt = Utc.from_utc_datetime(&from.and_hms_opt(0, 0, 0).unwrap());
        let to_dt = Utc.from_utc_datetime(
            &to.succ_opt()
                .unwrap_or(to)
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        );

        self.service.agency_accounting(from_dt, to_dt).await
    }

    pub async fn route_settlement(
        &self,
        scheduled_route_id: Uuid,
    ) -> Result<RouteSettlementReport, AppError> {
        self.service.route_settlement(scheduled_route_id).await
    }

    pub async fn scenario(
        &self,
        reservation_id: Uuid,
    ) -> Result<SettlementScenario, AppError> {
        self.service.scenario_for(reservation_id).await
    }

    pub async fn payment_method(
        &self,
        reservation_id: Uuid,
    ) -> Result<PaymentMethod, AppError> {
        self.service.payment_method_for(reservation_id).await
    }

    pub async fn is_settled(&self, scheduled_route_id: Uuid) -> Result<bool, AppError> {
        self.service.is_settled(scheduled_route_id).await
    }

    fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
        validate_date(value)
            .map_err(|_| AppError::BadRequest(format!("Fecha inválida: '{}'", value)))
    }
}
