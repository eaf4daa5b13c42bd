//! Reportes
//!
//! Modelos de lectura construidos uniendo las derivaciones del motor:
//! ocupación por salida, caja diaria, control de ventas, contabilidad por
//! agencia y liquidación de rutas. Solo lectura; nada de aquí muta estado.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::report_dto::{
    AccountingReport, AccountingReportRow, AgencySummary, DailyCashReport, OccupancyReport,
    RouteSettlementReport, SalesControlReport, SalesControlRow,
};
use crate::repositories::cash_ledger_repository::CashLedgerRepository;
use crate::repositories::reservation_repository::ReservationRepository;
use crate::repositories::route_expense_repository::RouteExpenseRepository;
use crate::repositories::route_repository::RouteRepository;
use crate::repositories::service_repository::ServiceRepository;
use crate::services::payment_service::{self, PaymentMethod};
use crate::services::scenario_service::{self, SettlementScenario};
use crate::services::settlement_service;
use crate::utils::errors::AppError;

pub struct ReportService {
    house_agency_id: Uuid,
    route_repository: RouteRepository,
    reservation_repository: ReservationRepository,
    ledger_repository: CashLedgerRepository,
    expense_repository: RouteExpenseRepository,
    service_repository: ServiceRepository,
}

impl ReportService {
    pub fn new(pool: PgPool, house_agency_id: Uuid) -> Self {
        Self {
            house_agency_id,
            route_repository: RouteRepository::new(pool.clone()),
            reservation_repository: ReservationRepository::new(pool.clone()),
            ledger_repository: CashLedgerRepository::new(pool.clone()),
            expense_repository: RouteExpenseRepository::new(pool.clone()),
            service_repository: ServiceRepository::new(pool),
        }
    }

    /// Dashboard de ocupación por salida de ruta
    pub async fn occupancy(
        &self,
        date: Option<NaiveDate>,
    ) -> Result<Vec<OccupancyReport>, AppError> {
        let rows = self.route_repository.occupancy_rows(date).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let available = if row.capacity > 0 {
                    (row.capacity as i64 - row.occupied).max(0)
                } else {
                    0
                };
                OccupancyReport {
                    scheduled_route_id: row.id,
                    origin: row.origin,
                    destination: row.destination,
                    departure_at: row.departure_at,
                    status: row.status,
                    capacity: row.capacity,
                    occupied: row.occupied,
                    available,
                    settled: settlement_service::is_settled(row.status),
                }
            })
            .collect())
    }

    /// Caja del día: feed de filas espejadas más totales
    pub async fn daily_cash(&self, date: NaiveDate) -> Result<DailyCashReport, AppError> {
        let entries = self.ledger_repository.find_by_service_date(date).await?;

        let total_amount = entries
            .iter()
            .map(|e| e.total_price)
            .sum::<Decimal>();
        let total_pax = entries.iter().map(|e| e.total_pax as i64).sum();

        Ok(DailyCashReport {
            date,
            entries,
            total_amount,
            total_pax,
        })
    }

    /// Control de ventas de una salida: reservas con importe y método de pago
    pub async fn sales_control(
        &self,
        scheduled_route_id: Uuid,
    ) -> Result<SalesControlReport, AppError> {
        let reservations = self
            .reservation_repository
            .list_by_scheduled_route(scheduled_route_id)
            .await?;

        let mut rows = Vec::with_capacity(reservations.len());
        let mut total_charged = Decimal::ZERO;

        for reservation in reservations {
            let has_cash_entry = self
                .ledger_repository
                .exists_for_reservation(reservation.id)
                .await?;

            total_charged += reservation.charge;
            rows.push(SalesControlRow {
                reservation_id: reservation.id,
                adults: reservation.adults,
                children: reservation.children,
                total_pax: reservation.total_pax(),
                charge: reservation.charge,
                status: reservation.status,
                payment_method: payment_service::resolve(reservation.status, has_cash_entry),
            });
        }

        Ok(SalesControlReport {
            scheduled_route_id,
            rows,
            total_charged,
        })
    }

    /// Contabilidad por agencia: cada reserva del rango clasificada contra
    /// la agencia casa, con totales por agencia operadora
    pub async fn agency_accounting(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<AccountingReport, AppError> {
        let raw = self.reservation_repository.accounting_rows(from, to).await?;

        let mut rows = Vec::with_capacity(raw.len());
        let mut totals: HashMap<Uuid, (i64, Decimal)> = HashMap::new();

        for row in raw {
            // Una reserva sin agencia operadora resoluble es un dato
            // corrupto anterior a las validaciones de escritura; se reporta
            // y se excluye en lugar de clasificarla mal
            let Some(operating_agency_id) = row.operating_agency_id else {
                log::warn!(
                    "Reserva {} sin agencia operadora resoluble, excluida de contabilidad",
                    row.id
                );
                continue;
            };

            let has_cash_entry = self
                .ledger_repository
                .exists_for_reservation(row.id)
                .await?;

            let entry = totals.entry(operating_agency_id).or_insert((0, Decimal::ZERO));
            entry.0 += 1;
            entry.1 += row.charge;

            rows.push(AccountingReportRow {
                reservation_id: row.id,
                operating_agency_id,
                transfer_agency_id: row.transfer_agency_id,
                scenario: scenario_service::classify(
                    operating_agency_id,
                    row.transfer_agency_id,
                    self.house_agency_id,
                ),
                payment_method: payment_service::resolve(row.status, has_cash_entry),
                charge: row.charge,
                created_at: row.created_at,
            });
        }

        let mut by_agency: Vec<AgencySummary> = totals
            .into_iter()
            .map(|(agency_id, (reservations, revenue))| AgencySummary {
                agency_id,
                reservations,
                revenue,
            })
            .collect();
        by_agency.sort_by_key(|s| s.agency_id);

        Ok(AccountingReport {
            from,
            to,
            rows,
            by_agency,
        })
    }

    /// Liquidación de una salida: ingresos contra pago al conductor y gastos
    pub async fn route_settlement(
        &self,
        scheduled_route_id: Uuid,
    ) -> Result<RouteSettlementReport, AppError> {
        let detail = self
            .route_repository
            .find_scheduled_detail(scheduled_route_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Scheduled route with id '{}' not found",
                    scheduled_route_id
                ))
            })?;

        let revenue = self
            .reservation_repository
            .revenue_for_scheduled_route(scheduled_route_id)
            .await?;
        let expenses_total = self
            .expense_repository
            .total_for_scheduled_route(scheduled_route_id)
            .await?;
        let driver_payment = detail.driver_payment.unwrap_or(Decimal::ZERO);

        Ok(RouteSettlementReport {
            scheduled_route_id,
            origin: detail.origin,
            destination: detail.destination,
            departure_at: detail.departure_at,
            status: detail.status,
            settled: settlement_service::is_settled(detail.status),
            revenue,
            driver_payment,
            expenses_total,
            profit: revenue - driver_payment - expenses_total,
        })
    }

    /// Derivación puntual: escenario de liquidación de una reserva
    pub async fn scenario_for(
        &self,
        reservation_id: Uuid,
    ) -> Result<SettlementScenario, AppError> {
        let reservation = self
            .reservation_repository
            .find_by_id(reservation_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Reservation with id '{}' not found",
                    reservation_id
                ))
            })?;

        let operating = self
            .service_repository
            .operating_agency(reservation.service_id)
            .await?
            .ok_or_else(|| {
                AppError::ReferentialIntegrity(format!(
                    "Service with id '{}' has no route or tour link",
                    reservation.service_id
                ))
            })?;

        Ok(scenario_service::classify(
            operating,
            reservation.transfer_agency_id,
            self.house_agency_id,
        ))
    }

    /// Derivación puntual: método de pago de una reserva
    pub async fn payment_method_for(
        &self,
        reservation_id: Uuid,
    ) -> Result<PaymentMethod, AppError> {
        let reservation = self
            .reservation_repository
            .find_by_id(reservation_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Reservation with id '{}' not found",
                    reservation_id
                ))
            })?;

        let has_cash_entry = self
            .ledger_repository
            .exists_for_reservation(reservation.id)
            .await?;

        Ok(payment_service::resolve(reservation.status, has_cash_entry))
    }

    /// Derivación puntual: ¿la salida está liquidada?
    pub async fn is_settled(&self, scheduled_route_id: Uuid) -> Result<bool, AppError> {
        let scheduled = self
            .route_repository
            .find_scheduled(scheduled_route_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Scheduled route with id '{}' not found",
                    scheduled_route_id
                ))
            })?;

        Ok(settlement_service::is_settled(scheduled.status))
    }
}
