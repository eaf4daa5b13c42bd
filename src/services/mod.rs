//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación: el cálculo
//! de precios, el guardián de capacidad, la clasificación de escenarios de
//! liquidación, la resolución de método de pago, el espejo de caja diaria,
//! la compuerta de liquidación y los reportes que los consumen.

pub mod capacity_service;
pub mod cash_ledger_service;
pub mod payment_service;
pub mod pricing_service;
pub mod report_service;
pub mod reservation_service;
pub mod scenario_service;
pub mod settlement_service;
