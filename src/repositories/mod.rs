//! Repositorios de acceso a datos
//!
//! Este módulo contiene todo el SQL del sistema. Cada repositorio envuelve
//! el pool de PostgreSQL y devuelve Result<_, AppError>.

pub mod agency_repository;
pub mod cash_ledger_repository;
pub mod reservation_repository;
pub mod route_expense_repository;
pub mod route_repository;
pub mod service_repository;
pub mod tour_repository;
pub mod vehicle_repository;
