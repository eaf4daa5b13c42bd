//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod agency;
pub mod cash_ledger;
pub mod reservation;
pub mod route;
pub mod route_expense;
pub mod service;
pub mod tour;
pub mod vehicle;
