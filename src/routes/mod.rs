//! Routers de la API
//!
//! Este módulo arma los routers de Axum por recurso.

pub mod agency_routes;
pub mod expense_routes;
pub mod report_routes;
pub mod reservation_routes;
pub mod route_routes;
pub mod service_routes;
pub mod tour_routes;
pub mod vehicle_routes;
