mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚌 Transport Reservations - Motor de reservas y liquidación");
    info!("===========================================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let pool = match database::create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    if let Err(e) = database::run_migrations(&pool).await {
        error!("❌ Error ejecutando migraciones: {}", e);
        return Err(anyhow::anyhow!("Error de migraciones: {}", e));
    }
    info!("✅ Migraciones aplicadas");
    info!("🏠 Agencia casa: {}", config.house_agency_id);

    // CORS: permisivo en desarrollo, orígenes listados en producción
    let cors = if config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    // Crear router de la API
    let app_state = AppState::new(pool, config.clone());

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api/agency", routes::agency_routes::create_agency_router())
        .nest("/api/vehicle", routes::vehicle_routes::create_vehicle_router())
        .nest("/api/route", routes::route_routes::create_route_router())
        .nest("/api/tour", routes::tour_routes::create_tour_router())
        .nest("/api/service", routes::service_routes::create_service_router())
        .nest(
            "/api/reservation",
            routes::reservation_routes::create_reservation_router(),
        )
        .nest("/api/expense", routes::expense_routes::create_expense_router())
        .nest("/api/reports", routes::report_routes::create_report_router())
        .layer(cors)
        .with_state(app_state);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🏢 Agency:");
    info!("   POST /api/agency - Crear agencia");
    info!("   GET  /api/agency - Listar agencias");
    info!("🚗 Vehicle:");
    info!("   POST /api/vehicle - Crear vehículo");
    info!("   GET  /api/vehicle - Listar vehículos");
    info!("🛣️  Route / Tour:");
    info!("   POST /api/route - Crear ruta");
    info!("   POST /api/route/scheduled - Programar salida de ruta");
    info!("   PUT  /api/route/scheduled/:id/status - Cambiar estado de salida");
    info!("   POST /api/tour - Crear tour");
    info!("   POST /api/tour/scheduled - Programar salida de tour");
    info!("🎫 Service:");
    info!("   POST /api/service - Crear servicio (deriva precio con descuento)");
    info!("   PUT  /api/service/:id - Actualizar precios");
    info!("📝 Reservation:");
    info!("   POST /api/reservation - Crear reserva (precio + capacidad + caja)");
    info!("   PUT  /api/reservation/:id - Actualizar reserva");
    info!("   DELETE /api/reservation/:id - Cancelar reserva (soft-delete)");
    info!("💵 Expense:");
    info!("   POST /api/expense - Registrar gasto de ruta");
    info!("📊 Reports:");
    info!("   GET  /api/reports/occupancy - Ocupación por salida");
    info!("   GET  /api/reports/daily-cash?date= - Caja del día");
    info!("   GET  /api/reports/sales-control/:id - Control de ventas");
    info!("   GET  /api/reports/accounting?from=&to= - Contabilidad por agencia");
    info!("   GET  /api/reports/settlement/:id - Liquidación de salida");
    info!("   GET  /api/reports/reservation/:id/scenario - Escenario de liquidación");
    info!("   GET  /api/reports/reservation/:id/payment-method - Método de pago");
    info!("   GET  /api/reports/route/:id/settled - ¿Salida liquidada?");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                e
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "transport-reservations",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
