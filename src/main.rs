mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod query;
mod repositories;
mod routes;
mod state;
mod stats;
mod utils;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
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

    info!("🚚 Fleet Management API");
    info!("=======================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    if let Err(e) = database::connection::run_migrations(&pool).await {
        error!("❌ Error ejecutando migraciones: {}", e);
        return Err(anyhow::anyhow!("Error de migraciones: {}", e));
    }
    info!("✅ Migraciones aplicadas");

    // CORS: orígenes explícitos en producción, permisivo en desarrollo
    let cors = if config.is_development() || config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    // Crear router de la API
    let app_state = AppState::new(pool, config.clone());

    let app = Router::new()
        .route("/health", get(health_check))
        .nest("/api/driver", routes::driver_routes::create_driver_router())
        .nest("/api/location", routes::location_routes::create_location_router())
        .nest("/api/vehicle", routes::vehicle_routes::create_vehicle_router())
        .nest("/api/trip", routes::trip_routes::create_trip_router())
        .nest("/api/subcontractor", routes::subcontractor_routes::create_subcontractor_router())
        .nest("/api/mission", routes::mission_routes::create_mission_router())
        .nest("/api/reports", routes::report_routes::create_report_router())
        .nest("/api/sync", routes::sync_routes::create_sync_router())
        .layer(cors)
        .with_state(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🧑 Drivers:");
    info!("   POST /api/driver - Crear conductor");
    info!("   GET  /api/driver - Listar conductores (filtros + paginación)");
    info!("   GET  /api/driver/:id - Obtener conductor");
    info!("   PUT  /api/driver/:id - Actualizar conductor");
    info!("   DELETE /api/driver/:id - Baja lógica de conductor");
    info!("📍 Locations:");
    info!("   POST /api/location - Crear ubicación");
    info!("   GET  /api/location - Listar ubicaciones");
    info!("   GET  /api/location/:id - Obtener ubicación");
    info!("🚗 Vehicles:");
    info!("   POST /api/vehicle - Crear vehículo");
    info!("   GET  /api/vehicle - Listar vehículos (filtros + paginación)");
    info!("   GET  /api/vehicle/:id - Obtener vehículo");
    info!("   PUT  /api/vehicle/:id - Actualizar vehículo");
    info!("   DELETE /api/vehicle/:id - Eliminar vehículo");
    info!("🛣  Trips:");
    info!("   POST /api/trip - Crear trip con contenedores");
    info!("   GET  /api/trip - Listar trips (filtros + paginación)");
    info!("   GET  /api/trip/:id - Detalle de trip");
    info!("   PUT  /api/trip/:id - Actualizar trip");
    info!("   PUT  /api/trip/container/:id - Estado de entrega de contenedor");
    info!("   DELETE /api/trip/:id - Eliminar trip");
    info!("🏢 Subcontractors:");
    info!("   POST /api/subcontractor - Crear subcontratista");
    info!("   GET  /api/subcontractor - Listar subcontratistas");
    info!("   GET  /api/subcontractor/:id - Obtener subcontratista");
    info!("   GET  /api/subcontractor/:id/financials - Rollup financiero");
    info!("   PUT  /api/subcontractor/:id - Actualizar subcontratista");
    info!("   DELETE /api/subcontractor/:id - Eliminar (bloqueado con misiones)");
    info!("📦 Missions:");
    info!("   POST /api/mission - Crear misión");
    info!("   GET  /api/mission - Listar misiones");
    info!("   GET  /api/mission/:id - Obtener misión");
    info!("   PUT  /api/mission/:id - Actualizar misión y pagos");
    info!("   DELETE /api/mission/:id - Eliminar misión");
    info!("📊 Reports:");
    info!("   POST /api/reports - Generar informe agregado");
    info!("🔄 Sync:");
    info!("   POST /api/sync/queue - Encolar operación pendiente");
    info!("   GET  /api/sync/pending - Listar operaciones pendientes");
    info!("   POST /api/sync/:id/retry - Incrementar contador de reintentos");
    info!("   DELETE /api/sync/:id - Eliminar operación");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Endpoint de health check
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "service": "fleet-management",
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
