use anyhow::Result;
use dotenvy::dotenv;
use tracing::{error, info, warn};

use fleet_costing::config::environment::EnvironmentConfig;
use fleet_costing::services::fuel_price_service::FuelPriceService;

/// Job mensual de precios de combustible.
/// Pensado para correr el día 1 de cada mes a las 06:00.
#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("⛽ Fleet Costing - Fuel Price Updater");
    info!("=====================================");

    let config = EnvironmentConfig::default();
    info!("🌐 API destino: {}", config.app_url);
    info!("📰 Fuente: {}", config.wam_fuel_prices_url);

    let service = FuelPriceService::new(&config);

    match service.run_updater().await {
        Ok(true) => {
            info!("✅ Precios de combustible actualizados");
            Ok(())
        }
        Ok(false) => {
            warn!("⚠️ No se encontraron precios; nada que actualizar");
            std::process::exit(1);
        }
        Err(e) => {
            error!("❌ Actualización de precios fallida: {}", e);
            Err(e)
        }
    }
}
