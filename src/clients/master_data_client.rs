//! Cliente de master data
//!
//! Este módulo puebla el snapshot de la sesión desde la API externa:
//! GET /api/master-data y GET /api/fuel-types, ambos en paralelo, una vez
//! por sesión de formulario. La política de reintentos es del caller.

use reqwest::Client;
use std::time::Duration;

use crate::cache::master_data_cache::MasterDataCache;
use crate::cache::session::MasterDataSession;
use crate::config::environment::EnvironmentConfig;
use crate::models::fuel_type::{FuelTypeSpec, FuelTypeWire};
use crate::models::master_data::MasterDataResponse;
use crate::utils::errors::{external_api_error, AppResult};

pub struct MasterDataClient {
    base_url: String,
    client: Client,
}

impl MasterDataClient {
    pub fn new(config: &EnvironmentConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: config.app_url.clone(),
            client,
        }
    }

    /// GET /api/master-data
    pub async fn fetch_master_data(&self) -> AppResult<MasterDataResponse> {
        let url = format!("{}/api/master-data", self.base_url);
        log::info!("🌐 Cargando master data desde {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(external_api_error("/api/master-data", format!("status {}", status)));
        }

        Ok(response.json::<MasterDataResponse>().await?)
    }

    /// GET /api/fuel-types
    pub async fn fetch_fuel_types(&self) -> AppResult<Vec<FuelTypeSpec>> {
        let url = format!("{}/api/fuel-types", self.base_url);
        log::info!("🌐 Cargando fuel types desde {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(external_api_error("/api/fuel-types", format!("status {}", status)));
        }

        let wire = response.json::<Vec<FuelTypeWire>>().await?;
        Ok(wire.into_iter().map(FuelTypeSpec::from).collect())
    }

    /// Cargar la sesión completa: Loading → Ready, o LoadFailed si algo
    /// de las dos descargas falla
    pub async fn load_session(&self, session: &mut MasterDataSession) -> AppResult<()> {
        session.begin_loading();

        let result =
            futures::future::try_join(self.fetch_master_data(), self.fetch_fuel_types()).await;

        match result {
            Ok((master_data, fuel_types)) => {
                session.complete(MasterDataCache::from_responses(master_data, fuel_types));
                Ok(())
            }
            Err(err) => {
                session.fail(err.to_string());
                Err(err)
            }
        }
    }
}
