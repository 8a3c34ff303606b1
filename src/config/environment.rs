//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    /// URL base de la API externa (master data, fuel types, vehicle types)
    pub app_url: String,
    /// Página de búsqueda de WAM con los anuncios de precios de combustible
    pub wam_fuel_prices_url: String,
    pub http_timeout_secs: u64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            app_url: env::var("APP_URL").unwrap_or_else(|_| "http://localhost:5000".to_string()),
            wam_fuel_prices_url: env::var("WAM_FUEL_PRICES_URL")
                .unwrap_or_else(|_| "https://wam.ae/en/search?query=fuel+prices".to_string()),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_fallbacks() {
        let config = EnvironmentConfig::default();
        assert!(!config.app_url.is_empty());
        assert!(config.wam_fuel_prices_url.contains("wam.ae"));
        assert!(config.http_timeout_secs > 0);
    }
}
