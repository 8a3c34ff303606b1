//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de error del crate. Los misses de lookup
//! NO son errores: el resolver devuelve `None` y el caller conserva los
//! valores previos. Aquí solo viven fallas reales (HTTP, validación,
//! campos faltantes al armar el payload).

use thiserror::Error;

/// Errores principales del crate
#[derive(Error, Debug)]
pub enum CostingError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, CostingError>;

/// Función helper para errores de API externa con contexto de endpoint
pub fn external_api_error(endpoint: &str, detail: impl std::fmt::Display) -> CostingError {
    CostingError::ExternalApi(format!("{}: {}", endpoint, detail))
}
