//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación y normalización
//! de datos de formulario.

use validator::ValidationError;

/// Normalizar un nombre de selección: trim, y `None` si queda vacío
pub fn normalize_name(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Validar que un string no esté vacío (para campos requeridos del payload)
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}
