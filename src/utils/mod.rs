//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, redondeo
//! y validación de datos.

pub mod errors;
pub mod rounding;
pub mod validation;

pub use errors::{AppResult, CostingError};
pub use rounding::{round1, round2};
