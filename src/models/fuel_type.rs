//! Modelos de tipos de combustible
//!
//! Este módulo contiene la especificación de combustible que llega de
//! GET /api/fuel-types y el payload del job mensual de actualización
//! de precios (POST /api/fuel-types/update).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Especificación de un tipo de combustible, solo-lectura desde este core.
/// El precio cambia con el tiempo vía el job externo de scraping.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FuelTypeSpec {
    pub fuel_type: String,
    pub price_per_litre_aed: f64,
    pub co2_factor_kg_per_litre: f64,
    pub efficiency_modifier: Option<f64>,
    pub idle_consumption: Option<f64>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Item del wire de GET /api/fuel-types
#[derive(Debug, Clone, Deserialize)]
pub struct FuelTypeWire {
    #[serde(rename = "type")]
    pub fuel_type: String,
    pub price: f64,
    pub co2_factor: f64,
    #[serde(default)]
    pub efficiency: Option<f64>,
    #[serde(default)]
    pub idle_consumption: Option<f64>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<FuelTypeWire> for FuelTypeSpec {
    fn from(wire: FuelTypeWire) -> Self {
        Self {
            fuel_type: wire.fuel_type,
            price_per_litre_aed: wire.price,
            co2_factor_kg_per_litre: wire.co2_factor,
            efficiency_modifier: wire.efficiency,
            idle_consumption: wire.idle_consumption,
            updated_at: wire.updated_at,
        }
    }
}

/// Payload para POST /api/fuel-types/update (job mensual de precios)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelPriceUpdate {
    /// Precios por código de combustible (PETROL, SUPER, EPLUS, DIESEL)
    pub prices: HashMap<String, f64>,
    /// Fecha de extracción en RFC3339
    pub date: String,
    pub source: String,
}
