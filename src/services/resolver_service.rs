//! Resolución de campos dependientes
//!
//! Este módulo resuelve los campos derivados del formulario de tipo de
//! vehículo a partir del snapshot de master data: especificación del
//! modelo con curva de degradación por edad, y precio/factor CO2 del
//! combustible con matching en tres niveles. Un miss devuelve `None`
//! (el caller conserva los valores previos), nunca un error.

use chrono::{Datelike, Utc};
use lazy_static::lazy_static;

use crate::cache::master_data_cache::MasterDataCache;
use crate::utils::rounding::round1;

lazy_static! {
    /// Factores CO2 por defecto (kg/l) cuando el combustible no está en
    /// la tabla de precios; claves por substring
    static ref DEFAULT_CO2_FACTORS: Vec<(&'static str, f64)> = vec![
        ("petrol", 2.31),
        ("diesel", 2.68),
        ("electric", 0.05),
        ("hybrid", 1.52),
    ];
}

/// Campos derivados de la selección de modelo
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedModelFields {
    /// Eficiencia base ajustada por edad, redondeada a 1 decimal (km/l)
    pub fuel_efficiency: f64,
    pub vehicle_capacity: f64,
    pub idle_fuel_consumption: f64,
    pub number_of_passengers: u32,
}

/// Campos derivados de la selección de combustible
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFuelFields {
    /// `None` cuando el match vino de la tabla de defaults (solo CO2);
    /// el caller conserva el precio previo
    pub price_per_litre: Option<f64>,
    pub co2_factor: f64,
}

/// Multiplicador de degradación de eficiencia según edad del vehículo.
/// La inclusividad de los límites es exacta: los históricos de costos
/// dependen de esta tabla.
pub fn age_adjustment(current_year: i32, model_year: i32) -> f64 {
    let age = current_year - model_year;
    if age <= 3 {
        1.00
    } else if age <= 5 {
        0.97
    } else if age <= 7 {
        0.95
    } else if age <= 10 {
        0.92
    } else {
        0.90
    }
}

/// Curva de edad contra el año actual
pub fn age_adjustment_now(model_year: i32) -> f64 {
    age_adjustment(Utc::now().year(), model_year)
}

/// Resolver los campos del modelo con la curva de edad aplicada contra
/// el año en curso
pub fn resolve_model_fields(
    cache: &MasterDataCache,
    manufacturer: &str,
    model: &str,
    model_year: i32,
) -> Option<ResolvedModelFields> {
    resolve_model_fields_at(cache, manufacturer, model, model_year, Utc::now().year())
}

/// Variante con año de referencia explícito
pub fn resolve_model_fields_at(
    cache: &MasterDataCache,
    manufacturer: &str,
    model: &str,
    model_year: i32,
    current_year: i32,
) -> Option<ResolvedModelFields> {
    let Some(spec) = cache.get_model_spec(manufacturer, model) else {
        log::warn!("⚠️ Sin spec para modelo '{} {}'", manufacturer, model);
        return None;
    };

    let multiplier = age_adjustment(current_year, model_year);
    Some(ResolvedModelFields {
        fuel_efficiency: round1(spec.base_efficiency_km_per_litre * multiplier),
        vehicle_capacity: spec.capacity_litres,
        idle_fuel_consumption: spec.idle_consumption_l_per_hour,
        number_of_passengers: spec.passenger_capacity,
    })
}

/// Resolver precio y factor CO2 del combustible en tres niveles:
/// 1. match exacto case-insensitive contra la tabla de combustibles
/// 2. match por substring en cualquier dirección
/// 3. tabla estática de factores CO2 por defecto
pub fn resolve_fuel_fields(cache: &MasterDataCache, fuel_type: &str) -> Option<ResolvedFuelFields> {
    let query = fuel_type.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    if let Some(spec) = cache.get_fuel_spec(&query) {
        return Some(ResolvedFuelFields {
            price_per_litre: Some(spec.price_per_litre_aed),
            co2_factor: spec.co2_factor_kg_per_litre,
        });
    }

    // los nombres difieren entre master data y la tabla de precios
    // ("Premium Unleaded" vs "premium"), de ahí el substring en ambas direcciones
    if let Some(spec) = cache.list_fuel_types().iter().find(|spec| {
        let candidate = spec.fuel_type.to_lowercase();
        candidate.contains(&query) || query.contains(&candidate)
    }) {
        return Some(ResolvedFuelFields {
            price_per_litre: Some(spec.price_per_litre_aed),
            co2_factor: spec.co2_factor_kg_per_litre,
        });
    }

    DEFAULT_CO2_FACTORS
        .iter()
        .find(|(key, _)| query.contains(key))
        .map(|(_, factor)| ResolvedFuelFields {
            price_per_litre: None,
            co2_factor: *factor,
        })
}
