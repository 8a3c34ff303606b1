//! Modelos de master data
//!
//! Este módulo contiene los catálogos de referencia que llegan de
//! GET /api/master-data: fabricantes con sus modelos y especificaciones,
//! grupos de vehículos, regiones, departamentos, unidades y planes de servicio.

use serde::{Deserialize, Serialize};

/// Especificación inmutable de un modelo de vehículo, clave (manufacturer, model_name)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleModelSpec {
    pub manufacturer: String,
    pub model_name: String,
    pub base_efficiency_km_per_litre: f64,
    pub capacity_litres: f64,
    pub idle_consumption_l_per_hour: f64,
    pub passenger_capacity: u32,
}

/// Entrada genérica de catálogo (grupos, regiones, departamentos, unidades, planes)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
}

/// Modelo dentro de un fabricante, tal como llega de la API
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelEntry {
    pub name: String,
    pub fuel_efficiency: f64,
    #[serde(default)]
    pub capacity: f64,
    #[serde(default)]
    pub idle_consumption: f64,
    #[serde(default)]
    pub passengers: u32,
}

/// Fabricante con su lista de modelos
#[derive(Debug, Clone, Deserialize)]
pub struct ManufacturerEntry {
    pub name: String,
    #[serde(default)]
    pub models: Vec<ModelEntry>,
}

/// Respuesta completa de GET /api/master-data
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterDataResponse {
    #[serde(default)]
    pub manufacturers: Vec<ManufacturerEntry>,
    #[serde(default)]
    pub vehicle_groups: Vec<CatalogEntry>,
    #[serde(default)]
    pub regions: Vec<CatalogEntry>,
    #[serde(default)]
    pub departments: Vec<CatalogEntry>,
    #[serde(default)]
    pub units: Vec<CatalogEntry>,
    #[serde(default)]
    pub service_plans: Vec<CatalogEntry>,
}

impl ManufacturerEntry {
    /// Expande los modelos del fabricante a especificaciones completas
    pub fn model_specs(&self) -> Vec<VehicleModelSpec> {
        self.models
            .iter()
            .map(|m| VehicleModelSpec {
                manufacturer: self.name.clone(),
                model_name: m.name.clone(),
                base_efficiency_km_per_litre: m.fuel_efficiency,
                capacity_litres: m.capacity,
                idle_consumption_l_per_hour: m.idle_consumption,
                passenger_capacity: m.passengers,
            })
            .collect()
    }
}
