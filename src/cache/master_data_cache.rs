//! Snapshot de master data
//!
//! Un `MasterDataCache` es el snapshot inmutable de datos de referencia que
//! cada sesión de formulario recibe una vez cargado. Solo expone lecturas;
//! la población y la política de refresco viven en el cliente HTTP.

use std::collections::HashMap;

use crate::models::fuel_type::FuelTypeSpec;
use crate::models::master_data::{CatalogEntry, MasterDataResponse, VehicleModelSpec};

/// Snapshot inmutable de catálogos de referencia, uno por sesión
#[derive(Debug, Clone, Default)]
pub struct MasterDataCache {
    // clave: (fabricante, modelo) tal como llegan del master data
    model_specs: HashMap<(String, String), VehicleModelSpec>,
    manufacturers: Vec<String>,
    models_by_manufacturer: HashMap<String, Vec<String>>,
    fuel_types: Vec<FuelTypeSpec>,
    vehicle_groups: Vec<CatalogEntry>,
    regions: Vec<CatalogEntry>,
    departments: Vec<CatalogEntry>,
    units: Vec<CatalogEntry>,
    service_plans: Vec<CatalogEntry>,
}

impl MasterDataCache {
    /// Construye el snapshot a partir de las dos respuestas de la API externa
    pub fn from_responses(master_data: MasterDataResponse, fuel_types: Vec<FuelTypeSpec>) -> Self {
        let mut model_specs = HashMap::new();
        let mut manufacturers = Vec::new();
        let mut models_by_manufacturer: HashMap<String, Vec<String>> = HashMap::new();

        for manufacturer in &master_data.manufacturers {
            manufacturers.push(manufacturer.name.clone());
            let models = models_by_manufacturer
                .entry(manufacturer.name.clone())
                .or_default();

            for spec in manufacturer.model_specs() {
                models.push(spec.model_name.clone());
                model_specs.insert((spec.manufacturer.clone(), spec.model_name.clone()), spec);
            }
        }

        log::info!(
            "✅ Master data cargado: {} fabricantes, {} modelos, {} combustibles",
            manufacturers.len(),
            model_specs.len(),
            fuel_types.len()
        );

        Self {
            model_specs,
            manufacturers,
            models_by_manufacturer,
            fuel_types,
            vehicle_groups: master_data.vehicle_groups,
            regions: master_data.regions,
            departments: master_data.departments,
            units: master_data.units,
            service_plans: master_data.service_plans,
        }
    }

    /// Lookup exacto por (fabricante, modelo)
    pub fn get_model_spec(&self, manufacturer: &str, model: &str) -> Option<&VehicleModelSpec> {
        self.model_specs
            .get(&(manufacturer.trim().to_string(), model.trim().to_string()))
    }

    /// Lookup exacto case-insensitive por nombre de combustible
    pub fn get_fuel_spec(&self, fuel_type: &str) -> Option<&FuelTypeSpec> {
        let query = fuel_type.trim().to_lowercase();
        self.fuel_types
            .iter()
            .find(|spec| spec.fuel_type.to_lowercase() == query)
    }

    pub fn list_manufacturers(&self) -> &[String] {
        &self.manufacturers
    }

    pub fn list_models_for(&self, manufacturer: &str) -> &[String] {
        self.models_by_manufacturer
            .get(manufacturer.trim())
            .map(|models| models.as_slice())
            .unwrap_or(&[])
    }

    pub fn list_fuel_types(&self) -> &[FuelTypeSpec] {
        &self.fuel_types
    }

    pub fn vehicle_groups(&self) -> &[CatalogEntry] {
        &self.vehicle_groups
    }

    pub fn regions(&self) -> &[CatalogEntry] {
        &self.regions
    }

    pub fn departments(&self) -> &[CatalogEntry] {
        &self.departments
    }

    pub fn units(&self) -> &[CatalogEntry] {
        &self.units
    }

    pub fn service_plans(&self) -> &[CatalogEntry] {
        &self.service_plans
    }
}

#[cfg(test)]
pub mod test_support {
    use super::*;
    use crate::models::master_data::{ManufacturerEntry, ModelEntry};

    /// Cache de prueba con el catálogo mínimo usado por los tests del crate
    pub fn sample_cache() -> MasterDataCache {
        let master_data = MasterDataResponse {
            manufacturers: vec![
                ManufacturerEntry {
                    name: "Toyota".to_string(),
                    models: vec![
                        ModelEntry {
                            name: "Hiace".to_string(),
                            fuel_efficiency: 9.0,
                            capacity: 280.0,
                            idle_consumption: 2.0,
                            passengers: 12,
                        },
                        ModelEntry {
                            name: "Corolla".to_string(),
                            fuel_efficiency: 15.0,
                            capacity: 50.0,
                            idle_consumption: 0.8,
                            passengers: 5,
                        },
                    ],
                },
                ManufacturerEntry {
                    name: "Nissan".to_string(),
                    models: vec![ModelEntry {
                        name: "Patrol".to_string(),
                        fuel_efficiency: 7.0,
                        capacity: 140.0,
                        idle_consumption: 1.5,
                        passengers: 7,
                    }],
                },
            ],
            vehicle_groups: vec![],
            regions: vec![],
            departments: vec![],
            units: vec![],
            service_plans: vec![],
        };

        let fuel_types = vec![
            FuelTypeSpec {
                fuel_type: "Diesel".to_string(),
                price_per_litre_aed: 2.90,
                co2_factor_kg_per_litre: 2.68,
                efficiency_modifier: None,
                idle_consumption: None,
                updated_at: None,
            },
            FuelTypeSpec {
                fuel_type: "Premium Unleaded".to_string(),
                price_per_litre_aed: 3.14,
                co2_factor_kg_per_litre: 2.31,
                efficiency_modifier: None,
                idle_consumption: None,
                updated_at: None,
            },
        ];

        MasterDataCache::from_responses(master_data, fuel_types)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::sample_cache;

    #[test]
    fn test_model_lookup_is_exact() {
        let cache = sample_cache();
        assert!(cache.get_model_spec("Toyota", "Hiace").is_some());
        assert!(cache.get_model_spec("Toyota", "hiace").is_none());
        assert!(cache.get_model_spec("Honda", "Hiace").is_none());
    }

    #[test]
    fn test_model_lookup_trims_whitespace() {
        let cache = sample_cache();
        assert!(cache.get_model_spec(" Toyota ", "Hiace ").is_some());
    }

    #[test]
    fn test_fuel_lookup_is_case_insensitive() {
        let cache = sample_cache();
        let upper = cache.get_fuel_spec("DIESEL").unwrap();
        let lower = cache.get_fuel_spec("diesel").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.price_per_litre_aed, 2.90);
    }

    #[test]
    fn test_list_models_for_unknown_manufacturer_is_empty() {
        let cache = sample_cache();
        assert_eq!(cache.list_models_for("Toyota").len(), 2);
        assert!(cache.list_models_for("Honda").is_empty());
    }
}
