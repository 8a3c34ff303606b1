//! Modelo de VehicleType
//!
//! Este módulo contiene el borrador de tipo de vehículo que el formulario
//! edita campo a campo y el payload final para POST /api/vehicle-types y
//! PATCH /api/vehicle-types/{id}.
//!
//! Los campos derivados (cost_per_km, vehicle_type_code) no tienen setter
//! directo: se recalculan en cascada cuando cambian sus entradas.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::cache::master_data_cache::MasterDataCache;
use crate::services::costing_service::compute_cost_per_km;
use crate::services::resolver_service::{resolve_fuel_fields, resolve_model_fields};
use crate::services::type_code_service::{generate_type_code, next_disambiguator};
use crate::utils::errors::CostingError;
use crate::utils::validation::normalize_name;

/// Borrador de tipo de vehículo, uno por sesión de formulario
#[derive(Debug, Clone, Default)]
pub struct VehicleTypeDraft {
    pub group_id: Option<String>,
    vehicle_type_code: Option<String>,
    pub vehicle_type_name: Option<String>,
    manufacturer: Option<String>,
    model: Option<String>,
    model_year: Option<i32>,
    fuel_type: Option<String>,
    fuel_efficiency: Option<f64>,
    fuel_price_per_litre: Option<f64>,
    cost_per_km: Option<f64>,
    idle_fuel_consumption: Option<f64>,
    number_of_passengers: Option<u32>,
    co2_emission_factor: Option<f64>,
    vehicle_capacity: Option<f64>,
    pub region: Option<String>,
    pub department: Option<String>,
    pub unit: Option<String>,
    pub service_plan: Option<String>,
    pub alert_before_km: Option<f64>,
}

impl VehicleTypeDraft {
    /// Borrador vacío para modo creación
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrador a partir de un registro existente (modo edición)
    pub fn from_payload(payload: &VehicleTypePayload) -> Self {
        Self {
            group_id: payload.group_id.clone(),
            vehicle_type_code: Some(payload.vehicle_type_code.clone()),
            vehicle_type_name: Some(payload.vehicle_type_name.clone()),
            manufacturer: Some(payload.manufacturer.clone()),
            model: Some(payload.model.clone()),
            model_year: Some(payload.model_year),
            fuel_type: Some(payload.fuel_type.clone()),
            fuel_efficiency: Some(payload.fuel_efficiency),
            fuel_price_per_litre: Some(payload.fuel_price_per_litre),
            cost_per_km: Some(payload.cost_per_km),
            idle_fuel_consumption: Some(payload.idle_fuel_consumption),
            number_of_passengers: Some(payload.number_of_passengers),
            co2_emission_factor: Some(payload.co2_emission_factor),
            vehicle_capacity: Some(payload.vehicle_capacity),
            region: payload.region.clone(),
            department: payload.department.clone(),
            unit: payload.unit.clone(),
            service_plan: payload.service_plan.clone(),
            alert_before_km: payload.alert_before_km,
        }
    }

    pub fn manufacturer(&self) -> Option<&str> {
        self.manufacturer.as_deref()
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn model_year(&self) -> Option<i32> {
        self.model_year
    }

    pub fn fuel_type(&self) -> Option<&str> {
        self.fuel_type.as_deref()
    }

    pub fn fuel_efficiency(&self) -> Option<f64> {
        self.fuel_efficiency
    }

    pub fn fuel_price_per_litre(&self) -> Option<f64> {
        self.fuel_price_per_litre
    }

    /// Campo derivado de solo lectura: precio por litro / eficiencia
    pub fn cost_per_km(&self) -> Option<f64> {
        self.cost_per_km
    }

    pub fn vehicle_type_code(&self) -> Option<&str> {
        self.vehicle_type_code.as_deref()
    }

    pub fn vehicle_capacity(&self) -> Option<f64> {
        self.vehicle_capacity
    }

    pub fn idle_fuel_consumption(&self) -> Option<f64> {
        self.idle_fuel_consumption
    }

    pub fn number_of_passengers(&self) -> Option<u32> {
        self.number_of_passengers
    }

    pub fn co2_emission_factor(&self) -> Option<f64> {
        self.co2_emission_factor
    }

    /// Seleccionar fabricante. Resetea el modelo (la lista de modelos
    /// depende del fabricante); los demás campos quedan como estaban.
    pub fn select_manufacturer(&mut self, manufacturer: &str) {
        self.manufacturer = normalize_name(manufacturer);
        self.model = None;
        self.refresh_type_code();
    }

    /// Seleccionar modelo y resolver los campos dependientes desde el cache.
    /// Devuelve `false` cuando la spec no existe; en ese caso los campos
    /// previos quedan intactos (miss no fatal).
    pub fn select_model(&mut self, cache: &MasterDataCache, model: &str) -> bool {
        self.model = normalize_name(model);
        self.refresh_type_code();
        self.apply_model_resolution(cache)
    }

    /// Cambiar el año de modelo: re-aplica la curva de degradación por edad
    /// y regenera el código de tipo.
    pub fn select_model_year(&mut self, cache: &MasterDataCache, model_year: i32) -> bool {
        self.model_year = Some(model_year);
        self.refresh_type_code();
        self.apply_model_resolution(cache)
    }

    /// Seleccionar tipo de combustible y resolver precio y factor CO2.
    /// Devuelve `false` si ningún tier de matching encontró nada.
    pub fn select_fuel_type(&mut self, cache: &MasterDataCache, fuel_type: &str) -> bool {
        self.fuel_type = normalize_name(fuel_type);

        let Some(query) = self.fuel_type.as_deref() else {
            return false;
        };

        match resolve_fuel_fields(cache, query) {
            Some(resolved) => {
                self.co2_emission_factor = Some(resolved.co2_factor);
                // el tier de fallback solo trae factor CO2; el precio previo se conserva
                if let Some(price) = resolved.price_per_litre {
                    self.fuel_price_per_litre = Some(price);
                }
                self.recompute_cost();
                true
            }
            None => {
                log::warn!("⚠️ Combustible '{}' sin match en fuel types ni defaults", query);
                false
            }
        }
    }

    /// Override manual de eficiencia (el campo es derivado pero editable)
    pub fn override_fuel_efficiency(&mut self, efficiency: f64) {
        self.fuel_efficiency = Some(efficiency);
        self.recompute_cost();
    }

    /// Override manual del precio por litro
    pub fn override_fuel_price(&mut self, price_per_litre: f64) {
        self.fuel_price_per_litre = Some(price_per_litre);
        self.recompute_cost();
    }

    /// Override del código de tipo, solo para flujos avanzados de edición
    pub fn override_type_code(&mut self, code: &str) {
        self.vehicle_type_code = normalize_name(code).map(|c| c.to_uppercase());
    }

    fn apply_model_resolution(&mut self, cache: &MasterDataCache) -> bool {
        let (Some(manufacturer), Some(model), Some(year)) =
            (self.manufacturer.as_deref(), self.model.as_deref(), self.model_year)
        else {
            // selección incompleta, nada que resolver todavía
            return true;
        };

        match resolve_model_fields(cache, manufacturer, model, year) {
            Some(resolved) => {
                self.fuel_efficiency = Some(resolved.fuel_efficiency);
                self.vehicle_capacity = Some(resolved.vehicle_capacity);
                self.idle_fuel_consumption = Some(resolved.idle_fuel_consumption);
                self.number_of_passengers = Some(resolved.number_of_passengers);
                self.recompute_cost();
                true
            }
            None => false,
        }
    }

    fn recompute_cost(&mut self) {
        self.cost_per_km = match (self.fuel_price_per_litre, self.fuel_efficiency) {
            (Some(price), Some(efficiency)) => Some(compute_cost_per_km(price, efficiency)),
            _ => None,
        };
    }

    fn refresh_type_code(&mut self) {
        self.vehicle_type_code = match (self.manufacturer.as_deref(), self.model.as_deref(), self.model_year) {
            (Some(manufacturer), Some(model), Some(year)) => {
                Some(generate_type_code(manufacturer, model, year, &next_disambiguator()))
            }
            _ => None,
        };
    }

    /// Convertir el borrador en el payload final para la API de persistencia.
    /// Todos los derivados numéricos van como números, nunca strings.
    pub fn into_payload(self, id: Option<String>) -> Result<VehicleTypePayload, CostingError> {
        let payload = VehicleTypePayload {
            id,
            group_id: self.group_id,
            vehicle_type_code: self
                .vehicle_type_code
                .ok_or(CostingError::MissingField("vehicle_type_code"))?,
            vehicle_type_name: self
                .vehicle_type_name
                .ok_or(CostingError::MissingField("vehicle_type_name"))?,
            manufacturer: self
                .manufacturer
                .ok_or(CostingError::MissingField("manufacturer"))?,
            model: self.model.ok_or(CostingError::MissingField("model"))?,
            model_year: self.model_year.ok_or(CostingError::MissingField("model_year"))?,
            fuel_type: self.fuel_type.ok_or(CostingError::MissingField("fuel_type"))?,
            fuel_efficiency: self
                .fuel_efficiency
                .ok_or(CostingError::MissingField("fuel_efficiency"))?,
            fuel_price_per_litre: self
                .fuel_price_per_litre
                .ok_or(CostingError::MissingField("fuel_price_per_litre"))?,
            cost_per_km: self.cost_per_km.ok_or(CostingError::MissingField("cost_per_km"))?,
            idle_fuel_consumption: self.idle_fuel_consumption.unwrap_or(0.0),
            number_of_passengers: self.number_of_passengers.unwrap_or(0),
            co2_emission_factor: self.co2_emission_factor.unwrap_or(0.0),
            vehicle_capacity: self.vehicle_capacity.unwrap_or(0.0),
            region: self.region,
            department: self.department,
            unit: self.unit,
            service_plan: self.service_plan,
            alert_before_km: self.alert_before_km,
        };

        payload.validate()?;
        Ok(payload)
    }
}

/// Payload de tipo de vehículo para POST/PATCH en la API externa
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VehicleTypePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    #[validate(length(min = 3, max = 30))]
    pub vehicle_type_code: String,

    #[validate(length(min = 2, max = 100), custom = "crate::utils::validation::validate_not_empty")]
    pub vehicle_type_name: String,

    #[validate(length(min = 2, max = 100))]
    pub manufacturer: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(range(min = 1900, max = 2035))]
    pub model_year: i32,

    #[validate(length(min = 2, max = 50))]
    pub fuel_type: String,

    #[validate(range(min = 0.0))]
    pub fuel_efficiency: f64,

    #[validate(range(min = 0.0))]
    pub fuel_price_per_litre: f64,

    #[validate(range(min = 0.0))]
    pub cost_per_km: f64,

    #[validate(range(min = 0.0))]
    pub idle_fuel_consumption: f64,

    pub number_of_passengers: u32,

    #[validate(range(min = 0.0))]
    pub co2_emission_factor: f64,

    #[validate(range(min = 0.0))]
    pub vehicle_capacity: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_plan: Option<String>,

    #[validate(range(min = 0.0))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_before_km: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::master_data_cache::test_support::sample_cache;
    use chrono::{Datelike, Utc};

    #[test]
    fn test_cost_recomputed_on_overrides() {
        let mut draft = VehicleTypeDraft::new();
        draft.override_fuel_price(3.0);
        assert_eq!(draft.cost_per_km(), None);

        draft.override_fuel_efficiency(10.0);
        assert_eq!(draft.cost_per_km(), Some(0.30));

        draft.override_fuel_efficiency(0.0);
        assert_eq!(draft.cost_per_km(), Some(0.0));
    }

    #[test]
    fn test_unknown_model_leaves_fields_untouched() {
        let cache = sample_cache();
        let mut draft = VehicleTypeDraft::new();
        draft.override_fuel_efficiency(7.5);
        draft.select_manufacturer("Toyota");
        draft.select_model_year(&cache, 2020);

        let found = draft.select_model(&cache, "Fantasma");
        assert!(!found);
        assert_eq!(draft.fuel_efficiency(), Some(7.5));
        assert_eq!(draft.vehicle_capacity(), None);
    }

    #[test]
    fn test_type_code_regenerates_on_year_change() {
        let cache = sample_cache();
        let mut draft = VehicleTypeDraft::new();
        draft.select_manufacturer("Toyota");
        draft.select_model_year(&cache, 2022);
        draft.select_model(&cache, "Hiace");

        let first = draft.vehicle_type_code().unwrap().to_string();
        assert!(first.starts_with("TOY-HIA-2022-"));

        draft.select_model_year(&cache, 2023);
        let second = draft.vehicle_type_code().unwrap().to_string();
        assert!(second.starts_with("TOY-HIA-2023-"));
        assert_ne!(first, second);
    }

    #[test]
    fn test_into_payload_requires_core_fields() {
        let draft = VehicleTypeDraft::new();
        let err = draft.into_payload(None).unwrap_err();
        assert!(matches!(err, CostingError::MissingField(_)));
    }

    #[test]
    fn test_into_payload_serializes_numbers_as_numbers() {
        let cache = sample_cache();
        let current_year = Utc::now().year();

        let mut draft = VehicleTypeDraft::new();
        draft.vehicle_type_name = Some("Staff Minibus".to_string());
        draft.select_manufacturer("Toyota");
        draft.select_model_year(&cache, current_year - 1);
        assert!(draft.select_model(&cache, "Hiace"));
        assert!(draft.select_fuel_type(&cache, "Diesel"));

        let payload = draft.into_payload(None).unwrap();
        let json = serde_json::to_value(&payload).unwrap();

        assert!(json["fuelEfficiency"].is_f64());
        assert!(json["costPerKm"].is_f64());
        assert!(json["modelYear"].is_i64());
        assert!(json.get("id").is_none());
    }
}
