//! Fleet Costing Core
//!
//! Motor de derivación de costos operativos para tipos de vehículo:
//! resolución en cascada fabricante → modelo → tipo de combustible,
//! cálculo de costo por kilómetro y generación de códigos de tipo.
//! El snapshot de master data se carga una vez por sesión de formulario
//! desde la API externa; este crate no posee persistencia propia.

pub mod cache;
pub mod clients;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;
