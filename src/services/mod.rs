//! Services module
//!
//! Este módulo contiene la lógica de negocio del core de costeo:
//! resolución de campos dependientes, cálculo de costo por km,
//! generación de códigos de tipo y el job de precios de combustible.

pub mod costing_service;
pub mod fuel_price_service;
pub mod resolver_service;
pub mod type_code_service;

pub use costing_service::*;
pub use fuel_price_service::*;
pub use resolver_service::*;
pub use type_code_service::*;
