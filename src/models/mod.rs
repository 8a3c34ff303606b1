//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos: master data de referencia,
//! tipos de combustible y el registro de tipo de vehículo en edición.

pub mod fuel_type;
pub mod master_data;
pub mod vehicle_type;

pub use fuel_type::*;
pub use master_data::*;
pub use vehicle_type::*;
