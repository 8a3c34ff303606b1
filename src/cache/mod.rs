//! Cache
//!
//! Este módulo contiene el snapshot de master data por sesión de formulario
//! y su máquina de estados de carga.

pub mod master_data_cache;
pub mod session;

pub use master_data_cache::MasterDataCache;
pub use session::{MasterDataSession, SessionState};
