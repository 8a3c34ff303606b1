//! Clients - HTTP Clients for External APIs
//!
//! This module contains HTTP clients for communicating with external APIs.

pub mod master_data_client;

// Re-export main types for convenience
pub use master_data_client::MasterDataClient;
