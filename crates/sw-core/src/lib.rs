//! Saltworks core — shared types, configuration tables and copy lint for the
//! salinity calculator.

pub mod config;
pub mod error;
pub mod lint;
pub mod types;

pub use config::{SaltConfig, SALT_CONFIG};
pub use error::{Result, SaltError};
pub use types::*;
