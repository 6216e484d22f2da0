//! Service Configuration Module
//!
//! TOML configuration for the HTTP service and model loading.
//!
//! ## Loading Order
//!
//! 1. `BHUJAL_CONFIG` environment variable (path to TOML file)
//! 2. `bhujal.toml` in the current working directory
//! 3. Built-in defaults
//!
//! CLI flags override the loaded values. The resulting `ServiceConfig` is
//! built once in `main` and passed to whatever needs it.
//!
//! ```toml
//! [server]
//! addr = "0.0.0.0:5002"
//! cors_origins = ["http://localhost:3000"]
//!
//! [model]
//! path = "groundwater_model.json"
//! expected_features = 12
//!
//! [logging]
//! json = false
//! ```

pub mod defaults;
mod service_config;
pub mod validation;

pub use service_config::*;
