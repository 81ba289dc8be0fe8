//! Shared utilities and common types for the student records services
//!
//! This crate provides common functionality used by both the API server and
//! its client:
//! - Configuration types and layered loading
//! - The standard response envelope
//! - Request/response DTOs
//! - Secret-name translation for externally sourced key material

pub mod config;
pub mod constants;
pub mod dto;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, ConfigurationError, CorsConfig, DatabaseConfig, Environment, JwtSettings,
    SecretsConfig, ServerConfig,
};
pub use constants::{
    APPLICATION_ID_CLAIM, FRONT_END_APPLICATION_ID, FRONT_END_APPLICATION_POLICY, TOKEN_STORAGE_KEY,
};
pub use types::{ApiError, ApiErrorType, ApiResponse};
pub use utils::secret_names::secret_name_to_config_key;
