//! Token service module for JWT management
//!
//! This module handles token issuance and validation:
//! - HS512-signed tokens carrying the application-identity claim
//! - Validation of signature, expiry, issuer and audience, in that order

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
