//! Common utility functions

pub mod secret_names;

pub use secret_names::{config_key_to_secret_name, secret_name_to_config_key};
