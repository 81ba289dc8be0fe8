//! # Student Records Client
//!
//! Consumer side of the student records API. The [`CredentialManager`] keeps
//! the application token in a [`CredentialStore`], inspects its expiry
//! locally and discards it once it lapses. [`StudentsApiClient`] obtains a new
//! token on demand and attaches it to every protected call.

pub mod api;
pub mod config;
pub mod credentials;
pub mod error;
pub mod storage;

pub use api::{StudentsApiClient, AUTHENTICATION_FAILED_MESSAGE};
pub use config::ClientConfig;
pub use credentials::{
    AuthenticationState, AuthenticationStateObserver, CredentialManager, CredentialState,
};
pub use error::ClientError;
pub use storage::{CredentialStore, FileCredentialStore, MemoryCredentialStore};
