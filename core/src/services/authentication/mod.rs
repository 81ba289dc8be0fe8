//! Login use case: exchanges the application identifier for a token

mod service;

pub use service::AuthenticationService;
