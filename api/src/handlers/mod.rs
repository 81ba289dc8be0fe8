pub mod error;
pub mod gate;

pub use error::{
    ApiFailure, AUTHORIZATION_FAILED_MESSAGE, INVALID_BODY_MESSAGE, INVALID_PATH_MESSAGE,
    UNEXPECTED_ERROR_MESSAGE,
};
pub use gate::AuthorizationGate;
