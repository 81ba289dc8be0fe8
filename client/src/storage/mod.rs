//! Client-local persistent key-value storage for the credential

mod file;
mod memory;

use async_trait::async_trait;

use crate::error::ClientError;

pub use file::FileCredentialStore;
pub use memory::MemoryCredentialStore;

#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, ClientError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), ClientError>;

    /// Removing an absent key is not an error
    async fn remove(&self, key: &str) -> Result<(), ClientError>;
}
