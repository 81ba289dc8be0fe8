//! Client-held credential lifecycle.
//!
//! The token moves through three states: absent, valid and expired. Expiry is
//! read from the token itself, locally, with no clock skew allowance. An
//! expired or unreadable token is discarded the first time it is read, and
//! every storage write or discard is announced to the registered observers
//! before the call returns.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use sr_core::Claims;
use sr_shared::TOKEN_STORAGE_KEY;
use tokio::sync::{Mutex, RwLock};

use crate::error::ClientError;
use crate::storage::CredentialStore;

/// Where the stored credential stands right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialState {
    NoCredential,
    HasValidCredential,
    /// Present but past its expiry, or not readable as a token
    HasExpiredCredential,
}

/// Locally decoded view of who the client is authenticated as
#[derive(Debug, Clone, PartialEq)]
pub enum AuthenticationState {
    Anonymous,
    Authenticated { claims: Claims },
}

impl AuthenticationState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthenticationState::Authenticated { .. })
    }

    fn for_token(token: &str) -> Self {
        match Claims::decode_unverified(token) {
            Ok(claims) => AuthenticationState::Authenticated { claims },
            Err(_) => AuthenticationState::Anonymous,
        }
    }
}

/// Notified synchronously after every credential change
pub trait AuthenticationStateObserver: Send + Sync {
    fn on_state_changed(&self, state: &AuthenticationState);
}

impl<F> AuthenticationStateObserver for F
where
    F: Fn(&AuthenticationState) + Send + Sync,
{
    fn on_state_changed(&self, state: &AuthenticationState) {
        self(state)
    }
}

pub struct CredentialManager {
    store: Arc<dyn CredentialStore>,
    cached: Mutex<Option<String>>,
    observers: RwLock<Vec<Arc<dyn AuthenticationStateObserver>>>,
}

impl CredentialManager {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self {
            store,
            cached: Mutex::new(None),
            observers: RwLock::new(Vec::new()),
        }
    }

    pub async fn subscribe(&self, observer: Arc<dyn AuthenticationStateObserver>) {
        self.observers.write().await.push(observer);
    }

    /// The current token, if one is held and has not expired
    pub async fn get_token(&self) -> Result<Option<String>, ClientError> {
        self.get_token_at(Utc::now()).await
    }

    /// [`get_token`](Self::get_token) evaluated as of `now`
    pub async fn get_token_at(&self, now: DateTime<Utc>) -> Result<Option<String>, ClientError> {
        {
            let mut cached = self.cached.lock().await;

            let token = match cached.clone() {
                Some(token) => Some(token),
                None => self.store.get(TOKEN_STORAGE_KEY).await?,
            };

            let Some(token) = token else {
                return Ok(None);
            };

            if is_usable(&token, now) {
                *cached = Some(token.clone());
                return Ok(Some(token));
            }

            self.store.remove(TOKEN_STORAGE_KEY).await?;
            *cached = None;
        }

        tracing::info!("Discarded expired credential");
        self.notify(&AuthenticationState::Anonymous).await;
        Ok(None)
    }

    /// Persists a freshly obtained token
    pub async fn set_token(&self, token: &str) -> Result<(), ClientError> {
        {
            let mut cached = self.cached.lock().await;
            self.store.set(TOKEN_STORAGE_KEY, token).await?;
            *cached = Some(token.to_string());
        }

        tracing::debug!("Stored credential");
        self.notify(&AuthenticationState::for_token(token)).await;
        Ok(())
    }

    pub async fn remove_token(&self) -> Result<(), ClientError> {
        {
            let mut cached = self.cached.lock().await;
            self.store.remove(TOKEN_STORAGE_KEY).await?;
            *cached = None;
        }

        tracing::debug!("Removed credential");
        self.notify(&AuthenticationState::Anonymous).await;
        Ok(())
    }

    /// Inspects the held credential without discarding it
    pub async fn state(&self) -> Result<CredentialState, ClientError> {
        self.state_at(Utc::now()).await
    }

    pub async fn state_at(&self, now: DateTime<Utc>) -> Result<CredentialState, ClientError> {
        let cached = self.cached.lock().await.clone();
        let token = match cached {
            Some(token) => Some(token),
            None => self.store.get(TOKEN_STORAGE_KEY).await?,
        };

        Ok(match token {
            None => CredentialState::NoCredential,
            Some(token) if is_usable(&token, now) => CredentialState::HasValidCredential,
            Some(_) => CredentialState::HasExpiredCredential,
        })
    }

    /// Claims of the current valid token, or anonymous
    pub async fn authentication_state(&self) -> Result<AuthenticationState, ClientError> {
        Ok(match self.get_token().await? {
            Some(token) => AuthenticationState::for_token(&token),
            None => AuthenticationState::Anonymous,
        })
    }

    async fn notify(&self, state: &AuthenticationState) {
        for observer in self.observers.read().await.iter() {
            observer.on_state_changed(state);
        }
    }
}

impl fmt::Debug for CredentialManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialManager")
            .field("token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

fn is_usable(token: &str, now: DateTime<Utc>) -> bool {
    match Claims::decode_unverified(token) {
        Ok(claims) => !claims.is_expired_at(now),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryCredentialStore;
    use chrono::Duration;
    use sr_core::{TokenService, TokenServiceConfig};
    use sr_shared::FRONT_END_APPLICATION_ID;
    use std::sync::Mutex as StdMutex;

    fn tokens() -> TokenService {
        TokenService::new(TokenServiceConfig::new("issuer", "audience", "client-test-key").unwrap())
    }

    fn manager() -> (CredentialManager, MemoryCredentialStore) {
        let store = MemoryCredentialStore::new();
        (CredentialManager::new(Arc::new(store.clone())), store)
    }

    #[tokio::test]
    async fn test_no_credential() {
        let (manager, _) = manager();

        assert_eq!(manager.get_token().await.unwrap(), None);
        assert_eq!(manager.state().await.unwrap(), CredentialState::NoCredential);
        assert_eq!(
            manager.authentication_state().await.unwrap(),
            AuthenticationState::Anonymous
        );
    }

    #[tokio::test]
    async fn test_valid_credential_is_returned() {
        let (manager, store) = manager();
        let token = tokens().issue().unwrap();

        manager.set_token(&token).await.unwrap();

        assert_eq!(manager.get_token().await.unwrap(), Some(token.clone()));
        assert_eq!(store.get(TOKEN_STORAGE_KEY).await.unwrap(), Some(token));
        assert_eq!(manager.state().await.unwrap(), CredentialState::HasValidCredential);
    }

    #[tokio::test]
    async fn test_token_is_read_from_storage() {
        let (manager, store) = manager();
        let token = tokens().issue().unwrap();
        store.set(TOKEN_STORAGE_KEY, &token).await.unwrap();

        assert_eq!(manager.get_token().await.unwrap(), Some(token));
    }

    #[tokio::test]
    async fn test_expired_credential_is_discarded() {
        let (manager, store) = manager();
        let issued = Utc::now();
        let token = tokens().issue_at(issued).unwrap();
        manager.set_token(&token).await.unwrap();

        let after_expiry = issued + Duration::days(3);
        assert_eq!(
            manager.state_at(after_expiry).await.unwrap(),
            CredentialState::HasExpiredCredential
        );

        assert_eq!(manager.get_token_at(after_expiry).await.unwrap(), None);
        assert!(store.is_empty().await);
        assert_eq!(manager.state().await.unwrap(), CredentialState::NoCredential);
    }

    #[tokio::test]
    async fn test_credential_valid_one_second_before_expiry() {
        let (manager, _) = manager();
        let issued = Utc::now();
        let token = tokens().issue_at(issued).unwrap();
        manager.set_token(&token).await.unwrap();

        let just_before = issued + Duration::days(3) - Duration::seconds(1);
        assert_eq!(manager.get_token_at(just_before).await.unwrap(), Some(token));
    }

    #[tokio::test]
    async fn test_unreadable_credential_is_discarded() {
        let (manager, store) = manager();
        store.set(TOKEN_STORAGE_KEY, "garbage").await.unwrap();

        assert_eq!(
            manager.state().await.unwrap(),
            CredentialState::HasExpiredCredential
        );
        assert_eq!(manager.get_token().await.unwrap(), None);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_authentication_state_carries_embedded_claims() {
        let (manager, _) = manager();
        let token = tokens().issue().unwrap();
        manager.set_token(&token).await.unwrap();

        match manager.authentication_state().await.unwrap() {
            AuthenticationState::Authenticated { claims } => {
                assert_eq!(claims.application_id(), Some(FRONT_END_APPLICATION_ID));
                assert_eq!(claims, Claims::decode_unverified(&token).unwrap());
            }
            other => panic!("unexpected state: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_observers_see_every_transition() {
        let (manager, _) = manager();
        let seen: Arc<StdMutex<Vec<bool>>> = Arc::new(StdMutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        manager
            .subscribe(Arc::new(move |state: &AuthenticationState| {
                sink.lock().unwrap().push(state.is_authenticated());
            }))
            .await;

        let issued = Utc::now();
        let token = tokens().issue_at(issued).unwrap();

        manager.set_token(&token).await.unwrap();
        assert_eq!(*seen.lock().unwrap(), vec![true]);

        manager.remove_token().await.unwrap();
        assert_eq!(*seen.lock().unwrap(), vec![true, false]);

        manager.set_token(&token).await.unwrap();
        manager
            .get_token_at(issued + Duration::days(4))
            .await
            .unwrap();
        assert_eq!(*seen.lock().unwrap(), vec![true, false, true, false]);
    }
}
