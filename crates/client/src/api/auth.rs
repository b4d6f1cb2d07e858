//! Bearer-token access for API requests
//!
//! The facade never reads ambient storage; it asks an injected
//! [`AccessTokenProvider`] at call time. An absent token is a valid
//! state and produces an anonymous request.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use shopfront_domain::AuthSession;

use super::errors::ApiError;

/// Trait for providing the current access token
///
/// This trait allows dependency injection and testing with mock
/// providers. `Ok(None)` means "no user signed in"; an `Err` aborts
/// the request before any network I/O.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Get the current access token, if any
    async fn access_token(&self) -> Result<Option<String>, ApiError>;
}

/// Provider for anonymous access; never yields a token
pub struct AnonymousProvider;

#[async_trait]
impl AccessTokenProvider for AnonymousProvider {
    async fn access_token(&self) -> Result<Option<String>, ApiError> {
        Ok(None)
    }
}

/// Provider with a fixed token, mainly for tests and scripts
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }
}

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Result<Option<String>, ApiError> {
        Ok(Some(self.token.clone()))
    }
}

/// In-memory session slot holding the signed-in user
///
/// The application writes it on login/register and clears it on
/// logout; the facade only ever reads the token. Last write wins.
#[derive(Default)]
pub struct SessionStore {
    slot: RwLock<Option<AuthSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current session after a successful login/register
    pub fn store(&self, session: AuthSession) {
        *self.write_slot() = Some(session);
    }

    /// Drop the current session (logout)
    pub fn clear(&self) {
        *self.write_slot() = None;
    }

    /// Snapshot of the signed-in session, if any
    pub fn current(&self) -> Option<AuthSession> {
        self.read_slot().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read_slot().is_some()
    }

    fn read_slot(&self) -> RwLockReadGuard<'_, Option<AuthSession>> {
        self.slot.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_slot(&self) -> RwLockWriteGuard<'_, Option<AuthSession>> {
        self.slot.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl AccessTokenProvider for SessionStore {
    async fn access_token(&self) -> Result<Option<String>, ApiError> {
        Ok(self.read_slot().as_ref().map(|session| session.token.clone()))
    }
}
