//! Account operations
//!
//! Registration, login, and profile access. Profile endpoints are only
//! meaningful with a token; enforcement happens server-side and this
//! layer does not gate access locally.

use std::sync::Arc;

use shopfront_domain::{AuthSession, Credentials, ProfileUpdate, RegisterUser, UserProfile};
use tracing::instrument;

use super::client::ApiClient;
use super::errors::ApiError;

/// Users API group
pub struct UsersApi {
    client: Arc<ApiClient>,
}

impl UsersApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Register a new account and return the signed-in session
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails
    #[instrument(skip(self, user), fields(email = %user.email))]
    pub async fn register(&self, user: &RegisterUser) -> Result<AuthSession, ApiError> {
        self.client.post("/users/register", user).await
    }

    /// Log in and return the signed-in session
    ///
    /// # Errors
    ///
    /// Returns error if the credentials are rejected or the request fails
    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthSession, ApiError> {
        self.client.post("/users/login", credentials).await
    }

    /// Fetch the signed-in user's profile
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails
    #[instrument(skip(self))]
    pub async fn get_profile(&self) -> Result<UserProfile, ApiError> {
        self.client.get("/users/profile").await
    }

    /// Update the signed-in user's profile
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails
    #[instrument(skip(self, update))]
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
        self.client.put("/users/profile", update).await
    }
}
