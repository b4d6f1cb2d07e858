//! Account and session types
//!
//! The signed-in session mirrors the login/register response body; its
//! `token` is the bearer credential attached to authorized requests.

use serde::{Deserialize, Serialize};

/// Registration payload for a new account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Profile as returned by `GET /users/profile`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Partial profile update; unset fields are left untouched server-side
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Signed-in session, as returned by login and register
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    #[serde(rename = "_id")]
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub token: String,
}
