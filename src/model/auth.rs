/******************************************************************************
   Author: River Monitoring Authority
   Date: 16/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Access and refresh token held by an authenticated session
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenPair {
    /// Short-lived bearer credential
    pub access_token: String,
    /// Credential used to obtain a new access token
    pub refresh_token: String,
}

impl TokenPair {
    /// Creates a token pair
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }

    /// Value of the `Authorization` header for this session
    #[must_use]
    pub fn bearer(&self) -> String {
        bearer(&self.access_token)
    }
}

/// Formats `token` as a bearer `Authorization` header value
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Body of `POST auth/login/`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    /// Dashboard user name
    pub username: &'a str,
    /// Dashboard password
    pub password: &'a str,
}

/// Response of `POST auth/login/`
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Access token
    pub access: String,
    /// Refresh token
    pub refresh: String,
}

impl From<LoginResponse> for TokenPair {
    fn from(value: LoginResponse) -> Self {
        TokenPair::new(value.access, value.refresh)
    }
}

/// Body of `POST auth/refresh/`
#[derive(Debug, Clone, Serialize)]
pub struct RefreshRequest<'a> {
    /// Stored refresh token
    pub refresh: &'a str,
}

/// Response of `POST auth/refresh/`
///
/// `refresh` is only present when the server rotates refresh tokens.
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshResponse {
    /// New access token
    pub access: String,
    /// Rotated refresh token
    #[serde(default)]
    pub refresh: Option<String>,
}
