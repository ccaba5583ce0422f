/******************************************************************************
   Author: River Monitoring Authority
   Date: 16/10/26
******************************************************************************/

//! Authentication module for the river monitoring API
//!
//! This module owns the session token lifecycle:
//! - Login with username and password
//! - Access token refresh from the stored refresh token
//! - Logout, which also runs after an unrecoverable refresh failure

use crate::application::config::Config;
use crate::constants::{ACCESS_TOKEN_KEY, LOGIN_PATH, REFRESH_PATH, REFRESH_TOKEN_KEY, USER_AGENT};
use crate::error::AppError;
use crate::model::auth::{LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, TokenPair};
use crate::storage::TokenStore;
use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Authentication manager
///
/// Tokens are read from and written to the [`TokenStore`] on every call; `Auth`
/// itself keeps no copy of them.
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    store: Arc<dyn TokenStore>,
}

impl Auth {
    /// Creates a new Auth instance with its own HTTP connection pool
    pub fn new(config: Arc<Config>, store: Arc<dyn TokenStore>) -> Result<Self, AppError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(config, store, client))
    }

    /// Creates a new Auth instance sharing an existing HTTP client
    pub fn with_client(config: Arc<Config>, store: Arc<dyn TokenStore>, client: Client) -> Self {
        Self {
            config,
            client,
            store,
        }
    }

    /// Token store backing this session
    pub fn store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }

    /// Current access token, if any
    pub async fn access_token(&self) -> Option<String> {
        self.store.get(ACCESS_TOKEN_KEY).await
    }

    /// Current token pair, if both tokens are stored
    pub async fn tokens(&self) -> Option<TokenPair> {
        let access_token = self.store.get(ACCESS_TOKEN_KEY).await?;
        let refresh_token = self.store.get(REFRESH_TOKEN_KEY).await?;
        Some(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// Whether an access token is currently held
    pub async fn is_authenticated(&self) -> bool {
        self.access_token().await.is_some()
    }

    /// Logs in and stores the returned token pair
    ///
    /// # Returns
    /// * `Ok(TokenPair)` - The stored tokens
    /// * `Err(AppError::Auth)` - If the server rejects the credentials
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenPair, AppError> {
        let url = self.config.url_for(LOGIN_PATH);
        debug!("Sending login request to: {}", url);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&LoginRequest { username, password })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Login failed with status {}: {}", status, body);
            return Err(AppError::Auth(format!("login failed with status {}", status.as_u16())));
        }

        let tokens: TokenPair = response.json::<LoginResponse>().await?.into();
        self.save(&[
            (ACCESS_TOKEN_KEY, tokens.access_token.as_str()),
            (REFRESH_TOKEN_KEY, tokens.refresh_token.as_str()),
        ])
        .await?;

        info!("✓ Login successful for user: {}", username);
        Ok(tokens)
    }

    /// Logs in with the credentials from the configuration
    pub async fn login_with_config(&self) -> Result<TokenPair, AppError> {
        let credentials = &self.config.credentials;
        self.login(&credentials.username, &credentials.password).await
    }

    /// Exchanges the stored refresh token for a new access token
    ///
    /// A missing refresh token or a rejected refresh clears every stored token,
    /// forcing a new login. Network failures leave the tokens untouched.
    ///
    /// # Returns
    /// * `Ok(String)` - The new access token
    /// * `Err(AppError::Auth)` - If no refresh token is stored or the refresh was rejected
    pub async fn refresh_token(&self) -> Result<String, AppError> {
        let Some(refresh) = self.store.get(REFRESH_TOKEN_KEY).await else {
            warn!("No refresh token available, clearing session");
            self.clear().await?;
            return Err(AppError::Auth("no refresh token available".to_string()));
        };

        info!("Refreshing access token");
        let url = self.config.url_for(REFRESH_PATH);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&RefreshRequest { refresh: &refresh })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Token refresh failed with status {}: {}", status, body);
            self.clear().await?;
            return Err(AppError::Auth(format!(
                "token refresh failed with status {}",
                status.as_u16()
            )));
        }

        let refreshed: RefreshResponse = response.json().await?;
        match &refreshed.refresh {
            Some(rotated) => {
                debug!("Server rotated the refresh token");
                self.save(&[
                    (ACCESS_TOKEN_KEY, refreshed.access.as_str()),
                    (REFRESH_TOKEN_KEY, rotated.as_str()),
                ])
                .await?;
            }
            None => self.save(&[(ACCESS_TOKEN_KEY, refreshed.access.as_str())]).await?,
        }

        info!("✓ Token refreshed successfully");
        Ok(refreshed.access)
    }

    /// Clears both tokens. Calling it without a session is fine
    pub async fn logout(&self) -> Result<(), AppError> {
        info!("Logging out");
        self.clear().await?;
        info!("✓ Logged out successfully");
        Ok(())
    }

    /// Stores `entries` together. When the store fails the session is dropped
    /// so an access token is never kept without its matching refresh token
    async fn save(&self, entries: &[(&str, &str)]) -> Result<(), AppError> {
        if let Err(e) = self.store.set_all(entries).await {
            error!("Failed to store session tokens: {}", e);
            if let Err(clear_err) = self.clear().await {
                warn!("Failed to clear session tokens: {}", clear_err);
            }
            return Err(e);
        }
        Ok(())
    }

    async fn clear(&self) -> Result<(), AppError> {
        self.store.remove(ACCESS_TOKEN_KEY).await?;
        self.store.remove(REFRESH_TOKEN_KEY).await
    }
}
