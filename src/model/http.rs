/******************************************************************************
   Author: River Monitoring Authority
   Date: 16/10/26
******************************************************************************/

use crate::application::auth::Auth;
use crate::application::config::Config;
use crate::constants::{MAX_UNAUTHORIZED_RETRIES, USER_AGENT};
use crate::error::AppError;
use crate::model::auth::{TokenPair, bearer};
use crate::storage::{FileTokenStore, MemoryTokenStore, TokenStore};
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Authenticated client for the river monitoring REST API
///
/// Every request carries `Content-Type: application/json` and, while a session
/// is held, `Authorization: Bearer <access token>`. A 401 response triggers one
/// token refresh followed by one retry; a second 401 is returned to the caller.
pub struct HttpClient {
    auth: Arc<Auth>,
    http_client: Client,
    config: Arc<Config>,
}

impl HttpClient {
    /// Creates a client using the token storage selected by the configuration
    ///
    /// Tokens persisted in `storage.token_file` from an earlier run are picked up,
    /// so no login is needed while they remain valid.
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let store: Arc<dyn TokenStore> = match &config.storage.token_file {
            Some(path) => Arc::new(FileTokenStore::open(path).await?),
            None => Arc::new(MemoryTokenStore::new()),
        };
        Self::with_store(config, store)
    }

    /// Creates a client on top of an explicit token store
    pub fn with_store(config: Config, store: Arc<dyn TokenStore>) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let http_client = Client::builder().user_agent(USER_AGENT).build()?;
        let auth = Arc::new(Auth::with_client(
            config.clone(),
            store,
            http_client.clone(),
        ));

        Ok(Self {
            auth,
            http_client,
            config,
        })
    }

    /// Gets a reference to the underlying Auth instance
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Gets the client configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Logs in and stores the session tokens
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenPair, AppError> {
        self.auth.login(username, password).await
    }

    /// Clears the session tokens
    pub async fn logout(&self) -> Result<(), AppError> {
        self.auth.logout().await
    }

    /// Makes a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::GET, path, None::<&()>).await
    }

    /// Makes a POST request with a JSON body
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Makes a POST request without a body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::POST, path, None::<&()>).await
    }

    /// Makes a PUT request with a JSON body
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// Makes a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::DELETE, path, None::<&()>).await
    }

    /// Makes a request and deserializes the JSON response
    ///
    /// An empty response body is decoded as JSON `null`, which suits `()` and `Option<T>`.
    pub async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, AppError> {
        let response = self.send(method, path, body).await?;
        parse_response(response).await
    }

    /// Makes a GET request and returns the raw response body
    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, AppError> {
        let response = self.send(Method::GET, path, None::<&()>).await?;
        let bytes = response.bytes().await?;
        debug!("Received {} bytes", bytes.len());
        Ok(bytes.to_vec())
    }

    /// Sends a request, recovering from at most one 401 with a token refresh
    ///
    /// # Returns
    /// * `Ok(Response)` - A response with a 2xx status
    /// * `Err(AppError::Http)` - Any other status, including a 401 after the retry
    /// * `Err(AppError::Auth)` - The refresh triggered by the first 401 failed
    pub async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, AppError> {
        let url = self.config.url_for(path);
        let mut retries = 0;

        loop {
            let response = self.send_once(method.clone(), &url, body).await?;
            let status = response.status();
            debug!("Response status: {}", status);

            if status == StatusCode::UNAUTHORIZED && retries < MAX_UNAUTHORIZED_RETRIES {
                retries += 1;
                warn!("Access token rejected for {} {}, refreshing and retrying", method, url);
                self.auth.refresh_token().await?;
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                error!("Request failed with status {}: {}", status, body);
                return Err(AppError::Http(status));
            }

            return Ok(response);
        }
    }

    async fn send_once<B: Serialize>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<Response, AppError> {
        debug!("{} {}", method, url);

        let mut request = self
            .http_client
            .request(method, url)
            .header("Content-Type", "application/json");

        if let Some(token) = self.auth.access_token().await {
            request = request.header("Authorization", bearer(&token));
        }

        if let Some(b) = body {
            request = request.json(b);
        }

        Ok(request.send().await?)
    }
}

async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let text = response.text().await?;
    let body = if text.trim().is_empty() { "null" } else { text.as_str() };
    serde_json::from_str(body).map_err(|e| AppError::Deserialization(e.to_string()))
}
