use crate::common::{create_logged_in_client, create_test_client};
use mockito::{Matcher, Server};
use river_monitor_client::prelude::*;
use serde_json::json;

#[tokio::test]
async fn test_login_stores_tokens_and_authorizes_next_request() {
    let mut server = Server::new_async().await;
    let login = server
        .mock("POST", "/auth/login/")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"username": "user", "password": "pass"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access": "A1", "refresh": "R1"}"#)
        .expect(1)
        .create_async()
        .await;
    let me = server
        .mock("GET", "/users/users/me/")
        .match_header("authorization", "Bearer A1")
        .with_status(200)
        .with_body(r#"{"id": 7, "username": "user", "role": "operator"}"#)
        .expect(1)
        .create_async()
        .await;

    let (client, store) = create_test_client(&server);
    let tokens = client.login("user", "pass").await.unwrap();

    assert_eq!(tokens, TokenPair::new("A1", "R1"));
    assert_eq!(store.get(ACCESS_TOKEN_KEY).await.as_deref(), Some("A1"));
    assert_eq!(store.get(REFRESH_TOKEN_KEY).await.as_deref(), Some("R1"));

    let user = client.get_current_user().await.unwrap();
    assert_eq!(user.username, "user");

    login.assert_async().await;
    me.assert_async().await;
}

#[tokio::test]
async fn test_login_rejected_is_auth_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/auth/login/")
        .with_status(401)
        .with_body(r#"{"detail": "No active account found with the given credentials"}"#)
        .create_async()
        .await;

    let (client, store) = create_test_client(&server);
    let err = client.login("user", "wrong").await.unwrap_err();

    assert!(matches!(err, AppError::Auth(_)), "unexpected error: {err:?}");
    assert!(store.get(ACCESS_TOKEN_KEY).await.is_none());
    assert!(!client.is_authenticated().await);
}

#[tokio::test]
async fn test_login_with_config_uses_configured_credentials() {
    let mut server = Server::new_async().await;
    let login = server
        .mock("POST", "/auth/login/")
        .match_body(Matcher::Json(json!({"username": "operador", "password": "clave"})))
        .with_status(200)
        .with_body(r#"{"access": "A1", "refresh": "R1"}"#)
        .expect(1)
        .create_async()
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let config = Config::with_base_url(server.url()).with_credentials("operador", "clave");
    let client = Client::with_store(config, store).unwrap();

    client.login_with_config().await.unwrap();
    assert!(client.is_authenticated().await);
    login.assert_async().await;
}

#[tokio::test]
async fn test_refresh_replaces_access_token_and_keeps_refresh_token() {
    let mut server = Server::new_async().await;
    let refresh = server
        .mock("POST", "/auth/refresh/")
        .match_body(Matcher::Json(json!({"refresh": "R1"})))
        .with_status(200)
        .with_body(r#"{"access": "A2"}"#)
        .expect(1)
        .create_async()
        .await;

    let (client, store) = create_logged_in_client(&server, "A1", "R1").await;
    let access = client.http().auth().refresh_token().await.unwrap();

    assert_eq!(access, "A2");
    assert_eq!(
        client.http().auth().tokens().await,
        Some(TokenPair::new("A2", "R1"))
    );
    assert_eq!(store.get(REFRESH_TOKEN_KEY).await.as_deref(), Some("R1"));
    refresh.assert_async().await;
}

#[tokio::test]
async fn test_refresh_stores_rotated_refresh_token() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/auth/refresh/")
        .with_status(200)
        .with_body(r#"{"access": "A2", "refresh": "R2"}"#)
        .create_async()
        .await;

    let (client, _store) = create_logged_in_client(&server, "A1", "R1").await;
    client.http().auth().refresh_token().await.unwrap();

    assert_eq!(
        client.http().auth().tokens().await,
        Some(TokenPair::new("A2", "R2"))
    );
}

#[tokio::test]
async fn test_failed_refresh_clears_both_tokens() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/auth/refresh/")
        .with_status(401)
        .with_body(r#"{"detail": "Token is invalid or expired"}"#)
        .create_async()
        .await;

    let (client, store) = create_logged_in_client(&server, "A1", "R1").await;
    let err = client.http().auth().refresh_token().await.unwrap_err();

    assert!(matches!(err, AppError::Auth(_)));
    assert!(store.get(ACCESS_TOKEN_KEY).await.is_none());
    assert!(store.get(REFRESH_TOKEN_KEY).await.is_none());
}

#[tokio::test]
async fn test_refresh_without_refresh_token_is_auth_error() {
    let mut server = Server::new_async().await;
    let refresh = server
        .mock("POST", "/auth/refresh/")
        .expect(0)
        .create_async()
        .await;

    let (client, store) = create_test_client(&server);
    store.set(ACCESS_TOKEN_KEY, "A1").await.unwrap();

    let err = client.http().auth().refresh_token().await.unwrap_err();

    assert!(matches!(err, AppError::Auth(_)));
    assert!(store.get(ACCESS_TOKEN_KEY).await.is_none());
    refresh.assert_async().await;
}

#[tokio::test]
async fn test_refresh_network_failure_keeps_tokens() {
    setup_logger();
    let store = Arc::new(MemoryTokenStore::new());
    store.set(ACCESS_TOKEN_KEY, "A1").await.unwrap();
    store.set(REFRESH_TOKEN_KEY, "R1").await.unwrap();

    // Nothing listens on port 1
    let client = Client::with_store(Config::with_base_url("http://127.0.0.1:1"), store.clone()).unwrap();
    let err = client.http().auth().refresh_token().await.unwrap_err();

    assert!(matches!(err, AppError::Network(_)), "unexpected error: {err:?}");
    assert_eq!(store.get(REFRESH_TOKEN_KEY).await.as_deref(), Some("R1"));
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let server = Server::new_async().await;
    let (client, store) = create_logged_in_client(&server, "A1", "R1").await;

    client.logout().await.unwrap();
    client.logout().await.unwrap();

    assert!(store.get(ACCESS_TOKEN_KEY).await.is_none());
    assert!(store.get(REFRESH_TOKEN_KEY).await.is_none());
    assert!(!client.is_authenticated().await);
}

/// Store that refuses to save the refresh token
struct RefreshWriteFails {
    inner: MemoryTokenStore,
}

#[async_trait]
impl TokenStore for RefreshWriteFails {
    async fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        if key == REFRESH_TOKEN_KEY {
            return Err(AppError::Io(std::io::Error::other("disk full")));
        }
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), AppError> {
        self.inner.remove(key).await
    }
}

#[tokio::test]
async fn test_login_store_failure_leaves_no_partial_session() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/auth/login/")
        .with_status(200)
        .with_body(r#"{"access": "A1", "refresh": "R1"}"#)
        .create_async()
        .await;

    let store = Arc::new(RefreshWriteFails {
        inner: MemoryTokenStore::new(),
    });
    let client = Client::with_store(Config::with_base_url(server.url()), store.clone()).unwrap();

    let err = client.login("user", "pass").await.unwrap_err();

    assert!(matches!(err, AppError::Io(_)), "unexpected error: {err:?}");
    assert!(store.get(ACCESS_TOKEN_KEY).await.is_none());
    assert!(!client.is_authenticated().await);
}
