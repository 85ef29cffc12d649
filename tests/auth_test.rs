use std::{
    io::ErrorKind,
    net::TcpListener,
    path::Path,
};

use chrono::Utc;
use ctsync::cli::create_spotify_playlist;
use ctsync::config::{self, SpotifyConfig};
use ctsync::management::TokenManager;
use ctsync::spotify::{AuthorizationCodeSource, ProvidedCode, auth::authorize};
use ctsync::types::{AuthorizationResponse, Token};

/// Fails the test if the workflow asks for a code.
struct UnreachableCodeSource;

impl AuthorizationCodeSource for UnreachableCodeSource {
    async fn authorization_response(&self, _authorize_url: &str) -> Option<AuthorizationResponse> {
        panic!("the code source must not be asked when a valid token is cached");
    }
}

/// A local listener standing in for the Spotify endpoints.
///
/// Nothing answers on it; a test only checks whether a request arrived.
fn endpoint() -> TcpListener {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    listener
}

fn assert_no_request(listener: &TcpListener) {
    match listener.accept() {
        Err(e) => assert_eq!(e.kind(), ErrorKind::WouldBlock),
        Ok((_, peer)) => panic!("unexpected request from {}", peer),
    }
}

fn create_test_config(cache_dir: &Path, listener: &TcpListener) -> SpotifyConfig {
    let base = format!("http://{}", listener.local_addr().unwrap());
    SpotifyConfig {
        client_id: "client-id".to_string(),
        client_secret: "secret".to_string(),
        redirect_uri: "http://127.0.0.1:8888/callback".to_string(),
        scope: config::SPOTIFY_SCOPE.to_string(),
        auth_url: config::DEFAULT_SPOTIFY_AUTH_URL.to_string(),
        token_url: format!("{}/api/token", base),
        api_url: format!("{}/v1", base),
        token_cache: cache_dir.join(".spotify_cache"),
        server_addr: config::DEFAULT_SERVER_ADDRESS.to_string(),
    }
}

#[tokio::test]
async fn test_declined_authorization_skips_exchange() {
    let dir = tempfile::tempdir().unwrap();
    let listener = endpoint();
    let config = create_test_config(dir.path(), &listener);
    let source = ProvidedCode(
        "http://127.0.0.1:8888/callback?error=access_denied&state=x".to_string(),
    );

    assert!(authorize(&config, &source).await.is_none());
    assert_no_request(&listener);
    assert!(!config.token_cache.exists());
}

#[tokio::test]
async fn test_mismatched_state_skips_exchange() {
    let dir = tempfile::tempdir().unwrap();
    let listener = endpoint();
    let config = create_test_config(dir.path(), &listener);
    // The real state is random, so a fixed one never matches
    let source = ProvidedCode("http://127.0.0.1:8888/callback?code=abc&state=wrong".to_string());

    assert!(authorize(&config, &source).await.is_none());
    assert_no_request(&listener);
}

#[tokio::test]
async fn test_valid_cached_token_is_reused() {
    let dir = tempfile::tempdir().unwrap();
    let listener = endpoint();
    let config = create_test_config(dir.path(), &listener);
    let cached = Token {
        access_token: "cached-access".to_string(),
        refresh_token: "cached-refresh".to_string(),
        scope: config::SPOTIFY_SCOPE.to_string(),
        expires_in: 3_600,
        obtained_at: Utc::now().timestamp() as u64,
    };
    TokenManager::new(cached, config.token_cache.clone())
        .persist()
        .await
        .unwrap();

    let token = authorize(&config, &UnreachableCodeSource).await.unwrap();

    assert_eq!(token.access_token, "cached-access");
    assert_no_request(&listener);
}

#[tokio::test]
async fn test_sync_ends_quietly_without_authorization() {
    let dir = tempfile::tempdir().unwrap();
    let listener = endpoint();
    let config = create_test_config(dir.path(), &listener);
    let source = ProvidedCode(
        "http://127.0.0.1:8888/callback?error=access_denied&state=x".to_string(),
    );

    create_spotify_playlist(&[], "Sunday", &config, &source).await;

    // Neither the token exchange nor the Web API was called
    assert_no_request(&listener);
}
