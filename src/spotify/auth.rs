use chrono::Utc;
use reqwest::Client;
use url::{Url, form_urlencoded};

use crate::{
    Result,
    config::SpotifyConfig,
    error::Error,
    management::TokenManager,
    spotify::AuthorizationCodeSource,
    success,
    types::{AuthorizationResponse, Token, TokenResponse},
    utils, warning,
};

/// Returns a usable access token, asking the user to authorize if needed.
///
/// 1. **Cache**: Loads the token cache at `config.token_cache`. An expired
///    token is refreshed and written back. A failed refresh is treated like
///    an empty cache.
/// 2. **Authorization**: Builds the authorize URL with a random `state` and
///    hands it to `code_source`, which returns the redirect parameters.
/// 3. **Exchange**: Trades the code for a token and persists it.
///
/// Every failure is printed and yields `None`; nothing is propagated.
pub async fn authorize<C: AuthorizationCodeSource>(
    config: &SpotifyConfig,
    code_source: &C,
) -> Option<Token> {
    if let Some(token) = cached_token(config).await {
        return Some(token);
    }

    let state = utils::generate_state();
    let auth_url = match authorize_url(config, &state) {
        Ok(url) => url,
        Err(e) => {
            warning!("Invalid Spotify authorization URL: {}", e);
            return None;
        }
    };

    let code = code_source
        .authorization_response(&auth_url)
        .await
        .and_then(|response| response.code_for_state(&state));
    let Some(code) = code else {
        warning!("Unable to extract authorization code from the provided URL.");
        return None;
    };

    let token = match exchange_code(config, &code).await {
        Ok(token) => token,
        Err(e) => {
            warning!("Could not obtain access token: {}", e);
            return None;
        }
    };

    let token_manager = TokenManager::new(token.clone(), config.token_cache.clone());
    match token_manager.persist().await {
        Ok(()) => success!("Authentication successful!"),
        Err(e) => warning!("Failed to save token to cache: {}", e),
    }

    Some(token)
}

/// Loads the cached token, refreshing it when it expired.
pub async fn cached_token(config: &SpotifyConfig) -> Option<Token> {
    let mut token_manager = TokenManager::load(&config.token_cache).await.ok()?;

    match token_manager.get_valid_token(config).await {
        Ok(_) => Some(token_manager.current_token().clone()),
        Err(e) => {
            warning!("Cached Spotify token could not be refreshed: {}", e);
            None
        }
    }
}

/// Builds the URL the user has to visit to grant access.
pub fn authorize_url(config: &SpotifyConfig, state: &str) -> std::result::Result<String, url::ParseError> {
    let mut url = Url::parse(&config.auth_url)?;
    url.query_pairs_mut()
        .append_pair("client_id", &config.client_id)
        .append_pair("response_type", "code")
        .append_pair("redirect_uri", &config.redirect_uri)
        .append_pair("scope", &config.scope)
        .append_pair("state", state);
    Ok(url.into())
}

/// Extracts `code`, `state` and `error` from what the user pasted.
///
/// Accepts the full redirect URL, a bare query string or the code itself.
/// A redirect carrying `error` (e.g. `access_denied`) yields no code.
pub fn parse_redirect(input: &str) -> AuthorizationResponse {
    let input = input.trim();
    if input.is_empty() {
        return AuthorizationResponse::default();
    }

    let query = match Url::parse(input) {
        Ok(url) => url.query().unwrap_or_default().to_string(),
        Err(_) if input.contains('=') => input.trim_start_matches('?').to_string(),
        Err(_) => {
            return AuthorizationResponse {
                code: Some(input.to_string()),
                state: None,
            };
        }
    };

    let mut response = AuthorizationResponse::default();
    let mut denied = false;
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "code" => response.code = Some(value.into_owned()),
            "state" => response.state = Some(value.into_owned()),
            "error" => denied = true,
            _ => {}
        }
    }

    if denied {
        response.code = None;
    }
    response
}

impl AuthorizationResponse {
    /// Returns the code unless the redirect carries a different `state`.
    ///
    /// A missing state is accepted so a bare code can be pasted.
    pub fn code_for_state(self, expected_state: &str) -> Option<String> {
        if let Some(state) = &self.state {
            if state != expected_state {
                return None;
            }
        }
        self.code.filter(|code| !code.is_empty())
    }
}

/// Exchanges an authorization code for an access token.
pub async fn exchange_code(config: &SpotifyConfig, code: &str) -> Result<Token> {
    let client = Client::new();
    let res = client
        .post(&config.token_url)
        .basic_auth(&config.client_id, Some(&config.client_secret))
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", &config.redirect_uri),
        ])
        .send()
        .await?;

    if !res.status().is_success() {
        return Err(Error::from_response(res).await);
    }

    let json = res.json::<TokenResponse>().await?;
    Ok(token_from_response(json, ""))
}

/// Exchanges a refresh token for a fresh access token.
///
/// Spotify may omit the refresh token in the answer; the old one is kept then.
pub async fn refresh_token(config: &SpotifyConfig, refresh_token: &str) -> Result<Token> {
    let client = Client::new();
    let res = client
        .post(&config.token_url)
        .basic_auth(&config.client_id, Some(&config.client_secret))
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ])
        .send()
        .await?;

    if !res.status().is_success() {
        return Err(Error::from_response(res).await);
    }

    let json = res.json::<TokenResponse>().await?;
    Ok(token_from_response(json, refresh_token))
}

fn token_from_response(json: TokenResponse, previous_refresh_token: &str) -> Token {
    Token {
        access_token: json.access_token,
        refresh_token: json
            .refresh_token
            .unwrap_or_else(|| previous_refresh_token.to_string()),
        scope: json.scope.unwrap_or_default(),
        expires_in: json.expires_in.unwrap_or(3600),
        obtained_at: Utc::now().timestamp() as u64,
    }
}
