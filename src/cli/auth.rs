use crate::{
    config::SpotifyConfig,
    spotify::{self, AuthorizationCodeSource},
    success,
};

pub async fn auth<C: AuthorizationCodeSource>(config: &SpotifyConfig, code_source: &C) {
    if spotify::auth::authorize(config, code_source).await.is_some() {
        success!("Spotify token cached at {}", config.token_cache.display());
    }
}
