use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::{types::AuthorizationResponse, warning};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<Option<AuthorizationResponse>>>>,
) -> Html<&'static str> {
    if let Some(error) = params.get("error") {
        warning!("Spotify authorization was declined: {}", error);
        *shared_state.lock().await = Some(AuthorizationResponse {
            code: None,
            state: params.get("state").cloned(),
        });
        return Html("<h4>Authorization declined.</h4>");
    }

    let Some(code) = params.get("code") else {
        return Html("<h4>Missing authorization code.</h4>");
    };

    let mut state = shared_state.lock().await;
    *state = Some(AuthorizationResponse {
        code: Some(code.clone()),
        state: params.get("state").cloned(),
    });

    Html("<h2>Authorization received.</h2><p>Close browser window.</p>")
}
