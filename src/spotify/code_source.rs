use std::{
    future::Future,
    io::{self, BufRead, Write},
    sync::Arc,
    time::{Duration, Instant},
};

use tokio::sync::Mutex;

use crate::{
    info, server::start_api_server, spotify::auth::parse_redirect, types::AuthorizationResponse,
    warning,
};

/// Obtains the OAuth redirect after the user visited the authorize URL.
///
/// The sync workflow only needs the `code` and `state` of the redirect. Where
/// they come from is up to the implementation, which keeps the workflow free
/// of interactive input in tests.
pub trait AuthorizationCodeSource {
    fn authorization_response(
        &self,
        authorize_url: &str,
    ) -> impl Future<Output = Option<AuthorizationResponse>>;
}

/// Prints the authorize URL and reads the redirected URL from stdin.
///
/// Blocks until a line is entered, there is no timeout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinPrompt;

impl AuthorizationCodeSource for StdinPrompt {
    async fn authorization_response(&self, authorize_url: &str) -> Option<AuthorizationResponse> {
        info!("Please navigate to this URL to authorize: {}", authorize_url);

        let line = tokio::task::spawn_blocking(|| -> io::Result<String> {
            print!("Paste the URL you were redirected to: ");
            io::stdout().flush()?;
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            Ok(line)
        })
        .await;

        match line {
            Ok(Ok(line)) => Some(parse_redirect(&line)),
            Ok(Err(e)) => {
                warning!("Failed to read the redirect URL: {}", e);
                None
            }
            Err(e) => {
                warning!("Task join error: {}", e);
                None
            }
        }
    }
}

/// A code obtained beforehand, e.g. passed with `--code` or set in tests.
#[derive(Debug, Clone)]
pub struct ProvidedCode(pub String);

impl AuthorizationCodeSource for ProvidedCode {
    async fn authorization_response(&self, _authorize_url: &str) -> Option<AuthorizationResponse> {
        Some(parse_redirect(&self.0))
    }
}

/// Runs the local callback server and opens the authorize URL in the browser.
///
/// The redirect URI registered with Spotify must point to
/// `http://<server_addr>/callback`.
#[derive(Debug, Clone)]
pub struct CallbackServer {
    pub server_addr: String,
    pub max_wait: Duration,
}

impl CallbackServer {
    pub fn new(server_addr: impl Into<String>) -> Self {
        Self {
            server_addr: server_addr.into(),
            max_wait: Duration::from_secs(300),
        }
    }
}

impl AuthorizationCodeSource for CallbackServer {
    async fn authorization_response(&self, authorize_url: &str) -> Option<AuthorizationResponse> {
        let shared_state: Arc<Mutex<Option<AuthorizationResponse>>> = Arc::new(Mutex::new(None));

        let server_state = Arc::clone(&shared_state);
        let server_addr = self.server_addr.clone();
        let server = tokio::spawn(async move {
            if let Err(e) = start_api_server(&server_addr, server_state).await {
                warning!("Callback server stopped: {}", e);
            }
        });

        if webbrowser::open(authorize_url).is_err() {
            warning!(
                "Failed to open browser. Please navigate to the following URL manually:\n{}",
                authorize_url
            );
        } else {
            info!("Waiting for the Spotify redirect on {}", self.server_addr);
        }

        let response = wait_for_redirect(shared_state, self.max_wait).await;
        server.abort();

        if response.is_none() {
            warning!("Authorization timed out.");
        }
        response
    }
}

async fn wait_for_redirect(
    shared_state: Arc<Mutex<Option<AuthorizationResponse>>>,
    max_wait: Duration,
) -> Option<AuthorizationResponse> {
    let start = Instant::now();

    while start.elapsed() < max_wait {
        if let Some(response) = shared_state.lock().await.take() {
            return Some(response);
        }
        tokio::time::sleep(Duration::from_millis(500)).await;
    }

    None
}
