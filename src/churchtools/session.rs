use reqwest::Client;

use crate::{
    Result,
    config::ChurchToolsConfig,
    error::Error,
    types::{LoginRequest, LoginResponse},
};

/// An authenticated connection to a ChurchTools instance.
///
/// The HTTP client keeps the session cookie returned by the login request,
/// every request made through it is authorized as the logged-in person.
#[derive(Debug, Clone)]
pub struct ChurchToolsSession {
    client: Client,
    base_url: String,
    person_id: u64,
}

impl ChurchToolsSession {
    /// Logs into ChurchTools.
    ///
    /// A single attempt, no retries. Rejected credentials and any response
    /// without a person id are reported as [`Error::Authentication`].
    pub async fn login(config: &ChurchToolsConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        let client = Client::builder().cookie_store(true).build()?;

        let response = client
            .post(format!("{base_url}/api/login"))
            .json(&LoginRequest {
                username: config.email.clone(),
                password: config.password.clone(),
                remember_me: true,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Authentication(format!(
                "ChurchTools rejected the login for {} ({}): {}",
                config.email, status, body
            )));
        }

        let login = response.json::<LoginResponse>().await?;
        let person_id = login.data.person_id.ok_or_else(|| {
            Error::Authentication(format!(
                "ChurchTools login for {} returned no person id (status: {})",
                config.email,
                login.data.status.unwrap_or_else(|| "unknown".to_string())
            ))
        })?;

        Ok(Self {
            client,
            base_url,
            person_id,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn person_id(&self) -> u64 {
        self.person_id
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }
}
