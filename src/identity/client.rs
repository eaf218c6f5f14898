// src/identity/client.rs
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::warn;

use super::{CreatedIdentity, IdentityBody, IdentitySink};
use crate::aliases::AccessToken;
use crate::consts::CREATE_IDENTITY_PATH;
use crate::error::SinkError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking client for the Kratos admin API
pub struct KratosAdminClient {
    http: Client,
    endpoint: String,
    token: Option<AccessToken>,
}

impl KratosAdminClient {
    pub fn new(admin_url: &str, token: Option<AccessToken>) -> Result<Self, SinkError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("identity-migrator/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoint: format!(
                "{}/{}",
                admin_url.trim_end_matches('/'),
                CREATE_IDENTITY_PATH
            ),
            token,
        })
    }

    /// Full URL identities are POSTed to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl IdentitySink for KratosAdminClient {
    fn create_identity(&self, body: &IdentityBody) -> Result<CreatedIdentity, SinkError> {
        let mut request = self.http.post(&self.endpoint).json(body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_else(|err| {
                warn!("could not read error body from identity service: {err}");
                String::new()
            });
            return Err(SinkError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<CreatedIdentity>()?)
    }
}
