use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::{ContactEmail, EmailRelay, RelayError};

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct EmailJsConfig {
    pub endpoint: Url,
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
}

#[derive(Serialize)]
struct SendPayload<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactEmail,
}

pub struct EmailJsRelay {
    client: Client,
    config: EmailJsConfig,
}

impl EmailJsRelay {
    pub fn new(config: EmailJsConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build EmailJS http client")?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl EmailRelay for EmailJsRelay {
    async fn send(&self, email: &ContactEmail) -> Result<(), RelayError> {
        let payload = SendPayload {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.user_id,
            template_params: email,
        };

        debug!(endpoint = %self.config.endpoint, "sending contact email via EmailJS");
        let response = self
            .client
            .post(self.config.endpoint.clone())
            .json(&payload)
            .send()
            .await
            .map_err(|err| RelayError::Transport {
                message: err.to_string(),
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(RelayError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
#[path = "tests/emailjs_tests.rs"]
mod tests;
