use anyhow::{bail, Context};
use axum::http::HeaderValue;
use config::{Config, Environment, File, Source};
use contact_api::{EmailJsConfig, EMAILJS_SEND_URL};
use serde::Deserialize;
use url::Url;

const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server_bind: String,
    pub client_url: String,
    pub emailjs_endpoint: String,
    pub emailjs_service_id: Option<String>,
    pub emailjs_template_id: Option<String>,
    pub emailjs_user_id: Option<String>,
    pub max_body_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: format!("0.0.0.0:{DEFAULT_PORT}"),
            client_url: "http://localhost:3000".into(),
            emailjs_endpoint: EMAILJS_SEND_URL.into(),
            emailjs_service_id: None,
            emailjs_template_id: None,
            emailjs_user_id: None,
            max_body_bytes: 16 * 1024,
        }
    }
}

impl Settings {
    /// Relay credentials are mandatory; the service refuses to start without
    /// them.
    pub fn emailjs(&self) -> anyhow::Result<EmailJsConfig> {
        let missing: Vec<&str> = [
            ("emailjs_service_id", &self.emailjs_service_id),
            ("emailjs_template_id", &self.emailjs_template_id),
            ("emailjs_user_id", &self.emailjs_user_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().map_or(true, |v| v.trim().is_empty()))
        .map(|(name, _)| name)
        .collect();

        if !missing.is_empty() {
            bail!("missing EmailJS settings: {}", missing.join(", "));
        }

        let endpoint = Url::parse(&self.emailjs_endpoint)
            .with_context(|| format!("invalid EmailJS endpoint '{}'", self.emailjs_endpoint))?;

        Ok(EmailJsConfig {
            endpoint,
            service_id: self.emailjs_service_id.clone().unwrap_or_default(),
            template_id: self.emailjs_template_id.clone().unwrap_or_default(),
            user_id: self.emailjs_user_id.clone().unwrap_or_default(),
        })
    }

    /// Origin allowed to call the API from a browser.
    pub fn client_origin(&self) -> anyhow::Result<HeaderValue> {
        let url = Url::parse(&self.client_url)
            .with_context(|| format!("invalid client url '{}'", self.client_url))?;
        let origin = url.origin().ascii_serialization();
        HeaderValue::from_str(&origin)
            .with_context(|| format!("client origin '{origin}' is not a valid header value"))
    }
}

/// Defaults, then optional `server.toml`, then `APP__*` variables, then the
/// plain variable names the relay was originally deployed with.
pub fn load_settings() -> anyhow::Result<Settings> {
    let mut settings = settings_from(File::with_name("server").required(false))?;
    apply_legacy_env(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn settings_from<S>(file: S) -> anyhow::Result<Settings>
where
    S: Source + Send + Sync + 'static,
{
    Config::builder()
        .add_source(file)
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()
        .context("failed to read server configuration")?
        .try_deserialize()
        .context("invalid server configuration")
}

fn apply_legacy_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(port) = lookup("PORT").and_then(|v| v.parse::<u16>().ok()) {
        settings.server_bind = format!("0.0.0.0:{port}");
    }
    if let Some(v) = lookup("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = lookup("CLIENT_URL") {
        settings.client_url = v;
    }
    if let Some(v) = lookup("EMAILJS_SERVICE_ID") {
        settings.emailjs_service_id = Some(v);
    }
    if let Some(v) = lookup("EMAILJS_TEMPLATE_ID") {
        settings.emailjs_template_id = Some(v);
    }
    if let Some(v) = lookup("EMAILJS_USER_ID") {
        settings.emailjs_user_id = Some(v);
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
