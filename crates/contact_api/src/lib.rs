use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use shared::{
    error::ApiError,
    protocol::{ContactRequest, ContactResponse},
};
use thiserror::Error;
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

mod emailjs;

pub use emailjs::{EmailJsConfig, EmailJsRelay, EMAILJS_SEND_URL};

pub const MISSING_FIELDS_MESSAGE: &str = "all fields are required";
pub const SENT_MESSAGE: &str = "your message was sent successfully";
const ADMIN_NAME: &str = "Site administrator";

#[derive(Clone)]
pub struct ContactContext {
    pub relay: Arc<dyn EmailRelay>,
}

/// Template parameters handed to the email provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactEmail {
    pub from_name: String,
    pub reply_to: String,
    pub message: String,
    pub to_name: String,
    pub subject: String,
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("email provider rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("email provider unreachable: {message}")]
    Transport { message: String },
}

#[async_trait]
pub trait EmailRelay: Send + Sync {
    async fn send(&self, email: &ContactEmail) -> Result<(), RelayError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    pub full_name: String,
    pub email: String,
    pub message: String,
}

impl From<&ValidContact> for ContactEmail {
    fn from(contact: &ValidContact) -> Self {
        Self {
            from_name: contact.full_name.clone(),
            reply_to: contact.email.clone(),
            message: contact.message.clone(),
            to_name: ADMIN_NAME.to_string(),
            subject: format!("New contact message from {}", contact.full_name),
        }
    }
}

/// All three fields must be present and non-blank.
pub fn validate(req: &ContactRequest) -> Result<ValidContact, ApiError> {
    let full_name = required(&req.full_name);
    let email = required(&req.email);
    let message = required(&req.message);

    match (full_name, email, message) {
        (Some(full_name), Some(email), Some(message)) => Ok(ValidContact {
            full_name,
            email,
            message,
        }),
        _ => Err(ApiError::validation(MISSING_FIELDS_MESSAGE)),
    }
}

fn required(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

pub async fn submit_contact(
    ctx: &ContactContext,
    req: ContactRequest,
) -> Result<ContactResponse, ApiError> {
    let request_id = Uuid::new_v4();
    async move {
        let contact = validate(&req).inspect_err(|_| {
            warn!(
                has_full_name = req.full_name.is_some(),
                has_email = req.email.is_some(),
                has_message = req.message.is_some(),
                "contact validation failed"
            );
        })?;

        info!(full_name = %contact.full_name, "contact message received");
        let email = ContactEmail::from(&contact);
        ctx.relay.send(&email).await.map_err(|err| {
            error!(%err, "contact relay failed");
            relay_failure(&err)
        })?;

        info!("contact message relayed");
        Ok::<_, ApiError>(ContactResponse::sent(SENT_MESSAGE))
    }
    .instrument(info_span!("contact", %request_id))
    .await
}

fn relay_failure(err: &RelayError) -> ApiError {
    let message = match err {
        RelayError::Rejected { status: 400, .. } => "the email provider rejected the message data",
        RelayError::Rejected { status: 403, .. } => "authentication with the email provider failed",
        _ => "an error occurred while processing your request",
    };
    ApiError::upstream(message)
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
