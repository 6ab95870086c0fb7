use super::*;
use shared::error::ErrorCode;
use std::sync::Mutex;

#[derive(Default)]
struct RecordingRelay {
    sent: Mutex<Vec<ContactEmail>>,
    reject_with: Option<u16>,
}

#[async_trait]
impl EmailRelay for RecordingRelay {
    async fn send(&self, email: &ContactEmail) -> Result<(), RelayError> {
        if let Some(status) = self.reject_with {
            return Err(RelayError::Rejected {
                status,
                body: "rejected".into(),
            });
        }
        self.sent.lock().expect("sent").push(email.clone());
        Ok(())
    }
}

struct UnreachableRelay;

#[async_trait]
impl EmailRelay for UnreachableRelay {
    async fn send(&self, _email: &ContactEmail) -> Result<(), RelayError> {
        Err(RelayError::Transport {
            message: "connection refused".into(),
        })
    }
}

fn context(relay: Arc<dyn EmailRelay>) -> ContactContext {
    ContactContext { relay }
}

#[test]
fn blank_fields_fail_validation() {
    let err = validate(&ContactRequest::new("Aessa", "   ", "hello")).expect_err("blank email");
    assert!(matches!(err.code, ErrorCode::Validation));
    assert_eq!(err.message, MISSING_FIELDS_MESSAGE);

    let missing = ContactRequest {
        full_name: Some("Aessa".into()),
        email: Some("aessa@example.com".into()),
        message: None,
    };
    assert!(validate(&missing).is_err());
}

#[test]
fn valid_fields_are_trimmed() {
    let contact = validate(&ContactRequest::new(" Aessa ", "aessa@example.com\n", "hello"))
        .expect("valid");
    assert_eq!(contact.full_name, "Aessa");
    assert_eq!(contact.email, "aessa@example.com");
}

#[test]
fn email_template_addresses_the_administrator() {
    let contact = validate(&ContactRequest::new("Kraken", "k@example.com", "count me in"))
        .expect("valid");
    let email = ContactEmail::from(&contact);
    assert_eq!(email.from_name, "Kraken");
    assert_eq!(email.reply_to, "k@example.com");
    assert_eq!(email.message, "count me in");
    assert_eq!(email.to_name, ADMIN_NAME);
    assert_eq!(email.subject, "New contact message from Kraken");
}

#[tokio::test]
async fn valid_submission_is_relayed() {
    let relay = Arc::new(RecordingRelay::default());
    let ctx = context(relay.clone());

    let response = submit_contact(&ctx, ContactRequest::new("Zeta7", "z@example.com", "hi"))
        .await
        .expect("sent");
    assert_eq!(response, ContactResponse::sent(SENT_MESSAGE));

    let sent = relay.sent.lock().expect("sent").clone();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].from_name, "Zeta7");
}

#[tokio::test]
async fn invalid_submission_is_not_relayed() {
    let relay = Arc::new(RecordingRelay::default());
    let ctx = context(relay.clone());

    let err = submit_contact(&ctx, ContactRequest::default())
        .await
        .expect_err("invalid");
    assert!(matches!(err.code, ErrorCode::Validation));
    assert!(relay.sent.lock().expect("sent").is_empty());
}

#[tokio::test]
async fn upstream_rejections_map_to_specific_messages() {
    for (status, expected) in [
        (400, "the email provider rejected the message data"),
        (403, "authentication with the email provider failed"),
        (502, "an error occurred while processing your request"),
    ] {
        let ctx = context(Arc::new(RecordingRelay {
            reject_with: Some(status),
            ..Default::default()
        }));
        let err = submit_contact(&ctx, ContactRequest::new("Outis", "o@example.com", "hey"))
            .await
            .expect_err("rejected");
        assert!(matches!(err.code, ErrorCode::Upstream));
        assert_eq!(err.message, expected, "status {status}");
    }
}

#[tokio::test]
async fn transport_failure_is_an_upstream_error() {
    let ctx = context(Arc::new(UnreachableRelay));
    let err = submit_contact(&ctx, ContactRequest::new("Outis", "o@example.com", "hey"))
        .await
        .expect_err("unreachable");
    assert!(matches!(err.code, ErrorCode::Upstream));
}
