use super::*;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use std::sync::Arc;
use tokio::{
    net::TcpListener,
    sync::{oneshot, Mutex},
};

#[derive(Clone)]
struct ServerState {
    tx: Arc<Mutex<Option<oneshot::Sender<serde_json::Value>>>>,
    status: StatusCode,
}

async fn capture(
    State(state): State<ServerState>,
    Json(body): Json<serde_json::Value>,
) -> (StatusCode, &'static str) {
    if let Some(tx) = state.tx.lock().await.take() {
        let _ = tx.send(body);
    }
    (state.status, "OK")
}

async fn spawn_provider(status: StatusCode) -> (Url, oneshot::Receiver<serde_json::Value>) {
    let (tx, rx) = oneshot::channel();
    let app = Router::new()
        .route("/api/v1.0/email/send", post(capture))
        .with_state(ServerState {
            tx: Arc::new(Mutex::new(Some(tx))),
            status,
        });
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    let endpoint = Url::parse(&format!("http://{addr}/api/v1.0/email/send")).expect("url");
    (endpoint, rx)
}

fn relay(endpoint: Url) -> EmailJsRelay {
    EmailJsRelay::new(EmailJsConfig {
        endpoint,
        service_id: "service_test".into(),
        template_id: "template_test".into(),
        user_id: "user_test".into(),
    })
    .expect("relay")
}

fn email() -> ContactEmail {
    ContactEmail {
        from_name: "Romalisa".into(),
        reply_to: "romalisa@example.com".into(),
        message: "see you there".into(),
        to_name: "Site administrator".into(),
        subject: "New contact message from Romalisa".into(),
    }
}

#[tokio::test]
async fn posts_service_identifiers_and_template_params() {
    let (endpoint, rx) = spawn_provider(StatusCode::OK).await;

    relay(endpoint).send(&email()).await.expect("send");

    let body = rx.await.expect("captured");
    assert_eq!(body["service_id"], "service_test");
    assert_eq!(body["template_id"], "template_test");
    assert_eq!(body["user_id"], "user_test");
    assert_eq!(body["template_params"]["from_name"], "Romalisa");
    assert_eq!(body["template_params"]["reply_to"], "romalisa@example.com");
    assert_eq!(
        body["template_params"]["subject"],
        "New contact message from Romalisa"
    );
}

#[tokio::test]
async fn non_success_status_is_a_rejection() {
    let (endpoint, _rx) = spawn_provider(StatusCode::FORBIDDEN).await;

    let err = relay(endpoint).send(&email()).await.expect_err("rejected");
    assert!(matches!(err, RelayError::Rejected { status: 403, .. }));
}

#[tokio::test]
async fn unreachable_provider_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let endpoint = Url::parse(&format!("http://{addr}/api/v1.0/email/send")).expect("url");
    let err = relay(endpoint).send(&email()).await.expect_err("unreachable");
    assert!(matches!(err, RelayError::Transport { .. }));
}
