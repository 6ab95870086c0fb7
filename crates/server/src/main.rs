use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, Method, StatusCode},
    routing::{get, post},
    Json, Router,
};
use contact_api::{submit_contact, ContactContext, EmailJsRelay};
use shared::{
    error::{ApiError, ErrorCode},
    protocol::{ContactRequest, ContactResponse},
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod app_state;
mod config;

use app_state::AppState;
use config::{load_settings, Settings};

const ROOT_MESSAGE: &str = "contact relay is running";
const NOT_FOUND_MESSAGE: &str = "route not found";
const MALFORMED_BODY_MESSAGE: &str = "request body must be a JSON object";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let settings = load_settings()?;
    let emailjs = settings.emailjs().inspect_err(|error| {
        error!(%error, "EmailJS credentials are not configured; refusing to start");
    })?;
    info!(endpoint = %emailjs.endpoint, "EmailJS relay configured");

    let relay = EmailJsRelay::new(emailjs)?;
    let state = AppState {
        contact: ContactContext {
            relay: Arc::new(relay),
        },
    };
    let app = build_router(Arc::new(state), &settings)?;

    let addr: SocketAddr = settings
        .server_bind
        .parse()
        .with_context(|| format!("invalid bind address '{}'", settings.server_bind))?;
    info!(%addr, client_url = %settings.client_url, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

fn build_router(state: Arc<AppState>, settings: &Settings) -> anyhow::Result<Router> {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list([settings.client_origin()?]))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    Ok(Router::new()
        .route("/", get(root))
        .route("/healthz", get(healthz))
        .route("/api/contact", post(http_contact))
        .fallback(not_found)
        .layer(RequestBodyLimitLayer::new(settings.max_body_bytes))
        .layer(cors)
        .with_state(state))
}

async fn root() -> &'static str {
    ROOT_MESSAGE
}

async fn healthz() -> &'static str {
    "ok"
}

async fn not_found() -> (StatusCode, Json<ContactResponse>) {
    failure(ApiError::not_found(NOT_FOUND_MESSAGE))
}

async fn http_contact(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> (StatusCode, Json<ContactResponse>) {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            warn!(%rejection, "rejected contact payload");
            let status = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                StatusCode::PAYLOAD_TOO_LARGE
            } else {
                StatusCode::BAD_REQUEST
            };
            return (status, Json(ContactResponse::failed(MALFORMED_BODY_MESSAGE)));
        }
    };

    match submit_contact(&state.contact, req).await {
        Ok(response) => (StatusCode::OK, Json(response)),
        Err(err) => failure(err),
    }
}

fn failure(err: ApiError) -> (StatusCode, Json<ContactResponse>) {
    (status_for(err.code), Json(err.into()))
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::Validation => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Upstream => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
