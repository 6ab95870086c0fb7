use serde::{Deserialize, Serialize};

use crate::{
    domain::{RosterItem, RosterKind},
    error::ApiError,
};

/// Contact form submission. Fields are optional on the wire so that a missing
/// field is reported as a validation failure rather than a decode failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ContactRequest {
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            full_name: Some(full_name.into()),
            email: Some(email.into()),
            message: Some(message.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

impl ContactResponse {
    pub fn sent(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl From<ApiError> for ContactResponse {
    fn from(value: ApiError) -> Self {
        Self::failed(value.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselSnapshot {
    pub section: RosterKind,
    pub current_page: usize,
    pub page_count: usize,
    pub items: Vec<RosterItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerPhase {
    #[default]
    Uninitialized,
    Loading,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub phase: PlayerPhase,
    pub is_playing: bool,
    pub is_muted: bool,
    pub volume: u8,
    pub is_loaded: bool,
    pub controls_visible: bool,
}

impl Default for PlayerSnapshot {
    fn default() -> Self {
        Self {
            phase: PlayerPhase::Uninitialized,
            is_playing: false,
            is_muted: false,
            volume: 50,
            is_loaded: false,
            controls_visible: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_request_uses_camel_case_on_the_wire() {
        let req: ContactRequest = serde_json::from_value(serde_json::json!({
            "fullName": "Aessa",
            "email": "aessa@example.com"
        }))
        .expect("json");
        assert_eq!(req.full_name.as_deref(), Some("Aessa"));
        assert_eq!(req.email.as_deref(), Some("aessa@example.com"));
        assert!(req.message.is_none());
    }

    #[test]
    fn api_error_converts_to_failed_response() {
        let response: ContactResponse = ApiError::validation("all fields are required").into();
        assert_eq!(
            response,
            ContactResponse::failed("all fields are required")
        );
    }

    #[test]
    fn player_starts_uninitialized_at_half_volume() {
        let snapshot = PlayerSnapshot::default();
        assert_eq!(snapshot.phase, PlayerPhase::Uninitialized);
        assert_eq!(snapshot.volume, 50);
        assert!(!snapshot.controls_visible);
    }
}
