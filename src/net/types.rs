//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads so serde round-trips stay
//! lossless. Credential-carrying types hand-roll `Debug` so secrets never
//! reach logs.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the auth endpoints and `/users/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Login email address.
    pub email: String,
    /// Handle; the backend sends an empty string when none was chosen yet.
    #[serde(default)]
    pub username: String,
    /// Display name.
    pub display_name: String,
    /// Avatar image URL, if available.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Credentials submitted to `POST /auth/login`.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Account details submitted to `POST /auth/register`.
///
/// `password_hash` is sent as supplied by the caller.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password_hash: String,
    pub display_name: String,
    pub username: String,
    /// Organization invite token, when registering through an invite link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invite_token: Option<String>,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("email", &self.email)
            .field("password_hash", &"***")
            .field("display_name", &self.display_name)
            .field("username", &self.username)
            .field("invite_token", &self.invite_token.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Bearer token plus the user it authenticates.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

impl fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginResponse")
            .field("token", &"***")
            .field("user", &self.user)
            .finish()
    }
}

/// A board as listed on the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// Unique board identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    /// Owner user ID (UUID string), if sent.
    #[serde(default)]
    pub created_by: Option<String>,
}

/// Payload for `POST /api/boards/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateBoardRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Kind of a placeable board element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    Shape,
    Text,
    StickyNote,
    Image,
    Video,
    Frame,
    Connector,
    Drawing,
    Embed,
    Document,
    Component,
}

impl ElementType {
    /// Whether elements of this kind carry editable text.
    pub fn is_text_bearing(self) -> bool {
        matches!(self, Self::Text | Self::StickyNote)
    }
}

/// A board element as represented on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardElement {
    /// Unique element identifier (UUID string).
    pub id: String,
    /// Board this element belongs to (UUID string).
    pub board_id: String,
    pub element_type: ElementType,
    /// Left edge in world coordinates.
    pub position_x: f64,
    /// Top edge in world coordinates.
    pub position_y: f64,
    pub width: f64,
    pub height: f64,
    /// Clockwise rotation in degrees.
    #[serde(default)]
    pub rotation: f64,
    /// Stacking order; lower values are drawn beneath higher values.
    #[serde(default)]
    pub z_index: i32,
    /// Visual attributes (`fontSize`, `color`, `backgroundColor`, ...).
    #[serde(default)]
    pub style: serde_json::Value,
    /// Per-kind content (`text` for text-bearing elements).
    #[serde(default)]
    pub properties: serde_json::Value,
    /// Edit counter used for optimistic concurrency on patch.
    #[serde(default)]
    pub version: i32,
}

impl BoardElement {
    /// Text content stored under `properties.text`, or an empty string.
    pub fn text(&self) -> &str {
        self.properties
            .get("text")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("")
    }

    /// String style attribute, if present.
    pub fn style_str(&self, key: &str) -> Option<&str> {
        self.style.get(key).and_then(serde_json::Value::as_str)
    }

    /// Numeric style attribute, if present.
    pub fn style_f64(&self, key: &str) -> Option<f64> {
        self.style.get(key).and_then(serde_json::Value::as_f64)
    }
}

/// Payload for `POST /api/boards/{board_id}/elements`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateBoardElementRequest {
    /// Client-chosen ID so the local projection can be inserted immediately.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub element_type: ElementType,
    pub position_x: f64,
    pub position_y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<serde_json::Value>,
}

/// Payload for `PATCH /api/boards/{board_id}/elements/{element_id}`.
///
/// Only set fields are sent; the server rejects stale `expected_version`s.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateBoardElementRequest {
    pub expected_version: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<serde_json::Value>,
}
