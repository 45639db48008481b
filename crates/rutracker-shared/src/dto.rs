//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request body for creating or fully replacing a post.
///
/// Every field is required; the id comes from the path or the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPayload {
    pub rutracker_id: String,
    pub link: String,
    pub title: String,
    pub seeds: i32,
    pub leaches: i32,
    pub size: String,
}

/// Response of a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedPost {
    pub id: i32,
}

/// Outcome of forwarding a post to the chat.
///
/// Both variants are sent with HTTP 200; `status` tells them apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SendPostResponse {
    Ok { post_id: i32 },
    Error { detail: String },
}
