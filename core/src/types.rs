//! Wire types for the todo service.
//!
//! # Design
//! Field names follow the service's camelCase JSON (`userId`). Decoding is
//! strict: every field of `Task` is required and must carry the JSON type the
//! service sends, so a numeric `id` or a missing `completed` is rejected
//! instead of being coerced or defaulted. Unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// A single todo item as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub completed: bool,
}

/// Request payload for creating a task. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub user_id: String,
    pub title: String,
    pub completed: bool,
}

impl NewTask {
    pub fn new(user_id: impl Into<String>, title: impl Into<String>, completed: bool) -> Self {
        Self {
            user_id: user_id.into(),
            title: title.into(),
            completed,
        }
    }
}
