//! Note entity and request types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted note.
///
/// `created_at` serializes as ISO-8601 UTC with a `Z` suffix — the wire
/// shape clients rely on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /notes`.
///
/// Unknown fields are rejected outright. `title`/`content` stay optional so
/// the handler can answer a missing field with its own 400 message instead
/// of the extractor's generic error.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}
