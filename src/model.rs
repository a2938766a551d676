//! The `Book` entity and its wire shapes.

use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A persisted book. `id` and `created_at` never change after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub title: String,
    pub author: String,
    /// Single digit status code.
    #[serde(default)]
    pub book_status: Option<i16>,
}

/// Request body for create and update.
///
/// Server-assigned fields (`id`, `created_at`, `updated_at`) are not part of this
/// shape; if a client sends them they are ignored.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct BookPayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    /// `None` when absent, `Some(None)` for an explicit `null` (clears the status).
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<i16>)]
    pub book_status: Option<Option<i16>>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<i16>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i16>::deserialize(deserializer).map(Some)
}

impl BookPayload {
    /// Parse a raw request body. Anything that is not a JSON object of the expected
    /// field types is malformed.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

impl Book {
    /// Build a new entity with a fresh identifier and both timestamps set to now.
    /// Missing text fields become empty strings and are caught by validation.
    pub fn create_from(payload: BookPayload) -> Self {
        let now = now();
        Book {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            title: payload.title.unwrap_or_default(),
            author: payload.author.unwrap_or_default(),
            book_status: payload.book_status.flatten(),
        }
    }

    /// Apply the fields present in `payload` on top of this snapshot and stamp a
    /// fresh `updated_at`. Identifier and `created_at` are kept.
    pub fn merged_with(&self, payload: BookPayload) -> Self {
        let floor = self.updated_at + Duration::microseconds(1);
        Book {
            id: self.id,
            created_at: self.created_at,
            updated_at: now().max(floor),
            title: payload.title.unwrap_or_else(|| self.title.clone()),
            author: payload.author.unwrap_or_else(|| self.author.clone()),
            book_status: payload.book_status.unwrap_or(self.book_status),
        }
    }
}

/// Current time at the precision PostgreSQL stores (`timestamptz` keeps microseconds).
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
