// src/entity/note.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// A single text record kept by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: u64,
    pub title: String,
    pub body: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn new(id: u64, title: String, body: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            body,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace title and body. `updated_at` never moves before `created_at`.
    pub fn update(&mut self, title: String, body: String, now: DateTime<Utc>) {
        self.title = title;
        self.body = body;
        self.updated_at = now.max(self.created_at);
    }
}
