//! Frontend Models
//!
//! Data structures matching the backend's JSON payloads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Item data structure (matches `/api/items`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Open string, conventionally `completed`, `in_progress` or `pending`
    pub status: String,
}

/// Wire envelope for the items list endpoint
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemList {
    pub items: Vec<Item>,
}

/// Job data structure (matches `/api/jobs/`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Backend-assigned opaque identifier
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl Job {
    /// A job without an end date is still running
    pub fn is_open(&self) -> bool {
        self.end_date.is_none()
    }
}

/// Create/update payload. `endDate` is always sent, as `null` when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobCreate {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}
