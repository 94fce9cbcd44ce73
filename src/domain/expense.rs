use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type ExpenseId = Uuid;

/// Timestamp layout for exported records: UTC wall-clock time with
/// microsecond precision and no offset suffix.
const RECORD_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// A single monetary record with a title, an amount and lifecycle timestamps.
/// The id is assigned at construction and never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub title: String,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense with a freshly generated id.
    /// `updated_at` starts out equal to `created_at`.
    pub fn new(title: String, amount: f64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            amount,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the title and/or amount. A field passed as `None` is left
    /// untouched; `Some(0.0)` really sets the amount to zero. `updated_at`
    /// is refreshed even when both fields are `None`.
    pub fn update(&mut self, title: Option<String>, amount: Option<f64>) {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(amount) = amount {
            self.amount = amount;
        }
        self.updated_at = Utc::now();
    }

    /// Snapshot of this expense with timestamps rendered as text.
    pub fn to_record(&self) -> ExpenseRecord {
        ExpenseRecord {
            id: self.id.to_string(),
            title: self.title.clone(),
            amount: self.amount,
            created_at: self.created_at.format(RECORD_TIMESTAMP_FORMAT).to_string(),
            updated_at: self.updated_at.format(RECORD_TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// Flat, serializable view of an [`Expense`], the shape exposed to
/// exports and display surfaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: String,
    pub title: String,
    pub amount: f64,
    pub created_at: String,
    pub updated_at: String,
}
