//! Department records and their create/update payload.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Entity, MissingField, require_text};

/// A department as stored and served.
///
/// `created_at` is set once when the record is first saved;
/// `updated_at` moves on every update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    /// Store-assigned identifier; 0 marks an unsaved record.
    pub id: i64,
    /// Required display name.
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    /// Annual budget amount. Serialized as a JSON number; the store-side
    /// type stays `Decimal`.
    #[serde(with = "rust_decimal::serde::float")]
    pub budget: Decimal,
    #[serde(rename = "createdDate")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedDate")]
    pub updated_at: DateTime<Utc>,
}

/// Create/update payload: every mutable `Department` field.
///
/// Updates apply the draft wholesale; an optional field absent from the
/// payload clears the stored value rather than keeping it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDraft {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub budget: Decimal,
}

impl DepartmentDraft {
    /// Check required fields before any store call.
    pub fn validate(&self) -> Result<(), MissingField> {
        require_text("name", &self.name)
    }

    /// Materialize a new, unsaved record from this draft.
    pub fn into_record(self, now: DateTime<Utc>) -> Department {
        Department {
            id: 0,
            name: self.name,
            description: self.description,
            location: self.location,
            budget: self.budget,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite all mutable fields of an existing record.
    ///
    /// Identifier and `created_at` are untouched.
    pub fn apply_to(self, record: &mut Department, now: DateTime<Utc>) {
        record.name = self.name;
        record.description = self.description;
        record.location = self.location;
        record.budget = self.budget;
        record.updated_at = now;
    }
}

impl Entity for Department {
    const KIND: &'static str = "Department";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}
