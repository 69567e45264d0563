//! Employee records and their create/update payload.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Entity, MissingField, require_text};

/// An employee as stored and served.
///
/// Email is unique by convention between clients; the store does not
/// enforce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Store-assigned identifier; 0 marks an unsaved record.
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub hire_date: NaiveDate,
    pub position: Option<String>,
}

/// Create/update payload: every mutable `Employee` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub hire_date: NaiveDate,
    #[serde(default)]
    pub position: Option<String>,
}

impl EmployeeDraft {
    /// Check required fields before any store call.
    pub fn validate(&self) -> Result<(), MissingField> {
        require_text("firstName", &self.first_name)?;
        require_text("lastName", &self.last_name)?;
        require_text("email", &self.email)?;
        Ok(())
    }

    /// Materialize a new, unsaved record from this draft.
    pub fn into_record(self) -> Employee {
        Employee {
            id: 0,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            hire_date: self.hire_date,
            position: self.position,
        }
    }

    /// Overwrite all mutable fields of an existing record.
    pub fn apply_to(self, record: &mut Employee) {
        record.first_name = self.first_name;
        record.last_name = self.last_name;
        record.email = self.email;
        record.phone = self.phone;
        record.hire_date = self.hire_date;
        record.position = self.position;
    }
}

impl Entity for Employee {
    const KIND: &'static str = "Employee";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}
