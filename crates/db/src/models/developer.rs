//! Developer entity model and create input.
//!
//! Developers have no update operation: rows are created, listed, and
//! deleted whole.

use clientdesk_core::error::CoreError;
use clientdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::require_text;

/// A developer row from the `developers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Developer {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub tech_stack: Option<String>,
    pub skills: Option<String>,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// Raw create input as received off the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateDeveloper {
    pub name: Option<String>,
    pub email: Option<String>,
    pub tech_stack: Option<String>,
    pub skills: Option<String>,
    pub description: Option<String>,
}

/// A validated developer insert.
#[derive(Debug, Clone)]
pub struct NewDeveloper {
    pub name: String,
    pub email: String,
    pub tech_stack: Option<String>,
    pub skills: Option<String>,
    pub description: Option<String>,
}

impl CreateDeveloper {
    /// Fail-fast validation in declared field order.
    pub fn validate(self) -> Result<NewDeveloper, CoreError> {
        let name = require_text(self.name, "name")?;
        let email = require_text(self.email, "email")?;

        Ok(NewDeveloper {
            name,
            email,
            tech_stack: self.tech_stack,
            skills: self.skills,
            description: self.description,
        })
    }
}
