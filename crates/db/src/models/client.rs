//! Client entity model, input DTOs, and their validation.

use clientdesk_core::error::CoreError;
use clientdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

use super::require_text;

/// Pipeline states a client engagement can be in.
pub const CLIENT_STATUSES: [&str; 4] = ["New", "In Progress", "Completed", "On Hold"];

/// Status assigned when a create input omits one.
pub const DEFAULT_STATUS: &str = "New";

/// A client row from the `clients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub details: Option<String>,
    /// Decimal text, e.g. `"50000"`. Normalized from number-or-string input.
    pub budget: String,
    pub status: String,
    pub assigned_developer: Option<String>,
    pub created_at: Timestamp,
}

/// Raw create input as received off the wire. Every field is optional so
/// that missing required fields surface as field-anchored validation
/// errors rather than deserialization failures.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateClient {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub details: Option<String>,
    #[serde(deserialize_with = "budget_from_number_or_string")]
    pub budget: Option<String>,
    pub status: Option<String>,
    pub assigned_developer: Option<String>,
}

/// A fully validated, normalized client insert. The only type
/// [`ClientRepo::create`](crate::repositories::ClientRepo::create) accepts,
/// so unvalidated input cannot reach the store.
#[derive(Debug, Clone)]
pub struct NewClient {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub details: Option<String>,
    pub budget: String,
    pub status: String,
    pub assigned_developer: Option<String>,
}

/// Partial update input. Absent fields (and explicit nulls) leave the
/// stored row untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateClient {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub details: Option<String>,
    #[serde(deserialize_with = "budget_from_number_or_string")]
    pub budget: Option<String>,
    pub status: Option<String>,
    pub assigned_developer: Option<String>,
}

impl CreateClient {
    /// Fail-fast validation in declared field order. The first violation
    /// wins; later fields are not inspected.
    pub fn validate(self) -> Result<NewClient, CoreError> {
        let name = require_text(self.name, "name")?;
        let email = require_text(self.email, "email")?;
        let phone = require_text(self.phone, "phone")?;
        let budget = require_text(self.budget, "budget")?;
        let status = match self.status {
            Some(status) => validate_status(status)?,
            None => DEFAULT_STATUS.to_string(),
        };

        Ok(NewClient {
            name,
            email,
            phone,
            details: self.details,
            budget,
            status,
            assigned_developer: self.assigned_developer,
        })
    }
}

impl UpdateClient {
    /// Fail-fast validation of the supplied fields only.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (value, field) in [
            (&self.name, "name"),
            (&self.email, "email"),
            (&self.phone, "phone"),
            (&self.budget, "budget"),
        ] {
            if let Some(value) = value {
                if value.is_empty() {
                    return Err(CoreError::validation(
                        format!("{field} must not be empty"),
                        field,
                    ));
                }
            }
        }
        if let Some(status) = &self.status {
            validate_status(status.clone())?;
        }
        Ok(())
    }
}

fn validate_status(status: String) -> Result<String, CoreError> {
    if CLIENT_STATUSES.contains(&status.as_str()) {
        Ok(status)
    } else {
        Err(CoreError::validation(
            format!(
                "status must be one of: {}",
                CLIENT_STATUSES.join(", ")
            ),
            "status",
        ))
    }
}

/// Accept a JSON number or string for `budget`, normalizing to the
/// number's decimal text form. Anything else is a type error.
fn budget_from_number_or_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "budget must be a number or string, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn create_input(value: serde_json::Value) -> CreateClient {
        serde_json::from_value(value).expect("input should deserialize")
    }

    #[test]
    fn test_valid_create_input() {
        let input = create_input(json!({
            "name": "Acme",
            "email": "a@x.com",
            "phone": "5551234567",
            "budget": "5000",
        }));
        let new = input.validate().expect("validation should pass");
        assert_eq!(new.budget, "5000");
        assert_eq!(new.status, "New");
        assert_eq!(new.details, None);
    }

    #[test]
    fn test_numeric_budget_is_normalized_to_text() {
        let input = create_input(json!({
            "name": "Acme",
            "email": "a@x.com",
            "phone": "5551234567",
            "budget": 50000,
        }));
        let new = input.validate().expect("validation should pass");
        assert_eq!(new.budget, "50000");
    }

    #[test]
    fn test_fractional_budget_keeps_decimal_text() {
        let input = create_input(json!({
            "name": "Acme",
            "email": "a@x.com",
            "phone": "5551234567",
            "budget": 1250.5,
        }));
        let new = input.validate().expect("validation should pass");
        assert_eq!(new.budget, "1250.5");
    }

    #[test]
    fn test_budget_rejects_other_json_types() {
        let result: Result<CreateClient, _> = serde_json::from_value(json!({
            "name": "Acme",
            "budget": true,
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_first_missing_field_wins() {
        // name and phone are both missing; name is declared first.
        let input = create_input(json!({ "email": "a@x.com", "budget": "1" }));
        let err = input.validate().expect_err("validation should fail");
        assert_matches!(err, CoreError::Validation { field: Some(f), .. } if f == "name");
    }

    #[test]
    fn test_empty_required_field_rejected() {
        let input = create_input(json!({
            "name": "Acme",
            "email": "",
            "phone": "5551234567",
            "budget": "1",
        }));
        let err = input.validate().expect_err("validation should fail");
        assert_matches!(err, CoreError::Validation { field: Some(f), .. } if f == "email");
    }

    #[test]
    fn test_unknown_status_rejected() {
        let input = create_input(json!({
            "name": "Acme",
            "email": "a@x.com",
            "phone": "5551234567",
            "budget": "1",
            "status": "Paused",
        }));
        let err = input.validate().expect_err("validation should fail");
        assert_matches!(err, CoreError::Validation { field: Some(f), .. } if f == "status");
    }

    #[test]
    fn test_every_declared_status_accepted() {
        for status in CLIENT_STATUSES {
            let input = create_input(json!({
                "name": "Acme",
                "email": "a@x.com",
                "phone": "5551234567",
                "budget": "1",
                "status": status,
            }));
            let new = input.validate().expect("validation should pass");
            assert_eq!(new.status, status);
        }
    }

    #[test]
    fn test_empty_update_patch_is_valid() {
        let patch = UpdateClient::default();
        assert!(patch.validate().is_ok());
    }

    #[test]
    fn test_update_patch_rejects_empty_required_text() {
        let patch: UpdateClient =
            serde_json::from_value(json!({ "phone": "" })).expect("patch should deserialize");
        let err = patch.validate().expect_err("validation should fail");
        assert_matches!(err, CoreError::Validation { field: Some(f), .. } if f == "phone");
    }

    #[test]
    fn test_update_patch_rejects_unknown_status() {
        let patch: UpdateClient =
            serde_json::from_value(json!({ "status": "Done" })).expect("patch should deserialize");
        let err = patch.validate().expect_err("validation should fail");
        assert_matches!(err, CoreError::Validation { field: Some(f), .. } if f == "status");
    }

    #[test]
    fn test_camel_case_wire_names() {
        let input = create_input(json!({
            "name": "Acme",
            "email": "a@x.com",
            "phone": "5551234567",
            "budget": "1",
            "assignedDeveloper": "John Doe",
        }));
        let new = input.validate().expect("validation should pass");
        assert_eq!(new.assigned_developer.as_deref(), Some("John Doe"));
    }
}
