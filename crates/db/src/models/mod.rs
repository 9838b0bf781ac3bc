pub mod client;
pub mod developer;

use clientdesk_core::error::CoreError;

/// Require a present, non-empty text field, naming the field in the error.
pub(crate) fn require_text(value: Option<String>, field: &str) -> Result<String, CoreError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        Some(_) => Err(CoreError::validation(
            format!("{field} must not be empty"),
            field,
        )),
        None => Err(CoreError::validation(format!("{field} is required"), field)),
    }
}
