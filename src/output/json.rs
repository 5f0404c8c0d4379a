//! JSON output formatting for pomopanel.

use serde::Serialize;

use crate::error::PanelError;

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `PanelError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, PanelError> {
    Ok(serde_json::to_string_pretty(value)?)
}
