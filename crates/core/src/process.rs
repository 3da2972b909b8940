//! Validation rules for process records.

use crate::error::CoreError;

/// Maximum length of a process name, matching the VARCHAR(255) column.
pub const MAX_PROCESS_NAME_LEN: usize = 255;

/// Validate a process name: non-empty and within length limit.
pub fn validate_process_name(name: &str) -> Result<(), CoreError> {
    if name.is_empty() {
        return Err(CoreError::Validation(
            "Process name must not be empty".to_string(),
        ));
    }
    let len = name.chars().count();
    if len > MAX_PROCESS_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Process name too long: {len} chars (max {MAX_PROCESS_NAME_LEN})"
        )));
    }
    Ok(())
}
