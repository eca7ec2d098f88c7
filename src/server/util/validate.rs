use crate::server::error::AppError;

/// Extracts a required text field from a request body.
///
/// The value must be present and contain something other than whitespace. Surrounding
/// whitespace is trimmed from the returned value.
///
/// # Arguments
/// - `value` - The optional field as deserialized from the request
/// - `field` - Field name used in the error message
///
/// # Returns
/// - `Ok(String)` - Trimmed field value
/// - `Err(AppError::BadRequest)` - Field missing or blank
pub fn required_text(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(missing(field)),
    }
}

/// Extracts a required integer field from a request body.
///
/// # Returns
/// - `Ok(i32)` - Field value
/// - `Err(AppError::BadRequest)` - Field missing
pub fn required_number(value: Option<i32>, field: &str) -> Result<i32, AppError> {
    value.ok_or_else(|| missing(field))
}

/// Normalizes an optional text field, treating blank strings as absent.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn missing(field: &str) -> AppError {
    AppError::BadRequest(format!("{} is required", field))
}
