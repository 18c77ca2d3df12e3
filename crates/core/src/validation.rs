//! Field validation shared by request DTOs.
//!
//! DTOs derive [`validator::Validate`]; [`validate_input`] turns the
//! collected field errors into a single [`CoreError::Validation`].

use std::borrow::Cow;

use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;
use crate::naming;

/// Custom rule: the string must contain something other than whitespace.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if naming::is_blank(value) {
        let mut err = ValidationError::new("not_blank");
        err.message = Some(Cow::Borrowed("must not be blank"));
        return Err(err);
    }
    Ok(())
}

/// Run the derived validation rules for `input`.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(describe(&errors)))
}

/// Flatten validation errors into `field: message` pairs, sorted by field
/// name so the output is stable.
pub fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| {
                let message = match &error.message {
                    Some(m) => m.to_string(),
                    None => default_message(&error.code),
                };
                format!("{field}: {message}")
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

fn default_message(code: &str) -> String {
    match code {
        "email" => "must be a valid email address".to_string(),
        "length" => "has an invalid length".to_string(),
        other => format!("failed '{other}' check"),
    }
}
