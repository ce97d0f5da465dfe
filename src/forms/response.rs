//! Decoding helpers shared by every form type.
//!
//! The client answers a form with a single JSON value: an array for custom forms,
//! a button index for menus and a bool for modals. A missing payload or a literal
//! `null` means the form was closed without submitting.

use serde::de::DeserializeOwned;

use crate::errors::FormError;

/// Decode a response payload into `T`.
///
/// Returns `Ok(None)` when the form was closed.
///
/// # Errors
///
/// Returns `FormError::Parse` when the payload is not valid JSON for `T`.
pub fn decode_response<T: DeserializeOwned>(
    data: Option<&[u8]>,
    what: &str,
) -> Result<Option<T>, FormError> {
    let Some(data) = data else {
        return Ok(None);
    };
    serde_json::from_slice::<Option<T>>(data)
        .map_err(|e| FormError::Parse(format!("cannot parse {}: {}", what, e)))
}
