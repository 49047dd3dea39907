//! Pluggable validation policy for creation payloads
//!
//! The storefront accepts what clients send: empty display strings,
//! negative prices, empty item lists and dangling product references all
//! pass. The policy is still a single choke point in every create handler,
//! so tightening it is a matter of adding `#[validate(...)]` attributes to
//! the payload structs; handler logic stays untouched.

use validator::Validate;

use crate::core::error::ApiError;

/// Run the active validation policy over a creation payload.
pub fn check<T: Validate>(payload: &T) -> Result<(), ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))
}
