// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Predicates for deciding what kind of failure an AWS API call returned.
//!
//! Each predicate searches the whole cause chain of the error, so context
//! added by callers (`OperationError`, retry wrappers, application errors)
//! does not hide the provider error underneath. An error without the
//! required capability anywhere in its chain simply does not match.
//!
//! ```
//! use awserr_classify::{code_equals, message_contains};
//! use awserr_core::{GenericApiError, OperationError};
//!
//! let err = OperationError::new(
//!     "DynamoDB",
//!     "CreateTable",
//!     GenericApiError::new("ResourceInUseException", "Table already exists: users"),
//! );
//!
//! assert!(code_equals(&err, &["ResourceInUseException"]));
//! assert!(message_contains(&err, "ResourceInUseException", "already exists"));
//! ```

use std::error::Error as StdError;

use awserr_core::{ApiError, HttpResponseError, errs};

/// Returns true if the first [`ApiError`] in the chain of `err` has one of
/// the given codes.
///
/// Codes are compared exactly. An empty `codes` never matches.
pub fn code_equals(err: &(dyn StdError + 'static), codes: &[&str]) -> bool {
    let Some(api_err) = find_api_error(err) else {
        return false;
    };

    let matched = codes.iter().any(|code| *code == api_err.error_code());

    #[cfg(feature = "tracing")]
    tracing::trace!(
        code = api_err.error_code(),
        ?codes,
        matched,
        "compared api error code"
    );

    matched
}

/// Returns true if the first [`ApiError`] in the chain of `err` has a code
/// containing `code`.
///
/// Useful for code families, e.g. `"Throttl"` for both `Throttling` and
/// `ThrottlingException`.
pub fn code_contains(err: &(dyn StdError + 'static), code: &str) -> bool {
    let Some(api_err) = find_api_error(err) else {
        return false;
    };

    let matched = api_err.error_code().contains(code);

    #[cfg(feature = "tracing")]
    tracing::trace!(
        code = api_err.error_code(),
        pattern = code,
        matched,
        "searched api error code"
    );

    matched
}

/// Returns true if the first [`ApiError`] in the chain of `err` has exactly
/// the code `code` and its message contains `message`.
pub fn message_contains(err: &(dyn StdError + 'static), code: &str, message: &str) -> bool {
    let Some(api_err) = find_api_error(err) else {
        return false;
    };

    let matched = api_err.error_code() == code && api_err.error_message().contains(message);

    #[cfg(feature = "tracing")]
    tracing::trace!(
        code = api_err.error_code(),
        message = api_err.error_message(),
        expected_code = code,
        expected_message = message,
        matched,
        "searched api error message"
    );

    matched
}

/// Returns true if the first [`HttpResponseError`] in the chain of `err`
/// carried one of the given status codes.
///
/// An empty `status_codes` never matches.
pub fn http_status_code_equals(err: &(dyn StdError + 'static), status_codes: &[u16]) -> bool {
    let Some(response_err) = errs::find::<dyn HttpResponseError>(err) else {
        #[cfg(feature = "tracing")]
        tracing::debug!(error = %err, "no http response error in chain");
        return false;
    };

    let status = response_err.http_status_code();
    let matched = status_codes.contains(&status);

    #[cfg(feature = "tracing")]
    tracing::trace!(status, ?status_codes, matched, "compared http status code");

    matched
}

fn find_api_error<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a dyn ApiError> {
    let api_err = errs::find::<dyn ApiError>(err);

    #[cfg(feature = "tracing")]
    if api_err.is_none() {
        tracing::debug!(error = %err, "no api error in chain");
    }

    api_err
}
