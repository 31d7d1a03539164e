// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Provider-level API errors.

use serde::Deserialize;

use crate::{Error, Result};

/// Which party a provider blames for a failed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorFault {
    #[default]
    Unknown,
    Server,
    Client,
}

impl ErrorFault {
    /// Derives the fault from the HTTP status a response carried.
    pub fn from_status(status: u16) -> Self {
        match status {
            400..=499 => Self::Client,
            500.. => Self::Server,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for ErrorFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorFault::Unknown => write!(f, "unknown"),
            ErrorFault::Server => write!(f, "server"),
            ErrorFault::Client => write!(f, "client"),
        }
    }
}

/// An error reported by the provider's API, identified by a stable code.
///
/// This is a capability: [`errs::find`] locates the first error in a cause
/// chain that exposes it. The trait is sealed, and it is implemented by
/// [`GenericApiError`] and [`ServiceError`] only. Error types defined
/// elsewhere implement [`ModeledError`] and are wrapped in a [`ServiceError`].
///
/// ```compile_fail
/// use awserr_core::ApiError;
///
/// #[derive(Debug)]
/// struct Unmodeled;
///
/// impl std::fmt::Display for Unmodeled {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "unmodeled")
///     }
/// }
///
/// impl std::error::Error for Unmodeled {}
///
/// impl ApiError for Unmodeled {
///     fn error_code(&self) -> &str {
///         "Unmodeled"
///     }
///
///     fn error_message(&self) -> &str {
///         ""
///     }
/// }
/// ```
///
/// [`errs::find`]: crate::errs::find
pub trait ApiError: crate::sealed::Sealed + std::error::Error + Send + Sync + 'static {
    /// The machine-readable error code, e.g. `ResourceNotFoundException`.
    fn error_code(&self) -> &str;

    /// The human-readable message that accompanied the code.
    fn error_message(&self) -> &str;

    fn error_fault(&self) -> ErrorFault {
        ErrorFault::Unknown
    }
}

/// An error shape defined by a service model, such as `NoSuchBucket` or
/// `ConditionalCheckFailedException`.
///
/// Implement this for your own error types and wrap them in a
/// [`ServiceError`] to make them visible as an [`ApiError`].
pub trait ModeledError: std::error::Error + Send + Sync + 'static {
    fn error_code(&self) -> &str;

    fn error_message(&self) -> &str;

    fn error_fault(&self) -> ErrorFault {
        ErrorFault::Unknown
    }
}

/// An API error that was not modeled by a specific service shape.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("api error {code}: {message}")]
pub struct GenericApiError {
    code: String,
    message: String,
    fault: ErrorFault,
}

impl GenericApiError {
    /// Create an error with the given code and message and an unknown fault.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            fault: ErrorFault::Unknown,
        }
    }

    /// Create a new [`GenericApiErrorBuilder`] instance.
    pub fn builder() -> GenericApiErrorBuilder {
        GenericApiErrorBuilder::default()
    }

    /// Decodes the body of a JSON-protocol error response.
    ///
    /// The code is read from `__type`, `code` or `Code`, the message from
    /// `message` or `Message`. Namespace prefixes (`aws.foo#`) and trailing
    /// `:`-separated metadata are stripped from the code.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseError`] if the body is not a JSON object and
    /// [`Error::MissingCode`] if no code field yields a non-empty code.
    pub fn from_json_body(body: &[u8], status: u16) -> Result<Self> {
        let body: serde_json::Map<String, serde_json::Value> = serde_json::from_slice(body)?;
        let body: JsonErrorBody = serde_json::from_value(serde_json::Value::Object(body))?;

        let code = [body.type_, body.code]
            .into_iter()
            .flatten()
            .map(|code| sanitize_error_code(&code).to_owned())
            .find(|code| !code.is_empty())
            .ok_or(Error::MissingCode)?;

        Ok(Self {
            code,
            message: body.message.unwrap_or_default(),
            fault: ErrorFault::from_status(status),
        })
    }
}

impl ApiError for GenericApiError {
    fn error_code(&self) -> &str {
        &self.code
    }

    fn error_message(&self) -> &str {
        &self.message
    }

    fn error_fault(&self) -> ErrorFault {
        self.fault
    }
}

/// A modeled service error, type-erased so it can sit in a cause chain.
///
/// The wrapped error is the `source()` of the `ServiceError`, so it stays a
/// link of its own in the chain and can still be extracted by type with
/// [`errs::as_ref`]. Display is that of the wrapped error.
///
/// [`errs::as_ref`]: crate::errs::as_ref
pub struct ServiceError {
    inner: Box<dyn ErasedModeledError>,
}

impl ServiceError {
    pub fn new(err: impl ModeledError) -> Self {
        Self {
            inner: Box::new(err),
        }
    }

    /// The wrapped error.
    pub fn inner(&self) -> &dyn ModeledError {
        self.inner.as_modeled()
    }
}

impl std::fmt::Debug for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceError")
            .field("inner", &self.inner.as_error())
            .finish()
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self.inner.as_error(), f)
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_error())
    }
}

impl ApiError for ServiceError {
    fn error_code(&self) -> &str {
        self.inner.as_modeled().error_code()
    }

    fn error_message(&self) -> &str {
        self.inner.as_modeled().error_message()
    }

    fn error_fault(&self) -> ErrorFault {
        self.inner.as_modeled().error_fault()
    }
}

// Gives both views of the boxed error without trait object upcasting.
trait ErasedModeledError: Send + Sync {
    fn as_modeled(&self) -> &dyn ModeledError;
    fn as_error(&self) -> &(dyn std::error::Error + 'static);
}

impl<E: ModeledError> ErasedModeledError for E {
    fn as_modeled(&self) -> &dyn ModeledError {
        self
    }

    fn as_error(&self) -> &(dyn std::error::Error + 'static) {
        self
    }
}

/// A builder for creating a [`GenericApiError`].
#[derive(Debug, Clone, Default)]
pub struct GenericApiErrorBuilder {
    code: Option<String>,
    message: Option<String>,
    fault: ErrorFault,
}

impl GenericApiErrorBuilder {
    /// Set the error code. Required.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Set the error message. Defaults to an empty message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn fault(mut self, fault: ErrorFault) -> Self {
        self.fault = fault;
        self
    }

    /// Build the error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCode`] if no code, or an empty one, was set.
    pub fn build(self) -> Result<GenericApiError> {
        let code = self
            .code
            .filter(|code| !code.is_empty())
            .ok_or(Error::MissingCode)?;

        Ok(GenericApiError {
            code,
            message: self.message.unwrap_or_default(),
            fault: self.fault,
        })
    }
}

#[derive(Debug, Deserialize)]
struct JsonErrorBody {
    #[serde(rename = "__type")]
    type_: Option<String>,
    #[serde(alias = "Code")]
    code: Option<String>,
    #[serde(alias = "Message")]
    message: Option<String>,
}

fn sanitize_error_code(code: &str) -> &str {
    let code = code.split(':').next().unwrap_or(code);
    match code.rfind('#') {
        Some(i) => &code[i + 1..],
        None => code,
    }
}
