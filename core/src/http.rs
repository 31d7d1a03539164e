// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Transport-level response errors.

use crate::{BoxError, Error, Result};

/// A failure that carries the raw HTTP status of the response.
///
/// Sealed like [`ApiError`](crate::ApiError): implemented by
/// [`ResponseError`] and `reqwest::Error`. A transport error from any other
/// client becomes visible by being the source of a [`ResponseError`] built
/// with the status it saw.
pub trait HttpResponseError: crate::sealed::Sealed + std::error::Error + Send + Sync + 'static {
    fn http_status_code(&self) -> u16;
}

/// The HTTP response of a call was received but the call failed.
///
/// Wraps the error the response was deserialized into, typically an
/// [`ApiError`](crate::ApiError), so that both the status and the provider
/// code stay reachable through the cause chain.
#[derive(Debug)]
pub struct ResponseError {
    status: u16,
    request_id: Option<String>,
    source: Option<BoxError>,
}

impl ResponseError {
    /// Create a new [`ResponseErrorBuilder`] instance.
    pub fn builder() -> ResponseErrorBuilder {
        ResponseErrorBuilder::default()
    }

    /// The request ID the provider assigned, if the response carried one.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

impl HttpResponseError for ResponseError {
    fn http_status_code(&self) -> u16 {
        self.status
    }
}

impl std::fmt::Display for ResponseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "https response error StatusCode: {}, RequestID: {}",
            self.status,
            self.request_id.as_deref().unwrap_or_default()
        )?;
        if let Some(source) = &self.source {
            write!(f, ", {source}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ResponseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn std::error::Error + 'static))
    }
}

/// A builder for creating a [`ResponseError`].
#[derive(Debug, Default)]
pub struct ResponseErrorBuilder {
    status: Option<u16>,
    request_id: Option<String>,
    source: Option<BoxError>,
}

impl ResponseErrorBuilder {
    /// Set the HTTP status code. Required.
    pub fn status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Set the error the response body was decoded into.
    pub fn source(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Build the error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStatus`] if the status is missing or outside
    /// `100..=599`.
    pub fn build(self) -> Result<ResponseError> {
        let status = self.status.unwrap_or_default();
        if !(100..=599).contains(&status) {
            return Err(Error::InvalidStatus(status));
        }

        Ok(ResponseError {
            status,
            request_id: self.request_id,
            source: self.source,
        })
    }
}

/// `reqwest` reports the status of responses rejected by `error_for_status`.
///
/// Errors without a response (connect, timeout, builder errors) have no
/// status and report `0` here. [`errs::find`](crate::errs::find) skips them,
/// so a `&dyn HttpResponseError` obtained from a chain search always carries
/// a real status.
impl HttpResponseError for reqwest::Error {
    fn http_status_code(&self) -> u16 {
        self.status().map_or(0, |status| status.as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GenericApiError;
    use std::error::Error as _;

    #[test]
    fn test_display_with_source() {
        let Ok(err) = ResponseError::builder()
            .status(404)
            .request_id("5a8d7e1f")
            .source(GenericApiError::new("NoSuchKey", "The key does not exist"))
            .build()
        else {
            panic!("valid status should build");
        };

        assert_eq!(
            err.to_string(),
            "https response error StatusCode: 404, RequestID: 5a8d7e1f, \
             api error NoSuchKey: The key does not exist"
        );
        assert_eq!(err.request_id(), Some("5a8d7e1f"));
        assert_eq!(err.http_status_code(), 404);
    }

    #[test]
    fn test_display_without_source() {
        let Ok(err) = ResponseError::builder().status(503).build() else {
            panic!("valid status should build");
        };

        assert_eq!(
            err.to_string(),
            "https response error StatusCode: 503, RequestID: "
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_source_is_exposed() {
        let Ok(err) = ResponseError::builder()
            .status(400)
            .source(GenericApiError::new("ValidationException", "bad input"))
            .build()
        else {
            panic!("valid status should build");
        };

        let source = err.source().and_then(|s| s.downcast_ref::<GenericApiError>());
        assert_eq!(
            source,
            Some(&GenericApiError::new("ValidationException", "bad input"))
        );
    }

    #[test]
    fn test_invalid_status() {
        assert!(matches!(
            ResponseError::builder().build(),
            Err(Error::InvalidStatus(0))
        ));
        assert!(matches!(
            ResponseError::builder().status(600).build(),
            Err(Error::InvalidStatus(600))
        ));
        assert!(matches!(
            ResponseError::builder().status(99).build(),
            Err(Error::InvalidStatus(99))
        ));
    }

    #[test]
    fn test_reqwest_error_without_status() {
        let Err(err) = reqwest::Client::new().get("not a url").build() else {
            panic!("invalid url should fail to build");
        };

        assert_eq!(err.http_status_code(), 0);
        assert!(crate::errs::find::<dyn HttpResponseError>(&err).is_none());
    }
}
