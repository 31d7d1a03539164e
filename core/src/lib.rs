// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # awserr Core
//!
//! Core traits and types for the awserr ecosystem.
//!
//! This crate models the errors an AWS API client hands back and provides the
//! cause-chain search used to classify them:
//!
//! - [`ApiError`] and [`HttpResponseError`] are capabilities: behaviors an
//!   error exposes regardless of its concrete type.
//! - [`GenericApiError`], [`ServiceError`], [`ResponseError`] and
//!   [`OperationError`] are the shapes a failed call is wrapped in, from the
//!   innermost provider error to the outermost operation context.
//! - The capabilities are sealed. Errors defined outside this crate take
//!   part by implementing [`ModeledError`] and being wrapped in a
//!   [`ServiceError`], or by being the source of a [`ResponseError`].
//! - [`errs`] walks `std::error::Error::source` chains looking for a type or
//!   a capability.

pub mod api;
pub mod errs;
pub mod error;
pub mod http;
pub mod operation;

pub use api::*;
pub use error::*;
pub use http::*;
pub use operation::*;

/// A boxed error that can cross threads, used for causes of SDK errors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

mod sealed {
    /// Restricts the capability traits to the types [`errs::find`] knows how
    /// to recognize.
    ///
    /// [`errs::find`]: crate::errs::find
    pub trait Sealed {}

    impl Sealed for crate::GenericApiError {}
    impl Sealed for crate::ServiceError {}
    impl Sealed for crate::ResponseError {}
    impl Sealed for reqwest::Error {}
}
