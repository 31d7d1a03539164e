// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Searching an error's cause chain.
//!
//! An error chain is `err`, `err.source()`, `err.source().source()` and so on.
//! Every search here walks it from the outermost error inwards and stops at
//! the first value that matches.

use std::error::Error as StdError;

use crate::{ApiError, GenericApiError, HttpResponseError, ResponseError, ServiceError};

/// An iterator over an error and its causes, outermost first.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

/// Iterate over `err` and each of its causes.
pub fn chain<'a>(err: &'a (dyn StdError + 'static)) -> Chain<'a> {
    Chain { next: Some(err) }
}

/// Returns the first error in the chain whose concrete type is `T`.
pub fn as_ref<'a, T>(err: &'a (dyn StdError + 'static)) -> Option<&'a T>
where
    T: StdError + 'static,
{
    chain(err).find_map(|e| e.downcast_ref::<T>())
}

/// Whether any error in the chain has the concrete type `T`.
pub fn is_a<T>(err: &(dyn StdError + 'static)) -> bool
where
    T: StdError + 'static,
{
    as_ref::<T>(err).is_some()
}

/// A set of behaviors an error in a chain can expose, independent of its
/// concrete type.
///
/// Implemented for the capability trait objects (`dyn ApiError`,
/// `dyn HttpResponseError`). Both traits are sealed, so each probe knows
/// every type that can expose its capability. [`probe`](Capability::probe)
/// inspects a single error, [`find`] applies it along the whole chain.
pub trait Capability: 'static {
    /// Returns `err` viewed as `Self` if its concrete type exposes this
    /// capability.
    fn probe<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a Self>;
}

impl Capability for dyn ApiError {
    fn probe<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a Self> {
        if let Some(e) = err.downcast_ref::<GenericApiError>() {
            return Some(e);
        }

        err.downcast_ref::<ServiceError>()
            .map(|e| e as &dyn ApiError)
    }
}

impl Capability for dyn HttpResponseError {
    fn probe<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a Self> {
        if let Some(e) = err.downcast_ref::<ResponseError>() {
            return Some(e);
        }

        err.downcast_ref::<reqwest::Error>()
            .filter(|e| e.status().is_some())
            .map(|e| e as &dyn HttpResponseError)
    }
}

/// Returns the first error in the chain that exposes the capability `C`.
///
/// # Example
///
/// ```
/// use awserr_core::{ApiError, GenericApiError, OperationError, errs};
///
/// let err = OperationError::new(
///     "SQS",
///     "SendMessage",
///     GenericApiError::new("QueueDoesNotExist", "The queue does not exist"),
/// );
///
/// let api_err = errs::find::<dyn ApiError>(&err).map(|e| e.error_code());
/// assert_eq!(api_err, Some("QueueDoesNotExist"));
/// ```
pub fn find<'a, C>(err: &'a (dyn StdError + 'static)) -> Option<&'a C>
where
    C: Capability + ?Sized,
{
    chain(err).find_map(C::probe)
}
