// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # awserr
//!
//! awserr inspects the errors an AWS API client returns and answers the
//! questions retry and recovery logic asks of them: which provider error
//! code was returned, what did its message say, and which HTTP status did
//! the transport see. This crate is the main entrypoint, re-exporting the
//! error model and, with the default `classify` feature, the predicates.

pub use awserr_core::*;

#[cfg(feature = "classify")]
pub use awserr_classify::*;
