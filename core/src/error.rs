// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Crate-wide error definitions.
//!
//! These are the failures of building SDK error values, not the SDK errors
//! themselves. See [`crate::api`] and [`crate::http`] for those.

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Api error code is required")]
    MissingCode,

    #[error("Invalid HTTP status code: {0}")]
    InvalidStatus(u16),

    #[error("Failed to parse the error body")]
    ParseError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
