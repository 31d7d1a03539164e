// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use crate::BoxError;

/// The outermost error of a failed service call, naming the service and
/// operation that failed.
#[derive(thiserror::Error, Debug)]
#[error("operation error {service_id}: {operation_name}, {source}")]
pub struct OperationError {
    service_id: String,
    operation_name: String,
    #[source]
    source: BoxError,
}

impl OperationError {
    pub fn new(
        service_id: impl Into<String>,
        operation_name: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            operation_name: operation_name.into(),
            source: source.into(),
        }
    }

    pub fn service_id(&self) -> &str {
        &self.service_id
    }

    pub fn operation_name(&self) -> &str {
        &self.operation_name
    }
}
