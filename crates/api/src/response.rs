//! API response types.

use serde::Serialize;

/// Response body for operations that only report success.
#[derive(Debug, Serialize)]
pub struct OperationResponse {
    pub result: bool,
}

impl OperationResponse {
    /// The fixed `{"result": true}` success body.
    #[must_use]
    pub const fn ok() -> Self {
        Self { result: true }
    }
}
