//! The uniform `{success, data?, error?}` result returned by every action.

use serde::Serialize;

use crate::error::ActionError;

/// Outcome of a domain action.
///
/// Actions never propagate errors to their caller; failures are folded into
/// `success: false` with a generic message. Callers pattern on `success`.
#[derive(Debug, Clone, Serialize)]
pub struct ActionResult<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Failure category, kept for transport mapping and never serialized.
    #[serde(skip)]
    pub failure: Option<ActionError>,
}

impl<T> ActionResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            failure: None,
        }
    }

    pub fn fail(err: ActionError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(err.to_string()),
            failure: Some(err),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Returns the payload of a successful result.
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ActionResult<U> {
        ActionResult {
            success: self.success,
            data: self.data.map(f),
            error: self.error,
            failure: self.failure,
        }
    }
}

impl<T> From<Result<T, ActionError>> for ActionResult<T> {
    fn from(result: Result<T, ActionError>) -> Self {
        match result {
            Ok(data) => ActionResult::ok(data),
            Err(err) => ActionResult::fail(err),
        }
    }
}
