use serde::{Deserialize, Serialize};

pub const INSUFFICIENT_COORDINATES: &str = "At least 2 coordinates required";
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// Error payload returned to callers. Messages are fixed strings and never
/// carry the underlying cause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }

    pub fn insufficient_coordinates() -> Self {
        Self::new(INSUFFICIENT_COORDINATES)
    }

    pub fn method_not_allowed() -> Self {
        Self::new(METHOD_NOT_ALLOWED)
    }

    pub fn internal() -> Self {
        Self::new(INTERNAL_SERVER_ERROR)
    }
}
