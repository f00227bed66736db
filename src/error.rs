//! Error types for the calculation server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Calc Error Enum ==
/// Unified error type for the calculation server.
#[derive(Error, Debug)]
pub enum CalcError {
    /// Requested path does not name a supported calculation
    #[error("unknown calculation operation: {0}")]
    UnknownOperation(String),

    /// Query parameters are missing, malformed, or not finite numbers
    #[error("invalid query parameters: {0}")]
    InvalidParams(String),

    /// Division by zero
    #[error("division by zero: Y param cannot be 0")]
    DivisionByZero,

    /// Cache backend rejected an insert or update
    #[error("cache storage fault: {0}")]
    Storage(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CalcError {
    fn into_response(self) -> Response {
        let status = match &self {
            CalcError::UnknownOperation(_) => StatusCode::BAD_REQUEST,
            CalcError::InvalidParams(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CalcError::DivisionByZero => StatusCode::UNPROCESSABLE_ENTITY,
            CalcError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the calculation server.
pub type Result<T> = std::result::Result<T, CalcError>;
