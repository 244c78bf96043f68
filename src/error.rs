use std::net::AddrParseError;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockAlertError {
    /// A required request field was missing, empty, or not parseable.
    #[error("Missing required parameters: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid listen address: {0}")]
    InvalidAddress(#[from] AddrParseError),
}

impl IntoResponse for StockAlertError {
    fn into_response(self) -> Response {
        let status = match self {
            StockAlertError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
