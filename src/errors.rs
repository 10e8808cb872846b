// src/errors.rs
use thiserror::Error;

/// Detail string returned to the caller when the interpreter overruns its deadline.
pub const TIMEOUT_DETAIL: &str = "Code execution timeout";

#[derive(Error, Debug)]
pub enum ExecError {
    #[error("{}", TIMEOUT_DETAIL)]
    Timeout,

    /// Temp file, spawn or pipe failure. The message is surfaced as-is.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ExecError>;

impl actix_web::ResponseError for ExecError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;
        match self {
            ExecError::Timeout => StatusCode::BAD_REQUEST,
            ExecError::Io(_) | ExecError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code()).json(crate::models::ErrorDetail {
            detail: self.to_string(),
        })
    }
}
