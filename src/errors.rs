use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::{constants::MISSING_PARAMETERS_MESSAGE, services::http_helpers::bad_request};

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("{}", MISSING_PARAMETERS_MESSAGE)]
    MissingParameters,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid example on line {line}: {message}")]
    InvalidExample { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingParameters => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidExample { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            // The survey platform shows this body to participants as-is.
            AppError::MissingParameters => bad_request(MISSING_PARAMETERS_MESSAGE),
            _ => HttpResponse::build(self.status_code()).json(ErrorResponse {
                error: self.to_string(),
                code: self.status_code().as_u16(),
            }),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            AppError::Io(err.to_string())
        } else {
            AppError::InternalError(format!("JSON serialization error: {}", err))
        }
    }
}
impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::ConfigError(format!("invalid URL: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
