use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use subtitle_application::ApplicationError;
use subtitle_domain::DomainError;

#[derive(Debug)]
pub enum HttpError {
    BadRequest { message: String },
    Validation { message: String },
    Internal { message: String },
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            HttpError::Validation { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
            HttpError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (
            status,
            Json(json!({
                "error": message,
            })),
        )
            .into_response()
    }
}

pub fn error_mapper(error: ApplicationError) -> HttpError {
    match error {
        ApplicationError::Domain(domain) => match domain {
            DomainError::Decode(_)
            | DomainError::Format(_)
            | DomainError::UnsupportedProfile { .. } => HttpError::BadRequest {
                message: domain.to_string(),
            },
            DomainError::Recognition(_) => HttpError::Internal {
                message: domain.to_string(),
            },
        },
        ApplicationError::Validation(message) => HttpError::Validation { message },
        ApplicationError::Internal(message) => HttpError::Internal { message },
    }
}
