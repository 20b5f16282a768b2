use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use pokemate_core::GeneratorError;
use thiserror::Error;

/// Errors returned to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
	#[error("{0}")]
	BadRequest(String),
	#[error("{0}")]
	Internal(String),
}

impl ResponseError for ApiError {
	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
			ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code())
			.insert_header(ContentType::plaintext())
			.body(self.to_string())
	}
}

/// Out-of-contract arguments are the caller's fault, anything else is ours.
impl From<GeneratorError> for ApiError {
	fn from(err: GeneratorError) -> Self {
		match err {
			GeneratorError::InvalidArgument(message) => ApiError::BadRequest(message),
			other => {
				error!("Name generation failed: {}", other);
				ApiError::Internal(other.to_string())
			}
		}
	}
}

/// Errors that prevent the server from starting.
#[derive(Debug, Error)]
pub enum ServerError {
	#[error("Configuration error: {0}")]
	Config(#[from] serde_yaml::Error),
	#[error("Generator error: {0}")]
	Generator(#[from] GeneratorError),
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

impl From<ServerError> for std::io::Error {
	fn from(err: ServerError) -> std::io::Error {
		match err {
			ServerError::Io(err) => err,
			other => std::io::Error::other(other.to_string()),
		}
	}
}
