//! Error taxonomy shared by the API client and the UI flows.

use reqwest::StatusCode;
use thiserror::Error;

/// Input rejected on the client before anything is sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
	/// Blank after trimming.
	#[error("Username must not be empty")]
	EmptyUsername,

	/// Blank after trimming.
	#[error("Activity name must not be empty")]
	EmptyActivityName,
}

/// Every failure a request or flow can surface.
#[derive(Error, Debug)]
pub enum AppError {
	/// Rejected before sending.
	#[error("{0}")]
	Validation(#[from] ValidationError),

	/// The request never completed, or its body did not decode.
	#[error("Request failed: {0}")]
	Network(#[from] reqwest::Error),

	/// Non-2xx reply.
	#[error("Server responded {status}: {message}")]
	Status {
		/// HTTP status.
		status: StatusCode,
		/// Backend `error` field, short plain body, or status reason.
		message: String,
	},

	/// An endpoint did not resolve against the configured base.
	#[error("Invalid endpoint URL: {0}")]
	InvalidUrl(#[from] url::ParseError),
}

/// Result alias used throughout the crate.
pub type AppResult<T> = Result<T, AppError>;
