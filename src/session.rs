//! Who is signed in, and how they get there.

use log::{error, info};

use crate::api::{DateIdeasApi, UserId};
use crate::error::{AppResult, ValidationError};

/// Client-held authentication state, owned by the app shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Session {
	/// Nobody has registered yet.
	#[default]
	Unauthenticated,
	/// Registered as this user.
	Authenticated(UserId),
}

impl Session {
	/// The signed-in user, if any.
	pub fn user_id(self) -> Option<UserId> {
		match self {
			Session::Authenticated(id) => Some(id),
			Session::Unauthenticated => None,
		}
	}

	/// Whether registration has happened.
	pub fn is_authenticated(self) -> bool {
		self.user_id().is_some()
	}
}

/// Trimmed username, or a rejection if nothing is left.
pub fn validate_username(raw: &str) -> Result<&str, ValidationError> {
	let username = raw.trim();
	if username.is_empty() {
		return Err(ValidationError::EmptyUsername);
	}
	Ok(username)
}

/// Submit a username once. Nothing is sent if it fails validation.
pub async fn register<A: DateIdeasApi>(api: &A, raw_username: &str) -> AppResult<Session> {
	let username = validate_username(raw_username)?;
	match api.register(username).await {
		Ok(user_id) => {
			info!("Registered {username:?} as user {user_id}");
			Ok(Session::Authenticated(user_id))
		}
		Err(e) => {
			error!("Registration of {username:?} failed: {e}");
			Err(e)
		}
	}
}
