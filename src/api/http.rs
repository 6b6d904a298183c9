use log::debug;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::DateIdeasApi;
use super::types::{
	Activity, ActivityId, AddActivityRequest, AddActivityResponse, ErrorBody, NewActivity,
	Recommendation, RegisterRequest, RegisterResponse, UserId,
};
use crate::config::ApiConfig;
use crate::error::{AppError, AppResult};

/// Longest non-JSON error body shown verbatim; anything bigger (or markup)
/// falls back to the status reason.
const MAX_PLAIN_ERROR_LEN: usize = 200;

/// [`DateIdeasApi`] over `reqwest` (browser `fetch` on wasm32).
#[derive(Clone, Debug)]
pub struct HttpApi {
	client: Client,
	config: ApiConfig,
}

impl HttpApi {
	/// Client for the backend at `config`.
	pub fn new(config: ApiConfig) -> Self {
		Self {
			client: Client::new(),
			config,
		}
	}

	/// Where requests are sent.
	pub fn config(&self) -> &ApiConfig {
		&self.config
	}

	fn register_request(&self, username: &str) -> AppResult<RequestBuilder> {
		let url = self.config.endpoint("/api/register")?;
		Ok(self.client.post(url).json(&RegisterRequest { username }))
	}

	fn activities_request(&self, user: UserId) -> AppResult<RequestBuilder> {
		let url = self.config.endpoint("/api/activities")?;
		Ok(self.client.get(url).query(&[("user_id", user.0)]))
	}

	fn recommend_request(&self, user: UserId, activity: ActivityId) -> AppResult<RequestBuilder> {
		let url = self.config.endpoint("/api/recommend")?;
		Ok(self
			.client
			.get(url)
			.query(&[("user_id", user.0), ("activity_id", activity.0)]))
	}

	fn add_activity_request(
		&self,
		user: UserId,
		activity: &NewActivity,
	) -> AppResult<RequestBuilder> {
		let url = self.config.endpoint("/api/activities")?;
		Ok(self
			.client
			.post(url)
			.json(&AddActivityRequest::new(user, activity)))
	}
}

impl DateIdeasApi for HttpApi {
	async fn register(&self, username: &str) -> AppResult<UserId> {
		debug!("POST /api/register");
		let response = self.register_request(username)?.send().await?;
		let body: RegisterResponse = decode(response).await?;
		Ok(body.user_id)
	}

	async fn activities(&self, user: UserId) -> AppResult<Vec<Activity>> {
		debug!("GET /api/activities user_id={user}");
		let response = self.activities_request(user)?.send().await?;
		decode(response).await
	}

	async fn recommend(
		&self,
		user: UserId,
		activity: ActivityId,
	) -> AppResult<Vec<Recommendation>> {
		debug!("GET /api/recommend user_id={user} activity_id={activity}");
		let response = self.recommend_request(user, activity)?.send().await?;
		decode(response).await
	}

	async fn add_activity(&self, user: UserId, activity: &NewActivity) -> AppResult<ActivityId> {
		debug!("POST /api/activities user_id={user}");
		let response = self.add_activity_request(user, activity)?.send().await?;
		let body: AddActivityResponse = decode(response).await?;
		Ok(body.activity_id)
	}
}

async fn decode<T: DeserializeOwned>(response: Response) -> AppResult<T> {
	let status = response.status();
	if status.is_success() {
		return Ok(response.json().await?);
	}
	let text = response.text().await.unwrap_or_default();
	Err(status_error(status, &text))
}

fn status_error(status: StatusCode, body: &str) -> AppError {
	let message = serde_json::from_str::<ErrorBody>(body)
		.map(|b| b.error)
		.unwrap_or_else(|_| {
			let trimmed = body.trim();
			let plain = !trimmed.is_empty()
				&& !trimmed.starts_with('<')
				&& trimmed.len() <= MAX_PLAIN_ERROR_LEN;
			if plain {
				trimmed.to_string()
			} else {
				status.canonical_reason().unwrap_or("unknown error").to_string()
			}
		});
	AppError::Status { status, message }
}
