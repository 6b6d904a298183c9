//! REST client for the date-ideas backend.

mod http;
mod types;

pub use http::HttpApi;
pub use types::{Activity, ActivityId, Category, NewActivity, Recommendation, UserId};

use crate::error::AppResult;

/// The four backend calls this app makes. Implemented over HTTP by
/// [`HttpApi`]; tests substitute an in-memory fake.
#[allow(async_fn_in_trait)]
pub trait DateIdeasApi {
	/// `POST /api/register`
	async fn register(&self, username: &str) -> AppResult<UserId>;

	/// `GET /api/activities?user_id=`
	async fn activities(&self, user: UserId) -> AppResult<Vec<Activity>>;

	/// `GET /api/recommend?user_id=&activity_id=`
	async fn recommend(
		&self,
		user: UserId,
		activity: ActivityId,
	) -> AppResult<Vec<Recommendation>>;

	/// `POST /api/activities`
	async fn add_activity(&self, user: UserId, activity: &NewActivity) -> AppResult<ActivityId>;
}
