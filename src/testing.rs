//! In-memory backend for exercising flows without a network.

use std::cell::{Cell, RefCell};

use reqwest::StatusCode;

use crate::api::{Activity, ActivityId, DateIdeasApi, NewActivity, Recommendation, UserId};
use crate::error::{AppError, AppResult};

#[derive(Default)]
pub struct FakeApi {
	user_id: i64,
	activities: RefCell<Vec<Activity>>,
	recommendations: Vec<Recommendation>,
	failure: Option<(StatusCode, String)>,
	registered: RefCell<Vec<String>>,
	calls: Cell<usize>,
}

impl FakeApi {
	pub fn with_user_id(mut self, id: i64) -> Self {
		self.user_id = id;
		self
	}

	pub fn with_activities(self, activities: Vec<Activity>) -> Self {
		*self.activities.borrow_mut() = activities;
		self
	}

	pub fn with_recommendations(mut self, recommendations: Vec<Recommendation>) -> Self {
		self.recommendations = recommendations;
		self
	}

	pub fn failing(mut self, status: StatusCode, message: &str) -> Self {
		self.failure = Some((status, message.to_string()));
		self
	}

	pub fn registered(&self) -> Vec<String> {
		self.registered.borrow().clone()
	}

	pub fn calls(&self) -> usize {
		self.calls.get()
	}

	fn check(&self) -> AppResult<()> {
		self.calls.set(self.calls.get() + 1);
		match &self.failure {
			Some((status, message)) => Err(AppError::Status {
				status: *status,
				message: message.clone(),
			}),
			None => Ok(()),
		}
	}
}

impl DateIdeasApi for FakeApi {
	async fn register(&self, username: &str) -> AppResult<UserId> {
		self.registered.borrow_mut().push(username.to_string());
		self.check()?;
		Ok(UserId(self.user_id))
	}

	async fn activities(&self, _user: UserId) -> AppResult<Vec<Activity>> {
		self.check()?;
		Ok(self.activities.borrow().clone())
	}

	async fn recommend(
		&self,
		_user: UserId,
		activity: ActivityId,
	) -> AppResult<Vec<Recommendation>> {
		self.check()?;
		Ok(self
			.recommendations
			.iter()
			.filter(|r| r.activity.id != activity)
			.cloned()
			.collect())
	}

	async fn add_activity(&self, _user: UserId, activity: &NewActivity) -> AppResult<ActivityId> {
		self.check()?;
		let mut activities = self.activities.borrow_mut();
		let id = ActivityId(activities.iter().map(|a| a.id.0).max().unwrap_or(0) + 1);
		activities.push(Activity {
			id,
			name: activity.name.clone(),
			category: activity.category,
			description: activity.description.clone(),
			timeframe: activity.timeframe.clone(),
			mood: activity.mood.clone(),
			weather: activity.weather.clone(),
		});
		Ok(id)
	}
}
