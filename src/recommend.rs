//! Recommendation lookups for a clicked activity.

use log::{error, info};

use crate::api::{ActivityId, DateIdeasApi, Recommendation, UserId};
use crate::error::AppResult;

/// Look up activities similar to `activity`. Failures are logged and
/// handed back for the caller to display; they never panic.
pub async fn request_recommendations<A: DateIdeasApi>(
	api: &A,
	user: UserId,
	activity: ActivityId,
) -> AppResult<Vec<Recommendation>> {
	match api.recommend(user, activity).await {
		Ok(recommendations) => {
			info!(
				"Got {} recommendations for activity {activity}",
				recommendations.len()
			);
			Ok(recommendations)
		}
		Err(e) => {
			error!("Recommendation lookup for activity {activity} failed: {e}");
			Err(e)
		}
	}
}
