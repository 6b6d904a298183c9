//! State behind the profile page: the user's activities, the graph derived
//! from them, and whatever recommendation lookup is on screen.

use log::{error, info};
use rand::Rng;

use crate::api::{Activity, ActivityId, DateIdeasApi, NewActivity, Recommendation, UserId};
use crate::error::{AppError, AppResult, ValidationError};
use crate::graph::{GraphData, GraphNode, build_activity_graph};

/// Tags a recommendation request so late replies can be told apart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Where the lookup for the selected node stands.
#[derive(Clone, Debug, PartialEq)]
pub enum RecommendationStatus {
	/// Request in flight.
	Loading,
	/// Backend answer, most similar first.
	Ready(Vec<Recommendation>),
	/// Lookup failed; the notice says why.
	Failed,
}

/// The node whose recommendations are on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
	/// Clicked activity.
	pub activity: ActivityId,
	/// Its name at click time.
	pub label: String,
	/// Lookup progress.
	pub status: RecommendationStatus,
	ticket: Ticket,
}

/// Everything the profile page renders, changed only through its methods.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileModel {
	activities: Vec<Activity>,
	graph: GraphData,
	selection: Option<Selection>,
	notice: Option<String>,
	loaded: bool,
	last_ticket: Ticket,
}

impl ProfileModel {
	/// Latest list from the backend.
	pub fn activities(&self) -> &[Activity] {
		&self.activities
	}

	/// Graph derived from [`Self::activities`].
	pub fn graph(&self) -> &GraphData {
		&self.graph
	}

	/// Current recommendation lookup, if a node was clicked.
	pub fn selection(&self) -> Option<&Selection> {
		self.selection.as_ref()
	}

	/// Error text to show above the graph.
	pub fn notice(&self) -> Option<&str> {
		self.notice.as_deref()
	}

	/// Whether an activity fetch has completed at least once.
	pub fn is_loaded(&self) -> bool {
		self.loaded
	}

	/// Replace the activity list and recompute the graph from scratch.
	pub fn load_activities<R: Rng + ?Sized>(&mut self, activities: Vec<Activity>, rng: &mut R) {
		self.graph = build_activity_graph(&activities, rng);
		self.activities = activities;
		self.loaded = true;
		self.notice = None;
		if let Some(selection) = &self.selection {
			if !self.activities.iter().any(|a| a.id == selection.activity) {
				self.selection = None;
			}
		}
	}

	/// Keep whatever graph is showing and report the failure.
	pub fn fail_activities(&mut self, err: &AppError) {
		self.loaded = true;
		self.notice = Some(format!("Could not load your date ideas: {err}"));
	}

	/// Select `node` and issue a ticket for its lookup.
	pub fn begin_recommendation(&mut self, node: &GraphNode) -> Ticket {
		self.last_ticket = Ticket(self.last_ticket.0 + 1);
		self.selection = Some(Selection {
			activity: node.id,
			label: node.label.clone(),
			status: RecommendationStatus::Loading,
			ticket: self.last_ticket,
		});
		self.last_ticket
	}

	/// Record the outcome of the lookup issued as `ticket`. Returns `false`
	/// when a newer lookup has superseded it. Never touches the graph.
	pub fn apply_recommendation(
		&mut self,
		ticket: Ticket,
		result: AppResult<Vec<Recommendation>>,
	) -> bool {
		let Some(selection) = self.selection.as_mut().filter(|s| s.ticket == ticket) else {
			return false;
		};
		match result {
			Ok(recommendations) => {
				selection.status = RecommendationStatus::Ready(recommendations);
			}
			Err(e) => {
				selection.status = RecommendationStatus::Failed;
				self.notice = Some(format!(
					"No recommendations for \"{}\": {e}",
					selection.label
				));
			}
		}
		true
	}

	/// Close the recommendation panel.
	pub fn clear_selection(&mut self) {
		self.selection = None;
	}

	/// Show `notice` until dismissed or the next successful load.
	pub fn set_notice(&mut self, notice: impl Into<String>) {
		self.notice = Some(notice.into());
	}

	/// Hide the notice.
	pub fn dismiss_notice(&mut self) {
		self.notice = None;
	}
}

/// Fetch the activity list for `user`, logging failures.
pub async fn fetch_activities<A: DateIdeasApi>(api: &A, user: UserId) -> AppResult<Vec<Activity>> {
	match api.activities(user).await {
		Ok(activities) => {
			info!("Loaded {} activities for user {user}", activities.len());
			Ok(activities)
		}
		Err(e) => {
			error!("Loading activities for user {user} failed: {e}");
			Err(e)
		}
	}
}

/// Create an activity, then return the refreshed list.
pub async fn submit_activity<A: DateIdeasApi>(
	api: &A,
	user: UserId,
	mut activity: NewActivity,
) -> AppResult<Vec<Activity>> {
	activity.name = activity.name.trim().to_string();
	if activity.name.is_empty() {
		return Err(ValidationError::EmptyActivityName.into());
	}
	match api.add_activity(user, &activity).await {
		Ok(id) => info!("Added activity {id} {:?}", activity.name),
		Err(e) => {
			error!("Adding activity {:?} failed: {e}", activity.name);
			return Err(e);
		}
	}
	fetch_activities(api, user).await
}
