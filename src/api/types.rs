use std::fmt;

use serde::{Deserialize, Serialize};

/// Backend-assigned user identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

/// Backend-assigned activity identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(pub i64);

impl fmt::Display for ActivityId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

/// Color-coding bucket of an activity. Parsed case-insensitively; anything
/// unrecognized, empty or absent is `Other`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Category {
	/// `indoor`
	Indoor,
	/// `outdoor`
	Outdoor,
	/// `creative`
	Creative,
	/// `lively`
	Lively,
	/// Anything else.
	#[default]
	Other,
}

impl Category {
	/// Every category, in legend order.
	pub const ALL: [Category; 5] = [
		Category::Indoor,
		Category::Outdoor,
		Category::Creative,
		Category::Lively,
		Category::Other,
	];

	/// Lowercase wire name.
	pub fn as_str(self) -> &'static str {
		match self {
			Category::Indoor => "indoor",
			Category::Outdoor => "outdoor",
			Category::Creative => "creative",
			Category::Lively => "lively",
			Category::Other => "other",
		}
	}
}

impl From<&str> for Category {
	fn from(raw: &str) -> Self {
		match raw.trim().to_ascii_lowercase().as_str() {
			"indoor" => Category::Indoor,
			"outdoor" => Category::Outdoor,
			"creative" => Category::Creative,
			"lively" => Category::Lively,
			_ => Category::Other,
		}
	}
}

impl From<Option<String>> for Category {
	fn from(raw: Option<String>) -> Self {
		raw.as_deref().map(Category::from).unwrap_or_default()
	}
}

impl From<Category> for String {
	fn from(category: Category) -> Self {
		category.as_str().to_string()
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A date idea as returned by `GET /api/activities`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Activity {
	/// Unique per backend.
	pub id: ActivityId,
	/// Display label.
	pub name: String,
	/// Drives the node color.
	#[serde(default)]
	pub category: Category,
	/// Free text. This and the fields below are empty when the backend has nothing.
	#[serde(default, deserialize_with = "null_as_empty")]
	pub description: String,
	/// e.g. "weekend".
	#[serde(default, deserialize_with = "null_as_empty")]
	pub timeframe: String,
	/// e.g. "cozy".
	#[serde(default, deserialize_with = "null_as_empty")]
	pub mood: String,
	/// e.g. "sunny".
	#[serde(default, deserialize_with = "null_as_empty")]
	pub weather: String,
}

impl Activity {
	/// Bare activity with only the fields the graph needs.
	pub fn new(id: i64, name: impl Into<String>, category: Category) -> Self {
		Self {
			id: ActivityId(id),
			name: name.into(),
			category,
			description: String::new(),
			timeframe: String::new(),
			mood: String::new(),
			weather: String::new(),
		}
	}
}

/// One entry of `GET /api/recommend`, most similar first.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Recommendation {
	/// The recommended activity.
	#[serde(flatten)]
	pub activity: Activity,
	/// Cosine similarity to the clicked activity.
	#[serde(default)]
	pub similarity: f64,
}

/// Fields accepted by `POST /api/activities`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewActivity {
	/// Required; trimmed before submission.
	pub name: String,
	/// Sent as its lowercase name.
	pub category: Category,
	/// See [`Activity::description`].
	pub description: String,
	/// See [`Activity::timeframe`].
	pub timeframe: String,
	/// See [`Activity::mood`].
	pub mood: String,
	/// See [`Activity::weather`].
	pub weather: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct RegisterRequest<'a> {
	pub username: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RegisterResponse {
	pub user_id: UserId,
}

#[derive(Debug, Serialize)]
pub(crate) struct AddActivityRequest<'a> {
	pub user_id: UserId,
	pub name: &'a str,
	pub description: &'a str,
	pub timeframe: &'a str,
	pub mood: &'a str,
	pub weather: &'a str,
	pub category: Category,
}

impl<'a> AddActivityRequest<'a> {
	pub fn new(user_id: UserId, activity: &'a NewActivity) -> Self {
		Self {
			user_id,
			name: &activity.name,
			description: &activity.description,
			timeframe: &activity.timeframe,
			mood: &activity.mood,
			weather: &activity.weather,
			category: activity.category,
		}
	}
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddActivityResponse {
	pub activity_id: ActivityId,
}

/// `{"error": "..."}` body the backend sends with 4xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
	pub error: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: serde::Deserializer<'de>,
{
	Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn category_parses_case_insensitively() {
		assert_eq!(Category::from("Indoor"), Category::Indoor);
		assert_eq!(Category::from("OUTDOOR"), Category::Outdoor);
		assert_eq!(Category::from(" creative "), Category::Creative);
		assert_eq!(Category::from("lively"), Category::Lively);
		assert_eq!(Category::from("romantic"), Category::Other);
		assert_eq!(Category::from(""), Category::Other);
	}

	#[test]
	fn activity_tolerates_missing_and_null_fields() {
		let parsed: Vec<Activity> = serde_json::from_value(json!([
			{"id": 1, "name": "Stargazing", "category": "Outdoor", "description": null},
			{"id": 2, "name": "Dancing", "category": null},
			{"id": 3, "name": "Cook pasta"},
		]))
		.unwrap();

		assert_eq!(parsed[0].category, Category::Outdoor);
		assert_eq!(parsed[0].description, "");
		assert_eq!(parsed[1].category, Category::Other);
		assert_eq!(parsed[2].category, Category::Other);
		assert_eq!(parsed[2].id, ActivityId(3));
	}

	#[test]
	fn recommendation_flattens_activity() {
		let rec: Recommendation = serde_json::from_value(json!({
			"id": 7,
			"name": "Alpaca farm!",
			"description": "",
			"timeframe": "weekend",
			"mood": "",
			"weather": "sunny",
			"category": "outdoor",
			"similarity": 0.82
		}))
		.unwrap();

		assert_eq!(rec.activity.id, ActivityId(7));
		assert_eq!(rec.activity.weather, "sunny");
		assert!((rec.similarity - 0.82).abs() < 1e-9);
	}

	#[test]
	fn register_wire_keys() {
		let body = serde_json::to_value(RegisterRequest { username: "alice" }).unwrap();
		assert_eq!(body, json!({"username": "alice"}));

		let reply: RegisterResponse =
			serde_json::from_value(json!({"message": "User registered", "user_id": 42})).unwrap();
		assert_eq!(reply.user_id, UserId(42));
	}

	#[test]
	fn add_activity_reply_reads_activity_id() {
		let reply: AddActivityResponse =
			serde_json::from_value(json!({"message": "Activity added", "activity_id": 9})).unwrap();
		assert_eq!(reply.activity_id, ActivityId(9));
		assert!(serde_json::from_value::<AddActivityResponse>(json!({"id": 9})).is_err());
	}

	#[test]
	fn add_request_serializes_category_as_string() {
		let new = NewActivity {
			name: "Make Ceramics".into(),
			category: Category::Creative,
			..Default::default()
		};
		let body = serde_json::to_value(AddActivityRequest::new(UserId(4), &new)).unwrap();

		assert_eq!(body["user_id"], 4);
		assert_eq!(body["category"], "creative");
		assert_eq!(body["mood"], "");
	}
}
