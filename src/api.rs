//! HTTP client for the habit backend.
//!
//! Every call returns `Result<_, ApiError>`; non-success responses are
//! normalized to the backend's `detail` message when it sends one.

use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::components::constellation::Constellation;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Backend base URL, taken from `HABITS_API_URL` at compile time.
fn base_url() -> &'static str {
	match option_env!("HABITS_API_URL") {
		Some(url) if !url.trim().is_empty() => url.trim(),
		_ => DEFAULT_BASE_URL,
	}
}

/// A failed backend call, normalized for display.
#[derive(Debug, Error)]
pub enum ApiError {
	/// The backend answered with a non-success status. Carries the `detail`
	/// message from the response body when present.
	#[error("{0}")]
	Server(String),
	/// The request never completed (connection refused, CORS, timeout).
	#[error("network request failed: {0}")]
	Network(String),
	/// The response body did not match the expected shape.
	#[error("could not decode response: {0}")]
	Decode(String),
}

/// A habit definition as stored by the backend.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Habit {
	pub id: i64,
	pub name: String,
	pub category: String,
	pub difficulty: String,
	pub created_at: String,
}

/// One logged completion of a habit.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HabitCompletion {
	pub id: i64,
	pub habit_id: i64,
	pub date: String,
	pub time: String,
	pub duration: i64,
}

/// A server-generated insight about the user's habits.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Insight {
	#[serde(rename = "type")]
	pub kind: String,
	pub text: String,
	pub confidence: f64,
}

#[derive(Deserialize)]
struct ErrorBody {
	detail: Option<String>,
}

#[derive(Serialize)]
struct CreateHabitRequest<'a> {
	name: &'a str,
	category: &'a str,
	difficulty: &'a str,
}

#[derive(Serialize)]
struct CompleteHabitRequest {
	habit_id: i64,
	duration: i64,
}

async fn check(response: Response) -> Result<Response, ApiError> {
	if response.ok() {
		return Ok(response);
	}
	let fallback = format!("request failed with status {}", response.status());
	match response.json::<ErrorBody>().await {
		Ok(ErrorBody { detail: Some(detail) }) => Err(ApiError::Server(detail)),
		_ => Err(ApiError::Server(fallback)),
	}
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
	let response = Request::get(&format!("{}{path}", base_url()))
		.send()
		.await
		.map_err(|e| ApiError::Network(e.to_string()))?;
	let response = check(response).await?;
	response
		.json::<T>()
		.await
		.map_err(|e| ApiError::Decode(e.to_string()))
}

async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
	let response = Request::post(&format!("{}{path}", base_url()))
		.json(body)
		.map_err(|e| ApiError::Network(e.to_string()))?
		.send()
		.await
		.map_err(|e| ApiError::Network(e.to_string()))?;
	let response = check(response).await?;
	response
		.json::<T>()
		.await
		.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch all habits.
pub async fn get_habits() -> Result<Vec<Habit>, ApiError> {
	get_json("/api/habits").await
}

/// Create a habit with the given name, category, and difficulty.
pub async fn create_habit(
	name: &str,
	category: &str,
	difficulty: &str,
) -> Result<Habit, ApiError> {
	post_json(
		"/api/habits",
		&CreateHabitRequest {
			name,
			category,
			difficulty,
		},
	)
	.await
}

/// Log a completion of `habit_id` for today, `duration` in minutes.
pub async fn complete_habit(habit_id: i64, duration: i64) -> Result<HabitCompletion, ApiError> {
	post_json("/api/habits/complete", &CompleteHabitRequest { habit_id, duration }).await
}

/// Fetch the completions logged today.
pub async fn get_today_completions() -> Result<Vec<HabitCompletion>, ApiError> {
	get_json("/api/habits/today").await
}

/// Fetch today's constellation snapshot.
pub async fn get_today_constellation() -> Result<Constellation, ApiError> {
	get_json("/api/constellation/today").await
}

/// Fetch the generated insights, most relevant first.
pub async fn get_insights() -> Result<Vec<Insight>, ApiError> {
	get_json("/api/insights").await
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn insight_decodes_reserved_type_field() {
		let payload = r#"{"type": "correlation", "text": "Reading follows meditation", "confidence": 0.82}"#;
		let insight: Insight = serde_json::from_str(payload).unwrap();
		assert_eq!(insight.kind, "correlation");
		assert!((insight.confidence - 0.82).abs() < f64::EPSILON);
	}

	#[test]
	fn habit_decodes_backend_shape() {
		let payload = r#"{
			"id": 4,
			"name": "Stretch",
			"category": "health",
			"difficulty": "easy",
			"created_at": "2026-08-01T09:00:00"
		}"#;
		let habit: Habit = serde_json::from_str(payload).unwrap();
		assert_eq!(habit.name, "Stretch");
		assert_eq!(habit.difficulty, "easy");
	}

	#[test]
	fn create_request_serializes_expected_fields() {
		let body = CreateHabitRequest {
			name: "Journal",
			category: "creative",
			difficulty: "medium",
		};
		let json = serde_json::to_value(&body).unwrap();
		assert_eq!(json["name"], "Journal");
		assert_eq!(json["category"], "creative");
		assert_eq!(json["difficulty"], "medium");
	}
}
