//! Per-key submission state machines.
//!
//! Each fetcher key owns an independent `Idle -> Submitting -> Loading
//! -> Idle` lifecycle, so concurrent submissions for different products
//! in one session never share state.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

use offer_types::{OfferError, Result};

/// Submission lifecycle state exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetcherState {
	#[default]
	Idle,
	/// A request is in flight.
	Submitting,
	/// The response arrived and data is being refreshed.
	Loading,
}

#[derive(Debug, Clone, Default)]
struct Fetcher {
	state: FetcherState,
	data: Option<Value>,
}

/// Registry of keyed fetchers. Cloning shares the underlying state.
#[derive(Clone, Default)]
pub struct FetcherRegistry {
	fetchers: Arc<RwLock<HashMap<String, Fetcher>>>,
}

impl FetcherRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Current lifecycle state for a key; unknown keys are idle.
	pub async fn state(&self, key: &str) -> FetcherState {
		self.fetchers
			.read()
			.await
			.get(key)
			.map(|f| f.state)
			.unwrap_or_default()
	}

	/// Last parsed response payload for a key, if any.
	pub async fn data(&self, key: &str) -> Option<Value> {
		self.fetchers.read().await.get(key).and_then(|f| f.data.clone())
	}

	/// Transition a key from `Idle` to `Submitting`. At most one
	/// in-flight submission per key; a busy key is refused.
	pub async fn begin(&self, key: &str) -> Result<()> {
		let mut fetchers = self.fetchers.write().await;
		let fetcher = fetchers.entry(key.to_string()).or_default();
		if fetcher.state != FetcherState::Idle {
			return Err(OfferError::InvalidInput(format!(
				"submission already in flight for key {}",
				key
			)));
		}
		fetcher.state = FetcherState::Submitting;
		Ok(())
	}

	/// Record the response payload and move to `Loading`.
	pub async fn complete(&self, key: &str, data: Value) {
		let mut fetchers = self.fetchers.write().await;
		let fetcher = fetchers.entry(key.to_string()).or_default();
		fetcher.state = FetcherState::Loading;
		fetcher.data = Some(data);
	}

	/// Finish the post-submission refresh and return to `Idle`,
	/// keeping the response payload readable.
	pub async fn settle(&self, key: &str) {
		if let Some(fetcher) = self.fetchers.write().await.get_mut(key) {
			fetcher.state = FetcherState::Idle;
		}
	}

	/// Abort a failed submission: back to `Idle` with no data, so the
	/// caller observes a failed submission state rather than a stale
	/// success payload.
	pub async fn reset(&self, key: &str) {
		let mut fetchers = self.fetchers.write().await;
		let fetcher = fetchers.entry(key.to_string()).or_default();
		fetcher.state = FetcherState::Idle;
		fetcher.data = None;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[tokio::test]
	async fn unknown_keys_are_idle() {
		let registry = FetcherRegistry::new();
		assert_eq!(registry.state("p1:v1").await, FetcherState::Idle);
		assert!(registry.data("p1:v1").await.is_none());
	}

	#[tokio::test]
	async fn lifecycle_runs_idle_submitting_loading_idle() {
		let registry = FetcherRegistry::new();
		registry.begin("p1:v1").await.unwrap();
		assert_eq!(registry.state("p1:v1").await, FetcherState::Submitting);

		registry.complete("p1:v1", json!({})).await;
		assert_eq!(registry.state("p1:v1").await, FetcherState::Loading);

		registry.settle("p1:v1").await;
		assert_eq!(registry.state("p1:v1").await, FetcherState::Idle);
		assert_eq!(registry.data("p1:v1").await, Some(json!({})));
	}

	#[tokio::test]
	async fn busy_key_refuses_second_submission() {
		let registry = FetcherRegistry::new();
		registry.begin("p1:v1").await.unwrap();
		assert!(registry.begin("p1:v1").await.is_err());
	}

	#[tokio::test]
	async fn keys_are_isolated() {
		let registry = FetcherRegistry::new();
		registry.begin("p1:v1").await.unwrap();

		assert_eq!(registry.state("p2:v2").await, FetcherState::Idle);
		registry.begin("p2:v2").await.unwrap();
		assert_eq!(registry.state("p2:v2").await, FetcherState::Submitting);
	}

	#[tokio::test]
	async fn reset_clears_state_and_data() {
		let registry = FetcherRegistry::new();
		registry.begin("p1:v1").await.unwrap();
		registry.complete("p1:v1", json!({"ok": true})).await;
		registry.reset("p1:v1").await;

		assert_eq!(registry.state("p1:v1").await, FetcherState::Idle);
		assert!(registry.data("p1:v1").await.is_none());
	}
}
