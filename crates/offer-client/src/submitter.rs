//! Keyed offer submitter: posts one tagged action per request without a
//! page navigation and exposes lifecycle state per fetcher key.

use serde_json::{Map, Value};
use tracing::debug;

use offer_form::{encode_form, FetcherRegistry, FetcherState};
use offer_types::{OfferError, Result};

/// Submits tagged actions to the offer route and tracks per-key
/// submission state. Cloning shares the fetcher registry.
#[derive(Clone)]
pub struct OfferSubmitter {
	http: reqwest::Client,
	route: String,
	fetchers: FetcherRegistry,
}

impl OfferSubmitter {
	pub fn new(route: impl Into<String>) -> Self {
		Self {
			http: reqwest::Client::new(),
			route: route.into(),
			fetchers: FetcherRegistry::new(),
		}
	}

	/// Lifecycle state for a fetcher key.
	pub async fn state(&self, key: &str) -> FetcherState {
		self.fetchers.state(key).await
	}

	/// Parsed response payload of the last successful submission.
	pub async fn data(&self, key: &str) -> Option<Value> {
		self.fetchers.data(key).await
	}

	/// Submit one tagged action with its structured inputs plus any
	/// sibling fields. Refuses to overlap submissions on one key.
	pub async fn submit(
		&self,
		key: &str,
		action: &str,
		inputs: &Map<String, Value>,
		extra_fields: &[(String, String)],
	) -> Result<Value> {
		self.fetchers.begin(key).await?;

		let result = self.post_form(action, inputs, extra_fields).await;
		match result {
			Ok(value) => {
				self.fetchers.complete(key, value.clone()).await;
				self.fetchers.settle(key).await;
				Ok(value)
			}
			Err(e) => {
				self.fetchers.reset(key).await;
				Err(e)
			}
		}
	}

	async fn post_form(
		&self,
		action: &str,
		inputs: &Map<String, Value>,
		extra_fields: &[(String, String)],
	) -> Result<Value> {
		let pairs = encode_form(action, inputs, extra_fields)?;
		let body = serde_urlencoded::to_string(&pairs)
			.map_err(|e| OfferError::InvalidInput(format!("cannot encode form: {}", e)))?;

		debug!("Submitting {} to {}", action, self.route);

		let response = self
			.http
			.post(&self.route)
			.header("content-type", "application/x-www-form-urlencoded")
			.body(body)
			.send()
			.await
			.map_err(|e| OfferError::Network(format!("submission failed: {}", e)))?;

		let status = response.status();
		if !status.is_success() && !status.is_redirection() {
			return Err(OfferError::Network(format!(
				"submission returned status {}",
				status
			)));
		}

		// Redirect responses carry no body worth parsing.
		if status.is_redirection() {
			return Ok(Value::Object(Map::new()));
		}

		response
			.json()
			.await
			.map_err(|e| OfferError::Network(format!("invalid submission response: {}", e)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;
	use wiremock::matchers::{body_string_contains, header, method, path};
	use wiremock::{Mock, MockServer, ResponseTemplate};

	fn inputs() -> Map<String, Value> {
		let mut inputs = Map::new();
		inputs.insert("productId".into(), json!("gid://shopify/Product/1"));
		inputs
	}

	#[tokio::test]
	async fn posts_form_encoded_body_and_stores_response() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.and(path("/make-offer"))
			.and(header("content-type", "application/x-www-form-urlencoded"))
			.and(body_string_contains("offerFormInput"))
			.and(body_string_contains("offerPrice=80"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
			.expect(1)
			.mount(&server)
			.await;

		let submitter = OfferSubmitter::new(format!("{}/make-offer", server.uri()));
		let response = submitter
			.submit(
				"p1:v9",
				"SubmitOffer",
				&inputs(),
				&[("offerPrice".to_string(), "80".to_string())],
			)
			.await
			.unwrap();

		assert_eq!(response, json!({}));
		assert_eq!(submitter.state("p1:v9").await, FetcherState::Idle);
		assert_eq!(submitter.data("p1:v9").await, Some(json!({})));
	}

	#[tokio::test]
	async fn failed_submission_resets_state_without_data() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.respond_with(ResponseTemplate::new(500).set_body_json(json!({
				"error": "Relay error: status 502"
			})))
			.mount(&server)
			.await;

		let submitter = OfferSubmitter::new(format!("{}/make-offer", server.uri()));
		let result = submitter
			.submit("p1:v9", "SubmitOffer", &inputs(), &[])
			.await;

		assert!(matches!(result, Err(OfferError::Network(_))));
		assert_eq!(submitter.state("p1:v9").await, FetcherState::Idle);
		assert!(submitter.data("p1:v9").await.is_none());
	}
}
