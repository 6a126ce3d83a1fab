//! Downstream bidding service client.

use async_trait::async_trait;
use tracing::info;

use offer_types::{OfferError, RelayPayload, Result};

/// Outbound relay to the bidding service.
#[async_trait]
pub trait BidRelay: Send + Sync {
	async fn relay(&self, payload: &RelayPayload) -> Result<()>;
}

/// HTTP relay posting to the store's app proxy bid endpoint with the
/// fixed `storefront_digest` authentication cookie.
#[derive(Clone)]
pub struct HttpBidRelay {
	http: reqwest::Client,
	bid_url: String,
	digest_cookie: String,
}

impl HttpBidRelay {
	pub fn new(bid_url: impl Into<String>, digest_cookie: impl Into<String>) -> Self {
		Self {
			http: reqwest::Client::new(),
			bid_url: bid_url.into(),
			digest_cookie: digest_cookie.into(),
		}
	}
}

#[async_trait]
impl BidRelay for HttpBidRelay {
	async fn relay(&self, payload: &RelayPayload) -> Result<()> {
		info!("Posting offer to {}", self.bid_url);

		let response = self
			.http
			.post(&self.bid_url)
			.header(
				"cookie",
				format!("storefront_digest={}", self.digest_cookie),
			)
			.json(payload)
			.send()
			.await
			.map_err(|e| OfferError::Network(format!("bid relay request failed: {}", e)))?;

		let status = response.status();
		if !status.is_success() {
			return Err(OfferError::RelayFailed(format!(
				"bid endpoint returned status {}",
				status
			)));
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use wiremock::matchers::{body_json, header, method, path};
	use wiremock::{Mock, MockServer, ResponseTemplate};

	fn payload() -> RelayPayload {
		RelayPayload {
			customer_email: "a@b.com".to_string(),
			product_title: "Vintage Jacket".to_string(),
			price_at_bid_time: 10000,
			bid_price: 8000,
			shop: "shop-1".to_string(),
			product_id: "1".to_string(),
			product_variant_id: "9".to_string(),
			product_handle: "vintage-jacket".to_string(),
		}
	}

	#[tokio::test]
	async fn posts_payload_with_digest_cookie() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.and(path("/apps/wishly/bid"))
			.and(header("cookie", "storefront_digest=secret"))
			.and(body_json(&payload()))
			.respond_with(ResponseTemplate::new(200))
			.expect(1)
			.mount(&server)
			.await;

		let relay = HttpBidRelay::new(format!("{}/apps/wishly/bid", server.uri()), "secret");
		relay.relay(&payload()).await.unwrap();
	}

	#[tokio::test]
	async fn non_success_status_fails_the_relay() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.respond_with(ResponseTemplate::new(502))
			.mount(&server)
			.await;

		let relay = HttpBidRelay::new(format!("{}/apps/wishly/bid", server.uri()), "secret");
		let result = relay.relay(&payload()).await;
		assert!(matches!(result, Err(OfferError::RelayFailed(_))));
	}
}
