//! The relay handler: receive, authorize against backend truth, relay.

use std::sync::Arc;

use tracing::{debug, info};

use offer_form::ParsedFormInput;
use offer_storefront::Storefront;
use offer_types::{
	strip_gid_prefix, to_minor_units, OfferError, RelayPayload, Result,
};

use crate::action::{OfferAction, SubmitOfferInput};
use crate::bid::BidRelay;

/// Result of a handled action, for the service layer to turn into a
/// response (303 with `Location` or 200 with an empty body).
#[derive(Debug, Clone, PartialEq)]
pub struct RelayOutcome {
	pub redirect_to: Option<String>,
}

/// Processes one submission per invocation: parse, dispatch, re-fetch
/// authoritative product data, validate the variant, relay downstream.
pub struct OfferRelayHandler {
	storefront: Arc<dyn Storefront>,
	bid_relay: Arc<dyn BidRelay>,
	shop: String,
}

impl OfferRelayHandler {
	pub fn new(
		storefront: Arc<dyn Storefront>,
		bid_relay: Arc<dyn BidRelay>,
		shop: impl Into<String>,
	) -> Self {
		Self {
			storefront,
			bid_relay,
			shop: shop.into(),
		}
	}

	pub async fn handle(&self, parsed: ParsedFormInput) -> Result<RelayOutcome> {
		match OfferAction::from_parsed(parsed)? {
			OfferAction::SubmitOffer(input) => self.submit_offer(input).await,
		}
	}

	async fn submit_offer(&self, input: SubmitOfferInput) -> Result<RelayOutcome> {
		// Get product information from the backend instead of trusting
		// submitted data.
		let product = self
			.storefront
			.product_by_selected_options(&input.product_id, &input.selected_options)
			.await?
			.ok_or_else(|| {
				OfferError::Storefront(format!("product {} not found", input.product_id))
			})?;

		let variant = product.selected_variant.as_ref().ok_or_else(|| {
			OfferError::Storefront(format!(
				"no variant of {} matches the selected options",
				input.product_id
			))
		})?;

		if input.product_variant_id != variant.id {
			return Err(OfferError::VariantMismatch {
				submitted: input.product_variant_id,
				resolved: variant.id.clone(),
			});
		}

		let payload = RelayPayload {
			customer_email: input.email,
			product_title: product.title.clone(),
			price_at_bid_time: to_minor_units(variant.price.amount)?,
			bid_price: to_minor_units(input.offer_price)?,
			shop: self.shop.clone(),
			product_id: strip_gid_prefix(&input.product_id).to_string(),
			product_variant_id: strip_gid_prefix(&input.product_variant_id).to_string(),
			product_handle: product.handle.clone(),
		};

		debug!("Relay payload: {}", serde_json::to_string(&payload).unwrap_or_default());

		self.bid_relay.relay(&payload).await?;

		info!(
			"Offer of {} minor units relayed for product {}",
			payload.bid_price, payload.product_id
		);

		Ok(RelayOutcome {
			redirect_to: input.redirect_to,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use async_trait::async_trait;
	use offer_form::parse_form_input;
	use offer_storefront::{Product, ProductVariant};
	use offer_types::{Money, SelectedOption};
	use serde_json::json;
	use tokio::sync::Mutex;

	struct MockStorefront {
		product: Option<Product>,
	}

	#[async_trait]
	impl Storefront for MockStorefront {
		async fn product_by_selected_options(
			&self,
			_product_id: &str,
			_selected_options: &[SelectedOption],
		) -> offer_types::Result<Option<Product>> {
			Ok(self.product.clone())
		}
	}

	#[derive(Default)]
	struct RecordingRelay {
		payloads: Mutex<Vec<RelayPayload>>,
		fail: bool,
	}

	#[async_trait]
	impl BidRelay for RecordingRelay {
		async fn relay(&self, payload: &RelayPayload) -> offer_types::Result<()> {
			self.payloads.lock().await.push(payload.clone());
			if self.fail {
				return Err(OfferError::RelayFailed(
					"bid endpoint returned status 502".to_string(),
				));
			}
			Ok(())
		}
	}

	fn backend_product(variant_id: &str) -> Product {
		Product {
			id: "gid://shopify/Product/1".to_string(),
			title: "Vintage Jacket".to_string(),
			handle: "vintage-jacket".to_string(),
			selected_variant: Some(ProductVariant {
				id: variant_id.to_string(),
				title: "M".to_string(),
				available_for_sale: true,
				price: Money {
					amount: "100.00".parse().unwrap(),
					currency_code: "USD".to_string(),
				},
				compare_at_price: None,
				unit_price: None,
				selected_options: vec![SelectedOption::new("Size", "M")],
			}),
		}
	}

	fn submission() -> ParsedFormInput {
		parse_form_input(vec![
			(
				"offerFormInput".to_string(),
				json!({
					"action": "SubmitOffer",
					"inputs": {
						"productId": "gid://shopify/Product/1",
						"productVariantId": "gid://shopify/ProductVariant/9",
						"selectedOptions": [{"name": "Size", "value": "M"}]
					}
				})
				.to_string(),
			),
			("offerPrice".to_string(), "80".to_string()),
			("email".to_string(), "a@b.com".to_string()),
		])
		.unwrap()
	}

	fn handler(
		product: Option<Product>,
		relay: Arc<RecordingRelay>,
	) -> OfferRelayHandler {
		OfferRelayHandler::new(
			Arc::new(MockStorefront { product }),
			relay,
			"shop-1".to_string(),
		)
	}

	#[tokio::test]
	async fn relays_canonical_payload_from_backend_truth() {
		let relay = Arc::new(RecordingRelay::default());
		let handler = handler(
			Some(backend_product("gid://shopify/ProductVariant/9")),
			relay.clone(),
		);

		let outcome = handler.handle(submission()).await.unwrap();
		assert!(outcome.redirect_to.is_none());

		let payloads = relay.payloads.lock().await;
		assert_eq!(payloads.len(), 1);
		let payload = &payloads[0];
		assert_eq!(payload.bid_price, 8000);
		assert_eq!(payload.price_at_bid_time, 10000);
		assert_eq!(payload.product_id, "1");
		assert_eq!(payload.product_variant_id, "9");
		assert_eq!(payload.product_handle, "vintage-jacket");
		assert_eq!(payload.shop, "shop-1");
		assert_eq!(payload.customer_email, "a@b.com");
	}

	#[tokio::test]
	async fn variant_mismatch_aborts_before_any_relay_call() {
		let relay = Arc::new(RecordingRelay::default());
		let handler = handler(
			Some(backend_product("gid://shopify/ProductVariant/7")),
			relay.clone(),
		);

		let result = handler.handle(submission()).await;
		assert!(matches!(result, Err(OfferError::VariantMismatch { .. })));
		assert!(relay.payloads.lock().await.is_empty());
	}

	#[tokio::test]
	async fn missing_product_aborts_before_any_relay_call() {
		let relay = Arc::new(RecordingRelay::default());
		let handler = handler(None, relay.clone());

		let result = handler.handle(submission()).await;
		assert!(matches!(result, Err(OfferError::Storefront(_))));
		assert!(relay.payloads.lock().await.is_empty());
	}

	#[tokio::test]
	async fn downstream_failure_surfaces_as_relay_failed() {
		let relay = Arc::new(RecordingRelay {
			payloads: Mutex::new(Vec::new()),
			fail: true,
		});
		let handler = handler(
			Some(backend_product("gid://shopify/ProductVariant/9")),
			relay.clone(),
		);

		let result = handler.handle(submission()).await;
		assert!(matches!(result, Err(OfferError::RelayFailed(_))));
	}

	#[tokio::test]
	async fn redirect_to_is_carried_into_the_outcome() {
		let relay = Arc::new(RecordingRelay::default());
		let handler = handler(
			Some(backend_product("gid://shopify/ProductVariant/9")),
			relay.clone(),
		);

		let mut pairs = vec![
			(
				"offerFormInput".to_string(),
				json!({
					"action": "SubmitOffer",
					"inputs": {
						"productId": "gid://shopify/Product/1",
						"productVariantId": "gid://shopify/ProductVariant/9",
						"selectedOptions": [{"name": "Size", "value": "M"}]
					}
				})
				.to_string(),
			),
			("offerPrice".to_string(), "80".to_string()),
			("email".to_string(), "a@b.com".to_string()),
		];
		pairs.push(("redirectTo".to_string(), "/products/jacket".to_string()));

		let outcome = handler
			.handle(parse_form_input(pairs).unwrap())
			.await
			.unwrap();
		assert_eq!(outcome.redirect_to.as_deref(), Some("/products/jacket"));
	}
}
