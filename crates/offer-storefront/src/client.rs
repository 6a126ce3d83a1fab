//! GraphQL storefront client.

use async_trait::async_trait;
use offer_types::{OfferError, Result, SelectedOption};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::graphql::product_query;
use crate::types::Product;
use crate::Storefront;

/// Storefront API client over HTTP GraphQL.
#[derive(Clone)]
pub struct GraphQlStorefront {
	http: reqwest::Client,
	api_url: String,
	access_token: String,
	country: String,
	language: String,
}

impl GraphQlStorefront {
	pub fn new(
		api_url: impl Into<String>,
		access_token: impl Into<String>,
		country: impl Into<String>,
		language: impl Into<String>,
	) -> Self {
		Self {
			http: reqwest::Client::new(),
			api_url: api_url.into(),
			access_token: access_token.into(),
			country: country.into(),
			language: language.into(),
		}
	}
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
	#[serde(default)]
	data: Option<ProductData>,
	#[serde(default)]
	errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct ProductData {
	product: Option<Product>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
	message: String,
}

#[async_trait]
impl Storefront for GraphQlStorefront {
	async fn product_by_selected_options(
		&self,
		product_id: &str,
		selected_options: &[SelectedOption],
	) -> Result<Option<Product>> {
		debug!("Querying storefront for product {}", product_id);

		let body = json!({
			"query": product_query(),
			"variables": {
				"id": product_id,
				"selectedOptions": selected_options,
				"country": self.country,
				"language": self.language,
			},
		});

		let response = self
			.http
			.post(&self.api_url)
			.header("X-Shopify-Storefront-Access-Token", &self.access_token)
			.json(&body)
			.send()
			.await
			.map_err(|e| OfferError::Network(format!("storefront request failed: {}", e)))?;

		let status = response.status();
		if !status.is_success() {
			return Err(OfferError::Storefront(format!(
				"storefront returned status {}",
				status
			)));
		}

		let parsed: GraphQlResponse = response
			.json()
			.await
			.map_err(|e| OfferError::Storefront(format!("invalid storefront response: {}", e)))?;

		if let Some(errors) = parsed.errors {
			let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
			return Err(OfferError::Storefront(messages.join("; ")));
		}

		Ok(parsed.data.and_then(|d| d.product))
	}
}
