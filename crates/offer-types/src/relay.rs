//! The canonical payload relayed to the downstream bidding service.

use serde::{Deserialize, Serialize};

/// Body of the POST to the bidding endpoint.
///
/// `price_at_bid_time` is always sourced from a fresh backend lookup;
/// only `bid_price` (the offer itself) is taken from the client. Both
/// are integer minor currency units. Identifier scheme prefixes are
/// stripped before sending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayPayload {
	pub customer_email: String,
	pub product_title: String,
	pub price_at_bid_time: i64,
	pub bid_price: i64,
	pub shop: String,
	pub product_id: String,
	pub product_variant_id: String,
	pub product_handle: String,
}

/// Strip the global-identifier scheme prefix from a storefront id,
/// e.g. `gid://shopify/Product/1` becomes `1`. Ids without the scheme
/// pass through unchanged.
pub fn strip_gid_prefix(id: &str) -> &str {
	match id.strip_prefix("gid://shopify/") {
		Some(rest) => match rest.split_once('/') {
			Some((_, tail)) => tail,
			None => rest,
		},
		None => id,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn strips_product_and_variant_prefixes() {
		assert_eq!(strip_gid_prefix("gid://shopify/Product/1"), "1");
		assert_eq!(strip_gid_prefix("gid://shopify/ProductVariant/9"), "9");
	}

	#[test]
	fn unknown_schemes_pass_through() {
		assert_eq!(strip_gid_prefix("plain-id"), "plain-id");
		assert_eq!(strip_gid_prefix("urn:x:1"), "urn:x:1");
	}

	#[test]
	fn payload_serializes_camel_case() {
		let payload = RelayPayload {
			customer_email: "a@b.com".to_string(),
			product_title: "Vintage Jacket".to_string(),
			price_at_bid_time: 10000,
			bid_price: 8000,
			shop: "shop-1".to_string(),
			product_id: "1".to_string(),
			product_variant_id: "9".to_string(),
			product_handle: "vintage-jacket".to_string(),
		};
		let json = serde_json::to_value(&payload).unwrap();
		assert_eq!(json["customerEmail"], "a@b.com");
		assert_eq!(json["priceAtBidTime"], 10000);
		assert_eq!(json["bidPrice"], 8000);
		assert_eq!(json["productVariantId"], "9");
	}
}
