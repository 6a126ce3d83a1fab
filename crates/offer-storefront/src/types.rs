//! Wire types for the storefront product query.

use offer_types::{Money, SelectedOption};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
	pub id: String,
	pub title: String,
	pub available_for_sale: bool,
	pub price: Money,
	pub compare_at_price: Option<Money>,
	pub unit_price: Option<Money>,
	#[serde(default)]
	pub selected_options: Vec<SelectedOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
	pub id: String,
	pub title: String,
	pub handle: String,
	/// The variant resolved from the submitted selected options, if any.
	pub selected_variant: Option<ProductVariant>,
}
