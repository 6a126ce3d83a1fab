//! Offer draft: the client-derived, pre-submission representation of a
//! buyer's intended price negotiation for one product variant.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One dimension of a variant configuration, e.g. `("Size", "M")`.
///
/// Order is significant: the backend resolves variants against the
/// options in the order the product page presented them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedOption {
	pub name: String,
	pub value: String,
}

impl SelectedOption {
	pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			value: value.into(),
		}
	}
}

/// An offer candidate derived from navigation context when the offer
/// panel mounts. Never persisted; discarded on navigation away or
/// successful submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferDraft {
	pub product_id: String,
	pub product_variant_id: String,
	pub product_title: String,
	pub selected_options: Vec<SelectedOption>,
	pub reference_price: Decimal,
}

impl OfferDraft {
	/// A draft is only eligible to render the offer form when every
	/// field is present and the reference price is positive. Anything
	/// less degrades to "no offer form", not a partial state.
	pub fn is_valid(&self) -> bool {
		!self.product_id.is_empty()
			&& !self.product_variant_id.is_empty()
			&& !self.product_title.is_empty()
			&& !self.selected_options.is_empty()
			&& self.reference_price > Decimal::ZERO
	}

	/// Stable dedup key for the submission state machine, so switching
	/// products isolates (or reuses) submission state correctly.
	pub fn fetcher_key(&self) -> String {
		format!("{}:{}", self.product_id, self.product_variant_id)
	}
}
