//! Navigation context handed forward from the referring product view.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use offer_types::{OfferDraft, SelectedOption};

/// The explicit, typed payload attached to the navigation transition
/// into the offer flow. Every field is optional at the boundary; the
/// draft derivation validates once and degrades silently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferContext {
	pub product_id: Option<String>,
	pub product_variant_id: Option<String>,
	pub product_title: Option<String>,
	#[serde(default)]
	pub selected_options: Vec<SelectedOption>,
	pub reference_price: Option<Decimal>,
}

impl OfferContext {
	/// Derive an offer draft. `None` means "render no offer panel":
	/// incomplete context is a quiet no-op, not an error state.
	pub fn to_draft(&self) -> Option<OfferDraft> {
		let draft = OfferDraft {
			product_id: self.product_id.clone()?,
			product_variant_id: self.product_variant_id.clone()?,
			product_title: self.product_title.clone()?,
			selected_options: self.selected_options.clone(),
			reference_price: self.reference_price?,
		};
		draft.is_valid().then_some(draft)
	}
}
