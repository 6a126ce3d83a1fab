//! Typed offer actions.
//!
//! The wire format multiplexes every operation through one tagged form
//! field; server-side, each tag maps to its own input struct and the
//! dispatch is an exhaustive match.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use offer_form::ParsedFormInput;
use offer_types::{OfferError, Result, SelectedOption};

/// Inputs of the `SubmitOffer` action after merging sibling fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitOfferInput {
	pub product_id: String,
	pub product_variant_id: String,
	#[serde(default)]
	pub selected_options: Vec<SelectedOption>,
	/// The buyer's offer, submitted as a string decimal sibling field.
	pub offer_price: Decimal,
	pub email: String,
	#[serde(default)]
	pub redirect_to: Option<String>,
}

/// Every operation the submission endpoint understands.
#[derive(Debug, Clone, PartialEq)]
pub enum OfferAction {
	SubmitOffer(SubmitOfferInput),
}

impl OfferAction {
	/// Dispatch a parsed submission on its action tag.
	pub fn from_parsed(parsed: ParsedFormInput) -> Result<Self> {
		match parsed.action.as_str() {
			"" => Err(OfferError::MissingAction),
			"SubmitOffer" => {
				let input: SubmitOfferInput =
					serde_json::from_value(serde_json::Value::Object(parsed.inputs))
						.map_err(|e| OfferError::InvalidInput(e.to_string()))?;
				Ok(OfferAction::SubmitOffer(input))
			}
			other => Err(OfferError::UnsupportedAction(other.to_string())),
		}
	}
}
