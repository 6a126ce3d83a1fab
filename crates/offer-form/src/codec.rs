//! Form codec for tagged action submissions.
//!
//! A submission carries exactly one serialized `{action, inputs}` field
//! under [`FORM_INPUT_NAME`]; any other form fields are merged in as
//! additional top-level inputs at parse time, overwriting same-named
//! embedded inputs in field iteration order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use offer_types::{OfferError, Result};

/// Name of the single hidden field carrying the serialized action.
pub const FORM_INPUT_NAME: &str = "offerFormInput";

/// The serialized content of the [`FORM_INPUT_NAME`] field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferFormInput {
	pub action: String,
	pub inputs: Map<String, Value>,
}

/// A parsed submission: the action tag plus the union of embedded and
/// sibling inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFormInput {
	pub action: String,
	pub inputs: Map<String, Value>,
}

/// Encode one submission as ordered form fields: the tagged input field
/// first, then the caller's extra fields in the order given.
pub fn encode_form(
	action: &str,
	inputs: &Map<String, Value>,
	extra_fields: &[(String, String)],
) -> Result<Vec<(String, String)>> {
	let input = OfferFormInput {
		action: action.to_string(),
		inputs: inputs.clone(),
	};
	let serialized = serde_json::to_string(&input)
		.map_err(|e| OfferError::InvalidInput(format!("cannot serialize form input: {}", e)))?;

	let mut pairs = Vec::with_capacity(1 + extra_fields.len());
	pairs.push((FORM_INPUT_NAME.to_string(), serialized));
	pairs.extend(extra_fields.iter().cloned());
	Ok(pairs)
}

/// Parse submitted form fields.
///
/// Repeated field names collapse into a JSON array of their values, in
/// submission order. Fields other than [`FORM_INPUT_NAME`] override
/// same-named embedded inputs.
pub fn parse_form_input(pairs: Vec<(String, String)>) -> Result<ParsedFormInput> {
	// Group values per field name, preserving first-seen field order.
	let mut fields: Vec<(String, Vec<String>)> = Vec::new();
	for (name, value) in pairs {
		match fields.iter_mut().find(|(existing, _)| *existing == name) {
			Some((_, values)) => values.push(value),
			None => fields.push((name, vec![value])),
		}
	}

	let mut action = None;
	let mut inputs = Map::new();
	let mut siblings: Vec<(String, Value)> = Vec::new();

	for (name, mut values) in fields {
		if name == FORM_INPUT_NAME {
			let raw = values.swap_remove(0);
			let parsed: OfferFormInput = serde_json::from_str(&raw).map_err(|e| {
				OfferError::InvalidInput(format!("malformed {}: {}", FORM_INPUT_NAME, e))
			})?;
			action = Some(parsed.action);
			inputs = parsed.inputs;
		} else if values.len() > 1 {
			siblings.push((name, Value::Array(values.into_iter().map(Value::String).collect())));
		} else {
			siblings.push((name, Value::String(values.swap_remove(0))));
		}
	}

	let action = action.ok_or(OfferError::MissingAction)?;

	// Sibling fields win on key collision with embedded inputs.
	for (name, value) in siblings {
		inputs.insert(name, value);
	}

	Ok(ParsedFormInput { action, inputs })
}
