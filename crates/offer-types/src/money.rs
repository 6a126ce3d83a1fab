//! Money representation and minor-unit conversion.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::errors::{OfferError, Result};

/// A monetary amount as the storefront API returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
	pub amount: Decimal,
	pub currency_code: String,
}

/// Convert a decimal amount to integer minor currency units (cents).
///
/// Relay payloads carry prices exclusively in minor units.
pub fn to_minor_units(amount: Decimal) -> Result<i64> {
	(amount * Decimal::ONE_HUNDRED)
		.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
		.to_i64()
		.ok_or_else(|| OfferError::InvalidInput(format!("amount {} out of range", amount)))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn whole_amounts_scale_by_one_hundred() {
		assert_eq!(to_minor_units(Decimal::from(80)).unwrap(), 8000);
		assert_eq!(to_minor_units(Decimal::from(100)).unwrap(), 10000);
	}

	#[test]
	fn fractional_cents_round_to_nearest() {
		assert_eq!(to_minor_units("19.99".parse().unwrap()).unwrap(), 1999);
		assert_eq!(to_minor_units("19.995".parse().unwrap()).unwrap(), 2000);
	}

	#[test]
	fn money_deserializes_storefront_shape() {
		let money: Money =
			serde_json::from_str(r#"{"amount":"100.0","currencyCode":"USD"}"#).unwrap();
		assert_eq!(money.amount, Decimal::from(100));
		assert_eq!(money.currency_code, "USD");
	}
}
