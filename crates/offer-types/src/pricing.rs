//! Price suggestion policy for the offer panel.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// The allowed offer range for one panel mount. Bounds are fixed at
/// draft-derivation time; only the selected value moves within them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OfferRange {
	pub min: Decimal,
	pub suggested: Decimal,
	pub max: Decimal,
}

impl OfferRange {
	pub fn clamp(&self, value: Decimal) -> Decimal {
		value.max(self.min).min(self.max)
	}
}

/// Compute the initial suggested offer and allowed range from a
/// reference price: suggested at 75%, floor at 50%, ceiling at the
/// reference price itself. Input is pre-validated by the draft, so
/// there is no error path.
pub fn suggest_range(reference_price: Decimal) -> OfferRange {
	OfferRange {
		min: round_whole(reference_price * Decimal::new(50, 2)),
		suggested: round_whole(reference_price * Decimal::new(75, 2)),
		max: reference_price,
	}
}

// Midpoint away from zero, matching Math.round in the storefront.
fn round_whole(amount: Decimal) -> Decimal {
	amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
