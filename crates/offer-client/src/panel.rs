//! Offer panel view model.
//!
//! The panel is the only holder of mutable UI state in the offer flow:
//! the current slider value, the email field and the post-submission
//! phase. Range bounds are fixed at mount; only the value moves.

use rust_decimal::{Decimal, RoundingStrategy};

use offer_form::FetcherState;
use offer_types::{suggest_range, OfferDraft, OfferError, OfferRange, Result};

use crate::context::OfferContext;
use crate::submitter::OfferSubmitter;

/// Panel lifecycle within one mount. A confirmed panel never returns
/// to editing; a second offer requires a fresh mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPhase {
	Editing,
	Confirmed,
}

pub struct OfferPanel {
	draft: OfferDraft,
	range: OfferRange,
	offer: Decimal,
	email: String,
	phase: PanelPhase,
}

impl OfferPanel {
	/// Mount the panel from the navigation context. Returns `None` when
	/// the context does not yield a valid draft, in which case nothing
	/// is rendered.
	pub fn mount(context: &OfferContext) -> Option<Self> {
		let draft = context.to_draft()?;
		let range = suggest_range(draft.reference_price);
		Some(Self {
			offer: range.suggested,
			email: String::new(),
			phase: PanelPhase::Editing,
			draft,
			range,
		})
	}

	pub fn draft(&self) -> &OfferDraft {
		&self.draft
	}

	pub fn range(&self) -> OfferRange {
		self.range
	}

	/// Current offer value, always inside `[min, max]`.
	pub fn offer(&self) -> Decimal {
		self.offer
	}

	/// Reference price shown struck through next to the offer.
	pub fn reference_price(&self) -> Decimal {
		self.draft.reference_price
	}

	pub fn phase(&self) -> PanelPhase {
		self.phase
	}

	/// Move the slider. The value snaps to whole currency units and is
	/// clamped into the fixed range.
	pub fn set_offer(&mut self, value: Decimal) {
		let whole = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
		self.offer = self.range.clamp(whole);
	}

	pub fn set_email(&mut self, email: impl Into<String>) {
		self.email = email.into();
	}

	/// Whether the submit affordance is enabled: editing phase, a
	/// non-empty email, and no submission in flight for this key.
	pub fn can_submit(&self, fetcher_state: FetcherState) -> bool {
		self.phase == PanelPhase::Editing
			&& fetcher_state == FetcherState::Idle
			&& !self.email.trim().is_empty()
	}

	/// Submit the offer. On success the panel replaces the form with a
	/// static confirmation and refuses further submissions.
	pub async fn submit(&mut self, submitter: &OfferSubmitter) -> Result<()> {
		let key = self.draft.fetcher_key();
		let state = submitter.state(&key).await;
		if !self.can_submit(state) {
			return Err(OfferError::InvalidInput(
				"offer panel is not ready to submit".to_string(),
			));
		}

		let mut inputs = serde_json::Map::new();
		inputs.insert(
			"productId".to_string(),
			serde_json::Value::String(self.draft.product_id.clone()),
		);
		inputs.insert(
			"productVariantId".to_string(),
			serde_json::Value::String(self.draft.product_variant_id.clone()),
		);
		inputs.insert(
			"selectedOptions".to_string(),
			serde_json::to_value(&self.draft.selected_options)
				.map_err(|e| OfferError::InvalidInput(e.to_string()))?,
		);

		let extra_fields = vec![
			("offerPrice".to_string(), self.offer.to_string()),
			("email".to_string(), self.email.clone()),
		];

		submitter
			.submit(&key, "SubmitOffer", &inputs, &extra_fields)
			.await?;

		self.phase = PanelPhase::Confirmed;
		Ok(())
	}
}
