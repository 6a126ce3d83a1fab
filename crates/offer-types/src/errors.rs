//! Error types for the offer relay system.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, OfferError>;

#[derive(Error, Debug)]
pub enum OfferError {
	#[error("No action provided")]
	MissingAction,

	#[error("{0} offer action is not defined")]
	UnsupportedAction(String),

	#[error("Variant mismatch: submitted {submitted}, backend resolved {resolved}")]
	VariantMismatch { submitted: String, resolved: String },

	#[error("Relay error: {0}")]
	RelayFailed(String),

	#[error("Storefront error: {0}")]
	Storefront(String),

	#[error("Invalid input: {0}")]
	InvalidInput(String),

	#[error("Configuration error: {0}")]
	Config(String),

	#[error("Network error: {0}")]
	Network(String),

	#[error(transparent)]
	Other(#[from] anyhow::Error),
}
