//! Commerce-backend product lookup for offer validation.
//!
//! The relay handler never trusts client-submitted price or title; it
//! re-fetches the product and resolves the variant from the selected
//! options through this crate.

pub mod client;
pub mod graphql;
pub mod types;

pub use client::*;
pub use types::*;

use async_trait::async_trait;
use offer_types::{Result, SelectedOption};

/// Read-only view of the commerce backend.
#[async_trait]
pub trait Storefront: Send + Sync {
	/// Fetch a product by id and resolve the variant matching the given
	/// selected options. Option matching is case-insensitive and unknown
	/// options are ignored; an unresolvable variant surfaces as a product
	/// with `selected_variant: None`.
	async fn product_by_selected_options(
		&self,
		product_id: &str,
		selected_options: &[SelectedOption],
	) -> Result<Option<Product>>;
}
