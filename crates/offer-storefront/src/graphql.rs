//! GraphQL documents for the product-by-selected-options lookup.

pub const PRODUCT_VARIANT_FRAGMENT: &str = r#"
fragment ProductVariantMakeOffer on ProductVariant {
  availableForSale
  compareAtPrice {
    amount
    currencyCode
  }
  id
  price {
    amount
    currencyCode
  }
  selectedOptions {
    name
    value
  }
  title
  unitPrice {
    amount
    currencyCode
  }
}
"#;

pub const PRODUCT_FRAGMENT: &str = r#"
fragment ProductMakeOffer on Product {
  id
  title
  handle
  selectedVariant: variantBySelectedOptions(selectedOptions: $selectedOptions, ignoreUnknownOptions: true, caseInsensitiveMatch: true) {
    ...ProductVariantMakeOffer
  }
}
"#;

/// Full query document with both fragments appended.
pub fn product_query() -> String {
	format!(
		r#"
query ProductMakeOffer(
  $country: CountryCode
  $id: ID!
  $language: LanguageCode
  $selectedOptions: [SelectedOptionInput!]!
) @inContext(country: $country, language: $language) {{
  product(id: $id) {{
    ...ProductMakeOffer
  }}
}}
{}{}"#,
		PRODUCT_FRAGMENT, PRODUCT_VARIANT_FRAGMENT
	)
}
