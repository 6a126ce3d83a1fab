//! Configuration schema for the offer relay service.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferConfig {
	pub service: ServiceConfig,
	pub storefront: StorefrontConfig,
	pub relay: RelayConfig,
	#[serde(default)]
	pub session: SessionConfig,
	pub shop: ShopConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
	#[serde(default = "default_host")]
	pub host: String,
	#[serde(default = "default_port")]
	pub port: u16,
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

/// Commerce backend (storefront API) connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontConfig {
	/// GraphQL endpoint of the storefront API.
	pub api_url: String,
	/// Public storefront access token sent with every query.
	pub access_token: String,
	#[serde(default = "default_country")]
	pub country: String,
	#[serde(default = "default_language")]
	pub language: String,
}

/// Downstream bidding service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
	/// Public store domain hosting the app proxy, e.g. `shop.example.com`.
	pub store_domain: String,
	/// App proxy handle, the `<app>` segment of `/apps/<app>/bid`.
	#[serde(default = "default_app_handle")]
	pub app_handle: String,
	/// Secret for the `storefront_digest` authentication cookie.
	pub digest_cookie: String,
}

impl RelayConfig {
	/// Full URL of the bidding endpoint.
	pub fn bid_url(&self) -> String {
		format!("http://{}/apps/{}/bid", self.store_domain, self.app_handle)
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
	#[serde(default = "default_cookie_name")]
	pub cookie_name: String,
	#[serde(default = "default_session_ttl")]
	pub ttl_seconds: u64,
}

impl Default for SessionConfig {
	fn default() -> Self {
		Self {
			cookie_name: default_cookie_name(),
			ttl_seconds: default_session_ttl(),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopConfig {
	/// Public storefront id forwarded as `shop` in relay payloads.
	pub storefront_id: String,
}

fn default_host() -> String {
	"0.0.0.0".to_string()
}

fn default_port() -> u16 {
	3000
}

fn default_log_level() -> String {
	"info".to_string()
}

fn default_country() -> String {
	"US".to_string()
}

fn default_language() -> String {
	"EN".to_string()
}

fn default_app_handle() -> String {
	"wishly".to_string()
}

fn default_cookie_name() -> String {
	"offer_session".to_string()
}

fn default_session_ttl() -> u64 {
	86_400
}
