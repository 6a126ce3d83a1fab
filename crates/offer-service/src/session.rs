//! Session cookie reissue.
//!
//! Every action response carries a refreshed session cookie, success or
//! failure. The cookie is reissued, never mutated in place; it is the
//! only cross-request resource in the offer flow.

use offer_config::SessionConfig;
use uuid::Uuid;

pub struct SessionManager {
	cookie_name: String,
	ttl_seconds: u64,
}

impl SessionManager {
	pub fn new(config: &SessionConfig) -> Self {
		Self {
			cookie_name: config.cookie_name.clone(),
			ttl_seconds: config.ttl_seconds,
		}
	}

	/// Issue a fresh session cookie header value.
	pub fn issue(&self) -> String {
		format!(
			"{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
			self.cookie_name,
			Uuid::new_v4(),
			self.ttl_seconds
		)
	}
}
