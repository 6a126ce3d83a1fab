//! Shared application state for the HTTP server.

use std::sync::Arc;

use offer_relay::OfferRelayHandler;

use crate::session::SessionManager;

#[derive(Clone)]
pub struct AppState {
	pub handler: Arc<OfferRelayHandler>,
	pub sessions: Arc<SessionManager>,
}
