//! HTTP server for the offer submission route.

use axum::{
	extract::{RawForm, State},
	http::{header, HeaderMap, HeaderValue, StatusCode},
	response::{IntoResponse, Response},
	routing::{get, post},
	Json, Router,
};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use offer_config::ServiceConfig;
use offer_form::parse_form_input;
use offer_relay::RelayOutcome;
use offer_types::{OfferError, Result};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/make-offer", post(handle_make_offer))
		.route("/health", get(health_check))
		.with_state(state)
		.layer(TraceLayer::new_for_http())
		.layer(CorsLayer::permissive())
}

pub async fn run(config: &ServiceConfig, state: AppState) -> anyhow::Result<()> {
	let app = router(state);
	let bind_address = format!("{}:{}", config.host, config.port);
	let listener = tokio::net::TcpListener::bind(&bind_address).await?;

	info!("Offer service listening on {}", bind_address);

	axum::serve(listener, app)
		.with_graceful_shutdown(shutdown_signal())
		.await?;

	Ok(())
}

async fn health_check() -> StatusCode {
	StatusCode::OK
}

/// POST /make-offer: one submission per invocation. Succeed or fail,
/// the response always carries a refreshed session cookie.
async fn handle_make_offer(State(state): State<AppState>, RawForm(body): RawForm) -> Response {
	let mut headers = HeaderMap::new();
	if let Ok(cookie) = HeaderValue::from_str(&state.sessions.issue()) {
		headers.insert(header::SET_COOKIE, cookie);
	}

	match process_submission(&state, &body).await {
		Ok(RelayOutcome {
			redirect_to: Some(location),
		}) => match HeaderValue::from_str(&location) {
			Ok(value) => {
				headers.insert(header::LOCATION, value);
				(StatusCode::SEE_OTHER, headers).into_response()
			}
			Err(_) => {
				warn!("Ignoring unusable redirect target: {}", location);
				(StatusCode::OK, headers, Json(json!({}))).into_response()
			}
		},
		Ok(RelayOutcome { redirect_to: None }) => {
			(StatusCode::OK, headers, Json(json!({}))).into_response()
		}
		Err(e) => {
			warn!("Offer submission failed: {}", e);
			(
				StatusCode::INTERNAL_SERVER_ERROR,
				headers,
				Json(json!({ "error": e.to_string() })),
			)
				.into_response()
		}
	}
}

async fn process_submission(state: &AppState, body: &[u8]) -> Result<RelayOutcome> {
	let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(body)
		.map_err(|e| OfferError::InvalidInput(format!("malformed form body: {}", e)))?;

	let parsed = parse_form_input(pairs)?;
	state.handler.handle(parsed).await
}

async fn shutdown_signal() {
	let ctrl_c = async {
		tokio::signal::ctrl_c()
			.await
			.expect("failed to install Ctrl+C handler");
	};

	#[cfg(unix)]
	let terminate = async {
		tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
			.expect("failed to install signal handler")
			.recv()
			.await;
	};

	#[cfg(not(unix))]
	let terminate = std::future::pending::<()>();

	tokio::select! {
		_ = ctrl_c => {},
		_ = terminate => {},
	}
}
