//! Configuration loader with environment variable substitution.

use std::env;
use std::path::Path;
use thiserror::Error;

use crate::types::OfferConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("File not found: {0}")]
	FileNotFound(String),

	#[error("Parse error: {0}")]
	ParseError(String),

	#[error("Validation error: {0}")]
	ValidationError(String),

	#[error("Environment variable not found: {0}")]
	EnvVarNotFound(String),

	#[error("IO error: {0}")]
	IoError(#[from] std::io::Error),
}

/// Loads a TOML config file, substitutes `${VAR}` references from the
/// environment, applies `OFFER_*` overrides and validates the result.
#[derive(Default)]
pub struct ConfigLoader {
	file_path: Option<String>,
	env_prefix: String,
}

impl ConfigLoader {
	pub fn new() -> Self {
		Self {
			file_path: None,
			env_prefix: "OFFER_".to_string(),
		}
	}

	pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
		self.file_path = Some(path.as_ref().to_string_lossy().to_string());
		self
	}

	pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.env_prefix = prefix.into();
		self
	}

	pub async fn load(&self) -> Result<OfferConfig, ConfigError> {
		let mut config = if let Some(file_path) = &self.file_path {
			self.load_from_file(file_path).await?
		} else {
			return Err(ConfigError::FileNotFound(
				"No configuration file specified".to_string(),
			));
		};

		self.apply_env_overrides(&mut config)?;
		validate_config(&config)?;

		Ok(config)
	}

	async fn load_from_file(&self, file_path: &str) -> Result<OfferConfig, ConfigError> {
		let content = tokio::fs::read_to_string(file_path).await?;
		let substituted_content = substitute_env_vars(&content)?;

		let config: OfferConfig = toml::from_str(&substituted_content)
			.map_err(|e| ConfigError::ParseError(e.to_string()))?;

		Ok(config)
	}

	fn apply_env_overrides(&self, config: &mut OfferConfig) -> Result<(), ConfigError> {
		if let Ok(log_level) = env::var(format!("{}LOG_LEVEL", self.env_prefix)) {
			config.service.log_level = log_level;
		}

		if let Ok(http_port) = env::var(format!("{}HTTP_PORT", self.env_prefix)) {
			config.service.port = http_port
				.parse()
				.map_err(|e| ConfigError::ValidationError(format!("Invalid HTTP port: {}", e)))?;
		}

		Ok(())
	}
}

fn substitute_env_vars(content: &str) -> Result<String, ConfigError> {
	let mut result = content.to_string();

	// Find and replace ${VAR_NAME} patterns
	let re = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();

	for cap in re.captures_iter(content) {
		let full_match = &cap[0];
		let var_name = &cap[1];

		let env_value =
			env::var(var_name).map_err(|_| ConfigError::EnvVarNotFound(var_name.to_string()))?;

		result = result.replace(full_match, &env_value);
	}

	Ok(result)
}

fn validate_config(config: &OfferConfig) -> Result<(), ConfigError> {
	if config.service.port == 0 {
		return Err(ConfigError::ValidationError(
			"Service port must be non-zero".to_string(),
		));
	}

	if config.storefront.api_url.is_empty() || config.storefront.access_token.is_empty() {
		return Err(ConfigError::ValidationError(
			"Storefront api_url and access_token must be set".to_string(),
		));
	}

	if config.relay.store_domain.is_empty() {
		return Err(ConfigError::ValidationError(
			"Relay store_domain must be set".to_string(),
		));
	}

	if config.relay.digest_cookie.is_empty() {
		return Err(ConfigError::ValidationError(
			"Relay digest_cookie must be set".to_string(),
		));
	}

	Ok(())
}
