use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use cardseek_domain::QueryParameters;

use crate::{Error, Result};

const DEFAULT_USER_AGENT: &str = concat!("cardseek/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the card catalog endpoint.
#[derive(Clone, Debug)]
pub struct CatalogClient {
	client: Client,
	api_base: String,
}
impl CatalogClient {
	pub fn new(cfg: &cardseek_config::Catalog) -> Result<Self> {
		if cfg.api_base.trim().is_empty() {
			return Err(Error::InvalidConfig {
				message: "Catalog api_base must be non-empty.".to_string(),
			});
		}

		let user_agent = cfg.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
		let client = Client::builder()
			.timeout(Duration::from_millis(cfg.timeout_ms))
			.user_agent(user_agent)
			.build()?;

		Ok(Self { client, api_base: cfg.api_base.clone() })
	}

	pub fn api_base(&self) -> &str {
		&self.api_base
	}

	/// Issues one GET and returns the `cards` array in response order.
	pub async fn fetch_cards(&self, params: &QueryParameters) -> Result<Vec<Value>> {
		tracing::debug!(api_base = %self.api_base, params = ?params.as_pairs(), "Catalog request.");

		let res = self
			.client
			.get(&self.api_base)
			.query(params.as_pairs())
			.send()
			.await?;
		let status = res.status();

		if !status.is_success() {
			tracing::warn!(status = status.as_u16(), "Catalog request failed.");

			return Err(Error::Status { status: status.as_u16() });
		}

		let bytes = res.bytes().await?;
		let json: Value = serde_json::from_slice(&bytes)?;

		parse_cards_response(json)
	}
}

/// Extracts the `cards` array. A missing or non-array field is an empty result.
pub fn parse_cards_response(json: Value) -> Result<Vec<Value>> {
	let Value::Object(mut body) = json else {
		return Err(Error::InvalidResponse {
			message: "Catalog response must be a JSON object.".to_string(),
		});
	};

	match body.remove("cards") {
		Some(Value::Array(cards)) => Ok(cards),
		Some(_) | None => Ok(Vec::new()),
	}
}
