use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_API_BASE: &str = "https://api.magicthegathering.io/v1/cards";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
	pub service: Service,
	pub catalog: Catalog,
	pub search: Search,
	pub random: Random,
	pub history: History,
	pub assets: Assets,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Service {
	pub log_level: String,
}
impl Default for Service {
	fn default() -> Self {
		Self { log_level: "info".to_string() }
	}
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Catalog {
	/// Full URL of the cards endpoint. Query parameters are appended to it as-is.
	pub api_base: String,
	pub timeout_ms: u64,
	pub user_agent: Option<String>,
}
impl Default for Catalog {
	fn default() -> Self {
		Self { api_base: DEFAULT_API_BASE.to_string(), timeout_ms: 10_000, user_agent: None }
	}
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Search {
	pub default_page_size: u32,
	/// Page sizes a user may switch between.
	pub page_sizes: Vec<u32>,
}
impl Default for Search {
	fn default() -> Self {
		Self { default_page_size: 12, page_sizes: vec![12, 24, 48, 96] }
	}
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Random {
	/// Page size of the single bulk request the random picks are drawn from.
	pub pool_size: u32,
	pub pick_count: u32,
}
impl Default for Random {
	fn default() -> Self {
		Self { pool_size: 200, pick_count: 3 }
	}
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct History {
	/// Optional. Falls back to the platform data directory when unset.
	pub path: Option<PathBuf>,
	pub max_entries: usize,
}
impl Default for History {
	fn default() -> Self {
		Self { path: None, max_entries: 20 }
	}
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Assets {
	pub set_symbol_base: String,
	pub rarity_base: String,
	pub detail_base: String,
	pub search_base: String,
}
impl Default for Assets {
	fn default() -> Self {
		Self {
			set_symbol_base: "https://svgs.scryfall.io/sets".to_string(),
			rarity_base: "https://svgs.scryfall.io/rarity".to_string(),
			detail_base: "https://gatherer.wizards.com/Pages/Card/Details.aspx".to_string(),
			search_base: "https://scryfall.com/search".to_string(),
		}
	}
}
