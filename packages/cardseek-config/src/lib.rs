mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Assets, Catalog, Config, DEFAULT_API_BASE, History, Random, Search, Service};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

/// Loads the file when one is given, otherwise validates and returns the built-in defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<Config> {
	match path {
		Some(path) => load(path),
		None => {
			let mut cfg = Config::default();

			normalize(&mut cfg);
			validate(&cfg)?;

			Ok(cfg)
		},
	}
}

pub fn validate(cfg: &Config) -> Result<()> {
	for (label, value) in [
		("catalog.api_base", &cfg.catalog.api_base),
		("assets.set_symbol_base", &cfg.assets.set_symbol_base),
		("assets.rarity_base", &cfg.assets.rarity_base),
		("assets.detail_base", &cfg.assets.detail_base),
		("assets.search_base", &cfg.assets.search_base),
	] {
		if value.trim().is_empty() {
			return Err(Error::Validation { message: format!("{label} must be non-empty.") });
		}
		if !value.starts_with("http://") && !value.starts_with("https://") {
			return Err(Error::Validation {
				message: format!("{label} must be an http or https URL."),
			});
		}
	}

	if cfg.catalog.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "catalog.timeout_ms must be greater than zero.".to_string(),
		});
	}
	if cfg.search.default_page_size == 0 {
		return Err(Error::Validation {
			message: "search.default_page_size must be greater than zero.".to_string(),
		});
	}
	if cfg.search.page_sizes.is_empty() {
		return Err(Error::Validation {
			message: "search.page_sizes must be non-empty.".to_string(),
		});
	}
	if cfg.search.page_sizes.contains(&0) {
		return Err(Error::Validation {
			message: "search.page_sizes entries must be greater than zero.".to_string(),
		});
	}
	if !cfg.search.page_sizes.contains(&cfg.search.default_page_size) {
		return Err(Error::Validation {
			message: "search.default_page_size must be one of search.page_sizes.".to_string(),
		});
	}
	if cfg.random.pool_size == 0 {
		return Err(Error::Validation {
			message: "random.pool_size must be greater than zero.".to_string(),
		});
	}
	if cfg.random.pick_count == 0 {
		return Err(Error::Validation {
			message: "random.pick_count must be greater than zero.".to_string(),
		});
	}
	if cfg.random.pick_count > cfg.random.pool_size {
		return Err(Error::Validation {
			message: "random.pick_count must be less than or equal to random.pool_size."
				.to_string(),
		});
	}
	if cfg.history.max_entries == 0 {
		return Err(Error::Validation {
			message: "history.max_entries must be greater than zero.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	if cfg.catalog.user_agent.as_deref().map(|agent| agent.trim().is_empty()).unwrap_or(false) {
		cfg.catalog.user_agent = None;
	}
	if cfg
		.history
		.path
		.as_deref()
		.map(|path| path.as_os_str().is_empty())
		.unwrap_or(false)
	{
		cfg.history.path = None;
	}

	for value in [
		&mut cfg.catalog.api_base,
		&mut cfg.assets.set_symbol_base,
		&mut cfg.assets.rarity_base,
		&mut cfg.assets.detail_base,
		&mut cfg.assets.search_base,
	] {
		let trimmed = value.trim().trim_end_matches('/');

		if trimmed.len() != value.len() {
			*value = trimmed.to_string();
		}
	}

	cfg.search.page_sizes.sort_unstable();
	cfg.search.page_sizes.dedup();
}
