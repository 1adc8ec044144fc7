pub mod error;
pub mod present;
pub mod random;
pub mod search;
pub mod session;

pub use error::{Error, Result};
pub use present::{CardLink, CardView, Frame, escape_html};
pub use search::SearchResult;
pub use session::{SearchSession, SearchTicket, SessionAction};

use std::sync::Arc;

use cardseek_config::Config;
use cardseek_providers::{CatalogClient, CatalogProvider};

pub struct CardSeekService {
	pub cfg: Config,
	pub catalog: Arc<dyn CatalogProvider>,
}
impl CardSeekService {
	/// Builds the service with the HTTP catalog client described by `cfg.catalog`.
	pub fn new(cfg: Config) -> Result<Self> {
		let catalog = CatalogClient::new(&cfg.catalog)?;

		Ok(Self::with_catalog(cfg, Arc::new(catalog)))
	}

	pub fn with_catalog(cfg: Config, catalog: Arc<dyn CatalogProvider>) -> Self {
		Self { cfg, catalog }
	}

	pub fn new_session(&self) -> SearchSession {
		SearchSession::new(self.cfg.search.default_page_size)
			.with_page_sizes(&self.cfg.search.page_sizes)
	}
}
