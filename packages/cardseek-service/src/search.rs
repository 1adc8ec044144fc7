use serde::Serialize;
use serde_json::Value;

use cardseek_domain::{FallbackChain, PaginationState, QueryMode, SearchCriteria, query};

use crate::{CardSeekService, Error, Result};

#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
	/// Catalog records, untouched and in catalog order.
	pub cards: Vec<Value>,
	pub pagination: PaginationState,
	/// Mode of the query whose cards are returned.
	pub mode: QueryMode,
	pub queries_issued: u32,
}
impl SearchResult {
	pub fn is_empty(&self) -> bool {
		self.cards.is_empty()
	}
}

impl CardSeekService {
	/// Runs the name query and, when it comes back empty, the single text fallback.
	///
	/// A page past the end of the data is an empty result, not an error.
	pub async fn search(&self, criteria: &SearchCriteria) -> Result<SearchResult> {
		criteria.validate()?;

		let mut chain = FallbackChain::new(criteria);
		let mut next = chain.start();
		let mut cards = Vec::new();

		while let Some(params) = next {
			let mode =
				if params.contains(query::KEY_TEXT) { QueryMode::Text } else { QueryMode::Name };

			cards = self.catalog.fetch_cards(&params).await.map_err(|err| {
				tracing::error!(error = %err, mode = mode.as_str(), "Catalog query failed.");

				Error::from(err)
			})?;

			tracing::debug!(
				mode = mode.as_str(),
				page = criteria.page,
				returned = cards.len(),
				"Catalog query returned."
			);

			next = chain.observe(cards.len());
		}

		if chain.final_mode() == QueryMode::Text {
			tracing::info!(returned = cards.len(), "Name search was empty. Used text search.");
		}

		let pagination =
			PaginationState::from_count(criteria.page, criteria.page_size, cards.len());

		Ok(SearchResult {
			cards,
			pagination,
			mode: chain.final_mode(),
			queries_issued: chain.queries_issued(),
		})
	}
}
