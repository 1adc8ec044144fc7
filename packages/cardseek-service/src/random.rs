use rand::Rng;

use cardseek_domain::{
	PaginationState, QueryMode, QueryParameters, query, sample_without_replacement,
};

use crate::{CardSeekService, Result, SearchResult};

impl CardSeekService {
	/// Fetches one bulk page and returns `random.pick_count` distinct cards from it.
	///
	/// `page_size` is the session's page size; the result is page 1 of that session.
	pub async fn random_cards(&self, page_size: u32) -> Result<SearchResult> {
		let pool = self.fetch_pool().await?;
		let picks = sample_without_replacement(
			&pool,
			self.cfg.random.pick_count as usize,
			&mut rand::thread_rng(),
		);

		Ok(random_result(picks, page_size))
	}

	/// Same as [`CardSeekService::random_cards`] with a caller-supplied generator.
	pub async fn random_cards_with<R>(&self, page_size: u32, rng: &mut R) -> Result<SearchResult>
	where
		R: Rng + Send + ?Sized,
	{
		let pool = self.fetch_pool().await?;
		let picks = sample_without_replacement(&pool, self.cfg.random.pick_count as usize, rng);

		Ok(random_result(picks, page_size))
	}

	async fn fetch_pool(&self) -> Result<Vec<serde_json::Value>> {
		let mut params = QueryParameters::new();

		params.insert(query::KEY_PAGE_SIZE, self.cfg.random.pool_size.to_string());

		let pool = self.catalog.fetch_cards(&params).await?;

		tracing::debug!(pool = pool.len(), "Random pool fetched.");

		Ok(pool)
	}
}

fn random_result(picks: Vec<serde_json::Value>, page_size: u32) -> SearchResult {
	let pagination = PaginationState::from_count(1, page_size, picks.len());

	SearchResult { cards: picks, pagination, mode: QueryMode::Name, queries_issued: 1 }
}
