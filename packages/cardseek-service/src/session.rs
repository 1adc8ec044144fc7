use cardseek_domain::{Command, PaginationState, SearchCriteria};

use crate::{CardSeekService, Result, SearchResult};

/// What the front end should do after a [`Command`] is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionAction {
	Fetch { page: u32 },
	ClearHistory,
	Random,
	/// A guarded command such as "previous" on page 1.
	Ignored,
}

/// Handle for one in-flight search. Only the ticket from the latest [`SearchSession::begin`] may
/// complete.
#[derive(Clone, Debug)]
pub struct SearchTicket {
	pub generation: u64,
	pub criteria: SearchCriteria,
}

/// Per-user search state owned by the caller.
#[derive(Clone, Debug)]
pub struct SearchSession {
	page_size: u32,
	/// Sizes `ChangePageSize` accepts. Empty means any positive size.
	page_sizes: Vec<u32>,
	current_page: u32,
	pagination: Option<PaginationState>,
	last_fetch_count: Option<usize>,
	last_criteria: Option<SearchCriteria>,
	generation: u64,
}
impl SearchSession {
	pub fn new(page_size: u32) -> Self {
		Self {
			page_size: page_size.max(1),
			page_sizes: Vec::new(),
			current_page: 1,
			pagination: None,
			last_fetch_count: None,
			last_criteria: None,
			generation: 0,
		}
	}

	/// Restricts `ChangePageSize` to `sizes`.
	pub fn with_page_sizes(mut self, sizes: &[u32]) -> Self {
		self.page_sizes = sizes.to_vec();

		self
	}

	pub fn page_size(&self) -> u32 {
		self.page_size
	}

	pub fn page_sizes(&self) -> &[u32] {
		&self.page_sizes
	}

	pub fn accepts_page_size(&self, size: u32) -> bool {
		size > 0 && (self.page_sizes.is_empty() || self.page_sizes.contains(&size))
	}

	pub fn current_page(&self) -> u32 {
		self.current_page
	}

	/// Pagination of the last applied result, if any.
	pub fn pagination(&self) -> Option<PaginationState> {
		self.pagination
	}

	/// Criteria of the last applied search. Paging commands re-run these.
	pub fn last_criteria(&self) -> Option<&SearchCriteria> {
		self.last_criteria.as_ref()
	}

	/// Number of cards in the last applied result.
	pub fn last_fetch_count(&self) -> Option<usize> {
		self.last_fetch_count
	}

	pub fn apply(&mut self, command: &Command) -> SessionAction {
		match *command {
			Command::StartSearch { page } => SessionAction::Fetch { page: page.max(1) },
			Command::NextPage => match self.pagination.and_then(|state| state.next_page()) {
				Some(page) => SessionAction::Fetch { page },
				None => SessionAction::Ignored,
			},
			Command::PreviousPage =>
				if self.current_page > 1 {
					SessionAction::Fetch { page: self.current_page - 1 }
				} else {
					SessionAction::Ignored
				},
			Command::ChangePageSize { size } => {
				if !self.accepts_page_size(size) {
					return SessionAction::Ignored;
				}

				self.page_size = size;
				self.current_page = 1;
				self.pagination = None;

				SessionAction::Fetch { page: 1 }
			},
			Command::ClearHistory => SessionAction::ClearHistory,
			Command::Random => SessionAction::Random,
		}
	}

	/// Stamps `criteria` with the session's page size and the requested page, and supersedes any
	/// search still in flight.
	pub fn begin(&mut self, criteria: SearchCriteria, page: u32) -> SearchTicket {
		self.generation += 1;

		SearchTicket {
			generation: self.generation,
			criteria: criteria.with_page(page.max(1)).with_page_size(self.page_size),
		}
	}

	fn is_current(&self, ticket: &SearchTicket) -> bool {
		ticket.generation == self.generation
	}

	/// Applies `result` when `ticket` is still current. Results of superseded searches are
	/// dropped and `None` is returned.
	pub fn complete(&mut self, ticket: SearchTicket, result: SearchResult) -> Option<SearchResult> {
		if !self.is_current(&ticket) {
			tracing::debug!(
				ticket = ticket.generation,
				current = self.generation,
				"Discarding superseded search result."
			);

			return None;
		}

		self.current_page = result.pagination.current_page;
		self.pagination = Some(result.pagination);
		self.last_fetch_count = Some(result.cards.len());
		self.last_criteria = Some(ticket.criteria);

		Some(result)
	}

	/// Applies a random sample as page 1 of a fresh browse.
	pub fn complete_random(&mut self, result: SearchResult) -> SearchResult {
		self.generation += 1;
		self.current_page = 1;
		self.pagination = Some(result.pagination);
		self.last_fetch_count = Some(result.cards.len());
		self.last_criteria = None;

		result
	}
}

impl CardSeekService {
	/// Runs one search through `session`: begin, query, complete.
	///
	/// Returns `Ok(None)` when a newer search was started on the session meanwhile.
	pub async fn run_search(
		&self,
		session: &mut SearchSession,
		criteria: SearchCriteria,
		page: u32,
	) -> Result<Option<SearchResult>> {
		let ticket = session.begin(criteria, page);
		let result = self.search(&ticket.criteria).await?;

		Ok(session.complete(ticket, result))
	}
}
