use serde::Serialize;

use crate::{
	criteria::SearchCriteria,
	query::{QueryMode, QueryParameters},
};

/// Progress through the one-level name-to-text fallback.
///
/// `NotTried -> NameTried -> (Done | TextTried -> Done)`. A direct query (no name term) goes
/// `NotTried -> Done` after its single request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackState {
	NotTried,
	NameTried,
	TextTried,
	Done,
}

#[derive(Debug)]
pub struct FallbackChain<'a> {
	criteria: &'a SearchCriteria,
	state: FallbackState,
	final_mode: QueryMode,
	queries_issued: u32,
}
impl<'a> FallbackChain<'a> {
	pub fn new(criteria: &'a SearchCriteria) -> Self {
		Self {
			criteria,
			state: FallbackState::NotTried,
			final_mode: QueryMode::Name,
			queries_issued: 0,
		}
	}

	pub fn state(&self) -> FallbackState {
		self.state
	}

	/// Mode of the most recently issued query.
	pub fn final_mode(&self) -> QueryMode {
		self.final_mode
	}

	pub fn queries_issued(&self) -> u32 {
		self.queries_issued
	}

	/// Returns the first query to issue, or `None` once the chain has started.
	pub fn start(&mut self) -> Option<QueryParameters> {
		if self.state != FallbackState::NotTried || self.queries_issued > 0 {
			return None;
		}

		self.queries_issued = 1;

		if !self.criteria.is_direct() {
			self.state = FallbackState::NameTried;
		}

		Some(QueryParameters::from_criteria(self.criteria, QueryMode::Name))
	}

	/// Feeds back how many cards the last query returned and yields the follow-up query, if any.
	pub fn observe(&mut self, returned: usize) -> Option<QueryParameters> {
		match self.state {
			FallbackState::NotTried if self.queries_issued > 0 => {
				self.state = FallbackState::Done;

				None
			},
			FallbackState::NameTried if returned == 0 => {
				self.state = FallbackState::TextTried;
				self.final_mode = QueryMode::Text;
				self.queries_issued += 1;

				Some(QueryParameters::from_criteria(self.criteria, QueryMode::Text))
			},
			FallbackState::NameTried | FallbackState::TextTried => {
				self.state = FallbackState::Done;

				None
			},
			FallbackState::NotTried | FallbackState::Done => None,
		}
	}
}
