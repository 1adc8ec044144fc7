use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
	pub current_page: u32,
	pub page_size: u32,
	/// A full page only suggests more data; a short page proves there is none.
	pub has_next: bool,
}
impl PaginationState {
	pub fn from_count(current_page: u32, page_size: u32, returned: usize) -> Self {
		Self {
			current_page: current_page.max(1),
			page_size,
			has_next: page_size > 0 && returned == page_size as usize,
		}
	}

	pub fn can_go_previous(&self) -> bool {
		self.current_page > 1
	}

	pub fn can_go_next(&self) -> bool {
		self.has_next
	}

	pub fn previous_page(&self) -> Option<u32> {
		self.can_go_previous().then(|| self.current_page - 1)
	}

	pub fn next_page(&self) -> Option<u32> {
		self.can_go_next().then(|| self.current_page.saturating_add(1))
	}
}
