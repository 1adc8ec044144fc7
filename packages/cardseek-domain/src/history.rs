use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_ENTRIES: usize = 20;

/// A past search term. Display keeps the recorded casing; equality for dedup ignores case.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryEntry(String);
impl HistoryEntry {
	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn matches(&self, term: &str) -> bool {
		fold(&self.0) == fold(term)
	}
}
impl AsRef<str> for HistoryEntry {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

/// Most-recent-first log of unique search terms, capped at `cap` entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryLog {
	entries: Vec<HistoryEntry>,
	cap: usize,
}
impl HistoryLog {
	pub fn new(cap: usize) -> Self {
		Self { entries: Vec::new(), cap: cap.max(1) }
	}

	/// Rebuilds a log from persisted terms, oldest last. Terms are normalized the same way
	/// [`HistoryLog::record`] normalizes them, keeping the first occurrence of each.
	pub fn from_terms<I, S>(terms: I, cap: usize) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut log = Self::new(cap);

		for term in terms {
			let term = term.as_ref().trim();

			if term.is_empty() || log.entries.iter().any(|entry| entry.matches(term)) {
				continue;
			}
			if log.entries.len() == log.cap {
				break;
			}

			log.entries.push(HistoryEntry(term.to_string()));
		}

		log
	}

	pub fn cap(&self) -> usize {
		self.cap
	}

	/// Returns `false` when the term is blank and nothing changed.
	pub fn record(&mut self, term: &str) -> bool {
		let term = term.trim();

		if term.is_empty() {
			return false;
		}

		self.entries.retain(|entry| !entry.matches(term));
		self.entries.insert(0, HistoryEntry(term.to_string()));
		self.entries.truncate(self.cap);

		true
	}

	pub fn list(&self) -> &[HistoryEntry] {
		&self.entries
	}

	pub fn terms(&self) -> Vec<String> {
		self.entries.iter().map(|entry| entry.0.clone()).collect()
	}

	pub fn clear(&mut self) {
		self.entries.clear();
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
impl Default for HistoryLog {
	fn default() -> Self {
		Self::new(DEFAULT_MAX_ENTRIES)
	}
}

fn fold(term: &str) -> String {
	term.trim().to_lowercase()
}
