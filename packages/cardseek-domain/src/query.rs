use serde::{Deserialize, Serialize};

use crate::criteria::SearchCriteria;

pub const KEY_NAME: &str = "name";
pub const KEY_TEXT: &str = "text";
pub const KEY_COLORS: &str = "colors";
pub const KEY_TYPES: &str = "types";
pub const KEY_SET: &str = "set";
pub const KEY_PAGE: &str = "page";
pub const KEY_PAGE_SIZE: &str = "pageSize";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryMode {
	/// The free-text term filters on card name.
	Name,
	/// The free-text term filters on card rules text.
	Text,
}
impl QueryMode {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Name => "name",
			Self::Text => "text",
		}
	}
}

/// Ordered key/value pairs sent to the catalog as the query string.
///
/// Insertion skips empty values, so the catalog never receives a key without a value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryParameters {
	pairs: Vec<(&'static str, String)>,
}
impl QueryParameters {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_criteria(criteria: &SearchCriteria, mode: QueryMode) -> Self {
		let mut params = Self::new();

		if let Some(term) = criteria.name_term.as_deref() {
			match mode {
				QueryMode::Name => params.insert(KEY_NAME, term),
				QueryMode::Text => params.insert(KEY_TEXT, term),
			}
		}

		let colors =
			criteria.colors.iter().map(|color| color.as_str()).collect::<Vec<_>>().join(",");

		params.insert(KEY_COLORS, colors);

		if let Some(term) = criteria.type_term.as_deref() {
			params.insert(KEY_TYPES, term);
		}
		if let Some(code) = criteria.set_code.as_deref() {
			params.insert(KEY_SET, code);
		}

		params.insert(KEY_PAGE, criteria.page.to_string());
		params.insert(KEY_PAGE_SIZE, criteria.page_size.to_string());

		params
	}

	/// Sets `key`, replacing an earlier value. Blank values remove the key instead.
	pub fn insert(&mut self, key: &'static str, value: impl Into<String>) {
		let value = value.into();

		self.pairs.retain(|(existing, _)| *existing != key);

		if value.trim().is_empty() {
			return;
		}

		self.pairs.push((key, value));
	}

	pub fn remove(&mut self, key: &str) -> Option<String> {
		let index = self.pairs.iter().position(|(existing, _)| *existing == key)?;

		Some(self.pairs.remove(index).1)
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.pairs.iter().find(|(existing, _)| *existing == key).map(|(_, value)| value.as_str())
	}

	pub fn contains(&self, key: &str) -> bool {
		self.get(key).is_some()
	}

	pub fn len(&self) -> usize {
		self.pairs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.pairs.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
		self.pairs.iter().map(|(key, value)| (*key, value.as_str()))
	}

	pub fn as_pairs(&self) -> &[(&'static str, String)] {
		&self.pairs
	}
}
