use std::{collections::BTreeSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Mana colors accepted by the catalog's `colors` filter.
///
/// The derived ordering is the canonical WUBRG order, which keeps the joined filter value stable
/// regardless of the order the user picked colors in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
	White,
	Blue,
	Black,
	Red,
	Green,
}
impl Color {
	pub const ALL: [Self; 5] = [Self::White, Self::Blue, Self::Black, Self::Red, Self::Green];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::White => "White",
			Self::Blue => "Blue",
			Self::Black => "Black",
			Self::Red => "Red",
			Self::Green => "Green",
		}
	}
}
impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
impl FromStr for Color {
	type Err = CriteriaError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"white" | "w" => Ok(Self::White),
			"blue" | "u" => Ok(Self::Blue),
			"black" | "b" => Ok(Self::Black),
			"red" | "r" => Ok(Self::Red),
			"green" | "g" => Ok(Self::Green),
			_ => Err(CriteriaError::UnknownColor { value: s.to_string() }),
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CriteriaError {
	#[error("Unknown color {value:?}. Expected one of white, blue, black, red, green.")]
	UnknownColor { value: String },
	#[error("page must be greater than zero.")]
	ZeroPage,
	#[error("page_size must be greater than zero.")]
	ZeroPageSize,
}

/// User-supplied search input for one search invocation.
///
/// Text fields are trimmed on the way in and a blank value is stored as `None`, so downstream code
/// only ever has to check for presence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
	pub name_term: Option<String>,
	pub colors: BTreeSet<Color>,
	pub type_term: Option<String>,
	pub set_code: Option<String>,
	pub page: u32,
	pub page_size: u32,
}
impl SearchCriteria {
	pub fn new(page_size: u32) -> Self {
		Self {
			name_term: None,
			colors: BTreeSet::new(),
			type_term: None,
			set_code: None,
			page: 1,
			page_size,
		}
	}

	pub fn with_name(mut self, term: &str) -> Self {
		self.name_term = non_blank(term);

		self
	}

	pub fn with_colors<I>(mut self, colors: I) -> Self
	where
		I: IntoIterator<Item = Color>,
	{
		self.colors = colors.into_iter().collect();

		self
	}

	pub fn with_type(mut self, term: &str) -> Self {
		self.type_term = non_blank(term);

		self
	}

	pub fn with_set(mut self, code: &str) -> Self {
		self.set_code = non_blank(code);

		self
	}

	pub fn with_page(mut self, page: u32) -> Self {
		self.page = page;

		self
	}

	pub fn with_page_size(mut self, page_size: u32) -> Self {
		self.page_size = page_size;

		self
	}

	/// Name-mode with a fallback only applies when a name term is present.
	pub fn is_direct(&self) -> bool {
		self.name_term.is_none()
	}

	pub fn validate(&self) -> Result<(), CriteriaError> {
		if self.page == 0 {
			return Err(CriteriaError::ZeroPage);
		}
		if self.page_size == 0 {
			return Err(CriteriaError::ZeroPageSize);
		}

		Ok(())
	}
}

/// Parses a comma or whitespace separated color list such as `"red, blue"`.
pub fn parse_colors(raw: &str) -> Result<BTreeSet<Color>, CriteriaError> {
	raw.split(|ch: char| ch == ',' || ch.is_whitespace())
		.filter(|part| !part.is_empty())
		.map(Color::from_str)
		.collect()
}

fn non_blank(value: &str) -> Option<String> {
	let trimmed = value.trim();

	if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn blank_terms_are_absent() {
		let criteria = SearchCriteria::new(12).with_name("   ").with_type("").with_set(" \t");

		assert!(criteria.name_term.is_none());
		assert!(criteria.type_term.is_none());
		assert!(criteria.set_code.is_none());
		assert!(criteria.is_direct());
	}

	#[test]
	fn parses_color_names_and_letters() {
		let colors = parse_colors("red, U  green").expect("Colors must parse.");

		assert_eq!(colors.into_iter().collect::<Vec<_>>(), vec![
			Color::Blue,
			Color::Red,
			Color::Green
		]);
	}

	#[test]
	fn rejects_unknown_color() {
		let err = parse_colors("red,purple").expect_err("Expected unknown color.");

		assert_eq!(err, CriteriaError::UnknownColor { value: "purple".to_string() });
	}
}
