//! Display model for catalog cards.
//!
//! Cards stay opaque JSON everywhere else; this is the one place that reads their fields, and
//! every field is optional.

use serde::Serialize;
use serde_json::Value;

use cardseek_config::Assets;

/// Border style picked from the card's colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Frame {
	Colorless,
	White,
	Blue,
	Black,
	Red,
	Green,
	Multicolor,
}
impl Frame {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Colorless => "colorless",
			Self::White => "white",
			Self::Blue => "blue",
			Self::Black => "black",
			Self::Red => "red",
			Self::Green => "green",
			Self::Multicolor => "multicolor",
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardLink {
	/// Catalog detail page for a card with a multiverse id.
	Detail { url: String },
	/// Name search on the fallback site.
	Search { url: String },
}
impl CardLink {
	pub fn url(&self) -> &str {
		match self {
			Self::Detail { url } | Self::Search { url } => url,
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardView {
	pub name: String,
	pub set_line: String,
	pub type_line: Option<String>,
	pub text: Option<String>,
	pub frame: Frame,
	/// `None` means the renderer shows a placeholder.
	pub image_url: Option<String>,
	pub set_symbol_url: Option<String>,
	pub rarity_icon_url: Option<String>,
	pub link: Option<CardLink>,
}
impl CardView {
	pub fn from_card(card: &Value, assets: &Assets) -> Self {
		let name = str_field(card, "name");
		let set_code = str_field(card, "set");
		let number = str_field(card, "number");
		let mut set_line = str_field(card, "setName").unwrap_or("Unknown set").to_string();

		if let Some(number) = number {
			set_line.push_str(" • #");
			set_line.push_str(number);
		}

		let image_url = str_field(card, "imageUrl")
			.or_else(|| card.get("cardImage").and_then(|image| str_field(image, "imageUrl")))
			.map(str::to_string);
		let set_symbol_url =
			set_code.map(|code| format!("{}/{}.svg", assets.set_symbol_base, code.to_lowercase()));
		let rarity_icon_url = str_field(card, "rarity")
			.map(|rarity| format!("{}/{}.svg", assets.rarity_base, rarity.to_lowercase()));

		Self {
			name: name.unwrap_or("—").to_string(),
			set_line,
			type_line: str_field(card, "type").map(str::to_string),
			text: str_field(card, "text").map(str::to_string),
			frame: frame_for(card),
			image_url,
			set_symbol_url,
			rarity_icon_url,
			link: link_for(card, name, set_code, assets),
		}
	}
}

pub fn escape_html(raw: &str) -> String {
	let mut escaped = String::with_capacity(raw.len());

	for ch in raw.chars() {
		match ch {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#039;"),
			other => escaped.push(other),
		}
	}

	escaped
}

fn frame_for(card: &Value) -> Frame {
	let colors: Vec<&str> = card
		.get("colors")
		.and_then(Value::as_array)
		.map(|colors| colors.iter().filter_map(Value::as_str).collect())
		.unwrap_or_default();

	match colors.as_slice() {
		[] => Frame::Colorless,
		[single] => match single.to_lowercase().as_str() {
			"white" => Frame::White,
			"blue" => Frame::Blue,
			"black" => Frame::Black,
			"red" => Frame::Red,
			"green" => Frame::Green,
			_ => Frame::Multicolor,
		},
		_ => Frame::Multicolor,
	}
}

fn link_for(
	card: &Value,
	name: Option<&str>,
	set_code: Option<&str>,
	assets: &Assets,
) -> Option<CardLink> {
	if let Some(id) = multiverse_id(card) {
		return Some(CardLink::Detail { url: format!("{}?multiverseid={id}", assets.detail_base) });
	}

	let name = name?;
	let query = match set_code {
		Some(code) => format!("{name} set:{code}"),
		None => name.to_string(),
	};

	Some(CardLink::Search {
		url: format!("{}?q={}", assets.search_base, urlencoding::encode(&query)),
	})
}

/// `multiverseid`, else the first `multiverseids` entry. Ids may be numbers or numeric strings.
fn multiverse_id(card: &Value) -> Option<String> {
	let single = card.get("multiverseid").filter(|value| !value.is_null());
	let value = single.or_else(|| {
		card.get("multiverseids").and_then(Value::as_array).and_then(|ids| ids.first())
	})?;

	match value {
		Value::Number(number) => Some(number.to_string()),
		Value::String(raw) if !raw.trim().is_empty() => Some(raw.trim().to_string()),
		_ => None,
	}
}

fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
	value.get(key).and_then(Value::as_str).map(str::trim).filter(|raw| !raw.is_empty())
}
