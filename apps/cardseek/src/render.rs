use std::io::Write;

use color_eyre::Result;

use cardseek_config::Assets;
use cardseek_domain::{HistoryEntry, PaginationState};
use cardseek_service::{CardLink, CardView, SearchResult, escape_html};

pub fn write_result(out: &mut impl Write, result: &SearchResult, assets: &Assets) -> Result<()> {
	if result.cards.is_empty() {
		writeln!(out, "No cards found.")?;
	} else {
		for (index, card) in result.cards.iter().enumerate() {
			write_card(out, index + 1, &CardView::from_card(card, assets))?;
		}

		writeln!(
			out,
			"Showing {} cards (page {}).",
			result.cards.len(),
			result.pagination.current_page
		)?;
	}

	write_pagination(out, &result.pagination)
}

pub fn write_card(out: &mut impl Write, position: usize, view: &CardView) -> Result<()> {
	writeln!(out, "[{position}] {} ({})", view.name, view.frame.as_str())?;
	writeln!(out, "    {}", view.set_line)?;

	if let Some(type_line) = view.type_line.as_deref() {
		writeln!(out, "    {type_line}")?;
	}

	match view.text.as_deref() {
		Some(text) =>
			for line in text.lines() {
				writeln!(out, "    | {line}")?;
			},
		None => writeln!(out, "    | No rules text.")?,
	}

	writeln!(out, "    image: {}", view.image_url.as_deref().unwrap_or("(image unavailable)"))?;

	if let Some(url) = view.set_symbol_url.as_deref() {
		writeln!(out, "    set symbol: {url}")?;
	}
	if let Some(url) = view.rarity_icon_url.as_deref() {
		writeln!(out, "    rarity: {url}")?;
	}

	match view.link.as_ref() {
		Some(CardLink::Detail { url }) => writeln!(out, "    details: {url}")?,
		Some(CardLink::Search { url }) => writeln!(out, "    search: {url}")?,
		None => {},
	}

	writeln!(out)?;

	Ok(())
}

pub fn write_pagination(out: &mut impl Write, pagination: &PaginationState) -> Result<()> {
	let previous = if pagination.can_go_previous() { "[p]rev" } else { "-" };
	let next = if pagination.can_go_next() { "[n]ext" } else { "-" };

	writeln!(out, "Page {}  {previous}  {next}", pagination.current_page)?;

	Ok(())
}

pub fn write_history(out: &mut impl Write, entries: &[HistoryEntry]) -> Result<()> {
	if entries.is_empty() {
		writeln!(out, "No searches yet.")?;

		return Ok(());
	}

	for (index, entry) in entries.iter().enumerate() {
		writeln!(out, "{:>2}. {}", index + 1, entry.as_str())?;
	}

	Ok(())
}

pub fn write_json(out: &mut impl Write, result: &SearchResult) -> Result<()> {
	serde_json::to_writer_pretty(&mut *out, result)?;
	writeln!(out)?;

	Ok(())
}

/// Card blocks as an HTML fragment. Every card field is escaped and broken icons hide themselves.
pub fn write_html(out: &mut impl Write, result: &SearchResult, assets: &Assets) -> Result<()> {
	writeln!(out, "<div class=\"cards\">")?;

	if result.cards.is_empty() {
		writeln!(out, "  <p class=\"empty\">No cards found.</p>")?;
	}

	for card in &result.cards {
		write_html_card(out, &CardView::from_card(card, assets))?;
	}

	let pagination = &result.pagination;

	writeln!(
		out,
		"  <p class=\"pagination\" data-prev=\"{}\" data-next=\"{}\">Page {}</p>",
		pagination.can_go_previous(),
		pagination.can_go_next(),
		pagination.current_page
	)?;
	writeln!(out, "</div>")?;

	Ok(())
}

fn write_html_card(out: &mut impl Write, view: &CardView) -> Result<()> {
	let name = escape_html(&view.name);

	writeln!(out, "  <div class=\"card frame-{}\">", view.frame.as_str())?;

	match view.image_url.as_deref() {
		Some(url) => writeln!(
			out,
			"    <img class=\"art\" src=\"{}\" alt=\"{name}\" onerror=\"this.classList.add('missing')\">",
			escape_html(url)
		)?,
		None => writeln!(out, "    <div class=\"art missing\">Image unavailable</div>")?,
	}

	writeln!(out, "    <h3>{name}</h3>")?;
	writeln!(out, "    <p class=\"set\">{}</p>", escape_html(&view.set_line))?;

	for (class, url) in [("set-symbol", &view.set_symbol_url), ("rarity", &view.rarity_icon_url)] {
		if let Some(url) = url.as_deref() {
			writeln!(
				out,
				"    <img class=\"{class}\" src=\"{}\" alt=\"\" onerror=\"this.hidden=true\">",
				escape_html(url)
			)?;
		}
	}

	if let Some(type_line) = view.type_line.as_deref() {
		writeln!(out, "    <p class=\"type\">{}</p>", escape_html(type_line))?;
	}

	let text = match view.text.as_deref() {
		Some(text) => text.lines().map(escape_html).collect::<Vec<_>>().join("<br>"),
		None => "No rules text.".to_string(),
	};

	writeln!(out, "    <p class=\"text\">{text}</p>")?;

	match view.link.as_ref() {
		Some(CardLink::Detail { url }) => writeln!(
			out,
			"    <a href=\"{}\" target=\"_blank\" rel=\"noopener\">Details</a>",
			escape_html(url)
		)?,
		Some(CardLink::Search { url }) => writeln!(
			out,
			"    <a href=\"{}\" target=\"_blank\" rel=\"noopener\">Search</a>",
			escape_html(url)
		)?,
		None => {},
	}

	writeln!(out, "  </div>")?;

	Ok(())
}
