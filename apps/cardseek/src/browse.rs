use std::{
	collections::BTreeSet,
	io::{self, Write},
};

use color_eyre::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use cardseek_domain::{Color, Command, SearchCriteria, parse_colors};
use cardseek_service::{CardSeekService, SearchSession, SessionAction};
use cardseek_storage::HistoryStore;

use crate::render;

const HELP: &str = "\
Type a card name to search. Other inputs:
  n | next            next page
  p | prev            previous page
  page <N>            jump to page N
  size <N>            change page size (back to page 1)
  colors <LIST>       color filter, e.g. `red,blue`; empty clears
  type <TEXT>         type filter; empty clears
  set <CODE>          set filter; empty clears
  search <TEXT>       search for TEXT even if it looks like a command
  history | h         list recent searches
  !<N>                repeat history entry N
  random              show random cards
  clear               clear the search history
  help | ?            this text
  q | quit            leave";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BrowseInput {
	Search { term: String },
	Command(Command),
	Colors(BTreeSet<Color>),
	Type(String),
	Set(String),
	ShowHistory,
	Rerun { index: usize },
	Help,
	Quit,
	Empty,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
	Continue,
	Quit,
}

pub fn parse_input(line: &str) -> Result<BrowseInput, String> {
	let line = line.trim();
	let (head, rest) = match line.split_once(char::is_whitespace) {
		Some((head, rest)) => (head, rest.trim()),
		None => (line, ""),
	};

	let input = match head.to_ascii_lowercase().as_str() {
		"" => BrowseInput::Empty,
		"q" | "quit" | "exit" if rest.is_empty() => BrowseInput::Quit,
		"n" | "next" if rest.is_empty() => BrowseInput::Command(Command::NextPage),
		"p" | "prev" | "previous" if rest.is_empty() =>
			BrowseInput::Command(Command::PreviousPage),
		"h" | "history" if rest.is_empty() => BrowseInput::ShowHistory,
		"help" | "?" if rest.is_empty() => BrowseInput::Help,
		"clear" if rest.is_empty() => BrowseInput::Command(Command::ClearHistory),
		"random" if rest.is_empty() => BrowseInput::Command(Command::Random),
		"page" => BrowseInput::Command(Command::StartSearch { page: parse_positive(rest, "page")? }),
		"size" => BrowseInput::Command(Command::ChangePageSize {
			size: parse_positive(rest, "size")?,
		}),
		"color" | "colors" => BrowseInput::Colors(parse_colors(rest).map_err(|err| err.to_string())?),
		"type" => BrowseInput::Type(rest.to_string()),
		"set" => BrowseInput::Set(rest.to_string()),
		"search" => BrowseInput::Search { term: rest.to_string() },
		_ if head.starts_with('!') && rest.is_empty() =>
			BrowseInput::Rerun { index: parse_positive(&head[1..], "history entry")? as usize },
		_ => BrowseInput::Search { term: line.to_string() },
	};

	Ok(input)
}

fn parse_positive(raw: &str, label: &str) -> Result<u32, String> {
	match raw.trim().parse::<u32>() {
		Ok(value) if value > 0 => Ok(value),
		_ => Err(format!("{label} must be a positive number.")),
	}
}

/// Interactive front end state: the filters being edited plus the session they are searched with.
pub struct Browser<'a> {
	service: &'a CardSeekService,
	store: &'a mut HistoryStore,
	session: SearchSession,
	filters: SearchCriteria,
	awaiting_clear: bool,
}
impl<'a> Browser<'a> {
	pub fn new(service: &'a CardSeekService, store: &'a mut HistoryStore) -> Self {
		let session = service.new_session();
		let filters = SearchCriteria::new(session.page_size());

		Self { service, store, session, filters, awaiting_clear: false }
	}

	pub fn session(&self) -> &SearchSession {
		&self.session
	}

	pub fn filters(&self) -> &SearchCriteria {
		&self.filters
	}

	pub fn awaiting_confirmation(&self) -> bool {
		self.awaiting_clear
	}

	pub fn prompt(&self) -> &'static str {
		if self.awaiting_clear { "Clear search history? [y/N] " } else { "cardseek> " }
	}

	/// Shows random cards when there is no history yet.
	pub async fn start(&mut self, out: &mut impl Write) -> Result<()> {
		if self.store.is_empty() {
			writeln!(out, "Loading random cards...")?;

			return self.random(out).await;
		}

		writeln!(out, "Type a card name, or `history` to pick a recent search.")?;

		Ok(())
	}

	pub async fn handle_line(&mut self, line: &str, out: &mut impl Write) -> Result<Flow> {
		if self.awaiting_clear {
			self.awaiting_clear = false;

			if !crate::is_yes(line) {
				writeln!(out, "History kept.")?;
			} else if let Err(err) = self.store.clear() {
				tracing::warn!(error = %err, "Failed to clear search history.");

				writeln!(out, "Could not clear history: {err}")?;
			} else {
				writeln!(out, "History cleared.")?;
			}

			return Ok(Flow::Continue);
		}

		match parse_input(line) {
			Ok(input) => self.handle(input, out).await,
			Err(message) => {
				writeln!(out, "{message}")?;

				Ok(Flow::Continue)
			},
		}
	}

	pub async fn handle(&mut self, input: BrowseInput, out: &mut impl Write) -> Result<Flow> {
		match input {
			BrowseInput::Empty => {},
			BrowseInput::Quit => return Ok(Flow::Quit),
			BrowseInput::Help => writeln!(out, "{HELP}")?,
			BrowseInput::ShowHistory => render::write_history(out, self.store.list())?,
			BrowseInput::Colors(colors) => {
				self.filters = self.filters.clone().with_colors(colors);

				writeln!(out, "Color filter updated.")?;
			},
			BrowseInput::Type(term) => {
				self.filters = self.filters.clone().with_type(&term);

				writeln!(out, "Type filter updated.")?;
			},
			BrowseInput::Set(code) => {
				self.filters = self.filters.clone().with_set(&code);

				writeln!(out, "Set filter updated.")?;
			},
			BrowseInput::Search { term } => self.search(&term, out).await?,
			BrowseInput::Rerun { index } => {
				let term = index
					.checked_sub(1)
					.and_then(|position| self.store.list().get(position))
					.map(|entry| entry.as_str().to_string());

				match term {
					Some(term) => self.search(&term, out).await?,
					None => writeln!(out, "No history entry {index}.")?,
				}
			},
			BrowseInput::Command(command) => self.apply(&command, out).await?,
		}

		Ok(Flow::Continue)
	}

	async fn search(&mut self, term: &str, out: &mut impl Write) -> Result<()> {
		self.filters = self.filters.clone().with_name(term);

		self.apply(&Command::StartSearch { page: 1 }, out).await
	}

	async fn apply(&mut self, command: &Command, out: &mut impl Write) -> Result<()> {
		match self.session.apply(command) {
			SessionAction::Fetch { page } => {
				// Paging and resizing stay on the last search; only a new search picks up edited
				// filters.
				let criteria = match (command, self.session.last_criteria()) {
					(Command::StartSearch { .. }, _) | (_, None) => self.filters.clone(),
					(_, Some(last)) => last.clone(),
				};

				if matches!(command, Command::StartSearch { .. })
					&& let Some(term) = criteria.name_term.as_deref()
					&& let Err(err) = self.store.record(term)
				{
					tracing::warn!(error = %err, "Failed to record search history.");

					writeln!(out, "Could not save history: {err}")?;
				}

				self.fetch(criteria, page, out).await?;
			},
			SessionAction::ClearHistory => self.awaiting_clear = true,
			SessionAction::Random => self.random(out).await?,
			SessionAction::Ignored => match command {
				Command::NextPage => writeln!(out, "No next page.")?,
				Command::PreviousPage => writeln!(out, "Already on the first page.")?,
				Command::ChangePageSize { .. } => writeln!(
					out,
					"Page size must be one of {}.",
					crate::format_sizes(self.session.page_sizes())
				)?,
				_ => writeln!(out, "Nothing to do.")?,
			},
		}

		Ok(())
	}

	async fn fetch(
		&mut self,
		criteria: SearchCriteria,
		page: u32,
		out: &mut impl Write,
	) -> Result<()> {
		let ticket = self.session.begin(criteria, page);

		writeln!(out, "Searching...")?;

		match self.service.search(&ticket.criteria).await {
			Ok(result) =>
				if let Some(result) = self.session.complete(ticket, result) {
					render::write_result(out, &result, &self.service.cfg.assets)?;
				},
			Err(err) => {
				tracing::error!(error = %err, "Search failed.");

				writeln!(out, "Search failed: {err}")?;
			},
		}

		Ok(())
	}

	async fn random(&mut self, out: &mut impl Write) -> Result<()> {
		match self.service.random_cards(self.session.page_size()).await {
			Ok(result) => {
				let result = self.session.complete_random(result);

				if result.cards.is_empty() {
					writeln!(out, "No cards available right now.")?;
				} else {
					writeln!(out, "{} random cards:", result.cards.len())?;
					render::write_result(out, &result, &self.service.cfg.assets)?;
				}
			},
			Err(err) => {
				tracing::error!(error = %err, "Random cards failed.");

				writeln!(out, "Could not load random cards: {err}")?;
			},
		}

		Ok(())
	}
}

pub async fn run(service: &CardSeekService, store: &mut HistoryStore) -> Result<()> {
	let mut browser = Browser::new(service, store);
	let mut out = io::stdout();
	let mut lines = BufReader::new(tokio::io::stdin()).lines();

	writeln!(out, "Type `help` for commands.")?;

	browser.start(&mut out).await?;

	loop {
		write!(out, "{}", browser.prompt())?;
		out.flush()?;

		let Some(line) = lines.next_line().await? else {
			break;
		};

		if browser.handle_line(&line, &mut out).await? == Flow::Quit {
			break;
		}
	}

	Ok(())
}
