pub mod browse;
pub mod render;

use std::{
	io::{self, BufRead, Write},
	path::PathBuf,
	process::ExitCode,
};

use clap::{Parser, Subcommand};
use color_eyre::{Result, eyre};
use tracing_subscriber::EnvFilter;

use cardseek_config::{Assets, Config};
use cardseek_domain::{Command, SearchCriteria, parse_colors};
use cardseek_service::{CardSeekService, SearchResult, SessionAction};
use cardseek_storage::{HISTORY_FILE_NAME, HistoryStore};

#[derive(Debug, Parser)]
#[command(
	version = cardseek_cli::VERSION,
	rename_all = "kebab",
	styles = cardseek_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE", global = true)]
	pub config: Option<PathBuf>,
	/// Overrides `history.path` from the config.
	#[arg(long, value_name = "FILE", global = true)]
	pub history: Option<PathBuf>,
	#[command(subcommand)]
	pub command: Option<Cmd>,
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
	/// Search the catalog by name, falling back to rules text when no name matches.
	Search(SearchArgs),
	/// Show a few random cards.
	Random {
		#[command(flatten)]
		output: OutputArgs,
	},
	/// Show or clear the search history.
	History {
		#[command(subcommand)]
		action: HistoryCmd,
	},
	/// Interactive search with paging. This is the default.
	Browse,
}

#[derive(Debug, Subcommand)]
pub enum HistoryCmd {
	List,
	Clear {
		/// Skip the confirmation prompt.
		#[arg(long, short = 'y')]
		yes: bool,
	},
}

#[derive(Debug, clap::Args)]
pub struct SearchArgs {
	/// Card name, or rules text when no card name matches.
	pub name: Vec<String>,
	/// Comma separated colors, e.g. `red,blue`.
	#[arg(long, value_name = "COLORS")]
	pub colors: Option<String>,
	#[arg(long = "type", value_name = "TYPE")]
	pub type_term: Option<String>,
	#[arg(long = "set", value_name = "CODE")]
	pub set_code: Option<String>,
	#[arg(long, default_value_t = 1)]
	pub page: u32,
	/// One of `search.page_sizes`.
	#[arg(long, value_name = "N")]
	pub page_size: Option<u32>,
	#[command(flatten)]
	pub output: OutputArgs,
	/// Do not record the name in the search history.
	#[arg(long)]
	pub no_history: bool,
}
impl SearchArgs {
	pub fn criteria(&self) -> Result<SearchCriteria> {
		let colors = match self.colors.as_deref() {
			Some(raw) => parse_colors(raw)?,
			None => Default::default(),
		};

		Ok(SearchCriteria::new(0)
			.with_name(&self.name.join(" "))
			.with_colors(colors)
			.with_type(self.type_term.as_deref().unwrap_or_default())
			.with_set(self.set_code.as_deref().unwrap_or_default()))
	}
}

#[derive(Debug, Default, clap::Args)]
pub struct OutputArgs {
	/// Print the raw result as JSON.
	#[arg(long, conflicts_with = "html")]
	pub json: bool,
	/// Print the cards as an HTML fragment.
	#[arg(long)]
	pub html: bool,
}
impl OutputArgs {
	pub fn write(&self, out: &mut impl Write, result: &SearchResult, assets: &Assets) -> Result<()> {
		if self.json {
			render::write_json(out, result)
		} else if self.html {
			render::write_html(out, result, assets)
		} else {
			render::write_result(out, result, assets)
		}
	}
}

pub async fn run(args: Args) -> Result<ExitCode> {
	let config = cardseek_config::load_or_default(args.config.as_deref())?;

	init_tracing(&config)?;

	let history_path = resolve_history_path(args.history, &config);
	let mut store = HistoryStore::open(history_path, config.history.max_entries)?;
	let service = CardSeekService::new(config)?;
	let stdout = io::stdout();
	let mut out = stdout.lock();

	match args.command.unwrap_or(Cmd::Browse) {
		Cmd::Search(search) => run_search(&service, &mut store, &search, &mut out).await,
		Cmd::Random { output } => run_random(&service, &output, &mut out).await,
		Cmd::History { action: HistoryCmd::List } => {
			render::write_history(&mut out, store.list())?;

			Ok(ExitCode::SUCCESS)
		},
		Cmd::History { action: HistoryCmd::Clear { yes } } => {
			if !yes && !confirm_stdin(&mut out, "Clear search history?")? {
				writeln!(out, "History kept.")?;

				return Ok(ExitCode::SUCCESS);
			}

			store.clear()?;

			writeln!(out, "History cleared.")?;

			Ok(ExitCode::SUCCESS)
		},
		Cmd::Browse => {
			drop(out);

			browse::run(&service, &mut store).await?;

			Ok(ExitCode::SUCCESS)
		},
	}
}

async fn run_search(
	service: &CardSeekService,
	store: &mut HistoryStore,
	args: &SearchArgs,
	out: &mut impl Write,
) -> Result<ExitCode> {
	let criteria = args.criteria()?;
	let mut session = service.new_session();

	if let Some(size) = args.page_size
		&& session.apply(&Command::ChangePageSize { size }) == SessionAction::Ignored
	{
		return Err(eyre::eyre!(
			"--page-size must be one of {}.",
			format_sizes(session.page_sizes())
		));
	}
	if !args.no_history
		&& let Some(term) = criteria.name_term.as_deref()
		&& let Err(err) = store.record(term)
	{
		tracing::warn!(error = %err, "Failed to record search history.");
	}

	match service.run_search(&mut session, criteria, args.page).await {
		Ok(Some(result)) => {
			args.output.write(out, &result, &service.cfg.assets)?;

			Ok(ExitCode::SUCCESS)
		},
		Ok(None) => Ok(ExitCode::SUCCESS),
		Err(err) => {
			tracing::error!(error = %err, "Search failed.");

			writeln!(out, "Search failed: {err}")?;

			Ok(ExitCode::FAILURE)
		},
	}
}

async fn run_random(
	service: &CardSeekService,
	output: &OutputArgs,
	out: &mut impl Write,
) -> Result<ExitCode> {
	let mut session = service.new_session();

	match service.random_cards(session.page_size()).await {
		Ok(result) => {
			let result = session.complete_random(result);

			output.write(out, &result, &service.cfg.assets)?;

			Ok(ExitCode::SUCCESS)
		},
		Err(err) => {
			tracing::error!(error = %err, "Random cards failed.");

			writeln!(out, "Could not load random cards: {err}")?;

			Ok(ExitCode::FAILURE)
		},
	}
}

fn resolve_history_path(cli: Option<PathBuf>, config: &Config) -> PathBuf {
	cli.or_else(|| config.history.path.clone())
		.or_else(HistoryStore::default_path)
		.unwrap_or_else(|| PathBuf::from(HISTORY_FILE_NAME))
}

fn confirm_stdin(out: &mut impl Write, prompt: &str) -> Result<bool> {
	write!(out, "{prompt} [y/N] ")?;
	out.flush()?;

	let mut answer = String::new();

	io::stdin().lock().read_line(&mut answer)?;

	Ok(is_yes(&answer))
}

pub fn format_sizes(sizes: &[u32]) -> String {
	sizes.iter().map(u32::to_string).collect::<Vec<_>>().join(", ")
}

pub fn is_yes(answer: &str) -> bool {
	matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn init_tracing(config: &Config) -> Result<()> {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

	Ok(())
}
