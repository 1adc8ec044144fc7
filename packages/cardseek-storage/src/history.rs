use std::{
	fs::{self, File},
	io::{self, ErrorKind, Write},
	path::{Path, PathBuf},
};

use cardseek_domain::{HistoryEntry, HistoryLog};

use crate::{Error, Result};

pub const HISTORY_FILE_NAME: &str = "search_history.json";

/// Search history persisted as a JSON array of strings.
///
/// The file is read once in [`HistoryStore::open`] and rewritten in full after every mutation.
#[derive(Debug)]
pub struct HistoryStore {
	path: PathBuf,
	log: HistoryLog,
}
impl HistoryStore {
	/// Opens the store at `path`. A missing file is an empty history, and so is a file that is not
	/// a JSON array of strings.
	pub fn open(path: impl Into<PathBuf>, max_entries: usize) -> Result<Self> {
		let path = path.into();
		let log = match fs::read(&path) {
			Ok(raw) => decode(&path, &raw, max_entries),
			Err(err) if err.kind() == ErrorKind::NotFound => HistoryLog::new(max_entries),
			Err(err) => return Err(Error::Io { path, source: err }),
		};

		tracing::debug!(path = %path.display(), entries = log.len(), "History loaded.");

		Ok(Self { path, log })
	}

	/// `<platform data dir>/search_history.json`, when the platform has one.
	pub fn default_path() -> Option<PathBuf> {
		directories::ProjectDirs::from("ink", "hack", "cardseek")
			.map(|dirs| dirs.data_dir().join(HISTORY_FILE_NAME))
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn list(&self) -> &[HistoryEntry] {
		self.log.list()
	}

	pub fn is_empty(&self) -> bool {
		self.log.is_empty()
	}

	/// Returns `false` without touching the file when the term is blank.
	///
	/// The in-memory log only changes once the file is written.
	pub fn record(&mut self, term: &str) -> Result<bool> {
		let mut next = self.log.clone();

		if !next.record(term) {
			return Ok(false);
		}

		self.commit(next)?;

		Ok(true)
	}

	pub fn clear(&mut self) -> Result<()> {
		self.commit(HistoryLog::new(self.log.cap()))
	}

	fn commit(&mut self, next: HistoryLog) -> Result<()> {
		let payload = serde_json::to_vec(&next.terms())?;

		write_atomic(&self.path, &payload)?;

		tracing::debug!(path = %self.path.display(), entries = next.len(), "History saved.");

		self.log = next;

		Ok(())
	}
}

fn decode(path: &Path, raw: &[u8], max_entries: usize) -> HistoryLog {
	match serde_json::from_slice::<Vec<String>>(raw) {
		Ok(terms) => HistoryLog::from_terms(terms, max_entries),
		Err(err) => {
			tracing::warn!(
				error = %err,
				path = %path.display(),
				"History file is malformed. Starting with an empty history."
			);

			HistoryLog::new(max_entries)
		},
	}
}

/// Writes to a sibling temp file, then renames it over `path`.
fn write_atomic(path: &Path, payload: &[u8]) -> Result<()> {
	let io_err = |source| Error::Io { path: path.to_path_buf(), source };

	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent).map_err(io_err)?;
	}

	let mut tmp_name = path.file_name().map(|name| name.to_os_string()).unwrap_or_default();

	tmp_name.push(".tmp");

	let tmp_path = path.with_file_name(tmp_name);
	let written = write_synced(&tmp_path, payload).and_then(|()| fs::rename(&tmp_path, path));

	if let Err(err) = written {
		let _ = fs::remove_file(&tmp_path);

		return Err(io_err(err));
	}

	Ok(())
}

fn write_synced(path: &Path, payload: &[u8]) -> io::Result<()> {
	let mut file = File::create(path)?;

	file.write_all(payload)?;
	file.sync_all()
}
