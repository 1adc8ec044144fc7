use std::{
	collections::VecDeque,
	env,
	path::PathBuf,
	sync::{
		Mutex, MutexGuard,
		atomic::{AtomicU64, Ordering},
	},
	time::{SystemTime, UNIX_EPOCH},
};

use serde_json::Value;

use cardseek_domain::QueryParameters;
use cardseek_providers::{BoxFuture, CatalogProvider, Error, Result};

/// Catalog double that replays queued pages and records every query it receives.
///
/// When the queue runs dry it answers with an empty page.
#[derive(Default)]
pub struct ScriptedCatalog {
	responses: Mutex<VecDeque<Result<Vec<Value>>>>,
	calls: Mutex<Vec<QueryParameters>>,
}
impl ScriptedCatalog {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_pages<I>(pages: I) -> Self
	where
		I: IntoIterator<Item = Vec<Value>>,
	{
		let catalog = Self::new();

		for page in pages {
			catalog.push_page(page);
		}

		catalog
	}

	pub fn push_page(&self, cards: Vec<Value>) {
		lock(&self.responses).push_back(Ok(cards));
	}

	pub fn push_status_error(&self, status: u16) {
		lock(&self.responses).push_back(Err(Error::Status { status }));
	}

	pub fn calls(&self) -> Vec<QueryParameters> {
		lock(&self.calls).clone()
	}

	pub fn call_count(&self) -> usize {
		lock(&self.calls).len()
	}
}
impl CatalogProvider for ScriptedCatalog {
	fn fetch_cards<'a>(&'a self, params: &'a QueryParameters) -> BoxFuture<'a, Result<Vec<Value>>> {
		lock(&self.calls).push(params.clone());

		let response = lock(&self.responses).pop_front().unwrap_or_else(|| Ok(Vec::new()));

		Box::pin(async move { response })
	}
}

/// A minimal catalog card record.
pub fn card(name: &str) -> Value {
	serde_json::json!({
		"name": name,
		"set": "TST",
		"setName": "Test Set",
		"rarity": "Common",
	})
}

/// `count` distinct cards named `"<prefix> <index>"`.
pub fn cards(prefix: &str, count: usize) -> Vec<Value> {
	(0..count).map(|index| card(&format!("{prefix} {index}"))).collect()
}

/// A unique, not yet existing path under the system temp directory.
pub fn temp_path(label: &str, file_name: &str) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("System time must be valid.")
		.as_nanos();
	let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
	let pid = std::process::id();
	let mut path = env::temp_dir();

	path.push(format!("cardseek_{label}_{nanos}_{pid}_{ordinal}"));
	path.push(file_name);

	path
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
	mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
