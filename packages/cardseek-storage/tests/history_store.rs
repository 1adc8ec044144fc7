use std::{
	fs,
	path::{Path, PathBuf},
};

use cardseek_storage::HistoryStore;

fn temp_history_path() -> PathBuf {
	cardseek_testkit::temp_path("history_test", "search_history.json")
}

fn cleanup(path: &Path) {
	if let Some(parent) = path.parent() {
		let _ = fs::remove_dir_all(parent);
	}
}

#[test]
fn missing_file_opens_empty() {
	let path = temp_history_path();
	let store = HistoryStore::open(&path, 20).expect("Failed to open store.");

	assert!(store.list().is_empty());
	assert!(!path.exists());
}

#[test]
fn records_survive_reopen() {
	let path = temp_history_path();
	let mut store = HistoryStore::open(&path, 20).expect("Failed to open store.");

	store.record("Dragon").expect("Failed to record.");
	store.record("Goblin").expect("Failed to record.");
	store.record("dragon").expect("Failed to record.");

	let reopened = HistoryStore::open(&path, 20).expect("Failed to reopen store.");
	let terms: Vec<&str> = reopened.list().iter().map(|entry| entry.as_str()).collect();

	assert_eq!(terms, vec!["dragon", "Goblin"]);

	let raw = fs::read_to_string(&path).expect("Failed to read history file.");

	assert_eq!(raw, r#"["dragon","Goblin"]"#);

	cleanup(&path);
}

#[test]
fn blank_record_does_not_write() {
	let path = temp_history_path();
	let mut store = HistoryStore::open(&path, 20).expect("Failed to open store.");

	assert!(!store.record("   ").expect("Failed to record."));
	assert!(!path.exists());
}

#[test]
fn clear_persists_empty_log() {
	let path = temp_history_path();
	let mut store = HistoryStore::open(&path, 20).expect("Failed to open store.");

	store.record("Angel").expect("Failed to record.");
	store.clear().expect("Failed to clear.");

	assert!(store.list().is_empty());

	let reopened = HistoryStore::open(&path, 20).expect("Failed to reopen store.");

	assert!(reopened.list().is_empty());

	cleanup(&path);
}

#[test]
fn malformed_file_reads_as_empty() {
	for payload in ["not json", r#"{"terms":["a"]}"#, "[1, 2, 3]"] {
		let path = temp_history_path();

		fs::create_dir_all(path.parent().expect("Path must have a parent."))
			.expect("Failed to create directory.");
		fs::write(&path, payload).expect("Failed to write history file.");

		let mut store = HistoryStore::open(&path, 20).expect("Malformed history must not fail.");

		assert!(store.list().is_empty(), "Payload {payload:?} must read as empty.");

		store.record("Bolt").expect("Failed to record.");

		assert_eq!(fs::read_to_string(&path).expect("Failed to read."), r#"["Bolt"]"#);

		cleanup(&path);
	}
}

#[test]
fn reopen_applies_cap() {
	let path = temp_history_path();

	fs::create_dir_all(path.parent().expect("Path must have a parent."))
		.expect("Failed to create directory.");

	let terms: Vec<String> = (0..30).map(|index| format!("term {index}")).collect();

	fs::write(&path, serde_json::to_vec(&terms).expect("Failed to encode."))
		.expect("Failed to write history file.");

	let store = HistoryStore::open(&path, 20).expect("Failed to open store.");

	assert_eq!(store.list().len(), 20);
	assert_eq!(store.list()[0].as_str(), "term 0");

	cleanup(&path);
}

#[test]
fn no_temp_file_is_left_behind() {
	let path = temp_history_path();
	let mut store = HistoryStore::open(&path, 20).expect("Failed to open store.");

	store.record("Forest").expect("Failed to record.");

	let parent = path.parent().expect("Path must have a parent.");
	let names: Vec<String> = fs::read_dir(parent)
		.expect("Failed to list directory.")
		.map(|entry| entry.expect("Bad entry.").file_name().to_string_lossy().into_owned())
		.collect();

	assert_eq!(names, vec!["search_history.json".to_string()]);

	cleanup(&path);
}

#[test]
fn failed_write_keeps_memory_and_disk_in_step() {
	let path = temp_history_path();
	let mut store = HistoryStore::open(&path, 20).expect("Failed to open store.");

	store.record("Forest").expect("Failed to record.");

	// A non-empty directory at the target path makes the rename fail.
	fs::remove_file(&path).expect("Failed to remove history file.");
	fs::create_dir(&path).expect("Failed to create directory.");
	fs::write(path.join("blocker"), b"x").expect("Failed to write blocker.");

	assert!(store.record("Island").is_err());
	assert!(store.clear().is_err());
	assert_eq!(store.list().len(), 1);
	assert_eq!(store.list()[0].as_str(), "Forest");

	let mut tmp_name = path.file_name().expect("Path must have a file name.").to_os_string();

	tmp_name.push(".tmp");

	assert!(!path.with_file_name(tmp_name).exists());

	cleanup(&path);
}
