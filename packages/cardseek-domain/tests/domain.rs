use std::collections::HashSet;

use rand::{SeedableRng, rngs::StdRng};

use cardseek_domain::{
	Color, Command, CriteriaError, HistoryLog, PaginationState, QueryMode, QueryParameters,
	SearchCriteria, query, sample_without_replacement,
};

fn full_criteria() -> SearchCriteria {
	SearchCriteria::new(24)
		.with_name("  Llanowar Elves ")
		.with_colors([Color::Green])
		.with_type("Creature")
		.with_set("DOM")
		.with_page(3)
}

#[test]
fn name_mode_carries_every_present_filter() {
	let params = QueryParameters::from_criteria(&full_criteria(), QueryMode::Name);
	let pairs: Vec<(&str, &str)> = params.iter().collect();

	assert_eq!(pairs, vec![
		("name", "Llanowar Elves"),
		("colors", "Green"),
		("types", "Creature"),
		("set", "DOM"),
		("page", "3"),
		("pageSize", "24"),
	]);
}

#[test]
fn text_mode_swaps_name_for_text_and_keeps_the_rest() {
	let name = QueryParameters::from_criteria(&full_criteria(), QueryMode::Name);
	let text = QueryParameters::from_criteria(&full_criteria(), QueryMode::Text);

	assert!(!text.contains(query::KEY_NAME));
	assert_eq!(text.get(query::KEY_TEXT), Some("Llanowar Elves"));

	for key in [query::KEY_COLORS, query::KEY_TYPES, query::KEY_SET, query::KEY_PAGE] {
		assert_eq!(text.get(key), name.get(key), "Filter {key} must survive the fallback.");
	}

	assert_eq!(text.get(query::KEY_PAGE_SIZE), Some("24"));
}

#[test]
fn parameters_never_carry_empty_values() {
	let sparse = SearchCriteria::new(12).with_name(" ").with_type("").with_set("   ");

	for mode in [QueryMode::Name, QueryMode::Text] {
		let params = QueryParameters::from_criteria(&sparse, mode);

		for (key, value) in params.iter() {
			assert!(!value.trim().is_empty(), "Key {key} must not be sent empty.");
		}

		assert_eq!(params.len(), 2);
		assert!(!params.contains(query::KEY_COLORS));
	}
}

#[test]
fn criteria_validation_rejects_zero_page_and_size() {
	assert_eq!(SearchCriteria::new(12).with_page(0).validate(), Err(CriteriaError::ZeroPage));
	assert_eq!(SearchCriteria::new(0).validate(), Err(CriteriaError::ZeroPageSize));
	assert!(SearchCriteria::new(12).validate().is_ok());
}

#[test]
fn has_next_only_for_full_pages() {
	assert!(PaginationState::from_count(1, 12, 12).has_next);
	assert!(!PaginationState::from_count(1, 12, 11).has_next);
	assert!(!PaginationState::from_count(7, 12, 0).has_next);
}

#[test]
fn navigation_guards_follow_pagination_state() {
	let first = PaginationState::from_count(1, 12, 12);

	assert_eq!(first.previous_page(), None);
	assert_eq!(first.next_page(), Some(2));

	let last = PaginationState::from_count(4, 12, 5);

	assert_eq!(last.previous_page(), Some(3));
	assert_eq!(last.next_page(), None);
}

#[test]
fn later_casing_wins_on_duplicate() {
	let mut log = HistoryLog::default();

	log.record("Dragon");
	log.record("dragon");

	assert_eq!(log.len(), 1);
	assert_eq!(log.list()[0].as_str(), "dragon");
}

#[test]
fn cap_evicts_oldest() {
	let mut log = HistoryLog::default();

	for index in 0..21 {
		log.record(&format!("term {index}"));
	}

	assert_eq!(log.len(), 20);
	assert_eq!(log.list()[0].as_str(), "term 20");
	assert!(!log.list().iter().any(|entry| entry.matches("term 0")));
}

#[test]
fn blank_terms_are_ignored_and_terms_are_trimmed() {
	let mut log = HistoryLog::default();

	assert!(!log.record("   "));
	assert!(log.record("  Serra Angel  "));
	assert_eq!(log.terms(), vec!["Serra Angel".to_string()]);
}

#[test]
fn rerecording_moves_term_to_front() {
	let mut log = HistoryLog::default();

	log.record("goblin");
	log.record("elf");
	log.record("GOBLIN");

	assert_eq!(log.terms(), vec!["GOBLIN".to_string(), "elf".to_string()]);
}

#[test]
fn clear_empties_the_log() {
	let mut log = HistoryLog::default();

	log.record("angel");
	log.clear();

	assert!(log.list().is_empty());
}

#[test]
fn from_terms_normalizes_persisted_values() {
	let log = HistoryLog::from_terms(["Bolt", " ", "bolt", " Counterspell "], 20);

	assert_eq!(log.terms(), vec!["Bolt".to_string(), "Counterspell".to_string()]);

	let capped = HistoryLog::from_terms((0..30).map(|index| format!("t{index}")), 5);

	assert_eq!(capped.len(), 5);
	assert_eq!(capped.list()[0].as_str(), "t0");
}

#[test]
fn sampling_from_small_pool_returns_everything() {
	let mut rng = StdRng::seed_from_u64(7);
	let picks = sample_without_replacement(&["only"], 3, &mut rng);

	assert_eq!(picks, vec!["only"]);
}

#[test]
fn sampling_never_repeats_entries() {
	let pool: Vec<u32> = (0..200).collect();

	for seed in 0..32 {
		let mut rng = StdRng::seed_from_u64(seed);
		let picks = sample_without_replacement(&pool, 3, &mut rng);
		let unique: HashSet<u32> = picks.iter().copied().collect();

		assert_eq!(picks.len(), 3);
		assert_eq!(unique.len(), 3);
	}
}

#[test]
fn commands_serialize_with_tag() {
	let value = serde_json::to_value(Command::ChangePageSize { size: 24 })
		.expect("Command must serialize.");

	assert_eq!(value, serde_json::json!({ "command": "change_page_size", "size": 24 }));
}
