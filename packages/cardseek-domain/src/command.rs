use serde::{Deserialize, Serialize};

/// User intents produced by the front end and applied to a search session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
	StartSearch { page: u32 },
	NextPage,
	PreviousPage,
	ChangePageSize { size: u32 },
	ClearHistory,
	Random,
}
