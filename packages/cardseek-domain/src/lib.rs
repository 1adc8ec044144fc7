pub mod command;
pub mod criteria;
pub mod fallback;
pub mod history;
pub mod pagination;
pub mod query;
pub mod sample;

pub use command::Command;
pub use criteria::{Color, CriteriaError, SearchCriteria, parse_colors};
pub use fallback::{FallbackChain, FallbackState};
pub use history::{DEFAULT_MAX_ENTRIES, HistoryEntry, HistoryLog};
pub use pagination::PaginationState;
pub use query::{QueryMode, QueryParameters};
pub use sample::sample_without_replacement;
