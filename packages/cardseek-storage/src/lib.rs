pub mod error;
pub mod history;

pub use error::{Error, Result};
pub use history::{HISTORY_FILE_NAME, HistoryStore};
