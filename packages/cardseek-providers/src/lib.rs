pub mod catalog;
pub mod error;

pub use catalog::{CatalogClient, parse_cards_response};
pub use error::{Error, Result};

use std::{future::Future, pin::Pin};

use serde_json::Value;

use cardseek_domain::QueryParameters;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Source of card pages. [`CatalogClient`] talks HTTP; tests substitute scripted catalogs.
pub trait CatalogProvider
where
	Self: Send + Sync,
{
	fn fetch_cards<'a>(&'a self, params: &'a QueryParameters) -> BoxFuture<'a, Result<Vec<Value>>>;
}

impl CatalogProvider for CatalogClient {
	fn fetch_cards<'a>(&'a self, params: &'a QueryParameters) -> BoxFuture<'a, Result<Vec<Value>>> {
		Box::pin(CatalogClient::fetch_cards(self, params))
	}
}
