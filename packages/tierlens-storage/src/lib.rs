pub mod db;
pub mod query;
pub mod queries;
pub mod schema;

mod error;

pub use error::Error;

use std::{future::Future, pin::Pin};

use serde_json::Value;

use crate::query::{Collection, FindQuery};

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Field every store strips from returned documents.
pub const INTERNAL_ID_FIELD: &str = "_id";

/// Read-only access to the document collections.
///
/// Implementations return documents with [`INTERNAL_ID_FIELD`] removed and must honor the full
/// [`FindQuery`] contract: conjunctive predicate, sort keys followed by natural order as the final
/// tiebreaker, then the skip/limit window.
pub trait DocumentStore
where
	Self: Send + Sync,
{
	fn find<'a>(&'a self, query: &'a FindQuery) -> BoxFuture<'a, Result<Vec<Value>>>;

	/// First document in natural order whose `field` equals `value` exactly.
	fn find_one<'a>(
		&'a self,
		collection: Collection,
		field: &'static str,
		value: &'a str,
	) -> BoxFuture<'a, Result<Option<Value>>>;
}
