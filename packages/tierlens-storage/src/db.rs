use std::time::Duration;

use serde_json::Value;
use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::{
	BoxFuture, DocumentStore, Result, queries,
	query::{Collection, FindQuery},
};

/// Postgres-backed document store. Each collection is a table of `(seq, doc JSONB)` rows.
pub struct Db {
	pub pool: PgPool,
}
impl Db {
	pub async fn connect(cfg: &tierlens_config::Postgres) -> Result<Self> {
		let mut options = PgPoolOptions::new().max_connections(cfg.pool_max_conns);

		if let Some(timeout_ms) = cfg.acquire_timeout_ms {
			options = options.acquire_timeout(Duration::from_millis(timeout_ms));
		}

		let pool = options.connect(&cfg.dsn).await?;

		Ok(Self { pool })
	}

	pub fn from_pool(pool: PgPool) -> Self {
		Self { pool }
	}

	async fn fetch_docs(&self, query: &FindQuery) -> Result<Vec<Value>> {
		let mut builder = queries::build_find(query)?;
		let docs = builder.build_query_scalar::<Value>().fetch_all(&self.pool).await?;

		Ok(docs)
	}

	async fn fetch_doc(
		&self,
		collection: Collection,
		field: &'static str,
		value: &str,
	) -> Result<Option<Value>> {
		let mut builder = queries::build_find_one(collection, field, value);
		let doc = builder.build_query_scalar::<Value>().fetch_optional(&self.pool).await?;

		Ok(doc)
	}
}
impl DocumentStore for Db {
	fn find<'a>(&'a self, query: &'a FindQuery) -> BoxFuture<'a, Result<Vec<Value>>> {
		Box::pin(async move {
			let result = self.fetch_docs(query).await;

			if let Err(err) = &result {
				tracing::warn!(collection = query.collection.name(), error = %err, "Find failed.");
			}

			result
		})
	}

	fn find_one<'a>(
		&'a self,
		collection: Collection,
		field: &'static str,
		value: &'a str,
	) -> BoxFuture<'a, Result<Option<Value>>> {
		Box::pin(async move {
			let result = self.fetch_doc(collection, field, value).await;

			if let Err(err) = &result {
				tracing::warn!(
					collection = collection.name(),
					field,
					error = %err,
					"Lookup failed."
				);
			}

			result
		})
	}
}
