use serde_json::Value;

use tierlens_storage::query::{FindQuery, Predicate};

use crate::{
	Error, Result, TierlensService,
	page::Page,
	records::{Keyed, Record},
};

impl TierlensService {
	/// Runs `predicate` against `R`'s collection in `R`'s fixed order, windowed by `page`.
	pub(crate) async fn list_records<R: Record>(
		&self,
		predicate: Predicate,
		page: Page,
	) -> Result<Vec<R>> {
		let query = FindQuery {
			collection: R::COLLECTION,
			predicate,
			sort: R::SORT.to_vec(),
			window: page.into(),
		};
		let docs = self.store.find(&query).await?;
		let records = docs.into_iter().map(decode::<R>).collect::<Result<Vec<_>>>()?;

		tracing::debug!(
			collection = R::COLLECTION.name(),
			conditions = query.predicate.conditions().len(),
			skip = page.skip,
			limit = page.limit,
			returned = records.len(),
			"Listed records."
		);

		Ok(records)
	}

	pub(crate) async fn get_record<R: Keyed>(&self, identity: &str) -> Result<R> {
		let Some(doc) = self.store.find_one(R::COLLECTION, R::IDENTITY_FIELD, identity).await?
		else {
			return Err(Error::NotFound { kind: R::KIND, identity: identity.to_string() });
		};

		decode(doc)
	}
}

fn decode<R: Record>(doc: Value) -> Result<R> {
	serde_json::from_value(doc).map_err(|err| Error::Storage {
		message: format!("Malformed {} document: {err}.", R::COLLECTION.name()),
	})
}
