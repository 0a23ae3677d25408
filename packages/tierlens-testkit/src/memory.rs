use std::{
	cmp::Ordering,
	collections::HashMap,
	sync::atomic::{AtomicBool, Ordering as AtomicOrdering},
};

use serde_json::Value;

use tierlens_storage::{
	BoxFuture, DocumentStore, Error, INTERNAL_ID_FIELD, Result,
	query::{Collection, Condition, Direction, FindQuery, SortKey},
};

/// In-memory [`DocumentStore`] holding documents in insertion order.
///
/// Mirrors the Postgres store: text fields are compared the way `doc ->> field` renders them,
/// string sort keys compare bytewise with missing values last, and insertion order breaks ties.
#[derive(Default)]
pub struct MemoryStore {
	collections: HashMap<Collection, Vec<Value>>,
	unavailable: AtomicBool,
}
impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_documents(mut self, collection: Collection, docs: Vec<Value>) -> Self {
		self.collections.entry(collection).or_default().extend(docs);

		self
	}

	pub fn insert(&mut self, collection: Collection, doc: Value) {
		self.collections.entry(collection).or_default().push(doc);
	}

	/// Makes every subsequent call fail as if the store could not be reached.
	pub fn set_unavailable(&self, unavailable: bool) {
		self.unavailable.store(unavailable, AtomicOrdering::SeqCst);
	}

	fn check_available(&self) -> Result<()> {
		if self.unavailable.load(AtomicOrdering::SeqCst) {
			return Err(Error::Unavailable("memory store is offline.".to_string()));
		}

		Ok(())
	}

	fn docs(&self, collection: Collection) -> &[Value] {
		self.collections.get(&collection).map(Vec::as_slice).unwrap_or_default()
	}

	fn run_find(&self, query: &FindQuery) -> Result<Vec<Value>> {
		self.check_available()?;

		let mut matched: Vec<&Value> = self
			.docs(query.collection)
			.iter()
			.filter(|doc| query.predicate.conditions().iter().all(|c| matches(c, doc)))
			.collect();

		// Stable sort keeps insertion order for equal keys.
		matched.sort_by(|a, b| compare(&query.sort, a, b));

		let skip = usize::try_from(query.window.skip).unwrap_or(usize::MAX);
		let limit = usize::try_from(query.window.limit).unwrap_or(usize::MAX);

		Ok(matched.into_iter().skip(skip).take(limit).map(project).collect())
	}

	fn run_find_one(
		&self,
		collection: Collection,
		field: &'static str,
		value: &str,
	) -> Result<Option<Value>> {
		self.check_available()?;

		Ok(self
			.docs(collection)
			.iter()
			.find(|doc| field_text(doc, field).as_deref() == Some(value))
			.map(project))
	}
}
impl DocumentStore for MemoryStore {
	fn find<'a>(&'a self, query: &'a FindQuery) -> BoxFuture<'a, Result<Vec<Value>>> {
		let result = self.run_find(query);

		Box::pin(async move { result })
	}

	fn find_one<'a>(
		&'a self,
		collection: Collection,
		field: &'static str,
		value: &'a str,
	) -> BoxFuture<'a, Result<Option<Value>>> {
		let result = self.run_find_one(collection, field, value);

		Box::pin(async move { result })
	}
}

fn field_text(doc: &Value, field: &str) -> Option<String> {
	match doc.get(field)? {
		Value::Null => None,
		Value::String(text) => Some(text.clone()),
		other => Some(other.to_string()),
	}
}

fn matches(condition: &Condition, doc: &Value) -> bool {
	match condition {
		Condition::ContainsFolded { field, needle } => field_text(doc, field)
			.is_some_and(|text| text.to_lowercase().contains(&needle.to_lowercase())),
		Condition::StartsWithFolded { field, prefix } => field_text(doc, field)
			.is_some_and(|text| text.to_lowercase().starts_with(&prefix.to_lowercase())),
		Condition::Between { field, min, max } => {
			let Some(number) = doc.get(*field).and_then(Value::as_f64) else {
				return min.is_none() && max.is_none();
			};

			min.is_none_or(|min| number >= min as f64) && max.is_none_or(|max| number <= max as f64)
		},
		Condition::Equals { field, value } =>
			field_text(doc, field).is_some_and(|text| &text == value),
	}
}

fn compare(sort: &[SortKey], a: &Value, b: &Value) -> Ordering {
	for key in sort {
		let ordering = match (field_text(a, key.field), field_text(b, key.field)) {
			(Some(left), Some(right)) => match key.direction {
				Direction::Ascending => left.cmp(&right),
				Direction::Descending => right.cmp(&left),
			},
			(Some(_), None) => Ordering::Less,
			(None, Some(_)) => Ordering::Greater,
			(None, None) => Ordering::Equal,
		};

		if ordering != Ordering::Equal {
			return ordering;
		}
	}

	Ordering::Equal
}

fn project(doc: &Value) -> Value {
	let mut doc = doc.clone();

	if let Some(object) = doc.as_object_mut() {
		object.remove(INTERNAL_ID_FIELD);
	}

	doc
}
