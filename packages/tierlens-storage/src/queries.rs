use sqlx::{Postgres, QueryBuilder};

use crate::{
	Error, INTERNAL_ID_FIELD, Result,
	query::{Collection, Condition, Direction, FindQuery, Predicate, Window},
};

/// Lowers a [`FindQuery`] into a single parameterized `SELECT` over the collection table.
///
/// Every caller-supplied value is bound; only table names and SQL keywords are pushed as text.
pub fn build_find(query: &FindQuery) -> Result<QueryBuilder<'static, Postgres>> {
	let (skip, limit) = window_bounds(query.window)?;
	let mut builder = select_docs(query.collection);

	push_predicate(&mut builder, &query.predicate);

	builder.push(" ORDER BY ");

	for key in &query.sort {
		builder.push("(doc ->> ");
		builder.push_bind(key.field);
		builder.push(r#") COLLATE "C" "#);
		builder.push(match key.direction {
			Direction::Ascending => "ASC",
			Direction::Descending => "DESC",
		});
		builder.push(" NULLS LAST, ");
	}

	builder.push("seq ASC LIMIT ");
	builder.push_bind(limit);
	builder.push(" OFFSET ");
	builder.push_bind(skip);

	Ok(builder)
}

pub fn build_find_one(
	collection: Collection,
	field: &'static str,
	value: &str,
) -> QueryBuilder<'static, Postgres> {
	let mut builder = select_docs(collection);

	builder.push(" WHERE (doc ->> ");
	builder.push_bind(field);
	builder.push(") = ");
	builder.push_bind(value.to_string());
	builder.push(" ORDER BY seq ASC LIMIT 1");

	builder
}

fn select_docs(collection: Collection) -> QueryBuilder<'static, Postgres> {
	let mut builder = QueryBuilder::new("SELECT doc - ");

	builder.push_bind(INTERNAL_ID_FIELD);
	builder.push(" AS doc FROM ");
	builder.push(collection.table());

	builder
}

fn push_predicate(builder: &mut QueryBuilder<'static, Postgres>, predicate: &Predicate) {
	let mut separator = " WHERE ";

	for condition in predicate.conditions() {
		builder.push(separator);

		separator = " AND ";

		match condition {
			Condition::ContainsFolded { field, needle } => {
				builder.push("strpos(");
				push_folded(builder, field);
				builder.push(", ");
				builder.push_bind(needle.to_lowercase());
				builder.push(") > 0");
			},
			Condition::StartsWithFolded { field, prefix } => {
				builder.push("starts_with(");
				push_folded(builder, field);
				builder.push(", ");
				builder.push_bind(prefix.to_lowercase());
				builder.push(")");
			},
			Condition::Between { field, min, max } => push_between(builder, *field, *min, *max),
			Condition::Equals { field, value } => {
				builder.push("(doc ->> ");
				builder.push_bind(*field);
				builder.push(") = ");
				builder.push_bind(value.clone());
			},
		}
	}
}

/// Lower-cases a text field under the ICU root collation so folding does not depend on the
/// database locale. Needles are folded on the Rust side with `str::to_lowercase`.
fn push_folded(builder: &mut QueryBuilder<'static, Postgres>, field: &'static str) {
	builder.push("lower((doc ->> ");
	builder.push_bind(field);
	builder.push(r#") COLLATE "und-x-icu")"#);
}

fn push_between(
	builder: &mut QueryBuilder<'static, Postgres>,
	field: &'static str,
	min: Option<i64>,
	max: Option<i64>,
) {
	if min.is_none() && max.is_none() {
		builder.push("TRUE");

		return;
	}

	builder.push("(");

	if let Some(min) = min {
		push_numeric(builder, field);
		builder.push(" >= ");
		builder.push_bind(min);
	}
	if let Some(max) = max {
		if min.is_some() {
			builder.push(" AND ");
		}

		push_numeric(builder, field);
		builder.push(" <= ");
		builder.push_bind(max);
	}

	builder.push(")");
}

fn push_numeric(builder: &mut QueryBuilder<'static, Postgres>, field: &'static str) {
	builder.push("(CASE WHEN jsonb_typeof(doc -> ");
	builder.push_bind(field);
	builder.push(") = 'number' THEN (doc ->> ");
	builder.push_bind(field);
	builder.push(")::numeric END)");
}

fn window_bounds(window: Window) -> Result<(i64, i64)> {
	let skip = i64::try_from(window.skip)
		.map_err(|_| Error::InvalidArgument("skip exceeds the supported range.".to_string()))?;
	let limit = i64::try_from(window.limit)
		.map_err(|_| Error::InvalidArgument("limit exceeds the supported range.".to_string()))?;

	Ok((skip, limit))
}
