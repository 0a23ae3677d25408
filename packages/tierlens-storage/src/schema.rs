use crate::query::Collection;

/// DDL for the collection tables the producer populates. Used to provision test databases; the
/// service itself never creates or alters tables.
pub fn render_schema() -> String {
	let mut sql = String::new();

	for collection in Collection::ALL {
		let table = collection.table();

		sql.push_str(&format!(
			"CREATE TABLE IF NOT EXISTS {table} (\n\tseq BIGSERIAL PRIMARY KEY,\n\tdoc JSONB NOT NULL\n);\n"
		));
	}

	sql
}
