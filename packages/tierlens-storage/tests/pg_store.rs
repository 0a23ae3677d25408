use serde_json::{Value, json};

use tierlens_storage::{
	DocumentStore,
	db::Db,
	query::{Collection, Condition, FindQuery, Predicate, SortKey, Window},
};
use tierlens_testkit::{MemoryStore, TestDatabase, fixtures};

async fn seeded_db() -> Option<(TestDatabase, Db)> {
	let Some(base_dsn) = tierlens_testkit::env_dsn() else {
		eprintln!("Skipping Postgres store tests; set TIERLENS_PG_DSN to run this test.");

		return None;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let pool = test_db.provision().await.expect("Failed to provision test database.");
	let mut files = fixtures::scenario_files();

	files.push(json!({
		"_id": "internal",
		"fileId": "c",
		"fileName": "Report-Final.CSV",
		"fullPath": "/DATA/reports/Report-Final.CSV",
		"sizeBytes": 1_500,
		"accessClass": "WARM",
	}));
	files.push(fixtures::file_record("d", "notes.(draft).txt", "/home/data/notes.txt", 10, "HOT"));

	tierlens_testkit::insert_documents(&pool, Collection::FileMetaAccess, &files)
		.await
		.expect("Failed to insert file records.");
	tierlens_testkit::insert_documents(
		&pool,
		Collection::TrendDailySummary,
		&[
			fixtures::daily_summary("2024-03-02", 2),
			fixtures::daily_summary("2024-03-03", 3),
			fixtures::daily_summary("2024-03-01", 1),
		],
	)
	.await
	.expect("Failed to insert summaries.");

	Some((test_db, Db::from_pool(pool)))
}

fn file_query(predicate: Predicate, skip: u64, limit: u64) -> FindQuery {
	FindQuery {
		collection: Collection::FileMetaAccess,
		predicate,
		sort: vec![SortKey::asc("fileName"), SortKey::asc("fileId")],
		window: Window { skip, limit },
	}
}

fn ids(docs: &[Value], field: &str) -> Vec<String> {
	docs.iter().map(|doc| doc[field].as_str().unwrap_or_default().to_string()).collect()
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set TIERLENS_PG_DSN to run."]
async fn folded_text_conditions_are_literal() {
	let Some((test_db, db)) = seeded_db().await else {
		return;
	};
	let prefix = Predicate::match_all()
		.and(Condition::StartsWithFolded { field: "fullPath", prefix: "/data".to_string() });
	let docs = db.find(&file_query(prefix, 0, 100)).await.expect("find");

	assert_eq!(ids(&docs, "fileId"), vec!["c", "a"]);

	let contains = Predicate::match_all()
		.and(Condition::ContainsFolded { field: "fileName", needle: "(DRAFT)".to_string() });
	let docs = db.find(&file_query(contains, 0, 100)).await.expect("find");

	assert_eq!(ids(&docs, "fileId"), vec!["d"]);

	let pattern = Predicate::match_all()
		.and(Condition::ContainsFolded { field: "fileName", needle: ".*".to_string() });
	let docs = db.find(&file_query(pattern, 0, 100)).await.expect("find");

	assert!(docs.is_empty());

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set TIERLENS_PG_DSN to run."]
async fn non_ascii_folding_matches_the_memory_store() {
	let Some(base_dsn) = tierlens_testkit::env_dsn() else {
		eprintln!("Skipping Postgres store tests; set TIERLENS_PG_DSN to run this test.");

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let pool = test_db.provision().await.expect("Failed to provision test database.");
	let files = vec![
		fixtures::file_record("u1", "Übersicht.PDF", "/Ärger/x/Übersicht.PDF", 1, "HOT"),
		fixtures::file_record("u2", "ΣΗΜΕΙΩΣΕΙΣ.txt", "/ärger/ΣΗΜΕΙΩΣΕΙΣ.txt", 1, "HOT"),
		fixtures::file_record("u3", "plain.txt", "/other/plain.txt", 1, "HOT"),
	];

	tierlens_testkit::insert_documents(&pool, Collection::FileMetaAccess, &files)
		.await
		.expect("Failed to insert file records.");

	let db = Db::from_pool(pool);
	let memory = MemoryStore::new().with_documents(Collection::FileMetaAccess, files);

	for (predicate, expected) in [
		(
			Predicate::match_all()
				.and(Condition::StartsWithFolded { field: "fullPath", prefix: "/ärger".to_string() }),
			vec!["u1", "u2"],
		),
		(
			Predicate::match_all()
				.and(Condition::ContainsFolded { field: "fileName", needle: "übers".to_string() }),
			vec!["u1"],
		),
		(
			Predicate::match_all()
				.and(Condition::ContainsFolded { field: "fileName", needle: "σημ".to_string() }),
			vec!["u2"],
		),
	] {
		let query = file_query(predicate, 0, 100);
		let from_pg = db.find(&query).await.expect("find");
		let from_memory = memory.find(&query).await.expect("find");

		assert_eq!(ids(&from_pg, "fileId"), expected, "{query:?}");
		assert_eq!(from_pg, from_memory, "{query:?}");
	}

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set TIERLENS_PG_DSN to run."]
async fn range_equality_and_window() {
	let Some((test_db, db)) = seeded_db().await else {
		return;
	};
	let range = Predicate::match_all().and(Condition::Between {
		field: "sizeBytes",
		min: Some(500),
		max: Some(1_500),
	});
	let docs = db.find(&file_query(range, 0, 100)).await.expect("find");

	assert_eq!(ids(&docs, "fileId"), vec!["c", "a"]);

	let tier = Predicate::match_all()
		.and(Condition::Equals { field: "accessClass", value: "COLD".to_string() });
	let docs = db.find(&file_query(tier, 0, 100)).await.expect("find");

	assert_eq!(ids(&docs, "fileId"), vec!["b"]);

	let all = db.find(&file_query(Predicate::match_all(), 0, 4)).await.expect("find");
	let first = db.find(&file_query(Predicate::match_all(), 0, 2)).await.expect("find");
	let second = db.find(&file_query(Predicate::match_all(), 2, 2)).await.expect("find");

	assert_eq!([first, second].concat(), all);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set TIERLENS_PG_DSN to run."]
async fn internal_id_is_stripped_and_lookup_is_exact() {
	let Some((test_db, db)) = seeded_db().await else {
		return;
	};
	let doc = db
		.find_one(Collection::FileMetaAccess, "fileId", "c")
		.await
		.expect("find_one")
		.expect("record c exists");

	assert!(doc.get("_id").is_none());
	assert_eq!(doc["fileName"], "Report-Final.CSV");

	let missing = db.find_one(Collection::FileMetaAccess, "fileId", "C").await.expect("find_one");

	assert!(missing.is_none());

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set TIERLENS_PG_DSN to run."]
async fn descending_dates_ignore_insertion_order() {
	let Some((test_db, db)) = seeded_db().await else {
		return;
	};
	let query = FindQuery {
		collection: Collection::TrendDailySummary,
		predicate: Predicate::match_all(),
		sort: vec![SortKey::desc("date")],
		window: Window { skip: 0, limit: 10 },
	};
	let docs = db.find(&query).await.expect("find");

	assert_eq!(ids(&docs, "date"), vec!["2024-03-03", "2024-03-02", "2024-03-01"]);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}
