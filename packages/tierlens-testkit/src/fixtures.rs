use serde_json::{Value, json};

use tierlens_storage::query::Collection;

use crate::memory::MemoryStore;

pub fn file_record(
	file_id: &str,
	file_name: &str,
	full_path: &str,
	size_bytes: u64,
	access_class: &str,
) -> Value {
	json!({
		"fileId": file_id,
		"fileName": file_name,
		"fullPath": full_path,
		"sizeBytes": size_bytes,
		"accessClass": access_class,
	})
}

pub fn duplicate_group(fingerprint: &str, paths: &[(&str, u64)]) -> Value {
	let files: Vec<Value> = paths
		.iter()
		.map(|(path, size)| json!({ "fullPath": path, "sizeBytes": size }))
		.collect();

	json!({ "fingerprint": fingerprint, "files": files })
}

pub fn heatmap_entry(folder: &str, access_count: u64) -> Value {
	json!({ "folder": folder, "accessCount": access_count })
}

pub fn daily_summary(date: &str, total_files: u64) -> Value {
	json!({
		"date": date,
		"totalFiles": total_files,
		"totalSizeBytes": total_files * 1_024,
		"hotFiles": total_files / 2,
		"warmFiles": total_files / 4,
		"coldFiles": total_files - total_files / 2 - total_files / 4,
		"duplicateFiles": 0,
		"duplicateGroups": 0,
	})
}

/// Two file records: `a` is a small HOT report under `/data`, `b` a large COLD archive under
/// `/backup`.
pub fn scenario_files() -> Vec<Value> {
	vec![
		file_record("a", "report.csv", "/data/2024/report.csv", 500, "HOT"),
		file_record("b", "archive.zip", "/backup/archive.zip", 50_000, "COLD"),
	]
}

/// A store populated across all four collections, with trend summaries inserted out of date
/// order.
pub fn scenario_store() -> MemoryStore {
	MemoryStore::new()
		.with_documents(Collection::FileMetaAccess, scenario_files())
		.with_documents(
			Collection::DuplicateFiles,
			vec![
				duplicate_group("f1", &[("/data/a.txt", 10), ("/backup/a.txt", 10)]),
				duplicate_group("f2", &[("/data/b.txt", 20), ("/tmp/b.txt", 20)]),
			],
		)
		.with_documents(
			Collection::TrendFolderHeatmap,
			vec![heatmap_entry("/data", 42), heatmap_entry("/backup", 3)],
		)
		.with_documents(
			Collection::TrendDailySummary,
			vec![
				daily_summary("2024-03-02", 20),
				daily_summary("2024-03-04", 40),
				daily_summary("2024-03-01", 10),
				daily_summary("2024-03-03", 30),
			],
		)
}
