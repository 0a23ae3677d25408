//! Record shapes returned to callers.
//!
//! Each shape names the fields this crate relies on and carries every other producer field
//! through unchanged. Named fields are optional so a document missing one still lists as stored.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Number, Value};

use tierlens_storage::query::{Collection, SortKey};

pub const FILE_ID: &str = "fileId";
pub const FILE_NAME: &str = "fileName";
pub const FULL_PATH: &str = "fullPath";
pub const SIZE_BYTES: &str = "sizeBytes";
pub const ACCESS_CLASS: &str = "accessClass";
pub const FINGERPRINT: &str = "fingerprint";
pub const DATE: &str = "date";

/// Binds a record shape to its collection and fixed list order.
pub trait Record
where
	Self: DeserializeOwned + Serialize + Send,
{
	/// Human-readable label used in error messages.
	const KIND: &'static str;
	const COLLECTION: Collection;
	/// Empty means natural (insertion) order.
	const SORT: &'static [SortKey];
}

/// A record kind with a single-item lookup.
pub trait Keyed
where
	Self: Record,
{
	const IDENTITY_FIELD: &'static str;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub file_id: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub file_name: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub full_path: Option<String>,
	/// Kept as the producer's number, integral or not.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub size_bytes: Option<Number>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub access_class: Option<String>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}
impl Record for FileRecord {
	const COLLECTION: Collection = Collection::FileMetaAccess;
	const KIND: &'static str = "File record";
	// `fileId` keeps same-named files in a stable order.
	const SORT: &'static [SortKey] = &[SortKey::asc(FILE_NAME), SortKey::asc(FILE_ID)];
}
impl Keyed for FileRecord {
	const IDENTITY_FIELD: &'static str = FILE_ID;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicateGroup {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub fingerprint: Option<String>,
	/// Member file references, as written by the producer.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub files: Option<Vec<Value>>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}
impl Record for DuplicateGroup {
	const COLLECTION: Collection = Collection::DuplicateFiles;
	const KIND: &'static str = "Duplicate group";
	const SORT: &'static [SortKey] = &[];
}
impl Keyed for DuplicateGroup {
	const IDENTITY_FIELD: &'static str = FINGERPRINT;
}

/// Folder access metrics. The producer owns the field set, so the entry is kept whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapEntry {
	#[serde(flatten)]
	pub fields: Map<String, Value>,
}
impl Record for HeatmapEntry {
	const COLLECTION: Collection = Collection::TrendFolderHeatmap;
	const KIND: &'static str = "Heatmap entry";
	const SORT: &'static [SortKey] = &[];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub date: Option<String>,
	#[serde(flatten)]
	pub metrics: Map<String, Value>,
}
impl Record for DailySummary {
	const COLLECTION: Collection = Collection::TrendDailySummary;
	const KIND: &'static str = "Daily summary";
	const SORT: &'static [SortKey] = &[SortKey::desc(DATE)];
}
impl Keyed for DailySummary {
	const IDENTITY_FIELD: &'static str = DATE;
}
