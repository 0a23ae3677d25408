//! Store-neutral description of a bounded, ordered read.

/// The four read-only document collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
	FileMetaAccess,
	DuplicateFiles,
	TrendFolderHeatmap,
	TrendDailySummary,
}
impl Collection {
	pub const ALL: [Self; 4] = [
		Self::FileMetaAccess,
		Self::DuplicateFiles,
		Self::TrendFolderHeatmap,
		Self::TrendDailySummary,
	];

	/// Collection name as the producer knows it.
	pub fn name(self) -> &'static str {
		match self {
			Self::FileMetaAccess => "FileMetaAccess",
			Self::DuplicateFiles => "DuplicateFiles",
			Self::TrendFolderHeatmap => "TrendFolderHeatmap",
			Self::TrendDailySummary => "TrendDailySummary",
		}
	}

	pub fn table(self) -> &'static str {
		match self {
			Self::FileMetaAccess => "file_meta_access",
			Self::DuplicateFiles => "duplicate_files",
			Self::TrendFolderHeatmap => "trend_folder_heatmap",
			Self::TrendDailySummary => "trend_daily_summary",
		}
	}
}

/// A single test against one top-level document field.
///
/// Text comparisons are literal: the needle is never interpreted as a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
	/// Case-insensitive substring anywhere in the field.
	ContainsFolded { field: &'static str, needle: String },
	/// Case-insensitive prefix anchored at the start of the field.
	StartsWithFolded { field: &'static str, prefix: String },
	/// Inclusive numeric range. Non-numeric or missing fields never match.
	Between { field: &'static str, min: Option<i64>, max: Option<i64> },
	/// Exact, case-sensitive string equality.
	Equals { field: &'static str, value: String },
}

/// Conjunction of conditions. The empty predicate matches every document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predicate {
	conditions: Vec<Condition>,
}
impl Predicate {
	pub fn match_all() -> Self {
		Self::default()
	}

	pub fn and(mut self, condition: Condition) -> Self {
		self.conditions.push(condition);

		self
	}

	pub fn conditions(&self) -> &[Condition] {
		&self.conditions
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
	Ascending,
	Descending,
}

/// Ordering on one string-valued field. Documents missing the field sort last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
	pub field: &'static str,
	pub direction: Direction,
}
impl SortKey {
	pub const fn asc(field: &'static str) -> Self {
		Self { field, direction: Direction::Ascending }
	}

	pub const fn desc(field: &'static str) -> Self {
		Self { field, direction: Direction::Descending }
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
	pub skip: u64,
	pub limit: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindQuery {
	pub collection: Collection,
	pub predicate: Predicate,
	/// Applied in order; natural order always breaks remaining ties.
	pub sort: Vec<SortKey>,
	pub window: Window,
}
