pub mod duplicates;
pub mod files;
pub mod filter;
pub mod heatmap;
pub mod page;
pub mod records;
pub mod trends;

mod error;
mod executor;

pub use error::{Error, Result};
pub use filter::{AccessClass, FileFilter, FileListParams};
pub use page::{Page, PageParams};
pub use records::{DailySummary, DuplicateGroup, FileRecord, HeatmapEntry, Keyed, Record};

use std::sync::Arc;

use tierlens_storage::DocumentStore;

/// Read-only query façade over the four record collections.
pub struct TierlensService {
	pub query: tierlens_config::Query,
	pub store: Arc<dyn DocumentStore>,
}
impl TierlensService {
	pub fn new(query: tierlens_config::Query, store: Arc<dyn DocumentStore>) -> Self {
		Self { query, store }
	}
}
