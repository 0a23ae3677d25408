use tierlens_storage::query::Predicate;

use crate::{
	Result, TierlensService,
	page::{Page, PageParams},
	records::DailySummary,
};

impl TierlensService {
	/// Daily summaries, most recent date first.
	pub async fn list_daily_trends(&self, params: &PageParams) -> Result<Vec<DailySummary>> {
		let page = Page::resolve(params, &self.query)?;

		self.list_records(Predicate::match_all(), page).await
	}

	/// Looks up one summary by its `date`, compared exactly as stored.
	pub async fn get_daily_trend(&self, date: &str) -> Result<DailySummary> {
		self.get_record(date).await
	}
}
