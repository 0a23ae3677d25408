use tierlens_storage::query::Predicate;

use crate::{
	Result, TierlensService,
	page::{Page, PageParams},
	records::HeatmapEntry,
};

impl TierlensService {
	pub async fn list_heatmap(&self, params: &PageParams) -> Result<Vec<HeatmapEntry>> {
		let page = Page::resolve(params, &self.query)?;

		self.list_records(Predicate::match_all(), page).await
	}
}
