use tierlens_storage::query::Predicate;

use crate::{
	Result, TierlensService,
	page::{Page, PageParams},
	records::DuplicateGroup,
};

impl TierlensService {
	pub async fn list_duplicates(&self, params: &PageParams) -> Result<Vec<DuplicateGroup>> {
		let page = Page::resolve(params, &self.query)?;

		self.list_records(Predicate::match_all(), page).await
	}

	pub async fn get_duplicate(&self, fingerprint: &str) -> Result<DuplicateGroup> {
		self.get_record(fingerprint).await
	}
}
