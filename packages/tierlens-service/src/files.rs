use crate::{
	Result, TierlensService,
	filter::{FileFilter, FileListParams},
	page::Page,
	records::FileRecord,
};

impl TierlensService {
	/// File records matching every supplied filter, ordered by file name.
	pub async fn list_files(&self, params: &FileListParams) -> Result<Vec<FileRecord>> {
		let filter = FileFilter::from_params(params)?;
		let page = Page::resolve(&params.page(), &self.query)?;

		self.list_records(filter.to_predicate(), page).await
	}

	pub async fn get_file(&self, file_id: &str) -> Result<FileRecord> {
		self.get_record(file_id).await
	}
}
