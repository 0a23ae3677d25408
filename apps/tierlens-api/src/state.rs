use std::sync::Arc;

use tierlens_service::TierlensService;
use tierlens_storage::{DocumentStore, db::Db};

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<TierlensService>,
}
impl AppState {
	pub async fn new(config: tierlens_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		Ok(Self::from_store(config.query, Arc::new(db)))
	}

	pub fn from_store(query: tierlens_config::Query, store: Arc<dyn DocumentStore>) -> Self {
		Self { service: Arc::new(TierlensService::new(query, store)) }
	}
}
