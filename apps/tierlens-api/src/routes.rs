use axum::{
	Json, Router,
	extract::{
		Path, Query, State,
		rejection::{PathRejection, QueryRejection},
	},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::get,
};
use serde::Serialize;
use tower_http::{
	cors::{Any, CorsLayer},
	trace::TraceLayer,
};

use tierlens_service::{
	DailySummary, DuplicateGroup, Error as ServiceError, FileListParams, FileRecord, HeatmapEntry,
	PageParams,
};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/access", get(list_files))
		.route("/access/{file_id}", get(get_file))
		.route("/duplicates", get(list_duplicates))
		.route("/duplicates/{fingerprint}", get(get_duplicate))
		.route("/heatmap", get(list_heatmap))
		.route("/trends/daily", get(list_daily_trends))
		.route("/trends/daily/{date}", get(get_daily_trend))
		.layer(cors_layer())
		.layer(TraceLayer::new_for_http())
		.with_state(state)
}

fn cors_layer() -> CorsLayer {
	CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn list_files(
	State(state): State<AppState>,
	params: Result<Query<FileListParams>, QueryRejection>,
) -> Result<Json<Vec<FileRecord>>, ApiError> {
	let Query(params) = params?;
	let response = state.service.list_files(&params).await?;

	Ok(Json(response))
}

async fn get_file(
	State(state): State<AppState>,
	file_id: Result<Path<String>, PathRejection>,
) -> Result<Json<FileRecord>, ApiError> {
	let Path(file_id) = file_id?;
	let response = state.service.get_file(&file_id).await?;

	Ok(Json(response))
}

async fn list_duplicates(
	State(state): State<AppState>,
	params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<Vec<DuplicateGroup>>, ApiError> {
	let Query(params) = params?;
	let response = state.service.list_duplicates(&params).await?;

	Ok(Json(response))
}

async fn get_duplicate(
	State(state): State<AppState>,
	fingerprint: Result<Path<String>, PathRejection>,
) -> Result<Json<DuplicateGroup>, ApiError> {
	let Path(fingerprint) = fingerprint?;
	let response = state.service.get_duplicate(&fingerprint).await?;

	Ok(Json(response))
}

async fn list_heatmap(
	State(state): State<AppState>,
	params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<Vec<HeatmapEntry>>, ApiError> {
	let Query(params) = params?;
	let response = state.service.list_heatmap(&params).await?;

	Ok(Json(response))
}

async fn list_daily_trends(
	State(state): State<AppState>,
	params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<Vec<DailySummary>>, ApiError> {
	let Query(params) = params?;
	let response = state.service.list_daily_trends(&params).await?;

	Ok(Json(response))
}

async fn get_daily_trend(
	State(state): State<AppState>,
	date: Result<Path<String>, PathRejection>,
) -> Result<Json<DailySummary>, ApiError> {
	let Path(date) = date?;
	let response = state.service.get_daily_trend(&date).await?;

	Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}
impl ApiError {
	fn new(
		status: StatusCode,
		error_code: impl Into<String>,
		message: impl Into<String>,
		fields: Option<Vec<String>>,
	) -> Self {
		Self { status, error_code: error_code.into(), message: message.into(), fields }
	}

	pub fn status(&self) -> StatusCode {
		self.status
	}

	pub fn error_code(&self) -> &str {
		&self.error_code
	}
}

pub fn json_error(
	status: StatusCode,
	code: &str,
	message: impl Into<String>,
	fields: Option<Vec<String>>,
) -> ApiError {
	ApiError::new(status, code, message, fields)
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::NotFound { .. } =>
				json_error(StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string(), None),
			ServiceError::InvalidParameter { field, message } => json_error(
				StatusCode::BAD_REQUEST,
				"INVALID_PARAMETER",
				message,
				Some(vec![field.to_string()]),
			),
			ServiceError::BackingStoreUnavailable { message } => {
				tracing::warn!(error = %message, "Backing store unavailable.");

				json_error(
					StatusCode::SERVICE_UNAVAILABLE,
					"BACKING_STORE_UNAVAILABLE",
					"Backing store unavailable.",
					None,
				)
			},
			ServiceError::Storage { message } => {
				tracing::error!(error = %message, "Storage request failed.");

				json_error(
					StatusCode::INTERNAL_SERVER_ERROR,
					"STORAGE_ERROR",
					"Storage request failed.",
					None,
				)
			},
		}
	}
}

impl From<QueryRejection> for ApiError {
	fn from(err: QueryRejection) -> Self {
		json_error(StatusCode::BAD_REQUEST, "INVALID_PARAMETER", err.body_text(), None)
	}
}

impl From<PathRejection> for ApiError {
	fn from(err: PathRejection) -> Self {
		json_error(StatusCode::BAD_REQUEST, "INVALID_PARAMETER", err.body_text(), None)
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body =
			ErrorBody { error_code: self.error_code, message: self.message, fields: self.fields };

		(self.status, Json(body)).into_response()
	}
}
