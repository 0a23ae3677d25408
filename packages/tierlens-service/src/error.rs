pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("{kind} not found: {identity}.")]
	NotFound { kind: &'static str, identity: String },
	#[error("Invalid parameter {field}: {message}")]
	InvalidParameter { field: &'static str, message: String },
	#[error("Backing store unavailable: {message}")]
	BackingStoreUnavailable { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
}
impl Error {
	pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
		Self::InvalidParameter { field, message: message.into() }
	}
}

impl From<tierlens_storage::Error> for Error {
	fn from(err: tierlens_storage::Error) -> Self {
		if err.is_unavailable() {
			return Self::BackingStoreUnavailable { message: err.to_string() };
		}

		Self::Storage { message: err.to_string() }
	}
}
