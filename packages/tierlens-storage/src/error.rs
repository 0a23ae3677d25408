#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Sqlx(#[from] sqlx::Error),
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),
	#[error("Store unavailable: {0}")]
	Unavailable(String),
}
impl Error {
	/// Whether the failure means the store could not be reached, as opposed to a failed query.
	pub fn is_unavailable(&self) -> bool {
		match self {
			Self::Sqlx(inner) => matches!(
				inner,
				sqlx::Error::Io(_)
					| sqlx::Error::Tls(_)
					| sqlx::Error::PoolTimedOut
					| sqlx::Error::PoolClosed
					| sqlx::Error::WorkerCrashed
			),
			Self::Unavailable(_) => true,
			Self::InvalidArgument(_) => false,
		}
	}
}

#[cfg(test)]
mod tests {
	use crate::Error;

	#[test]
	fn connectivity_failures_are_unavailable() {
		assert!(Error::Sqlx(sqlx::Error::PoolTimedOut).is_unavailable());
		assert!(Error::Sqlx(sqlx::Error::PoolClosed).is_unavailable());
		assert!(
			Error::Sqlx(sqlx::Error::Io(std::io::Error::from(
				std::io::ErrorKind::ConnectionRefused
			)))
			.is_unavailable()
		);
		assert!(Error::Unavailable("down".to_string()).is_unavailable());
	}

	#[test]
	fn query_failures_are_not_unavailable() {
		assert!(!Error::Sqlx(sqlx::Error::RowNotFound).is_unavailable());
		assert!(!Error::InvalidArgument("skip".to_string()).is_unavailable());
	}
}
