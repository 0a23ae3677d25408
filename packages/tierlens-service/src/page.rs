use serde::Deserialize;

use tierlens_storage::query::Window;

use crate::{Error, Result};

/// Raw `skip`/`limit` query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
	pub skip: Option<String>,
	pub limit: Option<String>,
}

/// A validated result window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
	pub skip: u64,
	pub limit: u64,
}
impl Page {
	/// Applies defaults and bounds from `policy`.
	///
	/// `limit` must be positive. With no `max_limit` configured any positive limit is accepted;
	/// otherwise a larger limit is rejected rather than clamped.
	pub fn resolve(params: &PageParams, policy: &tierlens_config::Query) -> Result<Self> {
		let skip = match params.skip.as_deref() {
			Some(raw) => parse_non_negative("skip", raw)? as u64,
			None => 0,
		};
		let limit = match params.limit.as_deref() {
			Some(raw) => parse_non_negative("limit", raw)? as u64,
			None => policy.default_limit,
		};

		if limit == 0 {
			return Err(Error::invalid("limit", "limit must be greater than zero."));
		}
		if let Some(max_limit) = policy.max_limit
			&& limit > max_limit
		{
			return Err(Error::invalid("limit", format!("limit must be at most {max_limit}.")));
		}

		Ok(Self { skip, limit })
	}
}
impl From<Page> for Window {
	fn from(page: Page) -> Self {
		Self { skip: page.skip, limit: page.limit }
	}
}

/// Parses a decimal, non-negative integer that fits the store's signed 64-bit range.
pub(crate) fn parse_non_negative(field: &'static str, raw: &str) -> Result<i64> {
	let value: u64 = raw.trim().parse().map_err(|_| {
		Error::invalid(field, format!("{field} must be a non-negative integer, got {raw:?}."))
	})?;

	i64::try_from(value)
		.map_err(|_| Error::invalid(field, format!("{field} must be at most {}.", i64::MAX)))
}
