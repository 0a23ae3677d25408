use serde::Deserialize;

use tierlens_storage::query::{Condition, Predicate};

use crate::{
	Error, Result,
	page::{self, PageParams},
	records::{ACCESS_CLASS, FILE_NAME, FULL_PATH, SIZE_BYTES},
};

const TIER_ALL: &str = "all";

/// Raw query parameters of a file record listing, exactly as the caller sent them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileListParams {
	pub skip: Option<String>,
	pub limit: Option<String>,
	pub filename: Option<String>,
	pub folder: Option<String>,
	pub min_size: Option<String>,
	pub max_size: Option<String>,
	pub tier: Option<String>,
}
impl FileListParams {
	pub fn page(&self) -> PageParams {
		PageParams { skip: self.skip.clone(), limit: self.limit.clone() }
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessClass {
	Hot,
	Warm,
	Cold,
}
impl AccessClass {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Hot => "HOT",
			Self::Warm => "WARM",
			Self::Cold => "COLD",
		}
	}

	/// Case-insensitive parse of a canonical class name.
	pub fn parse(raw: &str) -> Option<Self> {
		[Self::Hot, Self::Warm, Self::Cold]
			.into_iter()
			.find(|class| class.as_str().eq_ignore_ascii_case(raw))
	}
}

/// Validated file record filter. Every field is optional and absent fields constrain nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileFilter {
	filename: Option<String>,
	folder: Option<String>,
	min_size: Option<i64>,
	max_size: Option<i64>,
	tier: Option<AccessClass>,
}
impl FileFilter {
	/// Builds a filter from raw parameters.
	///
	/// Blank text parameters count as absent. `tier=all` in any casing means no tier constraint.
	/// Size bounds must be non-negative integers; an inverted range is accepted and matches
	/// nothing.
	pub fn from_params(params: &FileListParams) -> Result<Self> {
		let tier = match non_blank(params.tier.as_deref()) {
			None => None,
			Some(raw) if raw.eq_ignore_ascii_case(TIER_ALL) => None,
			Some(raw) => Some(AccessClass::parse(raw).ok_or_else(|| {
				Error::invalid("tier", "tier must be one of HOT, WARM, COLD, or all.")
			})?),
		};

		Ok(Self {
			filename: non_blank(params.filename.as_deref()).map(str::to_string),
			folder: non_blank(params.folder.as_deref()).map(str::to_string),
			min_size: parse_size("min_size", params.min_size.as_deref())?,
			max_size: parse_size("max_size", params.max_size.as_deref())?,
			tier,
		})
	}

	#[cfg(test)]
	fn is_unconstrained(&self) -> bool {
		*self == Self::default()
	}

	pub fn to_predicate(&self) -> Predicate {
		let mut predicate = Predicate::match_all();

		if let Some(needle) = &self.filename {
			predicate = predicate
				.and(Condition::ContainsFolded { field: FILE_NAME, needle: needle.clone() });
		}
		if let Some(prefix) = &self.folder {
			predicate = predicate
				.and(Condition::StartsWithFolded { field: FULL_PATH, prefix: prefix.clone() });
		}
		if self.min_size.is_some() || self.max_size.is_some() {
			predicate = predicate.and(Condition::Between {
				field: SIZE_BYTES,
				min: self.min_size,
				max: self.max_size,
			});
		}
		if let Some(tier) = self.tier {
			predicate = predicate
				.and(Condition::Equals { field: ACCESS_CLASS, value: tier.as_str().to_string() });
		}

		predicate
	}
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
	raw.filter(|value| !value.trim().is_empty())
}

fn parse_size(field: &'static str, raw: Option<&str>) -> Result<Option<i64>> {
	raw.map(|raw| page::parse_non_negative(field, raw)).transpose()
}

#[cfg(test)]
mod tests {
	use tierlens_storage::query::Condition;

	use crate::{
		Error,
		filter::{AccessClass, FileFilter, FileListParams},
	};

	fn params() -> FileListParams {
		FileListParams::default()
	}

	#[test]
	fn no_parameters_match_everything() {
		let filter = FileFilter::from_params(&params()).expect("filter");

		assert!(filter.is_unconstrained());
		assert!(filter.to_predicate().conditions().is_empty());
	}

	#[test]
	fn blank_text_parameters_are_absent() {
		let filter = FileFilter::from_params(&FileListParams {
			filename: Some(String::new()),
			folder: Some("   ".to_string()),
			tier: Some(" ".to_string()),
			..params()
		})
		.expect("filter");

		assert!(filter.is_unconstrained());
	}

	#[test]
	fn tier_all_in_any_case_is_no_constraint() {
		for raw in ["all", "ALL", "All", "aLl"] {
			let filter =
				FileFilter::from_params(&FileListParams { tier: Some(raw.to_string()), ..params() })
					.expect("filter");

			assert!(filter.is_unconstrained(), "tier={raw}");
		}
	}

	#[test]
	fn tier_is_canonicalized() {
		let filter =
			FileFilter::from_params(&FileListParams { tier: Some("cOlD".to_string()), ..params() })
				.expect("filter");

		assert_eq!(
			filter.to_predicate().conditions(),
			&[Condition::Equals { field: "accessClass", value: "COLD".to_string() }]
		);
	}

	#[test]
	fn unknown_tier_is_rejected() {
		let params = FileListParams { tier: Some("frozen".to_string()), ..params() };
		let err = FileFilter::from_params(&params).expect_err("tier");

		assert!(matches!(err, Error::InvalidParameter { field: "tier", .. }), "{err}");
	}

	#[test]
	fn sizes_must_be_non_negative_integers() {
		for raw in ["abc", "-1", "1.5", "", "1e3"] {
			let err = FileFilter::from_params(&FileListParams {
				min_size: Some(raw.to_string()),
				..params()
			})
			.expect_err("min_size");

			assert!(
				matches!(err, Error::InvalidParameter { field: "min_size", .. }),
				"min_size={raw:?}: {err}"
			);
		}

		let err = FileFilter::from_params(&FileListParams {
			max_size: Some("99999999999999999999".to_string()),
			..params()
		})
		.expect_err("max_size");

		assert!(matches!(err, Error::InvalidParameter { field: "max_size", .. }), "{err}");
	}

	#[test]
	fn inverted_range_is_not_validated() {
		let filter = FileFilter::from_params(&FileListParams {
			min_size: Some("100".to_string()),
			max_size: Some("10".to_string()),
			..params()
		})
		.expect("filter");

		assert_eq!(
			filter.to_predicate().conditions(),
			&[Condition::Between { field: "sizeBytes", min: Some(100), max: Some(10) }]
		);
	}

	#[test]
	fn all_conditions_are_conjoined_in_parameter_order() {
		let filter = FileFilter::from_params(&FileListParams {
			filename: Some("Report".to_string()),
			folder: Some("/Data".to_string()),
			min_size: Some("1".to_string()),
			tier: Some("hot".to_string()),
			..params()
		})
		.expect("filter");

		assert_eq!(
			filter.to_predicate().conditions(),
			&[
				Condition::ContainsFolded { field: "fileName", needle: "Report".to_string() },
				Condition::StartsWithFolded { field: "fullPath", prefix: "/Data".to_string() },
				Condition::Between { field: "sizeBytes", min: Some(1), max: None },
				Condition::Equals { field: "accessClass", value: "HOT".to_string() },
			]
		);
	}

	#[test]
	fn access_class_parse_is_case_insensitive() {
		assert_eq!(AccessClass::parse("warm"), Some(AccessClass::Warm));
		assert_eq!(AccessClass::parse("WARM"), Some(AccessClass::Warm));
		assert_eq!(AccessClass::parse("archive"), None);
	}
}
