use serde::Deserialize;

/// Reviewer filter tabs. Applied to the raw records before grouping.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewerFilter {
	All,
	Sam,
	Katie,
	Both,
}

/// Sort dropdown options. `Sam`/`Katie`/`Both` act as pass-through
/// filters on the grouped rows rather than comparators, matching the
/// option model of the list UI.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
	Date,
	Highest,
	Lowest,
	Sam,
	Katie,
	Both,
}

#[derive(Deserialize, Debug)]
pub struct RatingQueryOptions {
	pub filter: Option<ReviewerFilter>,
	pub sort: Option<SortOrder>,
}

/// How the submitted form attributes its score(s). `Split` means Sam and
/// Katie rated independently and two records are written.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RaterMode {
	Both,
	Split,
	Sam,
	Katie,
}

/// Request body for creating or updating a rating. One logical edit,
/// which may expand to two physical records in split mode.
#[derive(Deserialize, Debug, Clone)]
pub struct SaveRatingForm {
	pub bar_name: String,
	pub location: String,
	pub date_visited: chrono::NaiveDate,
	pub tasting_notes: Option<String>,
	pub mode: RaterMode,
	pub rating: Option<i32>,
	pub sam_rating: Option<i32>,
	pub katie_rating: Option<i32>,
	pub price: Option<f64>,
	pub photo_url: Option<String>,
	pub photo_position_x: Option<f64>,
	pub photo_position_y: Option<f64>,
}

#[derive(Deserialize, Debug)]
pub struct PhotoQuery {
	pub url: String,
}
