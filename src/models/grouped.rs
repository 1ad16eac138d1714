use serde::Serialize;

use crate::models::Rating;

/// Discriminant of a display row. `Split` marks a row built from a Sam
/// record and a Katie record for the same visit.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum GroupedRater {
	Both,
	Split,
	Sam,
	Katie,
}

/// One row of the list view, derived from up to two stored records.
/// Never persisted; recomputed from the raw list on every query.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct GroupedRating {
	/// First underlying record id, kept for navigation.
	pub id: uuid::Uuid,
	pub sam_id: Option<uuid::Uuid>,
	pub katie_id: Option<uuid::Uuid>,
	pub bar_name: String,
	pub location: String,
	pub date_visited: chrono::NaiveDate,
	pub tasting_notes: String,
	pub rater: GroupedRater,
	/// Single score for Both/Sam/Katie rows.
	pub rating: Option<i32>,
	/// Per-reviewer scores for Split rows.
	pub sam_rating: Option<i32>,
	pub katie_rating: Option<i32>,
}

impl GroupedRating {
	pub fn solo(rating: &Rating, rater: GroupedRater) -> GroupedRating {
		GroupedRating {
			id: rating.rating_id,
			sam_id: None,
			katie_id: None,
			bar_name: rating.bar_name.to_owned(),
			location: rating.location.to_owned(),
			date_visited: rating.date_visited,
			tasting_notes: rating.tasting_notes.to_owned(),
			rater,
			rating: Some(rating.rating),
			sam_rating: None,
			katie_rating: None,
		}
	}
}
