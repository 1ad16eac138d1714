use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reviewer tag carried by every stored record. `Both` means the couple
/// rated together; a split visit is stored as two records, one `Sam` and
/// one `Katie`.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum Rater {
	Sam,
	Katie,
	Both,
}

impl Rater {
	pub fn as_str(&self) -> &'static str {
		match self {
			Rater::Sam => "Sam",
			Rater::Katie => "Katie",
			Rater::Both => "Both",
		}
	}

	/// The tag a partner record would carry. `Both` records never pair up.
	pub fn opposite(&self) -> Option<Rater> {
		match self {
			Rater::Sam => Some(Rater::Katie),
			Rater::Katie => Some(Rater::Sam),
			Rater::Both => None,
		}
	}
}

impl FromStr for Rater {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"Sam" => Ok(Rater::Sam),
			"Katie" => Ok(Rater::Katie),
			"Both" => Ok(Rater::Both),
			_ => Err(()),
		}
	}
}

impl fmt::Display for Rater {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Wire shape of one row in the ratings table.
#[derive(Debug, Deserialize, sqlx::FromRow, Serialize, Clone)]
pub struct RatingRow {
	pub rating_id: uuid::Uuid,
	pub bar_name: String,
	pub location: String,
	pub date_visited: chrono::NaiveDate,
	pub rating: i32,
	pub tasting_notes: Option<String>,
	pub rater: String,
	pub price: Option<f64>,
	pub photo_url: Option<String>,
	pub photo_position_x: Option<f64>,
	pub photo_position_y: Option<f64>,
	pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Domain shape of one stored rating. Also the shape mirrored into the
/// local cache file, so it round-trips through serde.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Rating {
	pub rating_id: uuid::Uuid,
	pub bar_name: String,
	pub location: String,
	pub date_visited: chrono::NaiveDate,
	pub rating: i32,
	pub tasting_notes: String,
	pub rater: Rater,
	pub price: Option<f64>,
	pub photo_url: Option<String>,
	pub photo_position_x: Option<f64>,
	pub photo_position_y: Option<f64>,
	pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Field set for inserts and full-row updates. The server assigns
/// `rating_id` and `created_at`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SaveRating {
	pub bar_name: String,
	pub location: String,
	pub date_visited: chrono::NaiveDate,
	pub rating: i32,
	pub tasting_notes: String,
	pub rater: Rater,
	pub price: Option<f64>,
	pub photo_url: Option<String>,
	pub photo_position_x: Option<f64>,
	pub photo_position_y: Option<f64>,
}
