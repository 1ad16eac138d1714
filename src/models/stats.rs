use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Deserialize, Debug, FromRow)]
pub struct StatsRow {
	pub count: Option<i64>,
	pub average: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct RatingStats {
	pub average_rating: f64,
	pub total_martinis: i64,
}
