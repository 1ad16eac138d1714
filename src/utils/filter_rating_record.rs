use crate::models::{Rater, Rating, RatingRow};

/// Maps a wire row onto the domain record shape: NULL notes become an
/// empty string and the tag string becomes a `Rater`. The table's CHECK
/// constraint keeps the tag fallback unreachable in practice.
pub fn filter_rating_record(row: &RatingRow) -> Rating {
	Rating {
		rating_id: row.rating_id,
		bar_name: row.bar_name.to_owned(),
		location: row.location.to_owned(),
		date_visited: row.date_visited,
		rating: row.rating,
		tasting_notes: row.tasting_notes.clone().unwrap_or_default(),
		rater: row.rater.parse().unwrap_or(Rater::Both),
		price: row.price,
		photo_url: row.photo_url.to_owned(),
		photo_position_x: row.photo_position_x,
		photo_position_y: row.photo_position_y,
		created_at: row.created_at,
	}
}
