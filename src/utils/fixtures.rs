use crate::models::{Rater, RaterMode, Rating, SaveRatingForm};

pub fn rating(
	bar_name: &str,
	location: &str,
	notes: &str,
	rater: Rater,
	score: i32,
	date: &str,
) -> Rating {
	Rating {
		rating_id: uuid::Uuid::new_v4(),
		bar_name: bar_name.to_owned(),
		location: location.to_owned(),
		date_visited: date.parse().unwrap(),
		rating: score,
		tasting_notes: notes.to_owned(),
		rater,
		price: None,
		photo_url: None,
		photo_position_x: None,
		photo_position_y: None,
		created_at: chrono::Utc::now(),
	}
}

pub fn form(mode: RaterMode, score: Option<i32>) -> SaveRatingForm {
	SaveRatingForm {
		bar_name: String::from("BarA"),
		location: String::from("LocA"),
		date_visited: "2024-01-01".parse().unwrap(),
		tasting_notes: None,
		mode,
		rating: score,
		sam_rating: None,
		katie_rating: None,
		price: None,
		photo_url: None,
		photo_position_x: None,
		photo_position_y: None,
	}
}
