use uuid::Uuid;

use crate::models::{Rater, RaterMode, Rating, SaveRating, SaveRatingForm};

/// The gateway calls one logical edit expands to. Computed before any
/// I/O so the split-aware decisions stay pure and testable; the pair
/// variants are executed as a sequential two-call saga with no rollback.
#[derive(Debug, Clone, PartialEq)]
pub enum SavePlan {
	Insert(SaveRating),
	InsertPair {
		sam: SaveRating,
		katie: SaveRating,
	},
	Update {
		id: Uuid,
		save: SaveRating,
	},
	UpdatePair {
		sam: (Uuid, SaveRating),
		katie: (Uuid, SaveRating),
	},
	/// A solo record entering split mode: the existing record is updated
	/// in place and the missing half is inserted.
	PromoteToSplit {
		id: Uuid,
		update: SaveRating,
		insert: SaveRating,
	},
}

/// Submission gate, checked before any gateway call. Bar name and
/// location are required; the score(s) the chosen mode uses must be on
/// the 1–5 scale. Price, photo and notes are always optional.
pub fn validate_form(form: &SaveRatingForm) -> Result<(), String> {
	if form.bar_name.trim().is_empty() {
		return Err(String::from("Bar name is required"));
	}
	if form.location.trim().is_empty() {
		return Err(String::from("Location is required"));
	}

	match form.mode {
		RaterMode::Split => {
			if !score_ok(form.sam_rating) || !score_ok(form.katie_rating) {
				return Err(String::from("Both Sam's and Katie's ratings must be 1 to 5"));
			}
		}
		_ => {
			if !score_ok(form.rating) {
				return Err(String::from("Rating must be 1 to 5"));
			}
		}
	}

	Ok(())
}

fn score_ok(score: Option<i32>) -> bool {
	matches!(score, Some(1..=5))
}

fn save_with(form: &SaveRatingForm, rater: Rater, rating: i32) -> SaveRating {
	SaveRating {
		bar_name: form.bar_name.to_owned(),
		location: form.location.to_owned(),
		date_visited: form.date_visited,
		rating,
		tasting_notes: form.tasting_notes.clone().unwrap_or_default(),
		rater,
		price: form.price,
		photo_url: form.photo_url.to_owned(),
		photo_position_x: form.photo_position_x,
		photo_position_y: form.photo_position_y,
	}
}

fn single_rater(mode: RaterMode) -> Rater {
	match mode {
		RaterMode::Sam => Rater::Sam,
		RaterMode::Katie => Rater::Katie,
		// Split is planned separately and never reaches here
		_ => Rater::Both,
	}
}

/// Plans a create. Split mode expands to two inserts, Sam's first,
/// sharing every field except score and tag. Call after `validate_form`.
pub fn plan_create(form: &SaveRatingForm) -> SavePlan {
	match form.mode {
		RaterMode::Split => SavePlan::InsertPair {
			sam: save_with(form, Rater::Sam, form.sam_rating.unwrap_or(0)),
			katie: save_with(form, Rater::Katie, form.katie_rating.unwrap_or(0)),
		},
		mode => SavePlan::Insert(save_with(
			form,
			single_rater(mode),
			form.rating.unwrap_or(0),
		)),
	}
}

/// Plans an update of `existing`. In split mode with a resolved partner,
/// both records are updated with the shared fields and their own score;
/// without one the record is promoted, keeping its Sam/Katie tag (a
/// `Both` record is retagged Sam) and synthesizing the missing half.
pub fn plan_update(
	existing: &Rating,
	partner: Option<&Rating>,
	form: &SaveRatingForm,
) -> SavePlan {
	let sam_rating = form.sam_rating.unwrap_or(0);
	let katie_rating = form.katie_rating.unwrap_or(0);

	match form.mode {
		RaterMode::Split => match partner {
			Some(partner) => {
				let (sam_id, katie_id) = if existing.rater == Rater::Katie {
					(partner.rating_id, existing.rating_id)
				} else {
					(existing.rating_id, partner.rating_id)
				};
				SavePlan::UpdatePair {
					sam: (sam_id, save_with(form, Rater::Sam, sam_rating)),
					katie: (katie_id, save_with(form, Rater::Katie, katie_rating)),
				}
			}
			None => {
				let keep = match existing.rater {
					Rater::Katie => Rater::Katie,
					_ => Rater::Sam,
				};
				let missing = keep.opposite().unwrap_or(Rater::Katie);
				let score = |rater: Rater| {
					if rater == Rater::Sam {
						sam_rating
					} else {
						katie_rating
					}
				};
				SavePlan::PromoteToSplit {
					id: existing.rating_id,
					update: save_with(form, keep, score(keep)),
					insert: save_with(form, missing, score(missing)),
				}
			}
		},
		mode => SavePlan::Update {
			id: existing.rating_id,
			save: save_with(form, single_rater(mode), form.rating.unwrap_or(0)),
		},
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::utils::fixtures::{form, rating};

	#[test]
	fn empty_bar_name_is_rejected() {
		let mut f = form(RaterMode::Both, Some(4));
		f.bar_name = String::from("  ");

		assert!(validate_form(&f).is_err());
	}

	#[test]
	fn empty_location_is_rejected() {
		let mut f = form(RaterMode::Both, Some(4));
		f.location = String::new();

		assert!(validate_form(&f).is_err());
	}

	#[test]
	fn split_with_a_zero_score_is_rejected_before_any_call() {
		let mut f = form(RaterMode::Split, None);
		f.sam_rating = Some(5);
		f.katie_rating = Some(0);

		assert!(validate_form(&f).is_err());
	}

	#[test]
	fn single_mode_score_must_be_on_the_scale() {
		assert!(validate_form(&form(RaterMode::Both, Some(0))).is_err());
		assert!(validate_form(&form(RaterMode::Both, Some(6))).is_err());
		assert!(validate_form(&form(RaterMode::Both, None)).is_err());
		assert!(validate_form(&form(RaterMode::Both, Some(1))).is_ok());
		assert!(validate_form(&form(RaterMode::Both, Some(5))).is_ok());
	}

	#[test]
	fn split_create_plans_two_inserts_sam_first() {
		let mut f = form(RaterMode::Split, None);
		f.sam_rating = Some(5);
		f.katie_rating = Some(3);

		match plan_create(&f) {
			SavePlan::InsertPair { sam, katie } => {
				assert_eq!(sam.rater, Rater::Sam);
				assert_eq!(sam.rating, 5);
				assert_eq!(katie.rater, Rater::Katie);
				assert_eq!(katie.rating, 3);
				assert_eq!(sam.bar_name, katie.bar_name);
				assert_eq!(sam.date_visited, katie.date_visited);
			}
			plan => panic!("expected InsertPair, got {:?}", plan),
		}
	}

	#[test]
	fn single_create_plans_one_insert_with_the_chosen_tag() {
		match plan_create(&form(RaterMode::Katie, Some(4))) {
			SavePlan::Insert(save) => {
				assert_eq!(save.rater, Rater::Katie);
				assert_eq!(save.rating, 4);
			}
			plan => panic!("expected Insert, got {:?}", plan),
		}
	}

	#[test]
	fn split_update_with_partner_targets_the_right_ids() {
		let existing = rating("BarA", "LocA", "", Rater::Katie, 2, "2024-01-01");
		let partner = rating("BarA", "LocA", "", Rater::Sam, 4, "2024-01-01");

		let mut f = form(RaterMode::Split, None);
		f.sam_rating = Some(5);
		f.katie_rating = Some(1);

		match plan_update(&existing, Some(&partner), &f) {
			SavePlan::UpdatePair { sam, katie } => {
				assert_eq!(sam.0, partner.rating_id);
				assert_eq!(sam.1.rating, 5);
				assert_eq!(katie.0, existing.rating_id);
				assert_eq!(katie.1.rating, 1);
			}
			plan => panic!("expected UpdatePair, got {:?}", plan),
		}
	}

	#[test]
	fn split_update_without_partner_promotes_the_record() {
		let existing = rating("BarA", "LocA", "", Rater::Both, 3, "2024-01-01");

		let mut f = form(RaterMode::Split, None);
		f.sam_rating = Some(4);
		f.katie_rating = Some(2);

		match plan_update(&existing, None, &f) {
			SavePlan::PromoteToSplit { id, update, insert } => {
				assert_eq!(id, existing.rating_id);
				assert_eq!(update.rater, Rater::Sam);
				assert_eq!(update.rating, 4);
				assert_eq!(insert.rater, Rater::Katie);
				assert_eq!(insert.rating, 2);
			}
			plan => panic!("expected PromoteToSplit, got {:?}", plan),
		}
	}

	#[test]
	fn promoting_a_katie_record_keeps_her_tag() {
		let existing = rating("BarA", "LocA", "", Rater::Katie, 3, "2024-01-01");

		let mut f = form(RaterMode::Split, None);
		f.sam_rating = Some(4);
		f.katie_rating = Some(2);

		match plan_update(&existing, None, &f) {
			SavePlan::PromoteToSplit { update, insert, .. } => {
				assert_eq!(update.rater, Rater::Katie);
				assert_eq!(update.rating, 2);
				assert_eq!(insert.rater, Rater::Sam);
				assert_eq!(insert.rating, 4);
			}
			plan => panic!("expected PromoteToSplit, got {:?}", plan),
		}
	}

	#[test]
	fn single_update_plans_one_call_against_the_existing_id() {
		let existing = rating("BarA", "LocA", "", Rater::Sam, 3, "2024-01-01");

		match plan_update(&existing, None, &form(RaterMode::Both, Some(5))) {
			SavePlan::Update { id, save } => {
				assert_eq!(id, existing.rating_id);
				assert_eq!(save.rater, Rater::Both);
				assert_eq!(save.rating, 5);
			}
			plan => panic!("expected Update, got {:?}", plan),
		}
	}
}
