use std::collections::HashMap;

use crate::models::{GroupedRater, GroupedRating, Rater, Rating};

/// Groups raw records into display rows. Records bucket together only
/// when bar name, location and tasting notes all match exactly —
/// different notes at the same bar are distinct tasting occasions and
/// must not merge. Pure function; bucket order follows first encounter,
/// ordering proper is the sort engine's job.
pub fn group_ratings(ratings: &[Rating]) -> Vec<GroupedRating> {
	let mut order: Vec<(&str, &str, &str)> = Vec::new();
	let mut buckets: HashMap<(&str, &str, &str), Vec<&Rating>> = HashMap::new();

	for rating in ratings {
		let key = (
			rating.bar_name.as_str(),
			rating.location.as_str(),
			rating.tasting_notes.as_str(),
		);
		let bucket = buckets.entry(key).or_default();
		if bucket.is_empty() {
			order.push(key);
		}
		bucket.push(rating);
	}

	let mut grouped = Vec::new();

	for key in order {
		let entries = &buckets[&key];
		// duplicate tags in a bucket: first in input order wins, which is
		// the most recently created record given the list() ordering
		let sam = entries.iter().find(|e| e.rater == Rater::Sam);
		let katie = entries.iter().find(|e| e.rater == Rater::Katie);
		let both = entries.iter().find(|e| e.rater == Rater::Both);
		let first = entries[0];

		if let (Some(sam), Some(katie)) = (sam, katie) {
			grouped.push(GroupedRating {
				id: sam.rating_id,
				sam_id: Some(sam.rating_id),
				katie_id: Some(katie.rating_id),
				bar_name: first.bar_name.to_owned(),
				location: first.location.to_owned(),
				date_visited: first.date_visited,
				tasting_notes: first.tasting_notes.to_owned(),
				rater: GroupedRater::Split,
				rating: None,
				sam_rating: Some(sam.rating),
				katie_rating: Some(katie.rating),
			});
		}

		if let Some(both) = both {
			grouped.push(GroupedRating::solo(both, GroupedRater::Both));
		}

		if let (Some(sam), None) = (sam, katie) {
			grouped.push(GroupedRating::solo(sam, GroupedRater::Sam));
		}
		if let (None, Some(katie)) = (sam, katie) {
			grouped.push(GroupedRating::solo(katie, GroupedRater::Katie));
		}
	}

	grouped
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::utils::fixtures::rating;

	#[test]
	fn sam_and_katie_pair_becomes_one_split_row() {
		let ratings = vec![
			rating("BarA", "LocA", "", Rater::Sam, 4, "2024-01-01"),
			rating("BarA", "LocA", "", Rater::Katie, 2, "2024-01-01"),
		];

		let grouped = group_ratings(&ratings);

		assert_eq!(grouped.len(), 1);
		let row = &grouped[0];
		assert_eq!(row.rater, GroupedRater::Split);
		assert_eq!(row.sam_rating, Some(4));
		assert_eq!(row.katie_rating, Some(2));
		assert_eq!(row.sam_id, Some(ratings[0].rating_id));
		assert_eq!(row.katie_id, Some(ratings[1].rating_id));
		assert_eq!(row.id, ratings[0].rating_id);
	}

	#[test]
	fn attribution_does_not_depend_on_input_order() {
		let ratings = vec![
			rating("BarA", "LocA", "", Rater::Katie, 2, "2024-01-01"),
			rating("BarA", "LocA", "", Rater::Sam, 4, "2024-01-01"),
		];

		let grouped = group_ratings(&ratings);

		assert_eq!(grouped.len(), 1);
		assert_eq!(grouped[0].sam_rating, Some(4));
		assert_eq!(grouped[0].katie_rating, Some(2));
	}

	#[test]
	fn both_record_emits_both_row() {
		let ratings = vec![rating("BarA", "LocA", "", Rater::Both, 5, "2024-01-01")];

		let grouped = group_ratings(&ratings);

		assert_eq!(grouped.len(), 1);
		assert_eq!(grouped[0].rater, GroupedRater::Both);
		assert_eq!(grouped[0].rating, Some(5));
		assert_eq!(grouped[0].sam_id, None);
	}

	#[test]
	fn solo_records_stay_solo() {
		let ratings = vec![
			rating("BarA", "LocA", "", Rater::Sam, 3, "2024-01-01"),
			rating("BarB", "LocB", "", Rater::Katie, 4, "2024-01-02"),
		];

		let grouped = group_ratings(&ratings);

		assert_eq!(grouped.len(), 2);
		assert_eq!(grouped[0].rater, GroupedRater::Sam);
		assert_eq!(grouped[1].rater, GroupedRater::Katie);
	}

	#[test]
	fn bucket_with_pair_and_both_emits_two_rows() {
		let ratings = vec![
			rating("BarA", "LocA", "", Rater::Sam, 4, "2024-01-01"),
			rating("BarA", "LocA", "", Rater::Katie, 2, "2024-01-01"),
			rating("BarA", "LocA", "", Rater::Both, 5, "2024-02-01"),
		];

		let grouped = group_ratings(&ratings);

		assert_eq!(grouped.len(), 2);
		assert_eq!(grouped[0].rater, GroupedRater::Split);
		assert_eq!(grouped[1].rater, GroupedRater::Both);
	}

	#[test]
	fn different_notes_do_not_merge() {
		let ratings = vec![
			rating("BarA", "LocA", "extra foam", Rater::Sam, 4, "2024-01-01"),
			rating("BarA", "LocA", "double shot", Rater::Katie, 2, "2024-01-01"),
		];

		let grouped = group_ratings(&ratings);

		assert_eq!(grouped.len(), 2);
		assert_eq!(grouped[0].rater, GroupedRater::Sam);
		assert_eq!(grouped[1].rater, GroupedRater::Katie);
	}

	#[test]
	fn duplicate_tag_first_record_wins() {
		let ratings = vec![
			rating("BarA", "LocA", "", Rater::Sam, 5, "2024-01-02"),
			rating("BarA", "LocA", "", Rater::Sam, 1, "2024-01-01"),
		];

		let grouped = group_ratings(&ratings);

		assert_eq!(grouped.len(), 1);
		assert_eq!(grouped[0].rating, Some(5));
		assert_eq!(grouped[0].id, ratings[0].rating_id);
	}

	#[test]
	fn grouping_is_idempotent() {
		let ratings = vec![
			rating("BarA", "LocA", "", Rater::Sam, 4, "2024-01-01"),
			rating("BarA", "LocA", "", Rater::Katie, 2, "2024-01-01"),
			rating("BarB", "LocB", "", Rater::Both, 3, "2024-01-03"),
		];

		assert_eq!(group_ratings(&ratings), group_ratings(&ratings));
	}

	#[test]
	fn deleting_half_a_pair_leaves_a_solo_row() {
		let mut ratings = vec![
			rating("BarA", "LocA", "", Rater::Sam, 4, "2024-01-01"),
			rating("BarA", "LocA", "", Rater::Katie, 2, "2024-01-01"),
		];

		ratings.remove(1);
		let grouped = group_ratings(&ratings);

		assert_eq!(grouped.len(), 1);
		assert_eq!(grouped[0].rater, GroupedRater::Sam);
		assert_eq!(grouped[0].rating, Some(4));
	}
}
