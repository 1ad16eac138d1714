use crate::models::{Rater, Rating};

/// Resolves the other half of a split pair: the record with the opposite
/// Sam/Katie tag whose bar name, location and tasting notes all match
/// exactly. The same strict key the grouping engine uses, applied in both
/// the edit flow and the detail view. `Both` records have no partner.
pub fn find_partner<'a>(ratings: &'a [Rating], rating: &Rating) -> Option<&'a Rating> {
	let wanted = rating.rater.opposite()?;

	ratings.iter().find(|r| {
		r.rating_id != rating.rating_id
			&& r.rater == wanted
			&& r.bar_name == rating.bar_name
			&& r.location == rating.location
			&& r.tasting_notes == rating.tasting_notes
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::utils::fixtures::rating;

	#[test]
	fn finds_the_opposite_tag_at_the_same_visit() {
		let ratings = vec![
			rating("BarA", "LocA", "", Rater::Sam, 4, "2024-01-01"),
			rating("BarA", "LocA", "", Rater::Katie, 2, "2024-01-01"),
		];

		let partner = find_partner(&ratings, &ratings[0]).unwrap();
		assert_eq!(partner.rating_id, ratings[1].rating_id);

		let partner = find_partner(&ratings, &ratings[1]).unwrap();
		assert_eq!(partner.rating_id, ratings[0].rating_id);
	}

	#[test]
	fn different_notes_are_not_partners() {
		let ratings = vec![
			rating("BarA", "LocA", "extra foam", Rater::Sam, 4, "2024-01-01"),
			rating("BarA", "LocA", "double shot", Rater::Katie, 2, "2024-01-01"),
		];

		assert!(find_partner(&ratings, &ratings[0]).is_none());
	}

	#[test]
	fn both_records_never_pair() {
		let ratings = vec![
			rating("BarA", "LocA", "", Rater::Both, 4, "2024-01-01"),
			rating("BarA", "LocA", "", Rater::Katie, 2, "2024-01-01"),
		];

		assert!(find_partner(&ratings, &ratings[0]).is_none());
	}

	#[test]
	fn same_tag_is_not_a_partner() {
		let ratings = vec![
			rating("BarA", "LocA", "", Rater::Sam, 4, "2024-01-01"),
			rating("BarA", "LocA", "", Rater::Sam, 2, "2024-01-01"),
		];

		assert!(find_partner(&ratings, &ratings[0]).is_none());
	}
}
