use crate::models::{GroupedRater, GroupedRating, Rater, Rating, ReviewerFilter, SortOrder};
use crate::utils::group_ratings;

/// Exact-tag reviewer filter over the raw records, applied before grouping.
pub fn filter_ratings(ratings: &[Rating], filter: ReviewerFilter) -> Vec<Rating> {
	ratings
		.iter()
		.filter(|r| match filter {
			ReviewerFilter::All => true,
			ReviewerFilter::Sam => r.rater == Rater::Sam,
			ReviewerFilter::Katie => r.rater == Rater::Katie,
			ReviewerFilter::Both => r.rater == Rater::Both,
		})
		.cloned()
		.collect()
}

/// Ranking value of a display row: the mean of both scores for Split
/// rows, the single score otherwise.
pub fn effective_score(rating: &GroupedRating) -> f64 {
	match rating.rater {
		GroupedRater::Split => {
			(rating.sam_rating.unwrap_or(0) + rating.katie_rating.unwrap_or(0)) as f64 / 2.0
		}
		_ => rating.rating.unwrap_or(0) as f64,
	}
}

/// Applies one sort option to grouped rows. The Sam/Katie/Both options
/// are pass-through filters on the row discriminant, not comparators;
/// they leave the grouping order untouched.
pub fn sort_grouped(mut ratings: Vec<GroupedRating>, sort: SortOrder) -> Vec<GroupedRating> {
	match sort {
		SortOrder::Date => ratings.sort_by(|a, b| b.date_visited.cmp(&a.date_visited)),
		SortOrder::Highest => ratings.sort_by(|a, b| {
			effective_score(b)
				.total_cmp(&effective_score(a))
				.then(b.date_visited.cmp(&a.date_visited))
		}),
		SortOrder::Lowest => ratings.sort_by(|a, b| {
			effective_score(a)
				.total_cmp(&effective_score(b))
				.then(b.date_visited.cmp(&a.date_visited))
		}),
		SortOrder::Sam => ratings.retain(|r| r.rater == GroupedRater::Sam),
		SortOrder::Katie => ratings.retain(|r| r.rater == GroupedRater::Katie),
		SortOrder::Both => ratings.retain(|r| r.rater == GroupedRater::Both),
	}
	ratings
}

/// The full read pipeline: filter raw records, group, sort. Deterministic
/// and idempotent for a fixed input and parameters.
pub fn query_ratings(
	ratings: &[Rating],
	filter: ReviewerFilter,
	sort: SortOrder,
) -> Vec<GroupedRating> {
	let filtered = filter_ratings(ratings, filter);
	sort_grouped(group_ratings(&filtered), sort)
}
