pub mod filter_rating_record;
pub mod find_partner;
pub mod group_ratings;
pub mod save_plan;
pub mod sort_ratings;

#[cfg(test)]
pub mod fixtures;

pub use self::filter_rating_record::filter_rating_record;
pub use self::find_partner::find_partner;
pub use self::group_ratings::group_ratings;
pub use self::save_plan::{plan_create, plan_update, validate_form, SavePlan};
pub use self::sort_ratings::{effective_score, filter_ratings, query_ratings, sort_grouped};
