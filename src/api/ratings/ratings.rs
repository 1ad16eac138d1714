use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
	api::ApiError,
	models::{Rating, RatingRow, RatingStats, SaveRating, StatsRow},
	utils::{filter_rating_record, SavePlan},
};

impl SaveRating {
	// empty notes are stored as NULL, matching the table default
	fn notes_param(&self) -> Option<&str> {
		if self.tasting_notes.is_empty() {
			None
		} else {
			Some(self.tasting_notes.as_str())
		}
	}
}

impl Rating {
	/// Full list, newest-created-first.
	pub async fn list(db: &Pool<Postgres>) -> Result<Vec<Rating>, ApiError> {
		let rows =
			sqlx::query_as::<_, RatingRow>("SELECT * FROM ratings ORDER BY created_at DESC")
				.fetch_all(db)
				.await?;

		Ok(rows.iter().map(filter_rating_record).collect())
	}

	pub async fn get(db: &Pool<Postgres>, rating_id: &Uuid) -> Result<Rating, ApiError> {
		let row = sqlx::query_as::<_, RatingRow>("SELECT * FROM ratings WHERE rating_id = $1")
			.bind(rating_id)
			.fetch_optional(db)
			.await?
			.ok_or(ApiError::NotFound(*rating_id))?;

		Ok(filter_rating_record(&row))
	}

	pub async fn insert(db: &Pool<Postgres>, save: &SaveRating) -> Result<Rating, ApiError> {
		let row = sqlx::query_as::<_, RatingRow>(
			"INSERT INTO ratings (bar_name, location, date_visited, rating, tasting_notes, \
			 rater, price, photo_url, photo_position_x, photo_position_y) \
			 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING *",
		)
		.bind(&save.bar_name)
		.bind(&save.location)
		.bind(save.date_visited)
		.bind(save.rating)
		.bind(save.notes_param())
		.bind(save.rater.as_str())
		.bind(save.price)
		.bind(&save.photo_url)
		.bind(save.photo_position_x)
		.bind(save.photo_position_y)
		.fetch_one(db)
		.await?;

		Ok(filter_rating_record(&row))
	}

	pub async fn update(
		db: &Pool<Postgres>,
		rating_id: &Uuid,
		save: &SaveRating,
	) -> Result<Rating, ApiError> {
		let row = sqlx::query_as::<_, RatingRow>(
			"UPDATE ratings SET bar_name = $1, location = $2, date_visited = $3, rating = $4, \
			 tasting_notes = $5, rater = $6, price = $7, photo_url = $8, \
			 photo_position_x = $9, photo_position_y = $10 \
			 WHERE rating_id = $11 RETURNING *",
		)
		.bind(&save.bar_name)
		.bind(&save.location)
		.bind(save.date_visited)
		.bind(save.rating)
		.bind(save.notes_param())
		.bind(save.rater.as_str())
		.bind(save.price)
		.bind(&save.photo_url)
		.bind(save.photo_position_x)
		.bind(save.photo_position_y)
		.bind(rating_id)
		.fetch_optional(db)
		.await?
		.ok_or(ApiError::NotFound(*rating_id))?;

		Ok(filter_rating_record(&row))
	}

	pub async fn delete(db: &Pool<Postgres>, rating_id: &Uuid) -> Result<(), ApiError> {
		let result = sqlx::query("DELETE FROM ratings WHERE rating_id = $1")
			.bind(rating_id)
			.execute(db)
			.await?;

		if result.rows_affected() == 0 {
			return Err(ApiError::NotFound(*rating_id));
		}

		Ok(())
	}
}

impl RatingStats {
	pub async fn fetch(db: &Pool<Postgres>) -> Result<Self, ApiError> {
		let row = sqlx::query_as::<_, StatsRow>(
			"SELECT count(*) AS count, avg(rating::float8) AS average FROM ratings",
		)
		.fetch_one(db)
		.await?;

		Ok(RatingStats {
			average_rating: row.average.map(|a| (a * 10.0).round() / 10.0).unwrap_or(0.0),
			total_martinis: row.count.unwrap_or(0),
		})
	}
}

/// Records written by one executed plan, in call order.
#[derive(Debug)]
pub enum SaveOutcome {
	One(Rating),
	Two(Rating, Rating),
}

impl SaveOutcome {
	pub fn into_ratings(self) -> Vec<Rating> {
		match self {
			SaveOutcome::One(rating) => vec![rating],
			SaveOutcome::Two(first, second) => vec![first, second],
		}
	}
}

/// Runs the one or two gateway calls a plan names, strictly in sequence.
/// There is no transaction across the pair: a failure on the second call
/// surfaces as `SplitIncomplete` naming the record that did persist.
pub async fn execute_plan(db: &Pool<Postgres>, plan: SavePlan) -> Result<SaveOutcome, ApiError> {
	match plan {
		SavePlan::Insert(save) => Ok(SaveOutcome::One(Rating::insert(db, &save).await?)),
		SavePlan::InsertPair { sam, katie } => {
			let first = Rating::insert(db, &sam).await?;
			let second = match Rating::insert(db, &katie).await {
				Ok(rating) => rating,
				Err(err) => return Err(ApiError::split_incomplete(first.rating_id, err)),
			};
			Ok(SaveOutcome::Two(first, second))
		}
		SavePlan::Update { id, save } => {
			Ok(SaveOutcome::One(Rating::update(db, &id, &save).await?))
		}
		SavePlan::UpdatePair { sam, katie } => {
			let first = Rating::update(db, &sam.0, &sam.1).await?;
			let second = match Rating::update(db, &katie.0, &katie.1).await {
				Ok(rating) => rating,
				Err(err) => return Err(ApiError::split_incomplete(first.rating_id, err)),
			};
			Ok(SaveOutcome::Two(first, second))
		}
		SavePlan::PromoteToSplit { id, update, insert } => {
			let first = Rating::update(db, &id, &update).await?;
			let second = match Rating::insert(db, &insert).await {
				Ok(rating) => rating,
				Err(err) => return Err(ApiError::split_incomplete(first.rating_id, err)),
			};
			Ok(SaveOutcome::Two(first, second))
		}
	}
}
