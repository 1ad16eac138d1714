use crate::{
	api::{execute_plan, ApiError},
	models::{Rating, RatingQueryOptions, ReviewerFilter, SaveRatingForm, SortOrder},
	utils::{find_partner, plan_create, plan_update, query_ratings, validate_form},
	AppState,
};
use actix_web::{
	delete, get, post, put,
	web::{self, Path},
	HttpResponse, Responder,
};
use serde_json::json;
use uuid::Uuid;

#[get("/ratings")]
pub async fn get_ratings_handler(
	opts: web::Query<RatingQueryOptions>,
	data: web::Data<AppState>,
) -> impl Responder {
	let filter = opts.filter.unwrap_or(ReviewerFilter::All);
	let sort = opts.sort.unwrap_or(SortOrder::Date);

	match Rating::list(&data.db).await {
		Ok(ratings) => {
			data.cache.store(&ratings);
			let grouped = query_ratings(&ratings, filter, sort);

			HttpResponse::Ok().json(json!({
				"status": "success",
				"data": json!({
					"ratings": &grouped,
					"ratings_count": &grouped.len()
				})
			}))
		}
		Err(err) => {
			log::error!("failed to load ratings: {}", err);

			// stale reads beat no reads; the client shows a notice banner
			match data.cache.load() {
				Some(cached) => {
					let grouped = query_ratings(&cached, filter, sort);

					HttpResponse::Ok().json(json!({
						"status": "success",
						"stale": true,
						"message": "Failed to load ratings. Using cached data.",
						"data": json!({
							"ratings": &grouped,
							"ratings_count": &grouped.len()
						})
					}))
				}
				None => HttpResponse::InternalServerError()
					.json(json!({"status": "error", "message": "Failed to load ratings"})),
			}
		}
	}
}

#[get("/rating/{id}")]
pub async fn get_rating_handler(
	path: Path<Uuid>,
	data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
	let rating_id = path.into_inner();

	let rating = Rating::get(&data.db, &rating_id).await?;
	let ratings = Rating::list(&data.db).await?;
	let partner = find_partner(&ratings, &rating).cloned();

	Ok(HttpResponse::Ok().json(json!({
		"status": "success",
		"data": json!({
			"rating": &rating,
			"partner": &partner
		})
	})))
}

#[post("/rating")]
pub async fn create_rating_handler(
	body: web::Json<SaveRatingForm>,
	data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
	let form = body.into_inner();
	validate_form(&form).map_err(ApiError::Validation)?;

	let outcome = execute_plan(&data.db, plan_create(&form)).await;
	// a half-finished split write did change the store, so still signal
	if matches!(&outcome, Ok(_) | Err(ApiError::SplitIncomplete { .. })) {
		data.notifier.notify();
	}
	let ratings = outcome?.into_ratings();

	Ok(HttpResponse::Ok().json(json!({
		"status": "success",
		"data": json!({ "ratings": &ratings })
	})))
}

#[put("/rating/{id}")]
pub async fn update_rating_handler(
	path: Path<Uuid>,
	body: web::Json<SaveRatingForm>,
	data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
	let rating_id = path.into_inner();
	let form = body.into_inner();
	validate_form(&form).map_err(ApiError::Validation)?;

	let existing = Rating::get(&data.db, &rating_id).await?;
	let ratings = Rating::list(&data.db).await?;
	let partner = find_partner(&ratings, &existing);

	let outcome = execute_plan(&data.db, plan_update(&existing, partner, &form)).await;
	if matches!(&outcome, Ok(_) | Err(ApiError::SplitIncomplete { .. })) {
		data.notifier.notify();
	}
	let ratings = outcome?.into_ratings();

	Ok(HttpResponse::Ok().json(json!({
		"status": "success",
		"data": json!({ "ratings": &ratings })
	})))
}

#[delete("/rating/{id}")]
pub async fn delete_rating_handler(
	path: Path<Uuid>,
	data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
	let rating_id = path.into_inner();

	// the partner of a split pair, if any, stays untouched
	Rating::delete(&data.db, &rating_id).await?;
	data.notifier.notify();

	Ok(HttpResponse::Ok().json(json!({
		"status": "success",
		"data": json!({ "rating_id": &rating_id })
	})))
}
