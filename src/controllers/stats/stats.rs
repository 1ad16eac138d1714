use crate::{api::ApiError, models::RatingStats, AppState};
use actix_web::{get, web, HttpResponse};
use serde_json::json;

#[get("/stats")]
pub async fn get_stats_handler(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
	let stats = RatingStats::fetch(&data.db).await?;

	Ok(HttpResponse::Ok().json(json!({
		"status": "success",
		"data": json!({ "stats": &stats })
	})))
}
