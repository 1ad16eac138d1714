use crate::{models::PhotoQuery, AppState};
use actix_web::{delete, post, web, HttpResponse, Responder};
use serde_json::json;
use std::fs;
use std::path::Path;

/// Callers re-encode to a bounded width before upload; this is the hard
/// backstop on the raw payload.
const MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

#[post("/photo")]
pub async fn upload_photo_handler(body: web::Bytes, data: web::Data<AppState>) -> impl Responder {
	if body.is_empty() {
		return HttpResponse::BadRequest()
			.json(json!({"status": "error", "message": "Photo payload is empty"}));
	}
	if body.len() > MAX_PHOTO_BYTES {
		return HttpResponse::BadRequest()
			.json(json!({"status": "error", "message": "Photo must be 5MB or smaller"}));
	}

	let file_name = format!("{}.jpg", uuid::Uuid::new_v4());
	let dir = Path::new(&data.env.photo_dir);

	if let Err(err) = fs::create_dir_all(dir) {
		log::error!("failed to create photo dir: {}", err);
		return HttpResponse::InternalServerError()
			.json(json!({"status": "error", "message": "Failed to store photo"}));
	}
	if let Err(err) = fs::write(dir.join(&file_name), &body) {
		log::error!("failed to write photo {}: {}", file_name, err);
		return HttpResponse::InternalServerError()
			.json(json!({"status": "error", "message": "Failed to store photo"}));
	}

	HttpResponse::Ok().json(json!({
		"status": "success",
		"data": json!({ "url": format!("/uploads/{}", file_name) })
	}))
}

#[delete("/photo")]
pub async fn delete_photo_handler(
	opts: web::Query<PhotoQuery>,
	data: web::Data<AppState>,
) -> impl Responder {
	// only the final url segment is honored, never a path
	let file_name = opts.url.rsplit('/').next().unwrap_or_default();
	if file_name.is_empty() || file_name.contains("..") || file_name.contains('\\') {
		return HttpResponse::BadRequest()
			.json(json!({"status": "error", "message": "Invalid photo url"}));
	}

	let path = Path::new(&data.env.photo_dir).join(file_name);
	if let Err(err) = fs::remove_file(&path) {
		// a missing file is already the desired state
		log::warn!("failed to delete photo {}: {}", file_name, err);
	}

	HttpResponse::Ok().json(json!({"status": "success"}))
}
