use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
	#[error("database error: {0}")]
	Database(#[from] sqlx::Error),
	#[error("{0}")]
	Validation(String),
	#[error("rating {0} not found")]
	NotFound(uuid::Uuid),
	/// A split write is a two-call sequence with no rollback. When the
	/// second call fails the first record stays persisted; the caller can
	/// retry the missing half or delete the orphan.
	#[error("split save incomplete: record {saved_id} was written, the second write failed: {source}")]
	SplitIncomplete {
		saved_id: uuid::Uuid,
		#[source]
		source: Box<ApiError>,
	},
}

impl ApiError {
	pub fn split_incomplete(saved_id: uuid::Uuid, source: ApiError) -> ApiError {
		ApiError::SplitIncomplete {
			saved_id,
			source: Box::new(source),
		}
	}
}

impl ResponseError for ApiError {
	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::Validation(_) => StatusCode::BAD_REQUEST,
			ApiError::NotFound(_) => StatusCode::NOT_FOUND,
			ApiError::Database(_) | ApiError::SplitIncomplete { .. } => {
				StatusCode::INTERNAL_SERVER_ERROR
			}
		}
	}

	fn error_response(&self) -> HttpResponse {
		let mut body = json!({"status": "error", "message": self.to_string()});
		if let ApiError::SplitIncomplete { saved_id, .. } = self {
			body["saved_id"] = json!(saved_id);
		}
		HttpResponse::build(self.status_code()).json(body)
	}
}
