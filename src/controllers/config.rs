use actix_web::web;

use crate::controllers::photos::delete_photo_handler;
use crate::controllers::photos::upload_photo_handler;
use crate::controllers::ratings::create_rating_handler;
use crate::controllers::ratings::delete_rating_handler;
use crate::controllers::ratings::get_rating_handler;
use crate::controllers::ratings::get_ratings_handler;
use crate::controllers::ratings::update_rating_handler;
use crate::controllers::stats::get_stats_handler;

pub fn config(conf: &mut web::ServiceConfig) {
	let scope = web::scope("/api")
		.service(get_ratings_handler)
		.service(get_rating_handler)
		.service(create_rating_handler)
		.service(update_rating_handler)
		.service(delete_rating_handler)
		.service(get_stats_handler)
		.service(upload_photo_handler)
		.service(delete_photo_handler);

	conf.service(scope);
}
