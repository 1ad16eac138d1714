mod api;
mod cache;
mod config;
mod controllers;
mod models;
mod notifier;
mod utils;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use config::Config;
use dotenv::dotenv;
use sqlx::{postgres::PgPoolOptions, Pool, Postgres};
use tokio::sync::broadcast::error::RecvError;

use crate::cache::RatingsCache;
use crate::models::Rating;
use crate::notifier::ChangeNotifier;

pub struct AppState {
	db: Pool<Postgres>,
	env: Config,
	cache: RatingsCache,
	notifier: ChangeNotifier,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
	if std::env::var_os("RUST_LOG").is_none() {
		std::env::set_var("RUST_LOG", "actix_web=info");
	}
	dotenv().ok();
	env_logger::init();

	let config = Config::init();

	let pool = match PgPoolOptions::new()
		.max_connections(10)
		.connect(&config.database_url)
		.await
	{
		Ok(pool) => {
			log::info!("connected to the database");
			pool
		}
		Err(err) => {
			log::error!("failed to connect to the database: {:?}", err);
			std::process::exit(1);
		}
	};

	let cache = RatingsCache::new(&config.cache_path);
	let notifier = ChangeNotifier::new(16);

	// every change signal triggers a full reload into the cache mirror;
	// no incremental merge, a lagged receiver just waits for the next one
	{
		let db = pool.clone();
		let cache = cache.clone();
		let mut rx = notifier.subscribe();
		tokio::spawn(async move {
			loop {
				match rx.recv().await {
					Ok(()) | Err(RecvError::Lagged(_)) => match Rating::list(&db).await {
						Ok(ratings) => cache.store(&ratings),
						Err(err) => log::warn!("cache refresh failed: {}", err),
					},
					Err(RecvError::Closed) => break,
				}
			}
		});
	}

	log::info!("server starting on {}:{}", config.host, config.port);

	let bind_addr = (config.host.clone(), config.port);
	let photo_dir = config.photo_dir.clone();

	HttpServer::new(move || {
		App::new()
			.app_data(web::Data::new(AppState {
				db: pool.clone(),
				env: config.clone(),
				cache: cache.clone(),
				notifier: notifier.clone(),
			}))
			// photo uploads come in as a raw body, slightly above the 5MB cap
			.app_data(web::PayloadConfig::new(6 * 1024 * 1024))
			.configure(controllers::config)
			.service(Files::new("/uploads", photo_dir.clone()))
			.wrap(Cors::permissive())
			.wrap(Logger::default())
	})
	.bind(bind_addr)?
	.run()
	.await
}
