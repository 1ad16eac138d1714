#[derive(Debug, Clone)]
pub struct Config {
	pub database_url: String,
	pub host: String,
	pub port: u16,
	pub photo_dir: String,
	pub cache_path: String,
}

impl Config {
	pub fn init() -> Config {
		let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
		let host = std::env::var("HOST").unwrap_or_else(|_| String::from("127.0.0.1"));
		let port = std::env::var("PORT")
			.ok()
			.and_then(|port| port.parse().ok())
			.unwrap_or(8000);
		let photo_dir = std::env::var("PHOTO_DIR").unwrap_or_else(|_| String::from("uploads"));
		let cache_path =
			std::env::var("CACHE_PATH").unwrap_or_else(|_| String::from("ratings-cache.json"));

		Config {
			database_url,
			host,
			port,
			photo_dir,
			cache_path,
		}
	}
}
