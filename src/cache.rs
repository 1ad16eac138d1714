use std::fs;
use std::path::PathBuf;

use crate::models::Rating;

/// Best-effort file mirror of the last successfully fetched rating list.
/// Written on every good fetch (last write wins), read back only when the
/// row store is unreachable. Any read or write problem degrades to "no
/// cache" rather than an error.
#[derive(Clone)]
pub struct RatingsCache {
	path: PathBuf,
}

impl RatingsCache {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn store(&self, ratings: &[Rating]) {
		let json = match serde_json::to_vec(ratings) {
			Ok(json) => json,
			Err(err) => {
				log::warn!("failed to serialize ratings cache: {}", err);
				return;
			}
		};

		if let Some(dir) = self.path.parent() {
			let _ = fs::create_dir_all(dir);
		}
		if let Err(err) = fs::write(&self.path, json) {
			log::warn!("failed to write ratings cache: {}", err);
		}
	}

	pub fn load(&self) -> Option<Vec<Rating>> {
		let bytes = fs::read(&self.path).ok()?;
		serde_json::from_slice(&bytes).ok()
	}
}
