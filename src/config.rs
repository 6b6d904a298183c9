//! Where the backend lives.

use log::{info, warn};
use url::Url;

use crate::error::AppResult;

const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

/// Backend location, resolved once by the app shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
	base: Url,
}

impl ApiConfig {
	/// Build from an explicit base such as `https://example.com/`.
	pub fn new(base: &str) -> AppResult<Self> {
		Ok(Self {
			base: Url::parse(base)?,
		})
	}

	/// `PLANET_API_BASE` at build time, then the page origin, then the local backend.
	pub fn load() -> Self {
		if let Some(base) = option_env!("PLANET_API_BASE") {
			match Self::new(base) {
				Ok(config) => return config,
				Err(e) => warn!("Invalid PLANET_API_BASE value {base:?}: {e}"),
			}
		}

		if let Some(origin) = page_origin() {
			if let Ok(config) = Self::new(&origin) {
				info!("PLANET_API_BASE not set, using page origin: {origin}");
				return config;
			}
		}

		info!("PLANET_API_BASE not set, using default: {DEFAULT_API_BASE}");
		Self {
			base: Url::parse(DEFAULT_API_BASE).expect("default API base is a valid URL"),
		}
	}

	/// Base every endpoint is joined onto.
	pub fn base(&self) -> &Url {
		&self.base
	}

	/// Resolve an absolute API path (e.g. `/api/register`) against the base.
	pub fn endpoint(&self, path: &str) -> AppResult<Url> {
		Ok(self.base.join(path)?)
	}
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
	web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
	None
}
