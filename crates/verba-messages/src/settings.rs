//! Catalog settings
//!
//! Settings can be built in code, parsed from TOML or read from environment
//! variables.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::formatter::{DEFAULT_PLACEHOLDER_FORMAT, KEY_MARKER};

/// Errors raised while loading or validating settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),
	#[error("Placeholder format must contain {{key}}: {0}")]
	InvalidPlaceholderFormat(String),
}

/// Locale, fallback and placeholder configuration for a catalog
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagesSettings {
	/// Locale used when a call does not name one
	#[serde(default = "default_locale")]
	pub locale: String,

	/// Secondary locale consulted on a miss
	#[serde(default)]
	pub fallback_locale: Option<String>,

	/// Placeholder token template
	#[serde(default = "default_placeholder_format")]
	pub placeholder_format: String,

	/// Root directory of translation files, for file-backed loading
	#[serde(default)]
	pub lang_path: Option<PathBuf>,
}

fn default_locale() -> String {
	"en".to_string()
}

fn default_placeholder_format() -> String {
	DEFAULT_PLACEHOLDER_FORMAT.to_string()
}

impl Default for MessagesSettings {
	fn default() -> Self {
		Self {
			locale: default_locale(),
			fallback_locale: None,
			placeholder_format: default_placeholder_format(),
			lang_path: None,
		}
	}
}

impl MessagesSettings {
	/// Create settings with defaults
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse settings from a TOML document
	///
	/// # Example
	/// ```
	/// use verba_messages::MessagesSettings;
	///
	/// let settings = MessagesSettings::from_toml_str(
	/// 	r#"
	/// locale = "ru"
	/// fallback_locale = "en"
	/// "#,
	/// )
	/// .unwrap();
	///
	/// assert_eq!(settings.locale, "ru");
	/// assert_eq!(settings.fallback_locale.as_deref(), Some("en"));
	/// assert_eq!(settings.placeholder_format, ":{key}");
	/// ```
	pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
		Ok(toml::from_str(content)?)
	}

	/// Load settings from environment variables
	///
	/// Reads `VERBA_LOCALE`, `VERBA_FALLBACK_LOCALE`,
	/// `VERBA_PLACEHOLDER_FORMAT` and `VERBA_LANG_PATH`; unset variables keep
	/// their defaults and an empty fallback clears it.
	pub fn from_env() -> Self {
		let mut settings = Self::default();

		if let Ok(locale) = std::env::var("VERBA_LOCALE") {
			settings.locale = locale;
		}

		if let Ok(fallback) = std::env::var("VERBA_FALLBACK_LOCALE") {
			settings.fallback_locale = Some(fallback).filter(|value| !value.is_empty());
		}

		if let Ok(format) = std::env::var("VERBA_PLACEHOLDER_FORMAT") {
			settings.placeholder_format = format;
		}

		if let Ok(path) = std::env::var("VERBA_LANG_PATH") {
			settings.lang_path = Some(PathBuf::from(path));
		}

		settings
	}

	/// Builder: set the fallback locale
	pub fn with_fallback(mut self, locale: impl Into<String>) -> Self {
		self.fallback_locale = Some(locale.into());
		self
	}

	/// Builder: set the translation file root
	pub fn with_lang_path(mut self, path: impl Into<PathBuf>) -> Self {
		self.lang_path = Some(path.into());
		self
	}

	/// Validate settings
	pub fn validate(&self) -> Result<(), SettingsError> {
		if !self.placeholder_format.contains(KEY_MARKER) {
			return Err(SettingsError::InvalidPlaceholderFormat(
				self.placeholder_format.clone(),
			));
		}

		Ok(())
	}
}
