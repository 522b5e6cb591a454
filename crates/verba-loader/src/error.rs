//! Loader errors

use std::path::PathBuf;

/// Errors raised while reading translation files
///
/// A missing file is not an error: the locale or namespace is simply empty.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
	#[error("Failed to read translation file {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("Translation file {} contains invalid JSON: {source}", path.display())]
	InvalidJson {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
	#[error("Translation file {} must contain an object or an array", path.display())]
	InvalidStructure { path: PathBuf },
}

impl LoadError {
	/// The file that failed to load.
	pub fn path(&self) -> &std::path::Path {
		match self {
			Self::Io { path, .. } | Self::InvalidJson { path, .. } | Self::InvalidStructure { path } => {
				path
			}
		}
	}
}
