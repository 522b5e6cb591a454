//! File-backed catalog loader

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use serde_json::Value;
use verba_messages::{
	CatalogLoader, LoadingCatalog, MessageCatalog, MessageValue, MessagesSettings, tree_from_json,
};

use crate::error::LoadError;

/// A catalog populated from JSON files on demand.
pub type FileMessages = LoadingCatalog<FileLoader>;

/// Reads `<root>/<locale>.json` and `<root>/<locale>/<namespace>.json`.
///
/// Each file is read at most once. A missing file counts as loaded and empty;
/// a file that fails to parse is reported every time it is requested.
#[derive(Debug, Clone)]
pub struct FileLoader {
	path: PathBuf,
	locales: HashSet<String>,
	namespaces: HashSet<(String, String)>,
}

impl FileLoader {
	/// Create a loader rooted at `path`.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			locales: HashSet::new(),
			namespaces: HashSet::new(),
		}
	}

	/// Create a loader from the `lang_path` setting, if one is configured.
	pub fn from_settings(settings: &MessagesSettings) -> Option<Self> {
		settings.lang_path.clone().map(Self::new)
	}

	/// Root directory of the translation files.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Whether the locale file (`namespace == None`) or a namespace file has
	/// been loaded.
	pub fn is_loaded(&self, locale: &str, namespace: Option<&str>) -> bool {
		match namespace {
			None => self.locales.contains(locale),
			Some(namespace) => self
				.namespaces
				.contains(&(locale.to_string(), namespace.to_string())),
		}
	}

	/// Pair this loader with `catalog`.
	pub fn into_catalog(self, catalog: MessageCatalog) -> FileMessages {
		LoadingCatalog::new(catalog, self)
	}

	/// `None` when `locale` cannot name a file directly under the root.
	fn locale_file(&self, locale: &str) -> Option<PathBuf> {
		is_file_stem(locale).then(|| self.path.join(format!("{locale}.json")))
	}

	/// `None` when either part cannot name a file inside the locale directory.
	fn namespace_file(&self, locale: &str, namespace: &str) -> Option<PathBuf> {
		(is_file_stem(locale) && is_file_stem(namespace))
			.then(|| self.path.join(locale).join(format!("{namespace}.json")))
	}
}

/// Whether `name` is a single plain path component: not empty, not `.` or
/// `..`, without separators, drive prefixes or a root.
fn is_file_stem(name: &str) -> bool {
	if name.contains(['/', '\\']) {
		return false;
	}

	let mut components = Path::new(name).components();
	matches!(
		(components.next(), components.next()),
		(Some(Component::Normal(_)), None)
	)
}

/// Read and decode a JSON file. `Ok(None)` when the file does not exist.
fn read_json(path: &Path) -> Result<Option<Value>, LoadError> {
	let content = match fs::read_to_string(path) {
		Ok(content) => content,
		Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
		Err(source) => {
			return Err(LoadError::Io {
				path: path.to_path_buf(),
				source,
			});
		}
	};

	tracing::debug!(path = %path.display(), "reading translation file");
	serde_json::from_str(&content)
		.map(Some)
		.map_err(|source| LoadError::InvalidJson {
			path: path.to_path_buf(),
			source,
		})
}

impl CatalogLoader for FileLoader {
	type Error = LoadError;

	fn load_locale(&mut self, catalog: &mut MessageCatalog, locale: &str) -> Result<(), LoadError> {
		if self.locales.contains(locale) {
			return Ok(());
		}

		match self.locale_file(locale) {
			Some(file) => {
				if let Some(document) = read_json(&file)? {
					catalog.merge_into_locale(locale, tree_from_json(document));
				}
			}
			None => tracing::debug!(locale, "locale does not name a translation file"),
		}

		self.locales.insert(locale.to_string());
		Ok(())
	}

	fn load_namespace(
		&mut self,
		catalog: &mut MessageCatalog,
		locale: &str,
		namespace: &str,
	) -> Result<(), LoadError> {
		let loaded = (locale.to_string(), namespace.to_string());
		if self.namespaces.contains(&loaded) {
			return Ok(());
		}

		let Some(file) = self.namespace_file(locale, namespace) else {
			tracing::debug!(locale, namespace, "namespace does not name a translation file");
			self.namespaces.insert(loaded);
			return Ok(());
		};

		if let Some(document) = read_json(&file)? {
			let Some(MessageValue::Tree(messages)) = MessageValue::from_json(document) else {
				return Err(LoadError::InvalidStructure { path: file });
			};
			catalog.add_messages(locale, namespace, messages);
		}

		self.namespaces.insert(loaded);
		Ok(())
	}
}
