//! On-demand catalog population
//!
//! A [`CatalogLoader`] fills a [`MessageCatalog`] from some backing store.
//! [`LoadingCatalog`] gives the loader a chance to populate the locale (and
//! the key's namespace) before every resolution, for both the requested
//! locale and the fallback.

use parking_lot::{Mutex, MutexGuard, RwLock, RwLockReadGuard};

use crate::Messages;
use crate::catalog::MessageCatalog;
use crate::formatter::Replacer;
use crate::replacements::Replacements;

/// Data source that populates a catalog lazily.
///
/// Implementations decide what "already loaded" means; they are called
/// before every lookup and should make repeated calls cheap. An unknown
/// locale or namespace is simply empty. Malformed persisted data must be
/// reported as an error rather than treated as empty.
pub trait CatalogLoader {
	type Error: std::error::Error + Send + Sync + 'static;

	/// Populate the root of `locale` (flat, namespace-less messages).
	fn load_locale(
		&mut self,
		catalog: &mut MessageCatalog,
		locale: &str,
	) -> Result<(), Self::Error>;

	/// Populate `locale.namespace`.
	fn load_namespace(
		&mut self,
		catalog: &mut MessageCatalog,
		locale: &str,
		namespace: &str,
	) -> Result<(), Self::Error>;
}

/// A catalog paired with a loader that is consulted before each lookup.
///
/// Resolution takes `&self`, so a loading catalog can be handed out as
/// `&dyn Messages`. Through that trait a loader failure renders the literal
/// key and is logged; the inherent `get`/`choice`/`has` return it instead.
///
/// # Example
/// ```
/// use std::convert::Infallible;
/// use serde_json::json;
/// use verba_messages::{CatalogLoader, LoadingCatalog, MessageCatalog, Replacements, tree_from_json};
///
/// struct Static;
///
/// impl CatalogLoader for Static {
/// 	type Error = Infallible;
///
/// 	fn load_locale(&mut self, _: &mut MessageCatalog, _: &str) -> Result<(), Infallible> {
/// 		Ok(())
/// 	}
///
/// 	fn load_namespace(
/// 		&mut self,
/// 		catalog: &mut MessageCatalog,
/// 		locale: &str,
/// 		namespace: &str,
/// 	) -> Result<(), Infallible> {
/// 		catalog.add_messages(locale, namespace, tree_from_json(json!({"hello": "Hello"})));
/// 		Ok(())
/// 	}
/// }
///
/// let messages = LoadingCatalog::new(MessageCatalog::new("en"), Static);
/// assert_eq!(messages.get("greetings.hello", &Replacements::new(), None).unwrap(), "Hello");
/// ```
#[derive(Debug)]
pub struct LoadingCatalog<L> {
	// Lock order: loader, then catalog.
	loader: Mutex<L>,
	catalog: RwLock<MessageCatalog>,
}

impl<L: CatalogLoader> LoadingCatalog<L> {
	pub fn new(catalog: MessageCatalog, loader: L) -> Self {
		Self {
			loader: Mutex::new(loader),
			catalog: RwLock::new(catalog),
		}
	}

	/// The underlying catalog with whatever has been loaded so far.
	pub fn catalog(&self) -> RwLockReadGuard<'_, MessageCatalog> {
		self.catalog.read()
	}

	pub fn catalog_mut(&mut self) -> &mut MessageCatalog {
		self.catalog.get_mut()
	}

	pub fn loader(&self) -> MutexGuard<'_, L> {
		self.loader.lock()
	}

	pub fn into_parts(self) -> (MessageCatalog, L) {
		(self.catalog.into_inner(), self.loader.into_inner())
	}

	pub fn set_locale(&mut self, locale: impl Into<String>) {
		self.catalog_mut().set_locale(locale);
	}

	pub fn locale(&self) -> String {
		self.catalog().locale().to_string()
	}

	pub fn set_fallback(&mut self, locale: Option<String>) {
		self.catalog_mut().set_fallback(locale);
	}

	pub fn fallback(&self) -> Option<String> {
		self.catalog().fallback().map(str::to_string)
	}

	pub fn set_placeholder_format(&mut self, format: impl Into<String>) {
		self.catalog_mut().set_placeholder_format(format);
	}

	pub fn placeholder_format(&self) -> String {
		self.catalog().placeholder_format().to_string()
	}

	pub fn set_placeholder_replacer(&mut self, replacer: Option<Replacer>) {
		self.catalog_mut().set_placeholder_replacer(replacer);
	}

	pub fn placeholder_replacer(&self) -> Option<Replacer> {
		self.catalog().placeholder_replacer().cloned()
	}

	/// Load what `key` needs, then resolve it like [`MessageCatalog::get`].
	pub fn get(
		&self,
		key: &str,
		replace: &Replacements,
		locale: Option<&str>,
	) -> Result<String, L::Error> {
		let locale = self.prepare(key, locale)?;
		Ok(self.catalog().get(key, replace, Some(locale.as_str())))
	}

	/// Load what `key` needs, then resolve it like [`MessageCatalog::choice`].
	pub fn choice(
		&self,
		key: &str,
		number: i64,
		replace: &Replacements,
		locale: Option<&str>,
	) -> Result<String, L::Error> {
		let locale = self.prepare(key, locale)?;
		Ok(self
			.catalog()
			.choice(key, number, replace, Some(locale.as_str())))
	}

	/// Load what `key` needs, then check it like [`MessageCatalog::has`].
	pub fn has(&self, key: &str, locale: Option<&str>) -> Result<bool, L::Error> {
		let locale = self.prepare(key, locale)?;
		Ok(self.catalog().has(key, Some(locale.as_str())))
	}

	/// Ensure the requested locale and, when distinct, the fallback are
	/// populated for `key`. Returns the effective locale.
	fn prepare(&self, key: &str, locale: Option<&str>) -> Result<String, L::Error> {
		let mut loader = self.loader.lock();
		let mut catalog = self.catalog.write();

		let locale = locale.unwrap_or(catalog.locale()).to_string();
		ensure_loaded(&mut *loader, &mut catalog, &locale, key)?;

		if let Some(fallback) = catalog.fallback().map(str::to_string) {
			if fallback != locale {
				ensure_loaded(&mut *loader, &mut catalog, &fallback, key)?;
			}
		}

		Ok(locale)
	}
}

fn ensure_loaded<L: CatalogLoader>(
	loader: &mut L,
	catalog: &mut MessageCatalog,
	locale: &str,
	key: &str,
) -> Result<(), L::Error> {
	loader.load_locale(catalog, locale)?;

	if let Some((namespace, _)) = key.split_once('.') {
		loader.load_namespace(catalog, locale, namespace)?;
	}

	Ok(())
}

impl<L: CatalogLoader> Messages for LoadingCatalog<L> {
	fn get(&self, key: &str, replace: &Replacements, locale: Option<&str>) -> String {
		LoadingCatalog::get(self, key, replace, locale).unwrap_or_else(|error| {
			tracing::warn!(key, %error, "failed to load messages");
			key.to_string()
		})
	}

	fn choice(&self, key: &str, number: i64, replace: &Replacements, locale: Option<&str>) -> String {
		LoadingCatalog::choice(self, key, number, replace, locale).unwrap_or_else(|error| {
			tracing::warn!(key, %error, "failed to load messages");
			key.to_string()
		})
	}

	fn has(&self, key: &str, locale: Option<&str>) -> bool {
		LoadingCatalog::has(self, key, locale).unwrap_or_else(|error| {
			tracing::warn!(key, %error, "failed to load messages");
			false
		})
	}
}

impl<L: CatalogLoader> From<LoadingCatalog<L>> for MessageCatalog {
	fn from(loading: LoadingCatalog<L>) -> Self {
		loading.catalog.into_inner()
	}
}
