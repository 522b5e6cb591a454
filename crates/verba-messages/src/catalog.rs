//! In-memory message catalog
//!
//! Owns the locale → tree mapping and serves `get`/`choice`/`has` with a
//! single fallback locale. A miss in every locale is not an error: the
//! literal key is returned.

use std::fmt;

use crate::Messages;
use crate::formatter::{PlaceholderFormatter, Replacer};
use crate::replacements::Replacements;
use crate::selector::PluralSelector;
use crate::settings::MessagesSettings;
use crate::value::{self, Catalog, MessageTree, MessageValue};

/// Message catalog with fallback-locale lookup, pluralization and
/// placeholder substitution.
///
/// # Example
/// ```
/// use serde_json::json;
/// use verba_messages::{MessageCatalog, Replacements, tree_from_json};
///
/// let mut catalog = MessageCatalog::new("en");
/// catalog.add_messages(
/// 	"en",
/// 	"validation",
/// 	tree_from_json(json!({
/// 		"required": "The :attribute field is required.",
/// 		"items": {"one": "One item", "other": ":count items"},
/// 	})),
/// );
///
/// let replace = Replacements::from([("attribute", "email")]);
/// assert_eq!(
/// 	catalog.get("validation.required", &replace, None),
/// 	"The email field is required."
/// );
/// assert_eq!(catalog.choice("validation.items", 5, &Replacements::new(), None), "5 items");
/// assert_eq!(catalog.get("validation.missing", &Replacements::new(), None), "validation.missing");
/// ```
#[derive(Clone)]
pub struct MessageCatalog {
	messages: Catalog,
	locale: String,
	fallback: Option<String>,
	selector: PluralSelector,
	formatter: PlaceholderFormatter,
	replacer: Option<Replacer>,
}

impl fmt::Debug for MessageCatalog {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MessageCatalog")
			.field("locales", &self.messages.keys().collect::<Vec<_>>())
			.field("locale", &self.locale)
			.field("fallback", &self.fallback)
			.field("placeholder_format", &self.formatter.format())
			.field("replacer", &self.replacer.as_ref().map(|_| "<fn>"))
			.finish()
	}
}

impl Default for MessageCatalog {
	fn default() -> Self {
		Self::from_settings(&MessagesSettings::default())
	}
}

impl MessageCatalog {
	/// Create an empty catalog resolving in `locale`, without fallback.
	pub fn new(locale: impl Into<String>) -> Self {
		Self {
			messages: Catalog::new(),
			locale: locale.into(),
			fallback: None,
			selector: PluralSelector::new(),
			formatter: PlaceholderFormatter::default(),
			replacer: None,
		}
	}

	/// Create an empty catalog configured from settings.
	pub fn from_settings(settings: &MessagesSettings) -> Self {
		let mut catalog = Self::new(settings.locale.clone());
		catalog.fallback = settings.fallback_locale.clone();
		catalog.formatter.set_format(settings.placeholder_format.clone());
		catalog
	}

	/// Builder form of [`set_fallback`](Self::set_fallback).
	pub fn with_fallback(mut self, locale: impl Into<String>) -> Self {
		self.fallback = Some(locale.into());
		self
	}

	/// Builder form of [`set_messages`](Self::set_messages).
	pub fn with_messages(mut self, messages: Catalog) -> Self {
		self.messages = messages;
		self
	}

	pub fn set_locale(&mut self, locale: impl Into<String>) {
		self.locale = locale.into();
	}

	pub fn locale(&self) -> &str {
		&self.locale
	}

	/// Set or clear the fallback locale.
	pub fn set_fallback(&mut self, locale: Option<String>) {
		self.fallback = locale;
	}

	pub fn fallback(&self) -> Option<&str> {
		self.fallback.as_deref()
	}

	/// Set the placeholder format; it should contain the `{key}` marker.
	///
	/// Only affects rendering from now on; stored text is never rewritten.
	pub fn set_placeholder_format(&mut self, format: impl Into<String>) {
		self.formatter.set_format(format);
	}

	pub fn placeholder_format(&self) -> &str {
		self.formatter.format()
	}

	/// Install a custom substitution, or clear it with `None` to restore the
	/// format-based one.
	pub fn set_placeholder_replacer(&mut self, replacer: Option<Replacer>) {
		self.replacer = replacer;
	}

	pub fn placeholder_replacer(&self) -> Option<&Replacer> {
		self.replacer.as_ref()
	}

	/// Replace the whole catalog.
	pub fn set_messages(&mut self, messages: Catalog) {
		self.messages = messages;
	}

	pub fn messages(&self) -> &Catalog {
		&self.messages
	}

	/// Locales that currently hold a tree, in insertion order.
	pub fn locales(&self) -> Vec<&str> {
		self.messages.keys().map(String::as_str).collect()
	}

	/// Merge `messages` into `locale.namespace`, overwriting the given
	/// top-level keys. Sub-trees under an overwritten key are replaced
	/// wholesale; sibling keys are kept.
	pub fn add_messages(&mut self, locale: &str, namespace: &str, messages: MessageTree) {
		let locale_tree = self.messages.entry(locale.to_string()).or_default();
		let slot = locale_tree
			.entry(namespace.to_string())
			.or_insert_with(|| MessageValue::Tree(MessageTree::new()));

		if let MessageValue::Text(_) = slot {
			*slot = MessageValue::Tree(MessageTree::new());
		}
		if let MessageValue::Tree(existing) = slot {
			value::replace_shallow(existing, messages);
		}
	}

	/// Deep-merge `messages` into the root of `locale`.
	pub fn merge_into_locale(&mut self, locale: &str, messages: MessageTree) {
		let locale_tree = self.messages.entry(locale.to_string()).or_default();
		value::replace_recursive(locale_tree, messages);
	}

	/// Resolve `key` to a rendered message, or the key itself when no locale
	/// holds a leaf for it.
	pub fn get(&self, key: &str, replace: &Replacements, locale: Option<&str>) -> String {
		let locale = locale.unwrap_or(self.locale.as_str());

		match self.lookup(locale, key) {
			Some(MessageValue::Text(text)) => self.apply_replacements(text, replace),
			Some(MessageValue::Tree(_)) => {
				tracing::trace!(key, locale, "key resolves to a sub-tree");
				key.to_string()
			}
			None => {
				tracing::trace!(key, locale, "message not found");
				key.to_string()
			}
		}
	}

	/// Resolve `key` as a plural definition for `number` and render it.
	///
	/// `count` is always set to `number` in the replacement set. Returns the
	/// key itself when nothing is found or the selected variant is not text.
	pub fn choice(
		&self,
		key: &str,
		number: i64,
		replace: &Replacements,
		locale: Option<&str>,
	) -> String {
		let locale = locale.unwrap_or(self.locale.as_str());

		let Some(line) = self.lookup(locale, key) else {
			tracing::trace!(key, locale, "plural message not found");
			return key.to_string();
		};

		let Some(text) = self.selector.select(line, number, locale) else {
			tracing::trace!(key, locale, number, "plural variant not renderable");
			return key.to_string();
		};

		let mut replace = replace.clone();
		replace.insert("count", number);
		self.apply_replacements(text, &replace)
	}

	/// Whether `key` resolves to any value, leaf or sub-tree, in the locale
	/// or its fallback.
	pub fn has(&self, key: &str, locale: Option<&str>) -> bool {
		let locale = locale.unwrap_or(self.locale.as_str());
		self.lookup(locale, key).is_some()
	}

	/// Two-stage lookup: `locale`, then the fallback when it is configured
	/// and differs from `locale`.
	fn lookup(&self, locale: &str, key: &str) -> Option<&MessageValue> {
		if let Some(value) = self.lookup_in(locale, key) {
			return Some(value);
		}

		let fallback = self.fallback.as_deref().filter(|fallback| *fallback != locale)?;
		tracing::debug!(key, locale, fallback, "retrying lookup in fallback locale");
		self.lookup_in(fallback, key)
	}

	fn lookup_in(&self, locale: &str, key: &str) -> Option<&MessageValue> {
		value::resolve_path(self.messages.get(locale)?, key)
	}

	fn apply_replacements(&self, text: &str, replace: &Replacements) -> String {
		match &self.replacer {
			Some(replacer) => replacer(text, replace),
			None => self.formatter.apply(text, replace),
		}
	}
}

impl Messages for MessageCatalog {
	fn get(&self, key: &str, replace: &Replacements, locale: Option<&str>) -> String {
		MessageCatalog::get(self, key, replace, locale)
	}

	fn choice(&self, key: &str, number: i64, replace: &Replacements, locale: Option<&str>) -> String {
		MessageCatalog::choice(self, key, number, replace, locale)
	}

	fn has(&self, key: &str, locale: Option<&str>) -> bool {
		MessageCatalog::has(self, key, locale)
	}
}
