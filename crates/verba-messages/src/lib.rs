//! # Verba Messages
//!
//! Hierarchical message catalog with a fallback locale, pluralization and
//! placeholder substitution.
//!
//! ## Features
//!
//! - **Dotted keys**: `validation.min.string` walks nested groups; flat keys
//!   containing dots are found too
//! - **Fallback locale**: a single secondary locale consulted on a miss
//! - **Pluralization**: variant maps (`one`/`other`/exact counts) and pipe
//!   strings with `{N}` and `[A,B]` conditions
//! - **Placeholders**: configurable `:{key}` style tokens, or a custom replacer
//! - **Lazy loading**: a [`CatalogLoader`] can populate locales on demand
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//! use verba_messages::prelude::*;
//!
//! let mut catalog = MessageCatalog::new("ru").with_fallback("en");
//! catalog.add_messages("en", "validation", tree_from_json(json!({
//! 	"required": "The :attribute field is required.",
//! })));
//! catalog.add_messages("ru", "validation", tree_from_json(json!({
//! 	"files": ":count файл|:count файла|:count файлов",
//! })));
//!
//! let replace = Replacements::from([("attribute", "email")]);
//! assert_eq!(
//! 	catalog.get("validation.required", &replace, None),
//! 	"The email field is required."
//! );
//! assert_eq!(catalog.choice("validation.files", 3, &Replacements::new(), None), "3 файла");
//! ```
//!
//! ## Module Organization
//!
//! - [`catalog`]: the in-memory catalog and lookup
//! - [`selector`]: plural variant selection
//! - [`plural_rules`]: per-language plural index table
//! - [`formatter`]: placeholder substitution
//! - [`loader`]: on-demand population hook
//! - [`settings`]: configuration from code, TOML or the environment

pub mod catalog;
pub mod formatter;
pub mod loader;
pub mod pending;
pub mod plural_rules;
pub mod replacements;
pub mod selector;
pub mod settings;
pub mod value;

pub use catalog::MessageCatalog;
pub use formatter::{DEFAULT_PLACEHOLDER_FORMAT, KEY_MARKER, PlaceholderFormatter, Replacer};
pub use loader::{CatalogLoader, LoadingCatalog};
pub use pending::PendingMessage;
pub use plural_rules::{base_language, plural_index};
pub use replacements::{ReplacementValue, Replacements};
pub use selector::PluralSelector;
pub use settings::{MessagesSettings, SettingsError};
pub use value::{Catalog, MessageTree, MessageValue, tree_from_json};

/// Read-only message source.
///
/// Consumers that only render messages (validators, error reporters) should
/// depend on this trait rather than on a concrete catalog.
pub trait Messages {
	/// Resolve `key`, substituting placeholders; returns the key on a miss.
	fn get(&self, key: &str, replace: &Replacements, locale: Option<&str>) -> String;

	/// Resolve `key` as a plural definition for `number`; returns the key on a miss.
	fn choice(&self, key: &str, number: i64, replace: &Replacements, locale: Option<&str>)
	-> String;

	/// Whether `key` resolves to anything in the locale or its fallback.
	fn has(&self, key: &str, locale: Option<&str>) -> bool;
}

/// Commonly used types
pub mod prelude {
	pub use crate::Messages;
	pub use crate::catalog::MessageCatalog;
	pub use crate::formatter::Replacer;
	pub use crate::loader::{CatalogLoader, LoadingCatalog};
	pub use crate::pending::PendingMessage;
	pub use crate::replacements::Replacements;
	pub use crate::settings::MessagesSettings;
	pub use crate::value::{MessageTree, MessageValue, tree_from_json};
}
