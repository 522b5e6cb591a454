//! # Verba
//!
//! Message catalogs for applications that speak more than one language.
//!
//! Verba resolves dotted keys such as `validation.min.string` against nested
//! per-locale message trees, retries a single fallback locale on a miss,
//! selects plural variants by count and substitutes named placeholders.
//! Missing messages are never an error: the key itself is returned.
//!
//! ## Feature Flags
//!
//! The catalog, pluralization and placeholders are always available.
//!
//! - `loader` - Lazy loading from JSON files
//! - `full` (default) - Everything
//!
//! ## Quick Example
//!
//! ```rust
//! use serde_json::json;
//! use verba::prelude::*;
//!
//! let mut catalog = MessageCatalog::new("en");
//! catalog.add_messages("en", "validation", tree_from_json(json!({
//! 	"required": "The :attribute field is required.",
//! 	"pipe_plural": "{0}No items|{1}One item|[2,*]:count items",
//! })));
//!
//! assert_eq!(
//! 	catalog.get("validation.required", &Replacements::from([("attribute", "email")]), None),
//! 	"The email field is required."
//! );
//! assert_eq!(catalog.choice("validation.pipe_plural", 0, &Replacements::new(), None), "No items");
//! assert_eq!(catalog.choice("validation.pipe_plural", 5, &Replacements::new(), None), "5 items");
//! ```
//!
//! ## Crates
//!
//! - [`messages`]: the catalog, plural selection, placeholders and settings
//! - `loader`: JSON file loader (feature `loader`)

pub use verba_messages as messages;

#[cfg(feature = "loader")]
pub use verba_loader as loader;

pub use verba_messages::{
	Catalog, CatalogLoader, LoadingCatalog, MessageCatalog, MessageTree, MessageValue, Messages,
	MessagesSettings, PendingMessage, PlaceholderFormatter, PluralSelector, Replacements, Replacer,
	SettingsError, plural_index, tree_from_json,
};

#[cfg(feature = "loader")]
pub use verba_loader::{FileLoader, FileMessages, LoadError};

/// Commonly used types
pub mod prelude {
	pub use verba_messages::prelude::*;

	#[cfg(feature = "loader")]
	pub use verba_loader::{FileLoader, FileMessages, LoadError};
}
