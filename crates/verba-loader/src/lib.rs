//! # Verba Loader
//!
//! JSON file loader for verba message catalogs.
//!
//! Translations live under a root directory:
//!
//! ```text
//! lang/
//! ├── en.json              # flat keys, e.g. {"Hello": "Hello"}
//! ├── en/
//! │   └── validation.json  # namespace "validation"
//! └── ru/
//!     └── validation.json
//! ```
//!
//! Files are read on first use through [`FileLoader`], which plugs into
//! [`verba_messages::LoadingCatalog`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use verba_loader::FileLoader;
//! use verba_messages::{MessageCatalog, Replacements};
//!
//! let mut messages = FileLoader::new("resources/lang").into_catalog(MessageCatalog::new("en"));
//! let text = messages.get("validation.required", &Replacements::from([("attribute", "email")]), None)?;
//! # Ok::<(), verba_loader::LoadError>(())
//! ```

pub mod error;
pub mod file;

pub use error::LoadError;
pub use file::{FileLoader, FileMessages};
