//! Placeholder substitution

use std::sync::Arc;

use crate::replacements::Replacements;

/// Marker inside a placeholder format that stands for the placeholder name.
pub const KEY_MARKER: &str = "{key}";

/// Default placeholder format: `:{key}` renders the token `:attribute`.
pub const DEFAULT_PLACEHOLDER_FORMAT: &str = ":{key}";

/// Caller-supplied substitution that fully replaces the default one.
///
/// Receives the resolved text and the complete replacement set; its return
/// value is used verbatim.
pub type Replacer = Arc<dyn Fn(&str, &Replacements) -> String + Send + Sync>;

/// Substitutes named placeholders built from a single-token format.
///
/// # Example
/// ```
/// use verba_messages::{PlaceholderFormatter, Replacements};
///
/// let formatter = PlaceholderFormatter::new("#{key}#");
/// let replace = Replacements::from([("attribute", "email")]);
///
/// assert_eq!(
/// 	formatter.apply("The #attribute# field is required.", &replace),
/// 	"The email field is required."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderFormatter {
	format: String,
}

impl Default for PlaceholderFormatter {
	fn default() -> Self {
		Self::new(DEFAULT_PLACEHOLDER_FORMAT)
	}
}

impl PlaceholderFormatter {
	pub fn new(format: impl Into<String>) -> Self {
		Self {
			format: format.into(),
		}
	}

	/// The configured format, e.g. `:{key}`.
	pub fn format(&self) -> &str {
		&self.format
	}

	pub fn set_format(&mut self, format: impl Into<String>) {
		self.format = format.into();
	}

	/// The literal token searched for a placeholder name.
	pub fn token(&self, name: &str) -> String {
		self.format.replace(KEY_MARKER, name)
	}

	/// Replace every occurrence of each placeholder token, in replacement
	/// order. Tokens without a replacement are left as-is.
	pub fn apply(&self, text: &str, replacements: &Replacements) -> String {
		replacements
			.iter()
			.fold(text.to_string(), |text, (name, value)| {
				let token = self.token(name);
				if token.is_empty() {
					return text;
				}
				text.replace(&token, value)
			})
	}
}
