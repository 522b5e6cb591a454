//! Deferred message rendering
//!
//! Consumers such as validators often hold either a translation key or a
//! ready-made sentence. [`PendingMessage`] defers that decision to display
//! time.

use std::fmt;

use crate::Messages;
use crate::replacements::Replacements;

/// A message that is looked up as a key when rendered, if it looks like one.
///
/// Text containing a space is treated as prose and rendered verbatim; so is
/// any key the attached source cannot resolve.
///
/// # Example
/// ```
/// use serde_json::json;
/// use verba_messages::{MessageCatalog, PendingMessage, tree_from_json};
///
/// let mut catalog = MessageCatalog::new("en");
/// catalog.add_messages("en", "validation", tree_from_json(json!({"accepted": "Must be accepted."})));
///
/// let pending = PendingMessage::new("validation.accepted").with_messages(&catalog);
/// assert_eq!(pending.to_string(), "Must be accepted.");
///
/// let prose = PendingMessage::new("Already a sentence.").with_messages(&catalog);
/// assert_eq!(prose.to_string(), "Already a sentence.");
/// ```
#[derive(Clone)]
pub struct PendingMessage<'a> {
	message: String,
	messages: Option<&'a dyn Messages>,
	attribute: Option<String>,
}

impl<'a> PendingMessage<'a> {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			messages: None,
			attribute: None,
		}
	}

	/// Attach the source used to resolve the message at display time.
	pub fn with_messages(mut self, messages: &'a dyn Messages) -> Self {
		self.messages = Some(messages);
		self
	}

	/// Attach the attribute (field name) the message is about.
	pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
		self.attribute = Some(attribute.into());
		self
	}

	pub fn message(&self) -> &str {
		&self.message
	}

	pub fn attribute(&self) -> Option<&str> {
		self.attribute.as_deref()
	}

	fn resolve(&self) -> Option<String> {
		let messages = self.messages?;
		if self.message.contains(' ') {
			return None;
		}

		let value = messages.get(&self.message, &Replacements::new(), None);
		(value != self.message).then_some(value)
	}
}

impl fmt::Debug for PendingMessage<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PendingMessage")
			.field("message", &self.message)
			.field("attribute", &self.attribute)
			.field("has_messages", &self.messages.is_some())
			.finish()
	}
}

impl fmt::Display for PendingMessage<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.resolve() {
			Some(value) => f.write_str(&value),
			None => f.write_str(&self.message),
		}
	}
}
