//! Catalog value model
//!
//! A locale tree is an ordered mapping whose leaves are strings. The same
//! shape carries nested namespaces (`validation.min.string`), flat
//! fully-qualified keys (`"validation.required"`) and plural variant maps
//! (`{"one": "...", "other": "..."}`); which reading applies is decided at
//! lookup time.

use indexmap::IndexMap;
use serde_json::Value;

/// Ordered mapping from key segment to value.
pub type MessageTree = IndexMap<String, MessageValue>;

/// Whole catalog: locale identifier to locale tree.
pub type Catalog = IndexMap<String, MessageTree>;

/// A single node of a locale tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageValue {
	/// A renderable leaf.
	Text(String),
	/// A nested mapping (namespace, sub-tree or plural variants).
	Tree(MessageTree),
}

impl MessageValue {
	/// Returns the leaf text, or `None` for a sub-tree.
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Text(text) => Some(text),
			Self::Tree(_) => None,
		}
	}

	/// Returns the nested mapping, or `None` for a leaf.
	pub fn as_tree(&self) -> Option<&MessageTree> {
		match self {
			Self::Tree(tree) => Some(tree),
			Self::Text(_) => None,
		}
	}

	/// Whether this node is a renderable leaf.
	pub fn is_leaf(&self) -> bool {
		matches!(self, Self::Text(_))
	}

	/// Convert a decoded JSON document into a catalog value.
	///
	/// Numbers render in decimal, booleans as `"1"`/`""`, arrays become trees
	/// keyed by their index. `null` has no catalog representation and yields
	/// `None`; `null` members of objects and arrays are dropped.
	///
	/// # Example
	/// ```
	/// use serde_json::json;
	/// use verba_messages::MessageValue;
	///
	/// let value = MessageValue::from_json(json!({"one": "item", "other": "items"})).unwrap();
	/// let tree = value.as_tree().unwrap();
	/// assert_eq!(tree.get("one").and_then(MessageValue::as_text), Some("item"));
	/// ```
	pub fn from_json(value: Value) -> Option<Self> {
		match value {
			Value::Null => None,
			Value::Bool(flag) => Some(Self::Text(if flag { "1" } else { "" }.to_string())),
			Value::Number(number) => Some(Self::Text(number.to_string())),
			Value::String(text) => Some(Self::Text(text)),
			Value::Array(items) => Some(Self::Tree(
				items
					.into_iter()
					.enumerate()
					.filter_map(|(index, item)| Some((index.to_string(), Self::from_json(item)?)))
					.collect(),
			)),
			Value::Object(members) => Some(Self::Tree(
				members
					.into_iter()
					.filter_map(|(key, item)| Some((key, Self::from_json(item)?)))
					.collect(),
			)),
		}
	}
}

impl From<&str> for MessageValue {
	fn from(text: &str) -> Self {
		Self::Text(text.to_string())
	}
}

impl From<String> for MessageValue {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

impl From<MessageTree> for MessageValue {
	fn from(tree: MessageTree) -> Self {
		Self::Tree(tree)
	}
}

/// Convert a JSON document into a locale tree.
///
/// Anything that is not an object or an array converts to an empty tree.
pub fn tree_from_json(value: Value) -> MessageTree {
	match MessageValue::from_json(value) {
		Some(MessageValue::Tree(tree)) => tree,
		_ => MessageTree::new(),
	}
}

/// Overwrite the direct keys of `target` with those of `incoming`.
///
/// Sub-trees under an overwritten key are replaced wholesale.
pub(crate) fn replace_shallow(target: &mut MessageTree, incoming: MessageTree) {
	for (key, value) in incoming {
		target.insert(key, value);
	}
}

/// Merge `incoming` into `target` key by key at every depth.
///
/// Two trees at the same path combine; anything else is overwritten by the
/// incoming value.
pub(crate) fn replace_recursive(target: &mut MessageTree, incoming: MessageTree) {
	for (key, value) in incoming {
		let MessageValue::Tree(nested) = value else {
			target.insert(key, value);
			continue;
		};
		if let Some(MessageValue::Tree(existing)) = target.get_mut(&key) {
			replace_recursive(existing, nested);
			continue;
		}
		target.insert(key, MessageValue::Tree(nested));
	}
}

/// Resolve a dotted key inside a locale tree.
///
/// At every level the remaining suffix is first tried as a literal flat key,
/// then traversal continues with the next segment.
pub(crate) fn resolve_path<'a>(tree: &'a MessageTree, key: &str) -> Option<&'a MessageValue> {
	let mut current = tree;
	let mut remaining = key;

	loop {
		if let Some(value) = current.get(remaining) {
			return Some(value);
		}

		let (segment, rest) = remaining.split_once('.')?;
		match current.get(segment)? {
			MessageValue::Tree(nested) => {
				current = nested;
				remaining = rest;
			}
			MessageValue::Text(_) => return None,
		}
	}
}
