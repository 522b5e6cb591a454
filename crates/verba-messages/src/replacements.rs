//! Ordered placeholder replacement sets

use std::borrow::Cow;

use indexmap::IndexMap;

/// A value that can be substituted for a placeholder.
///
/// Booleans render as `"1"` and `""`, the same way boolean catalog values
/// are stored.
pub trait ReplacementValue {
	fn into_replacement(self) -> String;
}

impl ReplacementValue for String {
	fn into_replacement(self) -> String {
		self
	}
}

impl ReplacementValue for &str {
	fn into_replacement(self) -> String {
		self.to_string()
	}
}

impl ReplacementValue for &String {
	fn into_replacement(self) -> String {
		self.clone()
	}
}

impl ReplacementValue for Cow<'_, str> {
	fn into_replacement(self) -> String {
		self.into_owned()
	}
}

impl ReplacementValue for char {
	fn into_replacement(self) -> String {
		self.to_string()
	}
}

impl ReplacementValue for bool {
	fn into_replacement(self) -> String {
		if self { "1" } else { "" }.to_string()
	}
}

macro_rules! impl_replacement_value_display {
	($($ty:ty),* $(,)?) => {
		$(
			impl ReplacementValue for $ty {
				fn into_replacement(self) -> String {
					self.to_string()
				}
			}
		)*
	};
}

impl_replacement_value_display!(
	i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

/// Ordered mapping from placeholder name to display value.
///
/// Values are stringified on insert. Re-inserting a name keeps its original
/// position and overwrites the value.
///
/// # Example
/// ```
/// use verba_messages::Replacements;
///
/// let replace = Replacements::new().with("attribute", "password").with("min", 8);
///
/// assert_eq!(replace.get("min"), Some("8"));
/// assert_eq!(replace.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Replacements {
	entries: IndexMap<String, String>,
}

impl Replacements {
	/// Create an empty replacement set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder form of [`insert`](Self::insert).
	pub fn with(mut self, name: impl Into<String>, value: impl ReplacementValue) -> Self {
		self.insert(name, value);
		self
	}

	/// Insert or overwrite a placeholder value.
	pub fn insert(&mut self, name: impl Into<String>, value: impl ReplacementValue) {
		self.entries.insert(name.into(), value.into_replacement());
	}

	/// Value for a placeholder name.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.entries.get(name).map(String::as_str)
	}

	/// Iterate in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries
			.iter()
			.map(|(name, value)| (name.as_str(), value.as_str()))
	}

	/// Values in insertion order.
	pub fn values(&self) -> impl Iterator<Item = &str> {
		self.entries.values().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl<K, V> FromIterator<(K, V)> for Replacements
where
	K: Into<String>,
	V: ReplacementValue,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut replacements = Self::new();
		for (name, value) in iter {
			replacements.insert(name, value);
		}
		replacements
	}
}

impl<K, V, const N: usize> From<[(K, V); N]> for Replacements
where
	K: Into<String>,
	V: ReplacementValue,
{
	fn from(entries: [(K, V); N]) -> Self {
		entries.into_iter().collect()
	}
}
