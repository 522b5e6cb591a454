//! Catalog integration tests
//!
//! End-to-end lookup scenarios over an in-memory catalog shaped like a
//! typical validation message file, in English and Russian.

use std::sync::Arc;

use proptest::prelude::*;
use regex::{Captures, Regex};
use rstest::{fixture, rstest};
use serde_json::json;
use verba_messages::prelude::*;
use verba_messages::{Catalog, plural_index};

fn none() -> Replacements {
	Replacements::new()
}

fn validation_en() -> MessageTree {
	tree_from_json(json!({
		"required": "The :attribute field is required.",
		"email": "The :attribute must be a valid email address.",
		"min": {
			"string": "The :attribute must be at least :min characters.",
			"numeric": "The :attribute must be at least :min.",
		},
		"attributes": {"name": "name", "email": "email address"},
		"plural_example": {"one": "One item", "other": ":count items"},
		"pipe_plural": "{0}No items|{1}One item|[2,*]:count items",
	}))
}

fn validation_ru() -> MessageTree {
	tree_from_json(json!({
		"required": "Поле :attribute обязательно.",
		"attributes": {"name": "имя"},
		"plural_example": {"one": "Один элемент", "other": ":count элементов"},
	}))
}

#[fixture]
fn catalog() -> MessageCatalog {
	let mut catalog = MessageCatalog::new("en");
	catalog.add_messages("en", "validation", validation_en());
	catalog.add_messages("ru", "validation", validation_ru());
	catalog
}

#[rstest]
fn test_required_message(catalog: MessageCatalog) {
	// Arrange
	let replace = Replacements::from([("attribute", "email")]);

	// Act
	let rendered = catalog.get("validation.required", &replace, None);

	// Assert
	assert_eq!(rendered, "The email field is required.");
}

#[rstest]
fn test_nested_message_with_two_placeholders(catalog: MessageCatalog) {
	let replace = Replacements::new()
		.with("attribute", "password")
		.with("min", 8);

	assert_eq!(
		catalog.get("validation.min.string", &replace, None),
		"The password must be at least 8 characters."
	);
}

#[rstest]
fn test_explicit_russian_locale(catalog: MessageCatalog) {
	let replace = Replacements::from([("attribute", "имя")]);

	assert_eq!(
		catalog.get("validation.required", &replace, Some("ru")),
		"Поле имя обязательно."
	);
	assert_eq!(
		catalog.get("validation.attributes.name", &none(), Some("ru")),
		"имя"
	);
}

#[rstest]
fn test_missing_in_locale_without_fallback(catalog: MessageCatalog) {
	assert_eq!(
		catalog.get("validation.email", &none(), Some("ru")),
		"validation.email"
	);
	assert!(!catalog.has("validation.email", Some("ru")));
}

#[rstest]
fn test_fallback_fills_gaps(catalog: MessageCatalog) {
	// Arrange
	let catalog = catalog.with_fallback("en");
	let replace = Replacements::from([("attribute", "почта")]);

	// Act
	let rendered = catalog.get("validation.email", &replace, Some("ru"));

	// Assert
	assert_eq!(rendered, "The почта must be a valid email address.");
	assert!(catalog.has("validation.email", Some("ru")));
}

#[rstest]
fn test_fallback_can_be_cleared(catalog: MessageCatalog) {
	let mut catalog = catalog.with_fallback("en");

	catalog.set_fallback(None);

	assert_eq!(catalog.fallback(), None);
	assert_eq!(
		catalog.get("validation.email", &none(), Some("ru")),
		"validation.email"
	);
}

#[rstest]
#[case("en", 1, "One item")]
#[case("en", 5, "5 items")]
#[case("ru", 1, "Один элемент")]
#[case("ru", 5, "5 элементов")]
fn test_plural_variants(
	catalog: MessageCatalog,
	#[case] locale: &str,
	#[case] count: i64,
	#[case] expected: &str,
) {
	assert_eq!(
		catalog.choice("validation.plural_example", count, &none(), Some(locale)),
		expected
	);
}

#[rstest]
#[case(0, "No items")]
#[case(1, "One item")]
#[case(2, "2 items")]
#[case(5, "5 items")]
fn test_pipe_plural(catalog: MessageCatalog, #[case] count: i64, #[case] expected: &str) {
	assert_eq!(
		catalog.choice("validation.pipe_plural", count, &none(), None),
		expected
	);
}

#[rstest]
fn test_choice_missing_returns_key(catalog: MessageCatalog) {
	assert_eq!(
		catalog.choice("validation.missing", 3, &none(), None),
		"validation.missing"
	);
}

#[rstest]
fn test_flat_keys_alongside_groups(mut catalog: MessageCatalog) {
	// Arrange
	catalog.merge_into_locale(
		"en",
		tree_from_json(json!({
			"Hello": "Hello",
			"Welcome": "Welcome, :name!",
			"auth.failed": "These credentials do not match.",
		})),
	);

	// Act & Assert
	assert_eq!(catalog.get("Hello", &none(), None), "Hello");
	assert_eq!(
		catalog.get("Welcome", &Replacements::from([("name", "John")]), None),
		"Welcome, John!"
	);
	assert_eq!(
		catalog.get("auth.failed", &none(), None),
		"These credentials do not match."
	);
	assert_eq!(
		catalog.get("validation.required", &none(), None),
		"The :attribute field is required."
	);
}

#[rstest]
fn test_flat_key_inside_namespace(mut catalog: MessageCatalog) {
	catalog.add_messages(
		"en",
		"validation",
		tree_from_json(json!({"custom.email.unique": "This email is taken."})),
	);

	assert_eq!(
		catalog.get("validation.custom.email.unique", &none(), None),
		"This email is taken."
	);
}

#[rstest]
fn test_literal_key_preferred_over_nested_path() {
	// Arrange
	let mut catalog = MessageCatalog::new("en");
	catalog.merge_into_locale(
		"en",
		tree_from_json(json!({
			"a": {"b": "nested"},
			"a.b": "literal",
		})),
	);

	// Act & Assert
	assert_eq!(catalog.get("a.b", &none(), None), "literal");
}

#[rstest]
fn test_has_accepts_subtree_while_get_refuses_it(catalog: MessageCatalog) {
	assert!(catalog.has("validation.min", None));
	assert_eq!(catalog.get("validation.min", &none(), None), "validation.min");
	assert!(catalog.has("validation", None));
}

#[rstest]
fn test_set_messages_replaces_everything(mut catalog: MessageCatalog) {
	// Arrange
	let mut replacement = Catalog::new();
	replacement.insert("de".to_string(), tree_from_json(json!({"Hallo": "Hallo"})));

	// Act
	catalog.set_messages(replacement);

	// Assert
	assert_eq!(catalog.locales(), vec!["de"]);
	assert!(!catalog.has("validation.required", None));
	assert!(catalog.has("Hallo", Some("de")));
	assert_eq!(catalog.messages().len(), 1);
}

#[rstest]
fn test_with_messages_builder() {
	let mut messages = Catalog::new();
	messages.insert("en".to_string(), tree_from_json(json!({"k": "v"})));

	let catalog = MessageCatalog::new("en").with_messages(messages);

	assert_eq!(catalog.get("k", &none(), None), "v");
}

#[rstest]
fn test_locale_switch(mut catalog: MessageCatalog) {
	catalog.set_locale("ru");

	assert_eq!(catalog.locale(), "ru");
	assert_eq!(
		catalog.choice("validation.plural_example", 1, &none(), None),
		"Один элемент"
	);
}

#[rstest]
#[case("#{key}#", "The #attribute# field is required.")]
#[case("{{key}}", "The {attribute} field is required.")]
#[case("%{key}", "The %attribute field is required.")]
fn test_custom_placeholder_format(#[case] format: &str, #[case] text: &str) {
	// Arrange
	let mut catalog = MessageCatalog::new("en");
	catalog.merge_into_locale("en", tree_from_json(json!({"required": text})));
	catalog.set_placeholder_format(format);

	// Act
	let rendered = catalog.get("required", &Replacements::from([("attribute", "email")]), None);

	// Assert
	assert_eq!(catalog.placeholder_format(), format);
	assert_eq!(rendered, "The email field is required.");
}

#[rstest]
fn test_format_change_does_not_touch_stored_text(mut catalog: MessageCatalog) {
	catalog.set_placeholder_format("#{key}#");

	assert_eq!(
		catalog.get(
			"validation.required",
			&Replacements::from([("attribute", "email")]),
			None
		),
		"The :attribute field is required."
	);
}

#[rstest]
fn test_regex_replacer(mut catalog: MessageCatalog) {
	// Arrange
	let pattern = Regex::new(r":(\w+)").unwrap();
	catalog.set_placeholder_replacer(Some(Arc::new(move |text: &str, replace: &Replacements| {
		pattern
			.replace_all(text, |caps: &Captures| {
				replace.get(&caps[1]).unwrap_or(&caps[0]).to_string()
			})
			.into_owned()
	})));
	let replace = Replacements::new().with("attribute", "password");

	// Act
	let rendered = catalog.get("validation.min.string", &replace, None);

	// Assert: unknown placeholders survive untouched
	assert_eq!(rendered, "The password must be at least :min characters.");
}

#[rstest]
fn test_positional_replacer(mut catalog: MessageCatalog) {
	// Arrange
	catalog.merge_into_locale("en", tree_from_json(json!({"range": "From %s to %s"})));
	catalog.set_placeholder_replacer(Some(Arc::new(|text: &str, replace: &Replacements| {
		replace
			.values()
			.fold(text.to_string(), |text, value| text.replacen("%s", value, 1))
	})));
	let replace = Replacements::new().with("from", 1).with("to", 10);

	// Act
	let rendered = catalog.get("range", &replace, None);

	// Assert
	assert_eq!(rendered, "From 1 to 10");
}

#[rstest]
fn test_replacer_can_be_read_back_and_cleared(mut catalog: MessageCatalog) {
	// Arrange
	let replacer: Replacer = Arc::new(|text: &str, _: &Replacements| text.to_uppercase());
	catalog.set_placeholder_replacer(Some(replacer.clone()));

	// Act
	let installed = catalog.placeholder_replacer().cloned();
	let shouted = catalog.get("validation.attributes.name", &none(), None);
	catalog.set_placeholder_replacer(None);
	let restored = catalog.get(
		"validation.required",
		&Replacements::from([("attribute", "email")]),
		None,
	);

	// Assert
	assert!(Arc::ptr_eq(&installed.unwrap(), &replacer));
	assert_eq!(shouted, "NAME");
	assert_eq!(restored, "The email field is required.");
}

#[rstest]
fn test_catalog_as_capability(catalog: MessageCatalog) {
	fn render(messages: &dyn Messages, key: &str) -> String {
		messages.get(key, &Replacements::from([("attribute", "name")]), None)
	}

	assert_eq!(render(&catalog, "validation.required"), "The name field is required.");
	assert_eq!(render(&catalog, "unknown"), "unknown");
}

#[rstest]
#[case("ru", 1, 0)]
#[case("ru", 2, 1)]
#[case("ru", 5, 2)]
#[case("ru", 21, 0)]
#[case("ru", 11, 2)]
#[case("ar", 0, 0)]
#[case("ar", 1, 1)]
#[case("ar", 2, 2)]
#[case("ar", 5, 3)]
#[case("ar", 15, 4)]
#[case("ar", 100, 5)]
fn test_plural_index_reference_points(
	#[case] locale: &str,
	#[case] number: i64,
	#[case] expected: usize,
) {
	assert_eq!(plural_index(locale, number), expected);
}

proptest! {
	#[test]
	fn prop_unknown_key_returns_itself(key in "[a-z]{1,8}(\\.[a-z]{1,8}){0,3}") {
		let catalog = MessageCatalog::new("en").with_fallback("ru");

		prop_assert_eq!(catalog.get(&key, &Replacements::new(), None), key.clone());
		prop_assert_eq!(catalog.choice(&key, 3, &Replacements::new(), None), key.clone());
		prop_assert!(!catalog.has(&key, None));
	}

	#[test]
	fn prop_choice_always_injects_count(count in -1000i64..1000) {
		let mut catalog = MessageCatalog::new("en");
		catalog.merge_into_locale("en", tree_from_json(json!({"n": "[*,*] :count"})));
		let replace = Replacements::from([("count", "ignored")]);

		prop_assert_eq!(catalog.choice("n", count, &replace, None), count.to_string());
	}
}
