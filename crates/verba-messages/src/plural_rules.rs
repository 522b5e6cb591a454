//! Locale plural-index rules
//!
//! Maps a count to the 0-based plural form index for a locale's base
//! language. The table follows the gettext/Zend rule families; an unknown
//! language has a single form.

/// Extract the base language code: `-` is normalized to `_` and everything
/// from the first `_` on is dropped (`pt-BR` and `pt_BR` both give `pt`).
pub fn base_language(locale: &str) -> &str {
	locale.split(['-', '_']).next().unwrap_or(locale)
}

/// Determine the plural form index for `number` in `locale`.
///
/// Supports:
/// - no plural distinction (az, ja, zh, ko, tr, vi, ...): always 0
/// - Germanic-style (en, de, es, it, pt, ...): 1 singular, rest plural
/// - French-style (fr, hi, fil, ...): 0 and 1 singular, rest plural
/// - East Slavic and Serbo-Croatian (ru, uk, be, sr, hr, bs): 3 forms
/// - Czech/Slovak, Irish, Lithuanian, Latvian, Polish, Romanian: 3 forms
/// - Slovenian, Maltese, Welsh: 4 forms
/// - Macedonian: 2 forms on the last digit
/// - Arabic: 6 forms
///
/// # Example
/// ```
/// use verba_messages::plural_index;
///
/// assert_eq!(plural_index("ru", 21), 0);
/// assert_eq!(plural_index("ru_RU", 3), 1);
/// assert_eq!(plural_index("ar", 100), 5);
/// assert_eq!(plural_index("xx", 7), 0);
/// ```
pub fn plural_index(locale: &str, number: i64) -> usize {
	let n = number;

	match base_language(locale) {
		"az" | "bo" | "dz" | "id" | "ja" | "jv" | "ka" | "km" | "kn" | "ko" | "ms" | "th" | "tr"
		| "vi" | "zh" => 0,

		"af" | "bn" | "bg" | "ca" | "da" | "de" | "el" | "en" | "eo" | "es" | "et" | "eu" | "fa"
		| "fi" | "fo" | "fur" | "fy" | "gl" | "gu" | "ha" | "he" | "hu" | "is" | "it" | "ku"
		| "lb" | "ml" | "mn" | "mr" | "nah" | "nb" | "ne" | "nl" | "nn" | "no" | "om" | "or"
		| "pa" | "pap" | "ps" | "pt" | "so" | "sq" | "sv" | "sw" | "ta" | "te" | "tk" | "ur"
		| "zu" => usize::from(n != 1),

		"am" | "bh" | "fil" | "fr" | "gun" | "hi" | "hy" | "ln" | "mg" | "nso" | "ti" | "wa"
		| "xbr" => usize::from(n != 0 && n != 1),

		// form 0: n%10==1 && n%100!=11
		// form 1: n%10 in 2..=4 && (n%100<10 || n%100>=20)
		"be" | "bs" | "hr" | "ru" | "sr" | "uk" => {
			let n10 = n % 10;
			let n100 = n % 100;
			if n10 == 1 && n100 != 11 {
				0
			} else if (2..=4).contains(&n10) && (n100 < 10 || n100 >= 20) {
				1
			} else {
				2
			}
		}

		"cs" | "sk" => {
			if n == 1 {
				0
			} else if (2..=4).contains(&n) {
				1
			} else {
				2
			}
		}

		"ga" => match n {
			1 => 0,
			2 => 1,
			_ => 2,
		},

		"lt" => {
			let n10 = n % 10;
			let n100 = n % 100;
			if n10 == 1 && n100 != 11 {
				0
			} else if n10 >= 2 && (n100 < 10 || n100 >= 20) {
				1
			} else {
				2
			}
		}

		"sl" => match n % 100 {
			1 => 0,
			2 => 1,
			3 | 4 => 2,
			_ => 3,
		},

		"mk" => usize::from(n % 10 != 1),

		"mt" => {
			let n100 = n % 100;
			if n == 1 {
				0
			} else if n == 0 || (n100 > 1 && n100 < 11) {
				1
			} else if n100 > 10 && n100 < 20 {
				2
			} else {
				3
			}
		}

		"lv" => {
			if n == 0 {
				0
			} else if n % 10 == 1 && n % 100 != 11 {
				1
			} else {
				2
			}
		}

		// Same as East Slavic except the teen exclusion is 12..=14
		"pl" => {
			let n10 = n % 10;
			let n100 = n % 100;
			if n == 1 {
				0
			} else if (2..=4).contains(&n10) && (n100 < 12 || n100 > 14) {
				1
			} else {
				2
			}
		}

		"cy" => match n {
			1 => 0,
			2 => 1,
			8 | 11 => 2,
			_ => 3,
		},

		"ro" => {
			let n100 = n % 100;
			if n == 1 {
				0
			} else if n == 0 || (n100 > 0 && n100 < 20) {
				1
			} else {
				2
			}
		}

		"ar" => {
			let n100 = n % 100;
			if n == 0 {
				0
			} else if n == 1 {
				1
			} else if n == 2 {
				2
			} else if (3..=10).contains(&n100) {
				3
			} else if (11..=99).contains(&n100) {
				4
			} else {
				5
			}
		}

		_ => 0,
	}
}
