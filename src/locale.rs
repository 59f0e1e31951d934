//! Built-in locale tables.
//!
//! Two tables ship with the crate: French and Canadian English. Any other tag
//! falls back to Canadian English rather than failing.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Locale driving the truncation marker and number separators
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "fr_FR")]
    French,
    #[default]
    #[serde(rename = "en_CA")]
    CanadianEnglish,
}

/// Strings and separators of one locale
#[derive(Debug)]
pub struct LocaleTable {
    pub tag: &'static str,
    pub truncated: &'static str,
    pub decimal_separator: char,
    pub thousands_separator: char,
}

static TABLES: Lazy<HashMap<Locale, LocaleTable>> = Lazy::new(|| {
    HashMap::from([
        (
            Locale::French,
            LocaleTable {
                tag: "fr_FR",
                truncated: "tronqué",
                decimal_separator: ',',
                thousands_separator: '\u{202f}',
            },
        ),
        (
            Locale::CanadianEnglish,
            LocaleTable {
                tag: "en_CA",
                truncated: "truncated",
                decimal_separator: '.',
                thousands_separator: ',',
            },
        ),
    ])
});

/// How a chart renders numeric values
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumberFormat {
    /// `#.#s`: one decimal, SI suffix
    Si,
    /// Thousands grouped, up to five decimals, trailing zeros dropped
    #[default]
    Plain,
}

impl NumberFormat {
    pub fn pattern(&self) -> &'static str {
        match self {
            NumberFormat::Si => "#.#s",
            NumberFormat::Plain => "#,###.#####",
        }
    }
}

/// Scales of the `#.#s` number format, smallest first
const SI_PREFIXES: [(f64, &str); 5] = [
    (1.0, ""),
    (1e3, "k"),
    (1e6, "M"),
    (1e9, "G"),
    (1e12, "T"),
];

/// Significant digits kept when one decimal would round a value to zero
const SMALL_VALUE_DIGITS: usize = 2;

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    let rounded = (value * scale).round() / scale;
    // -0 prints with its sign
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// At most `decimals` decimals, trailing zeros dropped
fn fixed(value: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals, value);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let mut grouped =
        String::with_capacity(digits.len() + digits.len() / 3 * separator.len_utf8());
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}

impl Locale {
    /// Resolve a host locale tag. Tags whose primary subtag is `fr` select
    /// French; everything else (including empty or unknown tags) falls back to
    /// Canadian English.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        if primary == "fr" {
            Locale::French
        } else {
            if !tag.is_empty() && primary != "en" {
                tracing::debug!(tag, "unknown locale tag, falling back to en_CA");
            }
            Locale::CanadianEnglish
        }
    }

    pub fn table(&self) -> &'static LocaleTable {
        // Every variant is inserted above.
        &TABLES[self]
    }

    pub fn tag(&self) -> &'static str {
        self.table().tag
    }

    /// Marker attached to a numeric axis that does not start at zero
    pub fn truncated_label(&self) -> &'static str {
        self.table().truncated
    }

    pub fn format(&self, value: f64, format: NumberFormat) -> String {
        match format {
            NumberFormat::Si => self.format_si(value),
            NumberFormat::Plain => self.format_plain(value),
        }
    }

    /// Up to five decimals, locale decimal separator, thousands grouped with
    /// the locale separator
    pub fn format_plain(&self, value: f64) -> String {
        let table = self.table();
        let text = fixed(round_to(value, 5), 5);
        let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
        let (sign, digits) = match integer.strip_prefix('-') {
            Some(digits) => ("-", digits),
            None => ("", integer),
        };

        let mut formatted = sign.to_string();
        formatted.push_str(&group_thousands(digits, table.thousands_separator));
        if !fraction.is_empty() {
            formatted.push(table.decimal_separator);
            formatted.push_str(fraction);
        }
        formatted
    }

    /// Format a value the way the `#.#s` format does: at most one decimal,
    /// SI suffix for large magnitudes, locale decimal separator.
    ///
    /// The suffix is settled after rounding, so `999.96` reads `1k`. Values
    /// that one decimal would show as zero keep two significant digits.
    pub fn format_si(&self, value: f64) -> String {
        let magnitude = value.abs();
        let mut index = SI_PREFIXES
            .iter()
            .rposition(|(factor, _)| magnitude >= *factor)
            .unwrap_or(0);
        let mut rounded = round_to(value / SI_PREFIXES[index].0, 1);
        if rounded.abs() >= 1000.0 && index + 1 < SI_PREFIXES.len() {
            index += 1;
            rounded = round_to(value / SI_PREFIXES[index].0, 1);
        }

        let text = if rounded == 0.0 && value != 0.0 {
            let leading_zeros = (-magnitude.log10()).floor().max(0.0) as usize;
            fixed(value, leading_zeros + SMALL_VALUE_DIGITS)
        } else {
            fixed(rounded, 1)
        };
        format!(
            "{}{}",
            text.replace('.', &self.table().decimal_separator.to_string()),
            SI_PREFIXES[index].1
        )
    }
}
