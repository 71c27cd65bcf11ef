use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AxisError, AxisResult};

/// Compact suffixes for large integers: `(threshold, divisor, suffix, decimals)`.
const COMPACT_UNITS: [(f64, f64, &str, usize); 3] = [
    (1_000_000_000.0, 1_000_000_000.0, "bn", 2),
    (1_000_000.0, 1_000_000.0, "m", 2),
    (10_000.0, 1_000.0, "k", 1),
];

/// How tick values are rendered as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NumberDisplayMode {
    /// Whole numbers grouped by thousands, no suffix.
    PlainInteger,
    /// Whole numbers abbreviated with `k`, `m` or `bn` suffixes.
    CompactInteger,
    /// Grouped decimals with a precision shared across all values.
    #[default]
    Float,
    /// Values multiplied by 100 with a trailing `%`.
    Percent,
}

impl FromStr for NumberDisplayMode {
    type Err = AxisError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "integer" | "plain_integer" | "plain-integer" => Ok(Self::PlainInteger),
            "compact" | "compact_integer" | "compact-integer" => Ok(Self::CompactInteger),
            "float" | "decimal" => Ok(Self::Float),
            "percent" | "percentage" => Ok(Self::Percent),
            other => Err(AxisError::InvalidConfig(format!(
                "unknown number display mode `{other}`"
            ))),
        }
    }
}

/// Formatter settings shared by every label of one tick set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    pub mode: NumberDisplayMode,
    /// Prefix `$`; ignored in percent mode.
    pub currency: bool,
    pub show_trailing_zeroes: bool,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            mode: NumberDisplayMode::Float,
            currency: false,
            show_trailing_zeroes: true,
        }
    }
}

impl NumberFormat {
    #[must_use]
    pub fn new(mode: NumberDisplayMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_currency(mut self, currency: bool) -> Self {
        self.currency = currency;
        self
    }

    #[must_use]
    pub fn with_trailing_zeroes(mut self, show_trailing_zeroes: bool) -> Self {
        self.show_trailing_zeroes = show_trailing_zeroes;
        self
    }

    /// Parses a display mode name into a format with default flags.
    pub fn parse_mode(mode: &str) -> AxisResult<Self> {
        Ok(Self::new(mode.parse()?))
    }

    pub fn format(self, values: &[f64]) -> Vec<String> {
        format_values(values, self)
    }
}

/// Decimal places shared by labels of `values`, derived from the order of
/// magnitude of their spread.
///
/// Zero or undefined spreads use one decimal place.
#[must_use]
pub fn decimal_precision(values: &[f64]) -> usize {
    let finite = values.iter().copied().filter(|value| !value.is_nan());
    let (min, max) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
        (min.min(value), max.max(value))
    });
    let range = max - min;
    if !range.is_finite() || range == 0.0 {
        return 1;
    }

    let magnitude = range.log10().floor() as i64;
    match magnitude {
        m if m > 1 => 0,
        1 => 1,
        m => m.unsigned_abs() as usize + 2,
    }
}

/// Formats every value with one shared precision and display mode.
#[must_use]
pub fn format_values(values: &[f64], format: NumberFormat) -> Vec<String> {
    match format.mode {
        NumberDisplayMode::PlainInteger => values
            .iter()
            .map(|value| {
                format_whole_number(*value, format, |value| format_grouped(value, 0), "")
            })
            .collect(),
        NumberDisplayMode::CompactInteger => values
            .iter()
            .map(|value| format_compact(*value, format))
            .collect(),
        NumberDisplayMode::Float => {
            let precision = decimal_precision(values);
            values
                .iter()
                .map(|value| {
                    let text = finish_number(format_grouped(*value, precision), format);
                    with_currency(text, format.currency)
                })
                .collect()
        }
        NumberDisplayMode::Percent => {
            let scaled: Vec<f64> = values.iter().map(|value| value * 100.0).collect();
            let precision = decimal_precision(&scaled);
            scaled
                .iter()
                .map(|value| {
                    let mut text = finish_number(format_grouped(*value, precision), format);
                    text.push('%');
                    text
                })
                .collect()
        }
    }
}

/// Formats one integer-like value with a `k`/`m`/`bn` suffix.
#[must_use]
pub fn format_compact_integer(value: f64, show_trailing_zeroes: bool) -> String {
    format_compact(
        value,
        NumberFormat::new(NumberDisplayMode::CompactInteger)
            .with_trailing_zeroes(show_trailing_zeroes),
    )
}

/// Removes trailing fractional zeroes and a dangling decimal point.
///
/// Integer digits are never touched.
#[must_use]
pub fn strip_trailing_zeroes(text: &str) -> &str {
    let mut stripped = text;
    while stripped.contains('.') && (stripped.ends_with('0') || stripped.ends_with('.')) {
        stripped = &stripped[..stripped.len() - 1];
    }
    stripped
}

/// Inserts `,` separators into the integer digits of a formatted number.
#[must_use]
pub fn group_thousands(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };
    if !integer.bytes().all(|byte| byte.is_ascii_digit()) {
        return text.to_owned();
    }

    let mut grouped = String::with_capacity(text.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

fn format_compact(value: f64, format: NumberFormat) -> String {
    let magnitude = value.abs();
    let unit = COMPACT_UNITS
        .iter()
        .find(|(threshold, ..)| magnitude >= *threshold);
    match unit {
        Some((_, divisor, suffix, decimals)) => format_whole_number(
            value,
            format,
            |value| format_grouped(value / divisor, *decimals),
            suffix,
        ),
        None => format_whole_number(value, format, |value| format_grouped(value, 0), ""),
    }
}

fn format_whole_number(
    value: f64,
    format: NumberFormat,
    render: impl Fn(f64) -> String,
    suffix: &str,
) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    let mut text = finish_number(render(value), format);
    text.push_str(suffix);
    with_currency(text, format.currency)
}

fn finish_number(text: String, format: NumberFormat) -> String {
    let text = if format.show_trailing_zeroes {
        text
    } else {
        strip_trailing_zeroes(&text).to_owned()
    };
    text.replace("nan", "")
}

fn with_currency(text: String, currency: bool) -> String {
    if currency { format!("${text}") } else { text }
}

fn format_grouped(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }
    group_thousands(&format!("{value:.precision$}"))
}
