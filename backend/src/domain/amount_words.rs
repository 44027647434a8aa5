//! Spelling of monetary amounts in Spanish.
//!
//! Converts a decimal amount as typed in the price field ("1.500.000,00",
//! with `.` as thousands separator and `,` as decimal separator) into the
//! sentence printed on a quotation:
//!
//! ```text
//! Son pesos un millón quinientos mil con 00/100
//! ```
//!
//! The conversion is a pure function with no retained state, so it can be
//! called on every keystroke of the price field and again at document
//! generation time.

use thiserror::Error;

/// Sentinel shown inline when the price field does not hold a valid amount.
pub const INVALID_AMOUNT_TEXT: &str = "Número inválido";

/// Sentence prefix for every spelled-out amount.
const PREFIX: &str = "Son pesos ";

const UNITS: [&str; 10] = [
    "", "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve",
];

/// Irregular words for 10..=19.
const TEENS: [&str; 10] = [
    "diez",
    "once",
    "doce",
    "trece",
    "catorce",
    "quince",
    "dieciséis",
    "diecisiete",
    "dieciocho",
    "diecinueve",
];

const TENS: [&str; 10] = [
    "",
    "diez",
    "veinte",
    "treinta",
    "cuarenta",
    "cincuenta",
    "sesenta",
    "setenta",
    "ochenta",
    "noventa",
];

const HUNDREDS: [&str; 10] = [
    "",
    "ciento",
    "doscientos",
    "trescientos",
    "cuatrocientos",
    "quinientos",
    "seiscientos",
    "setecientos",
    "ochocientos",
    "novecientos",
];

/// Scale tiers walked from largest to smallest: divisor, singular, plural.
///
/// "mil millones" has no distinct plural form, and the "mil" tier never takes
/// "un" ("mil", not "un mil").
const TIERS: [(u64, &str, &str); 4] = [
    (1_000_000_000_000, "billón", "billones"),
    (1_000_000_000, "mil millones", "mil millones"),
    (1_000_000, "millón", "millones"),
    (1_000, "mil", "mil"),
];

/// Upper bound (exclusive) on the whole-peso part. Beyond this the billón
/// tier count would leave the sub-thousand tables.
const MAX_INTEGER: u64 = 1_000_000_000_000_000;

/// The input cannot be read as a non-negative decimal amount.
///
/// Never raised as a panic; callers either match on it or go through
/// [`amount_text`], which renders it as the displayable sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", INVALID_AMOUNT_TEXT)]
pub struct InvalidAmount;

/// A monetary amount decomposed into whole pesos and cents in [0, 99].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount {
    integer: u64,
    cents: u8,
}

impl Amount {
    /// Parse an amount as typed in the form.
    ///
    /// `.` characters are stripped as thousands separators and `,` becomes
    /// the decimal point. Fractional digits beyond the second are rounded
    /// half-up to the nearest cent; a carry out of the cents propagates into
    /// the whole-peso part.
    pub fn parse(raw: &str) -> Result<Self, InvalidAmount> {
        let normalized = raw.trim().replace('.', "").replace(',', ".");
        Self::from_normalized(&normalized)
    }

    /// Decompose a numeric value.
    ///
    /// The value is rendered to its locale string form first so that it
    /// follows exactly the same path as typed input.
    pub fn from_value(value: f64) -> Result<Self, InvalidAmount> {
        if !value.is_finite() {
            return Err(InvalidAmount);
        }
        Self::parse(&format!("{:.2}", value).replace('.', ","))
    }

    /// Whole-peso part.
    pub fn integer(&self) -> u64 {
        self.integer
    }

    /// Cents in [0, 99].
    pub fn cents(&self) -> u8 {
        self.cents
    }

    fn from_normalized(normalized: &str) -> Result<Self, InvalidAmount> {
        if normalized.is_empty() {
            return Err(InvalidAmount);
        }
        let (int_digits, frac_digits) = match normalized.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (normalized, ""),
        };
        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err(InvalidAmount);
        }
        // A sign, a letter, or a second decimal point all land here.
        if !int_digits.bytes().all(|b| b.is_ascii_digit())
            || !frac_digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(InvalidAmount);
        }

        let mut integer: u64 = if int_digits.is_empty() {
            0
        } else {
            int_digits.parse().map_err(|_| InvalidAmount)?
        };

        let mut frac = frac_digits.bytes().map(|b| u32::from(b - b'0'));
        let mut cents: u32 =
            frac.next().unwrap_or(0) * 10 + frac.next().unwrap_or(0);
        // Round half-up at the third fractional digit.
        if frac.next().unwrap_or(0) >= 5 {
            cents += 1;
        }
        if cents == 100 {
            integer = integer.checked_add(1).ok_or(InvalidAmount)?;
            cents = 0;
        }

        if integer >= MAX_INTEGER {
            return Err(InvalidAmount);
        }

        Ok(Self {
            integer,
            cents: cents as u8,
        })
    }

    /// Full sentence: "Son pesos <amount in words> con DD/100".
    ///
    /// The cents clause is always appended, zero-padded, and the sentence is
    /// capitalized exactly once at its first character.
    pub fn in_words(&self) -> String {
        let mut remainder = self.integer;
        let mut parts: Vec<String> = Vec::new();

        for (divisor, singular, plural) in TIERS {
            let count = remainder / divisor;
            if count > 0 {
                let sub = sub_thousand(count as u16);
                if divisor == 1_000 {
                    parts.push(if count == 1 {
                        "mil".to_string()
                    } else {
                        format!("{} mil", sub)
                    });
                } else if count == 1 {
                    parts.push(format!("un {}", singular));
                } else {
                    parts.push(format!("{} {}", sub, plural));
                }
                remainder %= divisor;
            }
        }

        if remainder > 0 || parts.is_empty() {
            parts.push(sub_thousand(remainder as u16));
        }

        let mut phrase = parts.join(" ").trim().to_string();
        if phrase.is_empty() {
            // Amounts below one peso still name their zero whole part.
            phrase = "cero".to_string();
        }

        capitalize_first(format!("{}{} con {:02}/100", PREFIX, phrase, self.cents))
    }
}

/// Spelling for the price field as typed; parse failures come back as the
/// displayable sentinel instead of an error.
pub fn amount_text(raw: &str) -> String {
    match Amount::parse(raw) {
        Ok(amount) => amount.in_words(),
        Err(_) => INVALID_AMOUNT_TEXT.to_string(),
    }
}

/// Spell an integer in [0, 999]. Zero yields an empty string so tier
/// segments can be joined without special cases.
fn sub_thousand(n: u16) -> String {
    debug_assert!(n <= 999);
    if n == 100 {
        return "cien".to_string();
    }

    let mut out = String::new();
    let mut n = usize::from(n);

    if n >= 100 {
        out.push_str(HUNDREDS[n / 100]);
        out.push(' ');
        n %= 100;
    }

    if (10..20).contains(&n) {
        out.push_str(TEENS[n - 10]);
    } else if (21..=29).contains(&n) {
        // Contracted form: "veintiuno", not "veinte y uno".
        out.push_str("veinti");
        out.push_str(UNITS[n % 10]);
    } else {
        if n >= 20 {
            out.push_str(TENS[n / 10]);
            if n % 10 != 0 {
                out.push_str(" y ");
            }
        }
        if n % 10 > 0 {
            out.push_str(UNITS[n % 10]);
        }
    }

    out.trim().to_string()
}

fn capitalize_first(text: String) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => text,
    }
}
