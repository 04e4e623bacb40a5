//! `DD/MM/YYYY` input mask for the two date fields.

use regex::Regex;
use std::sync::LazyLock;

static NON_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9]").expect("constant regex"));
static DAY_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{2})([0-9])").expect("constant regex"));
static MONTH_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{2})/([0-9]{2})([0-9])").expect("constant regex"));

const MASK_WIDTH: usize = 10;

/// Reformats whatever was typed into `DD/MM/YYYY` shape.
///
/// Non-digits are dropped, a `/` goes after the day once a third digit
/// appears and after the month once a fifth digit appears, and the result is
/// cut to ten characters. Dates are not checked: `99/99/9999` passes.
pub fn mask(raw: &str) -> String {
    let digits = NON_DIGITS.replace_all(raw, "");
    let with_day = DAY_SEPARATOR.replacen(&digits, 1, "$1/$2");
    let mut masked = MONTH_SEPARATOR.replacen(&with_day, 1, "$1/$2/$3").into_owned();
    // Only ASCII digits and '/' are left, so byte truncation is safe.
    masked.truncate(MASK_WIDTH);
    masked
}
