//! Decimal point to decimal comma rewrite.
//!
//! Every `.` with a digit on both sides becomes `,`. Digits and everything
//! else are left alone, so version strings and IP addresses are rewritten too.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

static DECIMAL_POINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d)\.(\d)").expect("decimal point pattern is valid"));

/// Rewrite `digit.digit` as `digit,digit` everywhere in `text`.
///
/// A match consumes its right-hand digit, so `1.2.3` needs a second sweep to
/// reach the boundary after `2`. The loop stops once a sweep changes nothing,
/// which makes the pass idempotent.
pub fn normalize_decimals(text: &str) -> String {
    let mut current = match DECIMAL_POINT.replace_all(text, "$1,$2") {
        Cow::Borrowed(_) => return text.to_string(),
        Cow::Owned(next) => next,
    };

    loop {
        match DECIMAL_POINT.replace_all(&current, "$1,$2") {
            Cow::Borrowed(_) => return current,
            Cow::Owned(next) => current = next,
        }
    }
}
