//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year, for the footer.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Turns a phone number into a `tel:` link target by dropping everything but
/// digits and a leading `+`.
///
/// Usage in templates: `<a href="tel:{{ phone|tel_href }}">`
#[askama::filter_fn]
pub fn tel_href(phone: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(tel_digits(&phone.to_string()))
}

fn tel_digits(phone: &str) -> String {
    let trimmed = phone.trim();
    let mut out = String::with_capacity(trimmed.len());
    if trimmed.starts_with('+') {
        out.push('+');
    }
    out.extend(trimmed.chars().filter(char::is_ascii_digit));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tel_digits() {
        assert_eq!(tel_digits("(555) 010-0199"), "5550100199");
        assert_eq!(tel_digits(" +1 555 0100 "), "+15550100");
    }
}
