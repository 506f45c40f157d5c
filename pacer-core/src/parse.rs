//! Lenient text-to-number parsing.
//!
//! Every configuration field is free text typed into an editor. Nothing here ever fails: empty or
//! unparsable text is replaced by the caller's fallback value.

/// Parse `text` as a float, returning `fallback` when it is empty or malformed.
///
/// Accepts the decimal forms a JMeter property editor would: an optional `d`/`f` type suffix
/// (`"10d"`) and the literal words `Infinity` and `NaN`. Lowercase `inf`/`nan` are rejected.
pub fn parse_f64_or(text: &str, fallback: f64) -> f64 {
    parse_decimal(text.trim()).unwrap_or(fallback)
}

fn parse_decimal(text: &str) -> Option<f64> {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned == "Infinity" || unsigned == "NaN" {
        return text.parse().ok();
    }

    let number = text.strip_suffix(['d', 'D', 'f', 'F']).unwrap_or(text);
    if number
        .bytes()
        .any(|b| b.is_ascii_alphabetic() && !matches!(b, b'e' | b'E'))
    {
        return None;
    }
    number.parse().ok()
}

/// Parse `text` as a float and truncate it toward zero, so `"2.9"` becomes `2`.
pub fn parse_i64_or(text: &str, fallback: f64) -> i64 {
    // `as` saturates on overflow and maps NaN to 0.
    parse_f64_or(text, fallback) as i64
}

/// Optional variant of [`parse_f64_or`]: blank text means "not given".
pub fn parse_optional_f64(text: &str, fallback: f64) -> Option<f64> {
    if text.trim().is_empty() {
        None
    } else {
        Some(parse_f64_or(text, fallback))
    }
}

/// Optional variant of [`parse_i64_or`]: blank text means "not given".
pub fn parse_optional_i64(text: &str, fallback: f64) -> Option<i64> {
    if text.trim().is_empty() {
        None
    } else {
        Some(parse_i64_or(text, fallback))
    }
}
