use thiserror::Error;

/// Literal backslash followed by `n`, as left behind by escaped wiki markup.
const ESCAPED_NEWLINE: &str = "\\n";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumberError {
    #[error("no leading digits")]
    NotANumber,
    #[error("value out of range")]
    Overflow,
}

/// Strip escaped newlines and surrounding whitespace from a cell label.
///
/// Removal repeats until no escaped newline is left, so that `clean` is
/// idempotent even for inputs like `\\nn`.
pub fn clean(text: &str) -> String {
    let mut out = text.to_string();
    while out.contains(ESCAPED_NEWLINE) {
        out = out.replace(ESCAPED_NEWLINE, "");
    }
    out.trim().to_string()
}

/// Parse the leading integer of `text` the way a browser's `parseInt` does:
/// leading whitespace is skipped, an optional sign is accepted, and parsing
/// stops at the first non-digit. `"12abc"` is 12, `"abc"` is an error.
pub fn parse_int(text: &str) -> Result<i64, NumberError> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(NumberError::NotANumber);
    }

    let mut value: i64 = 0;
    for digit in rest[..digits_len].bytes() {
        let digit = i64::from(digit - b'0');
        value = value
            .checked_mul(10)
            .and_then(|v| {
                if negative {
                    v.checked_sub(digit)
                } else {
                    v.checked_add(digit)
                }
            })
            .ok_or(NumberError::Overflow)?;
    }
    Ok(value)
}
