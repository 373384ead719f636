//! Best-effort numeric parsing for key file contents.
//!
//! Kernel attributes are plain decimal text, but a key file can hold
//! anything. Parsing takes the longest numeric prefix (after leading
//! whitespace) and ignores the rest, and reports the no-digits case
//! explicitly instead of folding it into zero.

/// Outcome of a best-effort parse
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric<T> {
    Valid(T),
    NotNumeric,
}

impl<T> Numeric<T> {
    pub fn valid(self) -> Option<T> {
        match self {
            Numeric::Valid(value) => Some(value),
            Numeric::NotNumeric => None,
        }
    }
}

impl<T: Default> Numeric<T> {
    /// The parsed value, or the type's zero when nothing numeric was found
    pub fn or_zero(self) -> T {
        self.valid().unwrap_or_default()
    }
}

/// Length of an optional sign followed by at least one ASCII digit
fn signed_digits_len(bytes: &[u8]) -> Option<usize> {
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = bytes[sign..].iter().take_while(|b| b.is_ascii_digit()).count();
    (digits > 0).then_some(sign + digits)
}

/// Parse a leading decimal integer, e.g. `"5000000\n"` or `"42abc"`.
pub fn parse_int(text: &str) -> Numeric<i64> {
    let text = text.trim_start();
    match signed_digits_len(text.as_bytes()) {
        Some(len) => text[..len]
            .parse()
            .map_or(Numeric::NotNumeric, Numeric::Valid),
        None => Numeric::NotNumeric,
    }
}

/// Parse a leading decimal floating point number, e.g. `"23456"` or `"-1.5e3x"`.
pub fn parse_float(text: &str) -> Numeric<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();

    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = bytes[sign..].iter().take_while(|b| b.is_ascii_digit()).count();
    let mut end = sign + int_digits;
    let mut mantissa_digits = int_digits;

    if bytes.get(end) == Some(&b'.') {
        let frac_digits = bytes[end + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
            mantissa_digits += frac_digits;
        }
    }

    if mantissa_digits == 0 {
        return Numeric::NotNumeric;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        if let Some(exp_len) = signed_digits_len(&bytes[end + 1..]) {
            end += 1 + exp_len;
        }
    }

    text[..end]
        .parse()
        .map_or(Numeric::NotNumeric, Numeric::Valid)
}
