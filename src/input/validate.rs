use crate::errors::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Real number syntax accepted at the console: an optional sign, then
/// `NaN`, `Infinity`, or decimal digits with an optional fraction and
/// exponent and an optional `f`/`d` type suffix
static REAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:NaN|Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?[fFdD]?)$")
        .expect("bad real number pattern")
});

/// Parses a menu selection, accepting only integers in the closed range
/// [0, max]
pub fn parse_menu_option(text: &str, max: u32) -> Result<u32> {
    let text = text.trim();
    let option = text
        .parse::<i32>()
        .map_err(|_| Error::InvalidMenuOption(text.to_string()))?;

    match u32::try_from(option) {
        Ok(n) if n <= max => Ok(n),
        _ => Err(Error::OptionOutOfRange(option)),
    }
}

/// Parses an integer which must be zero or greater
pub fn parse_non_negative_int(text: &str) -> Result<u32> {
    let text = text.trim();
    let value = text
        .parse::<i32>()
        .map_err(|_| Error::InvalidInteger(text.to_string()))?;

    u32::try_from(value).map_err(|_| Error::NegativeInteger(value))
}

/// Parses a real number which must be strictly greater than zero. NaN is
/// not greater than zero and is rejected as such. Spellings such as `inf`
/// or `nan` are not numbers here, even though `f64::from_str` takes them.
pub fn parse_positive_real(text: &str) -> Result<f64> {
    let text = text.trim();
    if !REAL_RE.is_match(text) {
        return Err(Error::InvalidReal(text.to_string()));
    }

    let digits = text.strip_suffix(['f', 'F', 'd', 'D']).unwrap_or(text);
    let value = digits
        .parse::<f64>()
        .map_err(|_| Error::InvalidReal(text.to_string()))?;

    if value > 0.0 {
        Ok(value)
    } else {
        Err(Error::NonPositiveReal(value))
    }
}
