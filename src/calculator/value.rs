use std::fmt;

/// A computed result. Displays as the shortest decimal that identifies the
/// double: plain decimal with at least one fractional digit for magnitudes
/// in [10^-3, 10^7), and scientific notation with an upper-case 'E'
/// otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Value(f64);

impl Value {
    /// Creates a new value
    pub fn new(value: f64) -> Value {
        Value(value)
    }

    /// Returns the underlying real number
    pub fn get(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Value {
    /// Formats a value as a string
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let r = self.0;
        if r.is_nan() {
            return write!(f, "NaN");
        }
        if r.is_infinite() {
            return write!(f, "{}", if r > 0.0 { "Infinity" } else { "-Infinity" });
        }

        let magnitude = r.abs();
        if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
            let s = r.to_string();
            if s.contains('.') {
                write!(f, "{s}")
            } else {
                write!(f, "{s}.0")
            }
        } else {
            // Rust renders e.g. "1.5e-5" or "1e7"; the mantissa always needs
            // a fractional digit
            let s = format!("{r:e}");
            let (mantissa, exponent) = s.split_once('e').unwrap_or((s.as_str(), "0"));
            if mantissa.contains('.') {
                write!(f, "{mantissa}E{exponent}")
            } else {
                write!(f, "{mantissa}.0E{exponent}")
            }
        }
    }
}
