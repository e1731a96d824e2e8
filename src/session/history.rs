use crate::calculator::Value;
use std::fmt;

/// The results computed during one session, in the order they were
/// computed. Entries can only be appended.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct History {
    results: Vec<Value>,
}

impl History {
    /// Returns a new, empty history
    pub fn new() -> History {
        History {
            results: Vec::new(),
        }
    }

    /// Appends a result
    pub fn push(&mut self, value: Value) {
        self.results.push(value);
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns an iterator over the stored results, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.results.iter()
    }

    /// Returns the stored results as plain real numbers, oldest first
    pub fn values(&self) -> Vec<f64> {
        self.iter().map(Value::get).collect()
    }
}

impl fmt::Display for History {
    /// Formats the history as a header line followed by one result per line
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Resultados almacenados:")?;
        for value in self.iter() {
            writeln!(f, "{value}")?;
        }

        Ok(())
    }
}
