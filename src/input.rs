mod reader;
mod validate;

pub use reader::Reader;
pub use validate::{parse_menu_option, parse_non_negative_int, parse_positive_real};

use crate::errors::Result;
use std::fmt;

/// The text shown before a dimension is read. An inline prompt leaves the
/// cursor on the same line, so the value prompt follows it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prompt {
    pub text: &'static str,
    pub inline: bool,
}

impl Prompt {
    /// Returns a prompt printed on a line of its own
    pub const fn line(text: &'static str) -> Prompt {
        Prompt {
            text,
            inline: false,
        }
    }

    /// Returns a prompt followed by a space rather than a line break
    pub const fn inline(text: &'static str) -> Prompt {
        Prompt { text, inline: true }
    }
}

impl fmt::Display for Prompt {
    /// Formats the prompt exactly as it appears at the console
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.inline {
            write!(f, "{} ", self.text)
        } else {
            writeln!(f, "{}", self.text)
        }
    }
}

/// A source of validated dimension values for a calculation. Each method
/// shows the given prompt and returns only once an acceptable value has been
/// obtained, or fails if no further input can be obtained at all.
pub trait Dimensions {
    /// Returns a real number strictly greater than zero
    fn positive_real(&mut self, prompt: Prompt) -> Result<f64>;

    /// Returns an integer greater than or equal to zero
    fn non_negative_int(&mut self, prompt: Prompt) -> Result<u32>;
}
