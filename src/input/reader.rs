use super::validate::{parse_menu_option, parse_non_negative_int, parse_positive_real};
use super::{Dimensions, Prompt};
use crate::errors::{Error, Result};
use std::io::{BufRead, Write};
use tracing::debug;

const MENU_PROMPT: &str = "Opción: ";
const VALUE_PROMPT: &str = "Valor: ";

/// Reads validated values from a line-oriented input stream, writing
/// prompts and error messages to an output stream. Every read repeats until
/// a line is accepted.
pub struct Reader<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Reader<R, W> {
    /// Returns a new reader over the given input and output streams
    pub fn new(input: R, output: W) -> Reader<R, W> {
        Reader { input, output }
    }

    /// Writes a full line of text to the output stream
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Writes text without a trailing newline and flushes the output stream
    pub fn print(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Reads a menu selection in the range [0, max]
    pub fn read_menu_option(&mut self, max: u32) -> Result<u32> {
        self.read_validated(MENU_PROMPT, |line| parse_menu_option(line, max))
    }

    /// Reads an integer greater than or equal to zero
    pub fn read_positive_int(&mut self) -> Result<u32> {
        self.read_validated(VALUE_PROMPT, parse_non_negative_int)
    }

    /// Reads a real number strictly greater than zero
    pub fn read_positive_double(&mut self) -> Result<f64> {
        self.read_validated(VALUE_PROMPT, parse_positive_real)
    }

    /// Repeatedly prompts for and reads a line until the validator accepts
    /// it. Rejected lines are reported to the user; only stream failures are
    /// returned to the caller.
    fn read_validated<T, F>(&mut self, prompt: &str, validate: F) -> Result<T>
    where
        F: Fn(&str) -> Result<T>,
    {
        loop {
            self.print(prompt)?;

            let line = self.read_line()?;
            match validate(&line) {
                Ok(value) => return Ok(value),
                Err(e) if e.is_retryable() => {
                    debug!(input = line.trim(), error = ?e, "rejected input");
                    self.say(&e.to_string())?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Reads a single line, failing if the input stream is exhausted
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::EndOfInput);
        }

        Ok(line)
    }
}

impl<R: BufRead, W: Write> Dimensions for Reader<R, W> {
    fn positive_real(&mut self, prompt: Prompt) -> Result<f64> {
        self.print(&prompt.to_string())?;
        self.read_positive_double()
    }

    fn non_negative_int(&mut self, prompt: Prompt) -> Result<u32> {
        self.print(&prompt.to_string())?;
        self.read_positive_int()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    fn reader(input: &str) -> Reader<Cursor<&[u8]>, Vec<u8>> {
        Reader::new(Cursor::new(input.as_bytes()), Vec::new())
    }

    fn output_text<R>(r: &Reader<R, Vec<u8>>) -> String {
        String::from_utf8_lossy(&r.output).to_string()
    }

    #[test]
    fn test_read_menu_option() -> Result<()> {
        let mut r = reader("abc\n7\n-2\n 4 \n");
        assert_eq!(r.read_menu_option(5)?, 4);
        assert_eq!(
            output_text(&r),
            "Opción: Por favor ingresa un número válido.\n\
             Opción: Opción fuera de rango.\n\
             Opción: Opción fuera de rango.\n\
             Opción: "
        );

        Ok(())
    }

    #[test]
    fn test_read_positive_int() -> Result<()> {
        let mut r = reader("x\n-1\n0\n");
        assert_eq!(r.read_positive_int()?, 0);
        assert_eq!(
            output_text(&r),
            "Valor: Número inválido.\nValor: Debe ser 0 o mayor.\nValor: "
        );

        Ok(())
    }

    #[test]
    fn test_read_positive_double() -> Result<()> {
        let mut r = reader("\n0\n-3.5\n2.25\n");
        assert_eq!(r.read_positive_double()?, 2.25);
        assert_eq!(
            output_text(&r),
            "Valor: Entrada inválida. Ingresa un número válido.\n\
             Valor: El valor debe ser mayor que 0.\n\
             Valor: El valor debe ser mayor que 0.\n\
             Valor: "
        );

        Ok(())
    }

    #[test]
    fn test_end_of_input() {
        let mut r = reader("");
        assert_eq!(r.read_menu_option(3), Err(Error::EndOfInput));

        let mut r = reader("nope\n");
        assert_eq!(r.read_positive_double(), Err(Error::EndOfInput));
    }

    #[test]
    fn test_line_without_newline() -> Result<()> {
        let mut r = reader("3");
        assert_eq!(r.read_menu_option(3)?, 3);

        Ok(())
    }

    #[test]
    fn test_dimensions() -> Result<()> {
        let mut r = reader("1.5\n0.5\n2\n");
        assert_eq!(r.positive_real(Prompt::inline("Radio:"))?, 1.5);
        assert_eq!(r.positive_real(Prompt::line("Lado:"))?, 0.5);
        assert_eq!(r.non_negative_int(Prompt::line("Exponente:"))?, 2);
        assert_eq!(
            output_text(&r),
            "Radio: Valor: Lado:\nValor: Exponente:\nValor: "
        );

        Ok(())
    }
}
