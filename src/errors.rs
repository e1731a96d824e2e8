pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading input or calculating a result. The displayed
/// text of each variant is the message shown to the user at the console.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    #[error("end of input")]
    EndOfInput,
    #[error("Número inválido.")]
    InvalidInteger(String),
    #[error("Por favor ingresa un número válido.")]
    InvalidMenuOption(String),
    #[error("Entrada inválida. Ingresa un número válido.")]
    InvalidReal(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Debe ser 0 o mayor.")]
    NegativeInteger(i32),
    #[error("El valor debe ser mayor que 0.")]
    NonPositiveReal(f64),
    #[error("Opción fuera de rango.")]
    OptionOutOfRange(i32),
    #[error("Figura desconocida.")]
    UnknownShape(u32),
}

impl Error {
    /// Returns true if the error was caused by a single rejected line of
    /// input, meaning the same prompt can simply be asked again
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::InvalidInteger(_)
                | Error::InvalidMenuOption(_)
                | Error::InvalidReal(_)
                | Error::NegativeInteger(_)
                | Error::NonPositiveReal(_)
                | Error::OptionOutOfRange(_)
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}
