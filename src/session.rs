mod history;

pub use history::History;

use crate::calculator::{Engine, Operation, Shape};
use crate::errors::{Error, Result};
use crate::input::Reader;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// The highest option on the shape menu
const SHAPE_MENU_MAX: u32 = 5;

/// The highest option on the operation menu
const OPERATION_MENU_MAX: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A position in the menu-driven control loop
enum State {
    SelectShape,
    /// A shape has been chosen, identified by its menu number
    SelectOperation(u32),
    Terminal,
}

/// Drives the menu loop for one interactive session, dispatching requests
/// to the calculation engine and recording every result
pub struct Session<R, W> {
    reader: Reader<R, W>,
    engine: Engine,
    history: History,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Returns a new session with an empty history
    pub fn new(reader: Reader<R, W>) -> Session<R, W> {
        Session {
            reader,
            engine: Engine::new(),
            history: History::new(),
        }
    }

    /// Runs the session until the user chooses to exit or the input is
    /// exhausted, then prints and returns the history of results
    pub fn run(mut self) -> Result<History> {
        let mut state = State::SelectShape;

        while state != State::Terminal {
            state = match self.step(state) {
                Ok(next) => next,
                Err(Error::EndOfInput) => {
                    info!("input closed, ending session");
                    State::Terminal
                }
                Err(e) => return Err(e),
            };
        }

        self.reader.print(&self.history.to_string())?;
        info!(results = self.history.len(), "session ended");

        Ok(self.history)
    }

    /// Performs the work for the current state and returns the next state
    fn step(&mut self, state: State) -> Result<State> {
        debug!(?state, "entering state");

        match state {
            State::SelectShape => {
                self.show_shape_menu()?;
                match self.reader.read_menu_option(SHAPE_MENU_MAX)? {
                    0 => Ok(State::Terminal),
                    shape => Ok(State::SelectOperation(shape)),
                }
            }
            State::SelectOperation(shape) => {
                self.show_operation_menu()?;
                let choice = self.reader.read_menu_option(OPERATION_MENU_MAX)?;
                if let Some(operation) = Operation::from_menu(choice) {
                    self.calculate(shape, operation)?;
                }

                Ok(State::SelectShape)
            }
            State::Terminal => Ok(State::Terminal),
        }
    }

    /// Calculates and records a single result. Errors caused by the request
    /// itself are reported to the user and leave the history untouched.
    fn calculate(&mut self, shape: u32, operation: Operation) -> Result<()> {
        match self.engine.calculate(shape, operation, &mut self.reader) {
            Ok(value) => {
                info!(shape, %operation, %value, "calculated result");
                self.history.push(value);
                self.reader.say(&format!("Resultado: {value}"))
            }
            Err(e @ Error::UnknownShape(_)) => {
                warn!(error = ?e, "calculation rejected");
                self.reader.say(&e.to_string())
            }
            Err(e) if e.is_retryable() => {
                warn!(error = ?e, "unexpected invalid input during calculation");
                self.reader.say("Entrada inválida. Intenta de nuevo.")
            }
            Err(e) => Err(e),
        }
    }

    fn show_shape_menu(&mut self) -> Result<()> {
        self.reader.say("\nElige una figura:")?;
        for shape in Shape::ALL {
            self.reader
                .say(&format!("{}. {}", shape as u32, shape.label()))?;
        }
        self.reader.say("0. Salir")
    }

    fn show_operation_menu(&mut self) -> Result<()> {
        self.reader.say("Elige una operación:")?;
        for operation in Operation::ALL {
            self.reader
                .say(&format!("{}. {}", operation as u32, operation.label()))?;
        }
        self.reader.say("0. Volver")
    }
}
