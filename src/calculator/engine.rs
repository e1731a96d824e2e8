use super::shape::{Operation, Shape};
use super::value::Value;
use crate::errors::Result;
use crate::input::{Dimensions, Prompt};
use tracing::debug;

/// The four-digit value of π used by every circle formula. Circle results
/// are defined in terms of it, so this is not `std::f64::consts::PI`.
pub const PI: f64 = 3.1416;

const BASE_PROMPT: Prompt = Prompt::line("Base:");
const EXPONENT_PROMPT: Prompt = Prompt::line("Exponente (entero, puede ser 0 o positivo):");

/// An area or perimeter formula: the prompts for its dimensions, in the
/// order they are read, and a function computing the result from those
/// dimensions
pub struct Formula {
    pub prompts: &'static [Prompt],
    pub compute: fn(&[f64]) -> f64,
}

impl Formula {
    /// Applies the formula to dimension values given in prompt order
    pub fn apply(&self, dimensions: &[f64]) -> f64 {
        debug_assert_eq!(dimensions.len(), self.prompts.len());
        (self.compute)(dimensions)
    }
}

/// Formulas indexed by shape, then by measure (area, then perimeter)
static FORMULAS: [[Formula; 2]; 5] = [
    [
        Formula {
            prompts: &[Prompt::inline("Radio:")],
            compute: |d| circle_area(d[0]),
        },
        Formula {
            prompts: &[Prompt::line("Radio:")],
            compute: |d| circle_perimeter(d[0]),
        },
    ],
    [
        Formula {
            prompts: &[Prompt::line("Lado:")],
            compute: |d| square_area(d[0]),
        },
        Formula {
            prompts: &[Prompt::line("Lado:")],
            compute: |d| square_perimeter(d[0]),
        },
    ],
    [
        Formula {
            prompts: &[Prompt::line("Base:"), Prompt::line("Altura:")],
            compute: |d| triangle_area(d[0], d[1]),
        },
        Formula {
            prompts: &[
                Prompt::line("Lado 1:"),
                Prompt::line("Lado 2:"),
                Prompt::line("Lado 3:"),
            ],
            compute: |d| triangle_perimeter(d[0], d[1], d[2]),
        },
    ],
    [
        Formula {
            prompts: &[Prompt::line("Base:"), Prompt::line("Altura:")],
            compute: |d| rectangle_area(d[0], d[1]),
        },
        Formula {
            prompts: &[Prompt::line("Base:"), Prompt::line("Altura:")],
            compute: |d| rectangle_perimeter(d[0], d[1]),
        },
    ],
    [
        Formula {
            prompts: &[Prompt::line("Lado:"), Prompt::line("Apotema:")],
            compute: |d| pentagon_area(d[0], d[1]),
        },
        Formula {
            prompts: &[Prompt::line("Lado:")],
            compute: |d| pentagon_perimeter(d[0]),
        },
    ],
];

pub fn circle_area(radius: f64) -> f64 {
    PI * radius * radius
}

pub fn circle_perimeter(radius: f64) -> f64 {
    2.0 * PI * radius
}

pub fn square_area(side: f64) -> f64 {
    side * side
}

pub fn square_perimeter(side: f64) -> f64 {
    4.0 * side
}

pub fn triangle_area(base: f64, height: f64) -> f64 {
    0.5 * base * height
}

pub fn triangle_perimeter(a: f64, b: f64, c: f64) -> f64 {
    a + b + c
}

pub fn rectangle_area(base: f64, height: f64) -> f64 {
    base * height
}

pub fn rectangle_perimeter(base: f64, height: f64) -> f64 {
    2.0 * (base + height)
}

/// Area of a regular pentagon from its side length and apothem
pub fn pentagon_area(side: f64, apothem: f64) -> f64 {
    (5.0 * side * apothem) / 2.0
}

pub fn pentagon_perimeter(side: f64) -> f64 {
    5.0 * side
}

/// Raises a base to a non-negative integer exponent.
///
/// Defined recursively as `1` for a zero exponent and
/// `base * power(base, exponent - 1)` otherwise. The loop below multiplies
/// in exactly that order, so results are bit-for-bit the same as the
/// recursive definition without its call depth.
pub fn power(base: f64, exponent: u32) -> f64 {
    let mut result = 1.0;
    for _ in 0..exponent {
        let next = base * result;
        if next.to_bits() == result.to_bits() {
            // Fixed point: no remaining factor changes the product
            return next;
        }
        result = next;
    }

    result
}

/// Returns the formula table column for an area or perimeter operation
fn measure_column(operation: Operation) -> Option<usize> {
    match operation {
        Operation::Area => Some(0),
        Operation::Perimeter => Some(1),
        Operation::Power => None,
    }
}

/// Dispatches calculation requests to the appropriate formula, reading any
/// required dimensions from a `Dimensions` source
pub struct Engine {
    formulas: &'static [[Formula; 2]; 5],
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Returns a new calculation engine
    pub fn new() -> Engine {
        Engine {
            formulas: &FORMULAS,
        }
    }

    /// Returns the formula for a shape in the given table column
    fn formula(&self, shape: Shape, column: usize) -> &'static Formula {
        &self.formulas[shape.index()][column]
    }

    /// Calculates a result for the shape with the given menu number. The
    /// shape is ignored for the power operation, and is otherwise rejected
    /// with `Error::UnknownShape` if it does not name a supported figure.
    pub fn calculate<D: Dimensions>(
        &self,
        shape: u32,
        operation: Operation,
        dims: &mut D,
    ) -> Result<Value> {
        let Some(column) = measure_column(operation) else {
            let base = dims.positive_real(BASE_PROMPT)?;
            let exponent = dims.non_negative_int(EXPONENT_PROMPT)?;
            debug!(base, exponent, "calculating power");
            return Ok(Value::new(power(base, exponent)));
        };

        let shape = Shape::try_from(shape)?;
        let formula = self.formula(shape, column);

        let mut dimensions = Vec::with_capacity(formula.prompts.len());
        for prompt in formula.prompts {
            dimensions.push(dims.positive_real(*prompt)?);
        }
        debug!(%shape, %operation, ?dimensions, "applying formula");

        Ok(Value::new(formula.apply(&dimensions)))
    }
}
