use crate::errors::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A supported geometric figure, numbered as in the shape menu
pub enum Shape {
    Circle = 1,
    Square = 2,
    Triangle = 3,
    Rectangle = 4,
    Pentagon = 5,
}

impl Shape {
    /// All shapes, in menu order
    pub const ALL: [Shape; 5] = [
        Shape::Circle,
        Shape::Square,
        Shape::Triangle,
        Shape::Rectangle,
        Shape::Pentagon,
    ];

    /// Returns the label shown for the shape in the menu
    pub fn label(&self) -> &'static str {
        match self {
            Shape::Circle => "Círculo",
            Shape::Square => "Cuadrado",
            Shape::Triangle => "Triángulo",
            Shape::Rectangle => "Rectángulo",
            Shape::Pentagon => "Pentágono",
        }
    }

    /// Returns the zero-based position of the shape in the formula table
    pub(super) fn index(&self) -> usize {
        *self as usize - 1
    }
}

impl TryFrom<u32> for Shape {
    type Error = Error;

    /// Converts a menu number to a shape
    fn try_from(n: u32) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Shape::Circle),
            2 => Ok(Shape::Square),
            3 => Ok(Shape::Triangle),
            4 => Ok(Shape::Rectangle),
            5 => Ok(Shape::Pentagon),
            _ => Err(Error::UnknownShape(n)),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A calculation, numbered as in the operation menu. Power does not depend
/// on the selected shape.
pub enum Operation {
    Area = 1,
    Perimeter = 2,
    Power = 3,
}

impl Operation {
    /// All operations, in menu order
    pub const ALL: [Operation; 3] = [Operation::Area, Operation::Perimeter, Operation::Power];

    /// Returns the label shown for the operation in the menu
    pub fn label(&self) -> &'static str {
        match self {
            Operation::Area => "Área",
            Operation::Perimeter => "Perímetro",
            Operation::Power => "Potencia",
        }
    }

    /// Converts a menu number to an operation
    pub fn from_menu(n: u32) -> Option<Operation> {
        match n {
            1 => Some(Operation::Area),
            2 => Some(Operation::Perimeter),
            3 => Some(Operation::Power),
            _ => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
