mod engine;
mod shape;
mod value;

pub use engine::{
    circle_area, circle_perimeter, pentagon_area, pentagon_perimeter, power, rectangle_area,
    rectangle_perimeter, square_area, square_perimeter, triangle_area, triangle_perimeter, Engine,
    Formula, PI,
};
pub use shape::{Operation, Shape};
pub use value::Value;
