//! Value types, the appearance-operator toolkit, annotation builders, and
//! page-object constructors.

pub mod annotation;
pub mod appearance;
pub mod color;
pub mod line_style;
pub mod matrix;
pub mod object;
pub mod point;
pub mod quad_points;
pub mod rect;
