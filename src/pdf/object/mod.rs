//! Secondary constructors for the drawable page objects a stamp annotation
//! can embed: stroked paths, placed images, and (reserved) inline text.

pub mod image;
pub mod path;
pub mod text;
