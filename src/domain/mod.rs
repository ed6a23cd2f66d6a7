//! Domain types shared by the store and the view.

pub mod color;
pub mod pixel;

pub use color::{Color, ColorParseError};
pub use pixel::{GridConfig, Pixel};
