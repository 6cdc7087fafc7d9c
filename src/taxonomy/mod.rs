pub mod colors;

pub use colors::{language_color, DEFAULT_LANGUAGE_COLOR};
