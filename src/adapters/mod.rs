// Adapters layer: concrete command sources and output renderers.

pub mod render;
pub mod source;

pub use render::{JsonRenderer, TextRenderer};
pub use source::LineSource;
