pub mod formatters;
pub mod options;
pub mod views;

pub use options::{DisplayOptions, RenderMode};
