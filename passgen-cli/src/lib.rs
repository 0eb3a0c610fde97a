pub mod error;
pub mod select;

pub use error::Error;
pub use select::{Preset, build_generator};
