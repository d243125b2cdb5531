pub mod combinations;
pub mod count;
pub mod demo;
mod error;

pub use combinations::Combinations;
pub use error::{Error, Result};
