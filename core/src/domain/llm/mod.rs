pub mod ports;
pub mod prompt;

pub use ports::*;
