pub mod config;
pub mod errors;
pub mod unit;

pub use config::*;
pub use errors::*;
pub use unit::*;
