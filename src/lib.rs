pub mod models;
pub mod services;
pub mod utils;

pub use models::{Field, UniqError, Unit, Value};
pub use services::{uniq, uniq_units, FieldSet};
