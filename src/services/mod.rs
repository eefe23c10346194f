pub mod canonical;
pub mod storage;
pub mod uniq;

pub use uniq::{uniq, uniq_units, FieldSet};
