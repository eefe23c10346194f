pub mod collections;
pub mod io;

pub use collections::*;
pub use io::*;
