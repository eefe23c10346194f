use std::fmt;

#[derive(Debug)]
pub struct AppError(pub String);

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for AppError {}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UniqError {
    #[error("input contains a value that is not a Unit")]
    TypeMismatch,
    #[error("fields \"{}\" are not present in Unit", .0.join(", "))]
    UnknownFields(Vec<String>),
}
