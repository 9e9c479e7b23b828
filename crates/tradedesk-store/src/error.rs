use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Duplicate(String),
    NotFound(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Duplicate(id) => write!(f, "contract already exists: {id}"),
            StoreError::NotFound(id) => write!(f, "contract not found: {id}"),
        }
    }
}

impl std::error::Error for StoreError {}
