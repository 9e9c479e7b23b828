use std::fmt;

use tradedesk_store::StoreError;

#[derive(Debug)]
pub enum ViewError {
    Store(StoreError),
    Loader(String),
    UnknownView(String),
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewError::Store(e) => write!(f, "store error: {e}"),
            ViewError::Loader(msg) => write!(f, "loader error: {msg}"),
            ViewError::UnknownView(key) => write!(f, "view not found: {key}"),
        }
    }
}

impl std::error::Error for ViewError {}

impl ViewError {
    pub fn status_code(&self) -> http::StatusCode {
        match self {
            ViewError::UnknownView(_) => http::StatusCode::NOT_FOUND,
            ViewError::Store(_) | ViewError::Loader(_) => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ViewError {
    fn from(e: StoreError) -> Self {
        ViewError::Store(e)
    }
}
