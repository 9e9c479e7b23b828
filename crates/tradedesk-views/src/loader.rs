use std::collections::HashMap;

use tradedesk_model::Contract;

use crate::error::ViewError;

/// Trait for loading contracts from an external source.
///
/// Consumers implement this to connect the views to upstream systems. The
/// loader runs once, when a store has no data yet. Returns an iterator so
/// implementations can stream rather than buffer.
pub trait Loader: Send + Sync {
    fn load(
        &self,
        metadata: &HashMap<String, String>,
    ) -> Result<Box<dyn Iterator<Item = Result<Contract, ViewError>> + '_>, ViewError>;
}

/// Loader that yields nothing, for stores seeded by other means.
pub struct NoopLoader;

impl Loader for NoopLoader {
    fn load(
        &self,
        _metadata: &HashMap<String, String>,
    ) -> Result<Box<dyn Iterator<Item = Result<Contract, ViewError>> + '_>, ViewError> {
        Ok(Box::new(std::iter::empty()))
    }
}

/// Loads contracts from an upstream endpoint that answers with a JSON array
/// of records.
pub struct HttpLoader {
    url: String,
}

impl HttpLoader {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Loader for HttpLoader {
    fn load(
        &self,
        _metadata: &HashMap<String, String>,
    ) -> Result<Box<dyn Iterator<Item = Result<Contract, ViewError>> + '_>, ViewError> {
        let mut response = ureq::get(&self.url)
            .call()
            .map_err(|e| ViewError::Loader(e.to_string()))?;
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ViewError::Loader(e.to_string()))?;
        let contracts: Vec<Contract> =
            serde_json::from_str(&body).map_err(|e| ViewError::Loader(e.to_string()))?;
        Ok(Box::new(contracts.into_iter().map(Ok)))
    }
}
