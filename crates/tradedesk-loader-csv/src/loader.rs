use std::collections::HashMap;
use std::path::PathBuf;

use tradedesk_model::Contract;
use tradedesk_views::{Loader, ViewError};

use crate::error::CsvError;
use crate::parse::{parse_assets, parse_trades};

/// Loads seed contracts from a pair of files on disk: an asset list and a
/// trade list. Files are read on every load, so edits show up when a fresh
/// store populates.
pub struct CsvLoader {
    asset_path: PathBuf,
    trade_path: PathBuf,
}

impl CsvLoader {
    pub fn new(asset_path: impl Into<PathBuf>, trade_path: impl Into<PathBuf>) -> Self {
        Self {
            asset_path: asset_path.into(),
            trade_path: trade_path.into(),
        }
    }

    /// Read and parse both files, assets first then trades.
    pub fn contracts(&self) -> Result<Vec<Contract>, CsvError> {
        let mut contracts = parse_assets(&std::fs::read_to_string(&self.asset_path)?)?;
        contracts.extend(parse_trades(&std::fs::read_to_string(&self.trade_path)?)?);
        Ok(contracts)
    }
}

impl Loader for CsvLoader {
    fn load(
        &self,
        _metadata: &HashMap<String, String>,
    ) -> Result<Box<dyn Iterator<Item = Result<Contract, ViewError>> + '_>, ViewError> {
        let contracts = self
            .contracts()
            .map_err(|e| ViewError::Loader(e.to_string()))?;
        Ok(Box::new(contracts.into_iter().map(Ok)))
    }
}
