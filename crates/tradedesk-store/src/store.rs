use indexmap::IndexMap;
use tradedesk_model::Contract;

use crate::error::StoreError;

/// In-memory contract set, keyed by contract id, iterated in insertion
/// order. Plain data: callers sharing it across threads wrap it themselves.
#[derive(Debug, Default)]
pub struct ContractStore {
    contracts: IndexMap<String, Contract>,
}

impl ContractStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a contract. Ids are unique; inserting an existing id is an error.
    pub fn insert(&mut self, contract: Contract) -> Result<(), StoreError> {
        if self.contracts.contains_key(&contract.id) {
            return Err(StoreError::Duplicate(contract.id));
        }
        self.contracts.insert(contract.id.clone(), contract);
        Ok(())
    }

    /// Mark a contract archived. Archived contracts stay in the store and
    /// only show in snapshots that opt in.
    pub fn archive(&mut self, id: &str) -> Result<(), StoreError> {
        match self.contracts.get_mut(id) {
            Some(contract) => {
                contract.archived = true;
                Ok(())
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Contract> {
        self.contracts.get(id)
    }

    /// Contracts in insertion order. Archived ones are skipped unless
    /// `include_archived` is set.
    pub fn snapshot(&self, include_archived: bool) -> Vec<Contract> {
        self.contracts
            .values()
            .filter(|contract| include_archived || !contract.archived)
            .cloned()
            .collect()
    }

    /// Total count, archived included.
    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }
}
