use serde::{Deserialize, Serialize};
use tradedesk_model::{Contract, DecodedArgument, decode};

/// Free-text search over a record. Empty means no constraint; anything else
/// is a case-insensitive substring test against the record id, the qualified
/// template id, and every decoded argument value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Search(String);

impl Search {
    pub fn new(term: impl Into<String>) -> Self {
        Self(term.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn matches(&self, contract: &Contract) -> bool {
        self.matches_decoded(contract, &decode(&contract.argument))
    }

    pub fn matches_decoded(&self, contract: &Contract, decoded: &DecodedArgument) -> bool {
        if self.0.is_empty() {
            return true;
        }
        let term = self.0.to_lowercase();
        if contract.id.to_lowercase().contains(&term)
            || contract.template_id.qualified().to_lowercase().contains(&term)
        {
            return true;
        }
        decoded
            .iter()
            .any(|(_, value)| value.to_lowercase().contains(&term))
    }
}

impl From<&str> for Search {
    fn from(term: &str) -> Self {
        Self(term.to_string())
    }
}
