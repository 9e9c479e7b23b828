use serde::{Deserialize, Serialize};
use tradedesk_model::{Contract, DecodedArgument, decode};

use crate::path::FieldPath;
use crate::resolve::resolve_decoded;

/// A single source filter.
///
/// An empty `value` selects records where the field is present and non-empty,
/// which is how views pick out their record kinds. A non-empty `value`
/// requires an exact match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFilter {
    pub field: FieldPath,
    pub value: String,
}

impl FieldFilter {
    pub fn new(field: impl Into<FieldPath>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn matches(&self, contract: &Contract) -> bool {
        self.matches_decoded(contract, &decode(&contract.argument))
    }

    pub fn matches_decoded(&self, contract: &Contract, decoded: &DecodedArgument) -> bool {
        match resolve_decoded(contract, decoded, &self.field) {
            Some(resolved) if self.value.is_empty() => !resolved.is_empty(),
            Some(resolved) => resolved == self.value,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use tradedesk_model::{TemplateId, Value};

    use super::*;

    fn cash(owner: &str, amount: &str) -> Contract {
        Contract::new(
            format!("asset-{owner}"),
            TemplateId::new("Cash", "Cash"),
            Value::record(vec![
                ("issuer", Value::party("Bank")),
                ("owner", Value::party(owner)),
                ("currency", Value::text("USD")),
                ("amount", Value::decimal(amount)),
            ]),
        )
    }

    #[test]
    fn empty_value_selects_present_fields() {
        let filter = FieldFilter::new("argument.amount", "");
        assert!(filter.matches(&cash("Alice", "100.0")));

        let no_amount = Contract::new(
            "asset-x",
            TemplateId::new("Cash", "Cash"),
            Value::record(vec![("owner", Value::party("Alice"))]),
        );
        assert!(!filter.matches(&no_amount));
    }

    #[test]
    fn empty_value_rejects_empty_fields() {
        let blank = Contract::new(
            "asset-x",
            TemplateId::new("Cash", "Cash"),
            Value::record(vec![("amount", Value::text(""))]),
        );
        assert!(!FieldFilter::new("argument.amount", "").matches(&blank));
    }

    #[test]
    fn non_empty_value_requires_exact_match() {
        let filter = FieldFilter::new("argument.owner", "Alice");
        assert!(filter.matches(&cash("Alice", "1.0")));
        assert!(!filter.matches(&cash("Bob", "1.0")));
        assert!(!filter.matches(&cash("alice", "1.0")));
    }

    #[test]
    fn serializes_with_field_and_value_keys() {
        let filter = FieldFilter::new("argument.owner", "Alice");
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "field": "argument.owner", "value": "Alice" })
        );
    }
}
