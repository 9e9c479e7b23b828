use serde::{Deserialize, Serialize};

use crate::template::TemplateId;
use crate::value::Value;

/// A contract record as the browser sees it: an opaque identifier, the
/// schema it was created from, and its argument payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: String,
    pub template_id: TemplateId,
    pub argument: Value,
    #[serde(default)]
    pub archived: bool,
}

impl Contract {
    pub fn new(id: impl Into<String>, template_id: TemplateId, argument: Value) -> Self {
        Self {
            id: id.into(),
            template_id,
            argument,
            archived: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_round_trip() {
        let contract = Contract::new(
            "asset-1",
            TemplateId::new("Cash", "Cash"),
            Value::record(vec![
                ("owner", Value::party("Alice")),
                ("currency", Value::text("USD")),
                ("amount", Value::decimal("100.0")),
            ]),
        );

        let json = serde_json::to_value(&contract).unwrap();
        assert_eq!(json["templateId"], "Cash:Cash");
        assert_eq!(json["archived"], false);

        let back: Contract = serde_json::from_value(json).unwrap();
        assert_eq!(back, contract);
    }

    #[test]
    fn archived_defaults_to_false() {
        let json = serde_json::json!({
            "id": "c-1",
            "templateId": "Bond:Bond",
            "argument": { "record": { "fields": [] } }
        });
        let contract: Contract = serde_json::from_value(json).unwrap();
        assert!(!contract.archived);
    }
}
