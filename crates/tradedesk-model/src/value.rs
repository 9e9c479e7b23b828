use serde::{Deserialize, Serialize};

/// A contract's structured argument payload.
///
/// Decimal amounts keep their source text; the display layer never
/// re-formats numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Value {
    Text(String),
    Party(String),
    Decimal(String),
    Int(i64),
    Bool(bool),
    /// Microseconds since the epoch.
    Timestamp(i64),
    ContractId(String),
    Optional(Option<Box<Value>>),
    List(Vec<Value>),
    Record { fields: Vec<Field> },
}

/// One labeled field of a record value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub label: String,
    pub value: Value,
}

impl Value {
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn party(s: impl Into<String>) -> Self {
        Value::Party(s.into())
    }

    pub fn decimal(s: impl Into<String>) -> Self {
        Value::Decimal(s.into())
    }

    pub fn record<L: Into<String>>(fields: Vec<(L, Value)>) -> Self {
        Value::Record {
            fields: fields
                .into_iter()
                .map(|(label, value)| Field {
                    label: label.into(),
                    value,
                })
                .collect(),
        }
    }

    /// Look up a field by label. `None` unless this is a record holding it.
    pub fn field(&self, label: &str) -> Option<&Value> {
        match self {
            Value::Record { fields } => fields.iter().find(|f| f.label == label).map(|f| &f.value),
            _ => None,
        }
    }

    /// Follow a chain of record fields, descending through set optionals.
    /// Any miss along the way yields `None`.
    pub fn at_path(&self, segments: &[&str]) -> Option<&Value> {
        let mut current = self;
        for segment in segments {
            if let Value::Optional(inner) = current {
                current = inner.as_deref()?;
            }
            current = current.field(segment)?;
        }
        Some(current)
    }

    /// Render a scalar for display. Composite values have no text form.
    pub fn display_text(&self) -> Option<String> {
        match self {
            Value::Text(s) | Value::Party(s) | Value::Decimal(s) | Value::ContractId(s) => {
                Some(s.clone())
            }
            Value::Int(i) => Some(i.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Timestamp(t) => Some(t.to_string()),
            Value::Optional(Some(inner)) => inner.display_text(),
            Value::Optional(None) | Value::List(_) | Value::Record { .. } => None,
        }
    }
}
