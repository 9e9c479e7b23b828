use std::collections::BTreeMap;

use crate::value::Value;

/// The flattened form of a structured argument: dotted field path → display
/// text, as produced by [`decode`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedArgument {
    fields: BTreeMap<String, String>,
}

impl DecodedArgument {
    pub fn get(&self, path: &str) -> Option<&str> {
        self.fields.get(path).map(String::as_str)
    }

    /// Field text, empty when the field is absent. Cells degrade to empty
    /// values rather than failing on missing data.
    pub fn get_or_empty(&self, path: &str) -> String {
        self.get(path).unwrap_or_default().to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Normalize a structured argument into a plain mapping of field path to
/// display text.
///
/// Record fields flatten under dotted names (`c.dvpId`), set optionals
/// collapse into their payload, and scalars render to display text. Nodes
/// with no text form (lists, empty optionals) are skipped. Decoding never
/// fails; a malformed argument just decodes to fewer fields.
pub fn decode(value: &Value) -> DecodedArgument {
    let mut fields = BTreeMap::new();
    walk("", value, &mut fields);
    DecodedArgument { fields }
}

fn walk(prefix: &str, value: &Value, out: &mut BTreeMap<String, String>) {
    match value {
        Value::Record { fields } => {
            for field in fields {
                let path = if prefix.is_empty() {
                    field.label.clone()
                } else {
                    format!("{prefix}.{}", field.label)
                };
                walk(&path, &field.value, out);
            }
        }
        Value::Optional(Some(inner)) => walk(prefix, inner, out),
        Value::Optional(None) | Value::List(_) => {}
        scalar => {
            if !prefix.is_empty() {
                if let Some(text) = scalar.display_text() {
                    out.insert(prefix.to_string(), text);
                }
            }
        }
    }
}
