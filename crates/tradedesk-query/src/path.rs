use std::fmt;

use serde::{Deserialize, Serialize};

/// A dotted field path into a record: `"id"`, `"template.id"`,
/// `"argument.c.dvpId"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldPath(String);

impl FieldPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Strip a leading segment, keeping the rest of the path.
    pub fn strip_segment(&self, segment: &str) -> Option<&str> {
        self.0
            .strip_prefix(segment)
            .and_then(|rest| rest.strip_prefix('.'))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

impl From<String> for FieldPath {
    fn from(path: String) -> Self {
        Self(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_split_on_dots() {
        let path = FieldPath::from("argument.c.dvpId");
        let segments: Vec<_> = path.segments().collect();
        assert_eq!(segments, vec!["argument", "c", "dvpId"]);
    }

    #[test]
    fn strip_segment_requires_dot_boundary() {
        let path = FieldPath::from("argument.owner");
        assert_eq!(path.strip_segment("argument"), Some("owner"));
        assert_eq!(path.strip_segment("arg"), None);
        assert_eq!(FieldPath::from("argument").strip_segment("argument"), None);
    }

    #[test]
    fn serializes_as_plain_string() {
        let path = FieldPath::from("template.id");
        assert_eq!(serde_json::to_string(&path).unwrap(), "\"template.id\"");
        let back: FieldPath = serde_json::from_str("\"template.id\"").unwrap();
        assert_eq!(back, path);
    }
}
