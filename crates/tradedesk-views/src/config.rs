use serde::Serialize;
use tradedesk_model::Contract;
use tradedesk_query::{FieldFilter, Search, Sort};

/// Builds one cell's display value from a record. Plain function pointer:
/// cells capture no state, so two identical configurations compare equal.
pub type CellFn = fn(&Contract) -> CellValue;

/// A named table layout over a filtered, sorted set of contracts.
/// Serializes to the wire shape the front-end consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct View {
    #[serde(rename = "type")]
    pub kind: ViewKind,
    pub title: String,
    pub include_archived: bool,
    pub source: TableSource,
    pub columns: Vec<Column>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewKind {
    TableView,
}

/// What records populate a view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSource {
    #[serde(rename = "type")]
    pub kind: SourceKind,
    pub filter: Vec<FieldFilter>,
    pub search: Search,
    pub sort: Vec<Sort>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Contracts,
}

/// One column of a view. The cell function stays server-side and is not
/// serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub key: String,
    pub title: String,
    #[serde(skip_serializing)]
    pub cell: CellFn,
    pub sortable: bool,
    pub width: u32,
    pub weight: u32,
    pub alignment: Alignment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Right,
    Center,
}

/// A typed, renderable unit of display data for one (record, column) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum CellValue {
    Text(String),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn as_text(&self) -> &str {
        match self {
            CellValue::Text(value) => value,
        }
    }
}
