use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tradedesk_query::{FieldFilter, Sort};

use crate::config::CellValue;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewRequest {
    pub filters: Option<Vec<FieldFilter>>,
    #[serde(default)]
    pub sort: Vec<Sort>,
    pub skip: Option<usize>,
    pub take: Option<usize>,
}

/// One rendered record: cell values keyed by column key, in column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub id: String,
    pub cells: IndexMap<String, CellValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewResponse {
    pub rows: Vec<Row>,
    pub total: usize,
}
