use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tradedesk_model::{Contract, decode};

use crate::path::FieldPath;
use crate::resolve::resolve_decoded;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub field: FieldPath,
    pub direction: SortDirection,
}

impl Sort {
    pub fn ascending(field: impl Into<FieldPath>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: impl Into<FieldPath>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Stable multi-key sort by resolved field values. Each record's argument is
/// decoded once up front. Absent values order before present ones; values
/// that both parse as numbers compare numerically, otherwise lexicographically.
pub fn sort_contracts(contracts: &mut Vec<Contract>, sorts: &[Sort]) {
    if sorts.is_empty() || contracts.len() < 2 {
        return;
    }

    let mut keyed: Vec<(Vec<Option<String>>, Contract)> = contracts
        .drain(..)
        .map(|contract| {
            let decoded = decode(&contract.argument);
            let keys = sorts
                .iter()
                .map(|sort| resolve_decoded(&contract, &decoded, &sort.field))
                .collect();
            (keys, contract)
        })
        .collect();

    keyed.sort_by(|(a, _), (b, _)| compare_keys(a, b, sorts));
    contracts.extend(keyed.into_iter().map(|(_, contract)| contract));
}

fn compare_keys(a: &[Option<String>], b: &[Option<String>], sorts: &[Sort]) -> Ordering {
    for (i, sort) in sorts.iter().enumerate() {
        let ordering = compare_values(a[i].as_deref(), b[i].as_deref());
        let ordering = match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

fn compare_values(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => match (a.parse::<f64>(), b.parse::<f64>()) {
            (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => a.cmp(b),
        },
    }
}
