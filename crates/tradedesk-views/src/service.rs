use std::collections::HashMap;

use tradedesk_model::{Contract, decode};
use tradedesk_query::{FieldFilter, sort_contracts};
use tradedesk_store::ContractStore;

use crate::config::View;
use crate::error::ViewError;
use crate::loader::Loader;
use crate::request::{Row, ViewRequest, ViewResponse};

pub struct ViewService<L: Loader> {
    loader: L,
}

impl<L: Loader> ViewService<L> {
    pub fn new(loader: L) -> Self {
        Self { loader }
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Fill an empty store from the loader. A store that already holds data
    /// is left untouched.
    pub fn populate(
        &self,
        store: &mut ContractStore,
        metadata: &HashMap<String, String>,
    ) -> Result<(), ViewError> {
        if !store.is_empty() {
            return Ok(());
        }
        for contract in self.loader.load(metadata)? {
            store.insert(contract?)?;
        }
        Ok(())
    }

    pub fn view_data(
        &self,
        view: &View,
        store: &mut ContractStore,
        request: &ViewRequest,
        metadata: &HashMap<String, String>,
    ) -> Result<ViewResponse, ViewError> {
        // 1. Load data on first use
        self.populate(store, metadata)?;

        // 2. Merge view source filters with request filters
        let filters = merge_filters(&view.source.filter, request.filters.as_deref());

        // 3. Select matching contracts, decoding each argument once
        let mut contracts: Vec<Contract> = store
            .snapshot(view.include_archived)
            .into_iter()
            .filter(|contract| {
                let decoded = decode(&contract.argument);
                filters
                    .iter()
                    .all(|filter| filter.matches_decoded(contract, &decoded))
                    && view.source.search.matches_decoded(contract, &decoded)
            })
            .collect();

        // 4. Request sort wins over the view default
        let sort = if request.sort.is_empty() {
            &view.source.sort
        } else {
            &request.sort
        };
        sort_contracts(&mut contracts, sort);

        // 5. Total before skip/take
        let total = contracts.len();
        let rows = contracts
            .iter()
            .skip(request.skip.unwrap_or(0))
            .take(request.take.unwrap_or(usize::MAX))
            .map(|contract| build_row(view, contract))
            .collect();

        Ok(ViewResponse { rows, total })
    }
}

fn build_row(view: &View, contract: &Contract) -> Row {
    let cells = view
        .columns
        .iter()
        .map(|column| (column.key.clone(), (column.cell)(contract)))
        .collect();
    Row {
        id: contract.id.clone(),
        cells,
    }
}

/// Combine view filters with request filters. A record must match every
/// filter in the result.
pub fn merge_filters(
    view_filters: &[FieldFilter],
    request_filters: Option<&[FieldFilter]>,
) -> Vec<FieldFilter> {
    let mut merged = view_filters.to_vec();
    if let Some(filters) = request_filters {
        merged.extend_from_slice(filters);
    }
    merged
}
