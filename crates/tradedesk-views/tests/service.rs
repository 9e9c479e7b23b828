use std::collections::HashMap;

use tradedesk_model::{Contract, TemplateId, Value};
use tradedesk_query::{Search, Sort};
use tradedesk_store::ContractStore;
use tradedesk_views::*;

fn cash(id: &str, owner: &str, amount: &str) -> Contract {
    Contract::new(
        id,
        TemplateId::new("Cash", "Cash"),
        Value::record(vec![
            ("issuer", Value::party("Bank")),
            ("owner", Value::party(owner)),
            ("currency", Value::text("USD")),
            ("amount", Value::decimal(amount)),
        ]),
    )
}

fn bond(id: &str, owner: &str, isin: &str, amount: &str) -> Contract {
    Contract::new(
        id,
        TemplateId::new("Bond", "Bond"),
        Value::record(vec![
            ("issuer", Value::party("Bank")),
            ("owner", Value::party(owner)),
            ("isin", Value::text(isin)),
            ("amount", Value::decimal(amount)),
        ]),
    )
}

fn trade(id: &str, entity: &str, dvp_id: &str) -> Contract {
    Contract::new(
        id,
        TemplateId::new("Dvp", entity),
        Value::record(vec![(
            "c",
            Value::record(vec![
                ("dvpId", Value::text(dvp_id)),
                ("buyer", Value::party("Alice")),
                ("seller", Value::party("Bob")),
                ("bondIssuer", Value::party("Bank")),
                ("bondIsin", Value::text("BOND-123")),
                ("bondAmount", Value::decimal("500.0")),
                ("cashIssuer", Value::party("Bank")),
                ("cashCurrency", Value::text("USD")),
                ("cashAmount", Value::decimal("1000.0")),
            ]),
        )]),
    )
}

fn seed_store() -> ContractStore {
    let mut store = ContractStore::new();
    store.insert(cash("asset-1", "Alice", "1000.0")).unwrap();
    store.insert(cash("asset-2", "Bob", "2500.0")).unwrap();
    store
        .insert(bond("asset-3", "Alice", "BOND-123", "500.0"))
        .unwrap();
    store.insert(trade("trade-1", "DvpProposal", "t-1")).unwrap();
    store.insert(trade("trade-2", "Dvp", "t-2")).unwrap();
    store.archive("trade-2").unwrap();
    store
}

fn service() -> ViewService<NoopLoader> {
    ViewService::new(NoopLoader)
}

fn view(key: &str, revision: ConfigRevision, party: &str) -> View {
    custom_views(&ViewContext::new("user-1", party, "trader"), revision)
        .shift_remove(key)
        .unwrap()
}

fn row_ids(response: &ViewResponse) -> Vec<&str> {
    response.rows.iter().map(|r| r.id.as_str()).collect()
}

// ── Filtering ───────────────────────────────────────────────────

#[test]
fn assets_view_selects_only_assets() {
    let mut store = seed_store();
    let view = view("assets", ConfigRevision::V1, "Alice");

    let response = service()
        .view_data(&view, &mut store, &ViewRequest::default(), &HashMap::new())
        .unwrap();

    assert_eq!(response.total, 3);
    assert_eq!(row_ids(&response), vec!["asset-1", "asset-2", "asset-3"]);
}

#[test]
fn v2_assets_view_binds_owner_to_party() {
    let mut store = seed_store();
    let view = view("assets", ConfigRevision::V2, "Alice");

    let response = service()
        .view_data(&view, &mut store, &ViewRequest::default(), &HashMap::new())
        .unwrap();

    assert_eq!(row_ids(&response), vec!["asset-1", "asset-3"]);
}

#[test]
fn trades_view_selects_trades_and_archived() {
    let mut store = seed_store();
    let view = view("trades", ConfigRevision::V2, "Alice");

    let response = service()
        .view_data(&view, &mut store, &ViewRequest::default(), &HashMap::new())
        .unwrap();

    assert_eq!(row_ids(&response), vec!["trade-1", "trade-2"]);
    assert_eq!(response.rows[0].cells["status"].as_text(), "Proposed");
    assert_eq!(response.rows[1].cells["status"].as_text(), "Accepted");
}

#[test]
fn assets_view_hides_archived() {
    let mut store = seed_store();
    store.archive("asset-1").unwrap();
    let view = view("assets", ConfigRevision::V1, "Alice");

    let response = service()
        .view_data(&view, &mut store, &ViewRequest::default(), &HashMap::new())
        .unwrap();

    assert_eq!(row_ids(&response), vec!["asset-2", "asset-3"]);
}

#[test]
fn request_filters_narrow_view_filters() {
    let mut store = seed_store();
    let view = view("assets", ConfigRevision::V1, "Alice");

    let request = ViewRequest {
        filters: Some(vec![tradedesk_query::FieldFilter::new(
            "argument.owner",
            "Bob",
        )]),
        ..ViewRequest::default()
    };
    let response = service()
        .view_data(&view, &mut store, &request, &HashMap::new())
        .unwrap();

    assert_eq!(row_ids(&response), vec!["asset-2"]);
}

// ── Cells ───────────────────────────────────────────────────────

#[test]
fn rows_carry_cells_keyed_by_column() {
    let mut store = seed_store();
    let view = view("assets", ConfigRevision::V2, "Alice");

    let response = service()
        .view_data(&view, &mut store, &ViewRequest::default(), &HashMap::new())
        .unwrap();

    let row = &response.rows[0];
    assert_eq!(row.id, "asset-1");
    assert_eq!(row.cells["id"].as_text(), "asset-1");
    assert_eq!(row.cells["type"].as_text(), "Cash");
    assert_eq!(row.cells["owner"].as_text(), "Alice");
    assert_eq!(row.cells["symbol"].as_text(), "USD");
    assert_eq!(row.cells["amount"].as_text(), "1000.0");

    let bond_row = &response.rows[1];
    assert_eq!(bond_row.cells["type"].as_text(), "Bond");
    assert_eq!(bond_row.cells["symbol"].as_text(), "BOND-123");
}

#[test]
fn trade_cells_read_nested_terms() {
    let mut store = seed_store();
    let view = view("trades", ConfigRevision::V2, "Alice");

    let response = service()
        .view_data(&view, &mut store, &ViewRequest::default(), &HashMap::new())
        .unwrap();

    let row = &response.rows[0];
    assert_eq!(row.cells["dvp.id"].as_text(), "t-1");
    assert_eq!(row.cells["buyer"].as_text(), "Alice");
    assert_eq!(row.cells["seller"].as_text(), "Bob");
    assert_eq!(row.cells["ccy"].as_text(), "USD");
    assert_eq!(row.cells["cash"].as_text(), "1000.0");
    assert_eq!(row.cells["isin"].as_text(), "BOND-123");
    assert_eq!(row.cells["bond"].as_text(), "500.0");
}

#[test]
fn degraded_records_render_empty_cells() {
    let mut store = ContractStore::new();
    store
        .insert(Contract::new(
            "trade-9",
            TemplateId::new("Dvp", "DvpProposal"),
            Value::record(vec![(
                "c",
                Value::record(vec![("dvpId", Value::text("t-9"))]),
            )]),
        ))
        .unwrap();
    let view = view("trades", ConfigRevision::V2, "Alice");

    let response = service()
        .view_data(&view, &mut store, &ViewRequest::default(), &HashMap::new())
        .unwrap();

    let row = &response.rows[0];
    assert_eq!(row.cells["status"].as_text(), "Proposed");
    assert_eq!(row.cells["buyer"].as_text(), "");
    assert_eq!(row.cells["ccy"].as_text(), "");
    assert_eq!(row.cells["bond"].as_text(), "");
}

// ── Sorting and paging ──────────────────────────────────────────

#[test]
fn default_sort_orders_by_id() {
    let mut store = ContractStore::new();
    store.insert(cash("asset-3", "Alice", "1.0")).unwrap();
    store.insert(cash("asset-1", "Alice", "2.0")).unwrap();
    store.insert(cash("asset-2", "Alice", "3.0")).unwrap();
    let view = view("assets", ConfigRevision::V1, "Alice");

    let response = service()
        .view_data(&view, &mut store, &ViewRequest::default(), &HashMap::new())
        .unwrap();

    assert_eq!(row_ids(&response), vec!["asset-1", "asset-2", "asset-3"]);
}

#[test]
fn request_sort_overrides_view_sort() {
    let mut store = seed_store();
    let view = view("assets", ConfigRevision::V1, "Alice");

    let request = ViewRequest {
        sort: vec![Sort::descending("argument.amount")],
        ..ViewRequest::default()
    };
    let response = service()
        .view_data(&view, &mut store, &request, &HashMap::new())
        .unwrap();

    assert_eq!(row_ids(&response), vec!["asset-2", "asset-1", "asset-3"]);
}

#[test]
fn skip_take_apply_after_total() {
    let mut store = seed_store();
    let view = view("assets", ConfigRevision::V1, "Alice");

    let request = ViewRequest {
        skip: Some(1),
        take: Some(1),
        ..ViewRequest::default()
    };
    let response = service()
        .view_data(&view, &mut store, &request, &HashMap::new())
        .unwrap();

    assert_eq!(response.total, 3);
    assert_eq!(row_ids(&response), vec!["asset-2"]);
}

// ── Search ──────────────────────────────────────────────────────

#[test]
fn view_search_narrows_records() {
    let mut store = seed_store();
    let mut view = view("assets", ConfigRevision::V1, "Alice");
    view.source.search = Search::from("bond-123");

    let response = service()
        .view_data(&view, &mut store, &ViewRequest::default(), &HashMap::new())
        .unwrap();

    assert_eq!(row_ids(&response), vec!["asset-3"]);
}
