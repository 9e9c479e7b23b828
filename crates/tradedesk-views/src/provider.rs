use indexmap::IndexMap;
use serde::Serialize;
use tradedesk_query::{FieldFilter, Search, Sort};

use crate::cells;
use crate::config::{Alignment, CellFn, Column, SourceKind, TableSource, View, ViewKind};
use crate::version::{ConfigRevision, SchemaVersion};

/// Identity of the caller asking for configuration. Only `party` influences
/// the produced views; user id and role are part of the contract but unused
/// by the built-in views.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewContext {
    pub user_id: String,
    pub party: String,
    pub role: String,
}

impl ViewContext {
    pub fn new(
        user_id: impl Into<String>,
        party: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            party: party.into(),
            role: role.into(),
        }
    }
}

/// The versioned document served to the front-end.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigDocument {
    pub version: SchemaVersion,
    pub views: IndexMap<String, View>,
}

/// Build the view mapping for a caller. Pure and deterministic: no I/O, no
/// shared state, same inputs give structurally equal output.
pub fn custom_views(ctx: &ViewContext, revision: ConfigRevision) -> IndexMap<String, View> {
    IndexMap::from([
        ("assets".to_string(), assets_view(ctx, revision)),
        ("trades".to_string(), trades_view(revision)),
    ])
}

pub fn config_document(ctx: &ViewContext, revision: ConfigRevision) -> ConfigDocument {
    ConfigDocument {
        version: SchemaVersion::for_revision(revision),
        views: custom_views(ctx, revision),
    }
}

fn assets_view(ctx: &ViewContext, revision: ConfigRevision) -> View {
    // V1 leaves the owner unconstrained; V2 binds it to the caller's party.
    let owner = match revision {
        ConfigRevision::V1 => String::new(),
        ConfigRevision::V2 => ctx.party.clone(),
    };

    View {
        kind: ViewKind::TableView,
        title: "Assets".to_string(),
        include_archived: false,
        source: TableSource {
            kind: SourceKind::Contracts,
            filter: vec![
                FieldFilter::new("argument.amount", ""),
                FieldFilter::new("argument.owner", owner),
            ],
            search: Search::default(),
            sort: vec![Sort::ascending("id")],
        },
        columns: vec![
            column("id", "Contract ID", cells::contract_id, 80, 0),
            column("type", "Type", cells::template_code, 80, 0),
            column(
                "owner",
                "Owner",
                pick(revision, cells::direct::asset_owner, cells::decoded::asset_owner),
                80,
                0,
            ),
            column(
                "symbol",
                "Symbol",
                pick(revision, cells::direct::asset_symbol, cells::decoded::asset_symbol),
                80,
                0,
            ),
            column(
                "amount",
                "Amount",
                pick(revision, cells::direct::asset_amount, cells::decoded::asset_amount),
                200,
                3,
            ),
        ],
    }
}

fn trades_view(revision: ConfigRevision) -> View {
    View {
        kind: ViewKind::TableView,
        title: "Trades".to_string(),
        include_archived: true,
        source: TableSource {
            kind: SourceKind::Contracts,
            filter: vec![FieldFilter::new("argument.c.dvpId", "")],
            search: Search::default(),
            sort: vec![Sort::ascending("id")],
        },
        columns: vec![
            column("id", "Contract ID", cells::contract_id, 80, 0),
            column(
                "dvp.id",
                "DvP ID",
                pick(revision, cells::direct::trade_dvp_id, cells::decoded::trade_dvp_id),
                40,
                0,
            ),
            column("status", "Status", cells::trade_status, 80, 0),
            column(
                "buyer",
                "Buyer",
                pick(revision, cells::direct::trade_buyer, cells::decoded::trade_buyer),
                40,
                0,
            ),
            column(
                "seller",
                "Seller",
                pick(revision, cells::direct::trade_seller, cells::decoded::trade_seller),
                40,
                0,
            ),
            column(
                "ccy",
                "CCY",
                pick(revision, cells::direct::trade_ccy, cells::decoded::trade_ccy),
                15,
                0,
            ),
            column(
                "cash",
                "Payment",
                pick(revision, cells::direct::trade_cash, cells::decoded::trade_cash),
                50,
                0,
            ),
            column(
                "isin",
                "ISIN",
                pick(revision, cells::direct::trade_isin, cells::decoded::trade_isin),
                45,
                0,
            ),
            column(
                "bond",
                "Delivery",
                pick(revision, cells::direct::trade_bond, cells::decoded::trade_bond),
                50,
                3,
            ),
        ],
    }
}

/// Built-in columns are all sortable, left-aligned text.
fn column(key: &str, title: &str, cell: CellFn, width: u32, weight: u32) -> Column {
    Column {
        key: key.to_string(),
        title: title.to_string(),
        cell,
        sortable: true,
        width,
        weight,
        alignment: Alignment::Left,
    }
}

fn pick(revision: ConfigRevision, v1: CellFn, v2: CellFn) -> CellFn {
    match revision {
        ConfigRevision::V1 => v1,
        ConfigRevision::V2 => v2,
    }
}
