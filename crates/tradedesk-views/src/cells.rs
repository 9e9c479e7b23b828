use tradedesk_model::{AssetTerms, Contract, DvpTerms, TemplateId, Value};

use crate::config::CellValue;

/// Classify a trade contract by its qualified template id. First match wins;
/// anything unrecognized is "Unknown".
pub fn status_label(template_id: &TemplateId) -> &'static str {
    const STATUSES: [(&str, &str); 4] = [
        ("Dvp:DvpProposal", "Proposed"),
        ("Dvp:DvpAllocated", "Allocated"),
        ("DvpNotification:DvpNotification", "Settled"),
        ("Dvp:Dvp", "Accepted"),
    ];

    let qualified = template_id.qualified();
    STATUSES
        .iter()
        .find(|(prefix, _)| qualified.starts_with(prefix))
        .map(|(_, label)| *label)
        .unwrap_or("Unknown")
}

pub(crate) fn contract_id(contract: &Contract) -> CellValue {
    CellValue::text(&contract.id)
}

/// First four characters of the qualified template id ("Cash", "Bond", ...).
pub(crate) fn template_code(contract: &Contract) -> CellValue {
    let code: String = contract.template_id.qualified().chars().take(4).collect();
    CellValue::text(code)
}

pub(crate) fn trade_status(contract: &Contract) -> CellValue {
    CellValue::text(status_label(&contract.template_id))
}

/// Cells reading the argument by direct property access (the older revision).
/// Missing fields render as empty text.
pub(crate) mod direct {
    use super::*;

    fn text_at(contract: &Contract, path: &[&str]) -> CellValue {
        let value = contract
            .argument
            .at_path(path)
            .and_then(Value::display_text)
            .unwrap_or_default();
        CellValue::text(value)
    }

    pub(crate) fn asset_owner(contract: &Contract) -> CellValue {
        text_at(contract, &["owner"])
    }

    pub(crate) fn asset_symbol(contract: &Contract) -> CellValue {
        let isin = contract
            .argument
            .at_path(&["isin"])
            .and_then(Value::display_text);
        match isin {
            Some(isin) if !isin.is_empty() => CellValue::text(isin),
            _ => text_at(contract, &["currency"]),
        }
    }

    pub(crate) fn asset_amount(contract: &Contract) -> CellValue {
        text_at(contract, &["amount"])
    }

    pub(crate) fn trade_dvp_id(contract: &Contract) -> CellValue {
        text_at(contract, &["c", "dvpId"])
    }

    pub(crate) fn trade_buyer(contract: &Contract) -> CellValue {
        text_at(contract, &["c", "buyer"])
    }

    pub(crate) fn trade_seller(contract: &Contract) -> CellValue {
        text_at(contract, &["c", "seller"])
    }

    pub(crate) fn trade_ccy(contract: &Contract) -> CellValue {
        text_at(contract, &["c", "cashCurrency"])
    }

    pub(crate) fn trade_cash(contract: &Contract) -> CellValue {
        text_at(contract, &["c", "cashAmount"])
    }

    pub(crate) fn trade_isin(contract: &Contract) -> CellValue {
        text_at(contract, &["c", "bondIsin"])
    }

    pub(crate) fn trade_bond(contract: &Contract) -> CellValue {
        text_at(contract, &["c", "bondAmount"])
    }
}

/// Cells reading through the typed decode step (the newer revision).
pub(crate) mod decoded {
    use super::*;

    fn asset_text(contract: &Contract, field: impl Fn(AssetTerms) -> Option<String>) -> CellValue {
        CellValue::text(field(AssetTerms::from_argument(&contract.argument)).unwrap_or_default())
    }

    fn trade_text(contract: &Contract, field: impl Fn(DvpTerms) -> Option<String>) -> CellValue {
        CellValue::text(field(DvpTerms::from_argument(&contract.argument)).unwrap_or_default())
    }

    pub(crate) fn asset_owner(contract: &Contract) -> CellValue {
        asset_text(contract, |terms| terms.owner)
    }

    pub(crate) fn asset_symbol(contract: &Contract) -> CellValue {
        CellValue::text(AssetTerms::from_argument(&contract.argument).symbol())
    }

    pub(crate) fn asset_amount(contract: &Contract) -> CellValue {
        asset_text(contract, |terms| terms.amount)
    }

    pub(crate) fn trade_dvp_id(contract: &Contract) -> CellValue {
        trade_text(contract, |terms| terms.dvp_id)
    }

    pub(crate) fn trade_buyer(contract: &Contract) -> CellValue {
        trade_text(contract, |terms| terms.buyer)
    }

    pub(crate) fn trade_seller(contract: &Contract) -> CellValue {
        trade_text(contract, |terms| terms.seller)
    }

    pub(crate) fn trade_ccy(contract: &Contract) -> CellValue {
        trade_text(contract, |terms| terms.cash_currency)
    }

    pub(crate) fn trade_cash(contract: &Contract) -> CellValue {
        trade_text(contract, |terms| terms.cash_amount)
    }

    pub(crate) fn trade_isin(contract: &Contract) -> CellValue {
        trade_text(contract, |terms| terms.bond_isin)
    }

    pub(crate) fn trade_bond(contract: &Contract) -> CellValue {
        trade_text(contract, |terms| terms.bond_amount)
    }
}
