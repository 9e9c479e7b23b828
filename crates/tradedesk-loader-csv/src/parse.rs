use std::collections::HashMap;

use tradedesk_model::{Contract, TemplateId, Value};

use crate::error::CsvError;

/// Issuer stamped on seeded assets when the file carries no issuer column.
const DEFAULT_ISSUER: &str = "Bank";

/// Parse an asset file into contracts. The header line names the columns;
/// `party,assetName,symbol,amount` are required and an `issuer` column is
/// honored when present. `assetName` selects the template: `Cash` rows
/// become `Cash:Cash` contracts (the symbol is the currency), `Bond` rows
/// become `Bond:Bond` contracts (the symbol is the ISIN).
pub fn parse_assets(text: &str) -> Result<Vec<Contract>, CsvError> {
    records(text)?
        .iter()
        .enumerate()
        .map(|(i, record)| asset_contract(record, i + 1))
        .collect()
}

/// Parse a trade file into `Dvp:DvpProposal` contracts. Every column lands
/// in the nested `c` record the settlement workflow reads.
pub fn parse_trades(text: &str) -> Result<Vec<Contract>, CsvError> {
    records(text)?
        .iter()
        .enumerate()
        .map(|(i, record)| trade_contract(record, i + 1))
        .collect()
}

/// Split comma-separated lines into maps keyed by the header row. Blank
/// lines are skipped; a data row shorter than the header is malformed, and
/// fields past the header are ignored.
fn records(text: &str) -> Result<Vec<HashMap<String, String>>, CsvError> {
    let mut lines = text.lines().filter(|line| !line.is_empty());
    let Some(header) = lines.next() else {
        return Ok(Vec::new());
    };
    let headers: Vec<&str> = header.split(',').collect();

    lines
        .map(|line| {
            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() < headers.len() {
                return Err(CsvError::Malformed(format!(
                    "expected {} fields, got {}: {line}",
                    headers.len(),
                    fields.len()
                )));
            }
            Ok(headers
                .iter()
                .zip(&fields)
                .map(|(header, field)| (header.to_string(), field.to_string()))
                .collect())
        })
        .collect()
}

fn column<'a>(record: &'a HashMap<String, String>, name: &str) -> Result<&'a str, CsvError> {
    record
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| CsvError::Malformed(format!("missing column: {name}")))
}

fn asset_contract(record: &HashMap<String, String>, number: usize) -> Result<Contract, CsvError> {
    let party = column(record, "party")?;
    let kind = column(record, "assetName")?;
    let symbol = column(record, "symbol")?;
    let amount = column(record, "amount")?;
    let issuer = record
        .get("issuer")
        .map(String::as_str)
        .unwrap_or(DEFAULT_ISSUER);

    let (template_id, symbol_label) = match kind {
        "Cash" => (TemplateId::new("Cash", "Cash"), "currency"),
        "Bond" => (TemplateId::new("Bond", "Bond"), "isin"),
        other => {
            return Err(CsvError::Malformed(format!("unknown asset kind: {other}")));
        }
    };

    Ok(Contract::new(
        format!("asset-{number}"),
        template_id,
        Value::record(vec![
            ("issuer", Value::party(issuer)),
            ("owner", Value::party(party)),
            (symbol_label, Value::text(symbol)),
            ("amount", Value::decimal(amount)),
        ]),
    ))
}

fn trade_contract(record: &HashMap<String, String>, number: usize) -> Result<Contract, CsvError> {
    let terms = Value::record(vec![
        ("dvpId", Value::text(column(record, "dvpId")?)),
        ("buyer", Value::party(column(record, "buyer")?)),
        ("seller", Value::party(column(record, "seller")?)),
        ("bondIssuer", Value::party(column(record, "bondIssuer")?)),
        ("bondIsin", Value::text(column(record, "bondIsin")?)),
        ("bondAmount", Value::decimal(column(record, "bondAmount")?)),
        ("cashIssuer", Value::party(column(record, "cashIssuer")?)),
        ("cashCurrency", Value::text(column(record, "cashCurrency")?)),
        ("cashAmount", Value::decimal(column(record, "cashAmount")?)),
    ]);

    Ok(Contract::new(
        format!("trade-{number}"),
        TemplateId::new("Dvp", "DvpProposal"),
        Value::record(vec![("c", terms)]),
    ))
}
