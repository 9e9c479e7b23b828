use crate::decode::{DecodedArgument, decode};
use crate::value::Value;

/// Field set of an asset contract (cash or bond), decoded once.
///
/// Every field is optional: a field the argument doesn't carry shows as an
/// empty cell, never an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetTerms {
    pub issuer: Option<String>,
    pub owner: Option<String>,
    pub isin: Option<String>,
    pub currency: Option<String>,
    pub amount: Option<String>,
}

impl AssetTerms {
    pub fn from_argument(argument: &Value) -> Self {
        Self::from_decoded(&decode(argument))
    }

    pub fn from_decoded(decoded: &DecodedArgument) -> Self {
        let get = |name: &str| decoded.get(name).map(str::to_string);
        Self {
            issuer: get("issuer"),
            owner: get("owner"),
            isin: get("isin"),
            currency: get("currency"),
            amount: get("amount"),
        }
    }

    /// The ISIN when present and non-empty, else the currency, else empty.
    pub fn symbol(&self) -> String {
        match self.isin.as_deref() {
            Some(isin) if !isin.is_empty() => isin.to_string(),
            _ => self.currency.clone().unwrap_or_default(),
        }
    }
}

/// Field set of a dvp trade contract. Dvp arguments nest their terms under
/// a single `c` field; this reads through that nesting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DvpTerms {
    pub dvp_id: Option<String>,
    pub buyer: Option<String>,
    pub seller: Option<String>,
    pub bond_issuer: Option<String>,
    pub bond_isin: Option<String>,
    pub bond_amount: Option<String>,
    pub cash_issuer: Option<String>,
    pub cash_currency: Option<String>,
    pub cash_amount: Option<String>,
    pub settle_time: Option<String>,
}

impl DvpTerms {
    pub fn from_argument(argument: &Value) -> Self {
        Self::from_decoded(&decode(argument))
    }

    pub fn from_decoded(decoded: &DecodedArgument) -> Self {
        let get = |name: &str| decoded.get(&format!("c.{name}")).map(str::to_string);
        Self {
            dvp_id: get("dvpId"),
            buyer: get("buyer"),
            seller: get("seller"),
            bond_issuer: get("bondIssuer"),
            bond_isin: get("bondIsin"),
            bond_amount: get("bondAmount"),
            cash_issuer: get("cashIssuer"),
            cash_currency: get("cashCurrency"),
            cash_amount: get("cashAmount"),
            settle_time: get("settleTime"),
        }
    }
}
