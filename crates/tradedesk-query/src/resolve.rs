use tradedesk_model::{Contract, DecodedArgument, decode};

use crate::path::FieldPath;

/// Resolve a field path against a record.
///
/// Three namespaces: `id` is the contract id, `template.id` the qualified
/// template name, and `argument.*` looks up the decoded argument by the rest
/// of the path. Anything else, or an absent field, resolves to `None`.
pub fn resolve(contract: &Contract, path: &FieldPath) -> Option<String> {
    resolve_decoded(contract, &decode(&contract.argument), path)
}

/// Like [`resolve`], reusing an already-decoded argument. Callers matching
/// several paths against one record decode once and use this.
pub fn resolve_decoded(
    contract: &Contract,
    decoded: &DecodedArgument,
    path: &FieldPath,
) -> Option<String> {
    match path.as_str() {
        "id" => Some(contract.id.clone()),
        "template.id" => Some(contract.template_id.qualified()),
        _ => {
            let rest = path.strip_segment("argument")?;
            decoded.get(rest).map(str::to_string)
        }
    }
}
