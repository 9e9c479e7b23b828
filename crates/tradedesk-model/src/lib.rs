mod contract;
mod decode;
mod template;
mod terms;
mod value;

pub use contract::Contract;
pub use decode::{DecodedArgument, decode};
pub use template::{ParseTemplateIdError, TemplateId};
pub use terms::{AssetTerms, DvpTerms};
pub use value::{Field, Value};
