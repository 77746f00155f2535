mod context;
mod node;
mod stored_rule;
mod value;

pub use context::Context;
pub use node::{Connective, Node};
pub use stored_rule::StoredRule;
pub use value::Value;
