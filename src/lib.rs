//! Parse, combine and evaluate flat boolean eligibility rules.
//!
//! A rule such as `age > 30 AND department = 'Sales'` is parsed into a binary
//! [`Node`] tree, optionally merged with other rules by [`combine`], and
//! evaluated against a [`Context`] of attributes with [`evaluate`].
//!
//! ```
//! use astrule::{combine, evaluate, Context};
//!
//! let rule = combine(["age > 30 AND department = 'Sales'", "salary < 50000 OR experience > 5"]).unwrap();
//! let ctx = Context::new()
//!     .set("age", 35_i64)
//!     .set("department", "Sales")
//!     .set("salary", 42_000_i64);
//! assert!(evaluate(&rule, &ctx));
//! ```

mod combine;
mod error;
mod evaluate;
pub mod parse;
mod service;
mod store;
mod types;

pub use combine::{choose_connective, combine, CombineError};
pub use error::Error;
pub use evaluate::{evaluate, evaluate_condition};
pub use parse::{is_condition, parse, ParseError};
pub use service::{RuleService, ServiceError};
pub use store::{MemoryRuleStore, RuleStore, StoreError};
pub use types::{Connective, Context, Node, StoredRule, Value};
