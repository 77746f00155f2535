#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named rule as held by a [`RuleStore`](crate::RuleStore).
///
/// The text is stored as authored; it is not parsed until it is combined or
/// evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StoredRule {
    pub id: u64,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "ruleString"))]
    pub rule_text: String,
}
