use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;

use crate::StoredRule;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("rule store failure: {0}")]
    Backend(String),
}

/// Storage for named rule texts, implemented by the host.
///
/// Stores never parse what they hold; rule text is validated only when it is
/// combined or evaluated.
pub trait RuleStore: Send + Sync {
    /// Persist a rule and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Implementation specific; see [`StoreError`].
    fn create(&self, name: &str, rule_text: &str) -> Result<StoredRule, StoreError>;

    /// All stored rules.
    ///
    /// # Errors
    ///
    /// Implementation specific; see [`StoreError`].
    fn list_all(&self) -> Result<Vec<StoredRule>, StoreError>;
}

/// Process-local [`RuleStore`]. Ids start at 1 and rules are listed in
/// creation order.
#[derive(Debug)]
pub struct MemoryRuleStore {
    rules: RwLock<Vec<StoredRule>>,
    next_id: AtomicU64,
}

impl MemoryRuleStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for MemoryRuleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleStore for MemoryRuleStore {
    fn create(&self, name: &str, rule_text: &str) -> Result<StoredRule, StoreError> {
        if name.is_empty() {
            return Err(StoreError::MissingField("name"));
        }
        if rule_text.is_empty() {
            return Err(StoreError::MissingField("rule_text"));
        }

        let mut rules = self
            .rules
            .write()
            .map_err(|_| StoreError::Backend("rule list lock poisoned".into()))?;
        let rule = StoredRule {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            name: name.to_owned(),
            rule_text: rule_text.to_owned(),
        };
        rules.push(rule.clone());
        Ok(rule)
    }

    fn list_all(&self) -> Result<Vec<StoredRule>, StoreError> {
        let rules = self
            .rules
            .read()
            .map_err(|_| StoreError::Backend("rule list lock poisoned".into()))?;
        Ok(rules.clone())
    }
}
