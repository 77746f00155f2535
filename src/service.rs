use thiserror::Error;
use tracing::{debug, instrument};

use crate::combine::{combine, CombineError};
use crate::evaluate::evaluate;
use crate::parse::{parse, ParseError};
use crate::store::{MemoryRuleStore, RuleStore, StoreError};
use crate::{Context, Node, StoredRule};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("missing required input '{0}'")]
    MissingInput(&'static str),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Combine(#[from] CombineError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Request-level operations over a [`RuleStore`]: store and list named rules,
/// combine raw rule texts, and evaluate a rule text against attributes.
///
/// # Example
///
/// ```
/// use astrule::{Context, RuleService};
///
/// let service = RuleService::in_memory();
/// service.create_rule("senior_sales", "age > 30 AND department = 'Sales'").unwrap();
///
/// let ctx = Context::new().set("age", 35_i64).set("department", "Sales");
/// let allowed = service
///     .evaluate_rule(Some("age > 30 AND department = 'Sales'"), Some(&ctx))
///     .unwrap();
/// assert!(allowed);
/// ```
#[derive(Debug)]
pub struct RuleService<S> {
    store: S,
}

impl RuleService<MemoryRuleStore> {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryRuleStore::new())
    }
}

impl<S: RuleStore> RuleService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Store a named rule. The text is kept as authored and not parsed.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Store`] if the store rejects the rule.
    #[instrument(skip_all, fields(name = %name))]
    pub fn create_rule(&self, name: &str, rule_text: &str) -> Result<StoredRule, ServiceError> {
        let rule = self.store.create(name, rule_text)?;
        debug!(id = rule.id, "rule stored");
        Ok(rule)
    }

    /// # Errors
    ///
    /// Returns [`ServiceError::Store`] if the store cannot be read.
    pub fn list_rules(&self) -> Result<Vec<StoredRule>, ServiceError> {
        Ok(self.store.list_all()?)
    }

    /// Combine raw rule texts into one tree; see [`combine`](crate::combine()).
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Combine`] on empty input or a rule that fails to
    /// parse.
    #[instrument(skip_all)]
    pub fn combine_rules<I>(&self, rule_texts: I) -> Result<Node, ServiceError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Ok(combine(rule_texts)?)
    }

    /// Combine every stored rule, in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Store`] if the store cannot be read, or
    /// [`ServiceError::Combine`] if it is empty or holds unparseable text.
    #[instrument(skip_all)]
    pub fn combine_stored(&self) -> Result<Node, ServiceError> {
        let rules = self.store.list_all()?;
        Ok(combine(rules.iter().map(|r| r.rule_text.as_str()))?)
    }

    /// Parse `rule_text` and evaluate it against `attributes`.
    ///
    /// Both inputs are required; an absent one is rejected before parsing.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::MissingInput`] if either input is `None`, or
    /// [`ServiceError::Parse`] if the rule text is invalid.
    #[instrument(skip_all)]
    pub fn evaluate_rule(
        &self,
        rule_text: Option<&str>,
        attributes: Option<&Context>,
    ) -> Result<bool, ServiceError> {
        let rule_text = rule_text.ok_or(ServiceError::MissingInput("rule_text"))?;
        let attributes = attributes.ok_or(ServiceError::MissingInput("attributes"))?;
        let node = parse(rule_text)?;
        let result = evaluate(&node, attributes);
        debug!(result, "rule evaluated");
        Ok(result)
    }
}
