use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Value;

/// Attribute context a rule is evaluated against: attribute name to [`Value`].
///
/// Keys are unique; setting an existing key replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Context {
    data: HashMap<String, Value>,
}

impl Context {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, builder style.
    #[must_use]
    pub fn set(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.insert(name, value.into());
        self
    }

    pub fn insert(&mut self, name: &str, value: Value) {
        self.data.insert(name.to_owned(), value);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.data.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.data.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for Context
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            data: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get() {
        let ctx = Context::new().set("age", 35_i64).set("department", "Sales");
        assert_eq!(ctx.get("age"), Some(&Value::Int(35)));
        assert_eq!(ctx.get("department"), Some(&Value::Text("Sales".into())));
        assert_eq!(ctx.len(), 2);
    }

    #[test]
    fn get_missing_returns_none() {
        let ctx = Context::new().set("age", 35_i64);
        assert_eq!(ctx.get("salary"), None);
        assert!(!ctx.contains("salary"));
    }

    #[test]
    fn overwrite_value() {
        let ctx = Context::new().set("score", 10_i64).set("score", "ten");
        assert_eq!(ctx.get("score"), Some(&Value::Text("ten".into())));
        assert_eq!(ctx.len(), 1);
    }

    #[test]
    fn insert_mutable_ref() {
        let mut ctx = Context::new();
        ctx.insert("experience", Value::Int(6));
        assert!(ctx.contains("experience"));
    }

    #[test]
    fn empty_context() {
        let ctx = Context::new();
        assert!(ctx.is_empty());
        assert_eq!(ctx.get("anything"), None);
    }

    #[test]
    fn collect_from_pairs() {
        let ctx: Context = [("age", Value::Int(20)), ("department", Value::from("HR"))]
            .into_iter()
            .collect();
        assert_eq!(ctx.get("age"), Some(&Value::Int(20)));
        assert_eq!(ctx.iter().count(), 2);
    }
}
