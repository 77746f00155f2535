use thiserror::Error;
use tracing::debug;

use crate::parse::{parse, ParseError};
use crate::{Connective, Node};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CombineError {
    #[error("no rules provided for combination")]
    EmptyInput,

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Pick the connective used to join rules: `AND` when at least as many rules
/// contain `" AND "` as contain `" OR "`, otherwise `OR`.
///
/// A rule may count toward both or neither.
#[must_use]
pub fn choose_connective<S: AsRef<str>>(rule_texts: &[S]) -> Connective {
    let (and_count, or_count) = connective_counts(rule_texts);
    majority(and_count, or_count)
}

fn majority(and_count: usize, or_count: usize) -> Connective {
    if and_count >= or_count {
        Connective::And
    } else {
        Connective::Or
    }
}

fn connective_counts<S: AsRef<str>>(rule_texts: &[S]) -> (usize, usize) {
    let count = |separator: &str| {
        rule_texts
            .iter()
            .filter(|text| text.as_ref().contains(separator))
            .count()
    };
    (count(" AND "), count(" OR "))
}

/// Parse each rule and fold the trees, in input order, into one left-leaning
/// tree joined by the connective from [`choose_connective`].
///
/// Each rule keeps its own internal connectives; only the joins between rules
/// are forced. A single rule combines to exactly its parsed tree.
///
/// # Errors
///
/// Returns [`CombineError::EmptyInput`] when no rules are given, or
/// [`CombineError::Parse`] for the first rule that fails to parse.
///
/// # Example
///
/// ```
/// use astrule::{combine, Node};
///
/// let node = combine(["age > 30 AND department = 'Sales'", "salary < 50000 OR experience > 5"]).unwrap();
/// assert_eq!(
///     node,
///     Node::operand("age > 30")
///         .and(Node::operand("department = 'Sales'"))
///         .and(Node::operand("salary < 50000").or(Node::operand("experience > 5"))),
/// );
/// ```
pub fn combine<I>(rule_texts: I) -> Result<Node, CombineError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let rule_texts: Vec<I::Item> = rule_texts.into_iter().collect();
    if rule_texts.is_empty() {
        return Err(CombineError::EmptyInput);
    }

    let (and_count, or_count) = connective_counts(&rule_texts);
    let connective = majority(and_count, or_count);
    debug!(
        rules = rule_texts.len(),
        and_count,
        or_count,
        connective = %connective,
        "combining rules"
    );

    let mut combined: Option<Node> = None;
    for text in &rule_texts {
        let tree = parse(text.as_ref())?;
        combined = Some(match combined {
            None => tree,
            Some(root) => Node::operator(connective.clone(), root, tree),
        });
    }

    combined.ok_or(CombineError::EmptyInput)
}
