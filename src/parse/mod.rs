mod error;
mod grammar;

pub use error::ParseError;

use tracing::debug;

use crate::{Connective, Node};

/// Parse a rule string into a [`Node`] tree.
///
/// The text is trimmed, then split on the first `" AND "` if present, else on
/// the first `" OR "`, and both halves are parsed recursively. There is no
/// precedence and no grouping: `AND` is always tried first, and only the first
/// two segments of a split are kept, so `"a > 1 AND b > 2 AND c > 3"` yields
/// `(a > 1 AND b > 2)`. Text without a connective must be a single condition:
///
/// - `identifier (>|<|>=|<=|=) digits`, e.g. `age >= 30`
/// - `identifier = 'text'`, e.g. `department = 'Sales'`
///
/// # Errors
///
/// Returns [`ParseError::InvalidRule`] if any segment, at any depth, is not a
/// valid condition. No partial tree is returned.
///
/// # Example
///
/// ```
/// use astrule::{parse, Node};
///
/// let node = parse("age > 30 AND department = 'Sales'").unwrap();
/// assert_eq!(
///     node,
///     Node::operand("age > 30").and(Node::operand("department = 'Sales'")),
/// );
/// ```
pub fn parse(text: &str) -> Result<Node, ParseError> {
    let text = trim_rule_text(text);

    for connective in [Connective::And, Connective::Or] {
        let segments = connective
            .separator()
            .and_then(|separator| grammar::split_on(text, separator));
        if let Some((left, right)) = segments {
            let left = parse(left)?;
            let right = parse(right)?;
            return Ok(Node::operator(connective, left, right));
        }
    }

    if is_condition(text) {
        return Ok(Node::operand(text));
    }

    debug!(rule = text, "rejected rule text");
    Err(ParseError::InvalidRule(text.to_owned()))
}

/// Strips leading and trailing control characters and spaces (everything up
/// to and including U+0020). Other Unicode whitespace such as NBSP is kept.
pub(crate) fn trim_rule_text(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ')
}

/// Whether `text` (already trimmed) is a single condition accepted by [`parse`].
#[must_use]
pub fn is_condition(text: &str) -> bool {
    use winnow::Parser;
    grammar::condition.parse(text).is_ok()
}
