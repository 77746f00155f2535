use tracing::trace;

use crate::parse::trim_rule_text;
use crate::{Connective, Context, Node, Value};

/// Evaluate a rule tree against an attribute context.
///
/// `AND` and `OR` short-circuit left to right. An operator with any other
/// connective, or an absent node (`None`), evaluates to `false` without
/// visiting children. Operands are resolved with [`evaluate_condition`].
///
/// Evaluation never fails: missing attributes, kind mismatches and malformed
/// conditions all yield `false`.
///
/// # Example
///
/// ```
/// use astrule::{evaluate, parse, Context};
///
/// let rule = parse("age > 30 AND department = 'Sales'").unwrap();
/// let ctx = Context::new().set("age", 35_i64).set("department", "Sales");
/// assert!(evaluate(&rule, &ctx));
/// assert!(!evaluate(None, &ctx));
/// ```
#[must_use]
pub fn evaluate<'a>(node: impl Into<Option<&'a Node>>, ctx: &Context) -> bool {
    node.into().is_some_and(|node| eval_node(node, ctx))
}

fn eval_node(node: &Node, ctx: &Context) -> bool {
    match node {
        Node::Operand { value } => evaluate_condition(value, ctx),
        Node::Operator {
            connective,
            left,
            right,
        } => match connective {
            Connective::And => eval_node(left, ctx) && eval_node(right, ctx),
            Connective::Or => eval_node(left, ctx) || eval_node(right, ctx),
            Connective::Other(symbol) => {
                trace!(connective = %symbol, "unrecognized connective evaluates to false");
                false
            }
        },
    }
}

/// Evaluate a single condition string such as `age > 30` or
/// `department = 'Sales'`.
///
/// The comparison is picked by the first character class present: `>` wins
/// over `<`, which wins over `=`. A `>` or `<` immediately followed by `=`
/// is inclusive. Numeric comparisons need an [`Value::Int`] attribute and an
/// integer threshold; equality needs a [`Value::Text`] attribute and compares
/// against the right-hand side with every `'` removed.
#[must_use]
pub fn evaluate_condition(condition: &str, ctx: &Context) -> bool {
    if let Some((attribute, threshold)) = condition.split_once('>') {
        compare_int(ctx, attribute, threshold, |actual, limit, inclusive| {
            if inclusive {
                actual >= limit
            } else {
                actual > limit
            }
        })
    } else if let Some((attribute, threshold)) = condition.split_once('<') {
        compare_int(ctx, attribute, threshold, |actual, limit, inclusive| {
            if inclusive {
                actual <= limit
            } else {
                actual < limit
            }
        })
    } else if let Some((attribute, expected)) = condition.split_once('=') {
        let attribute = trim_rule_text(attribute);
        let expected = trim_rule_text(expected).replace('\'', "");
        match ctx.get(attribute) {
            Some(Value::Text(actual)) => *actual == expected,
            Some(Value::Int(_)) => {
                trace!(attribute, "equality on integer attribute evaluates to false");
                false
            }
            None => {
                trace!(attribute, "missing attribute evaluates to false");
                false
            }
        }
    } else {
        trace!(condition, "condition has no comparator");
        false
    }
}

fn compare_int(
    ctx: &Context,
    attribute: &str,
    threshold: &str,
    cmp: impl FnOnce(i64, i64, bool) -> bool,
) -> bool {
    let attribute = trim_rule_text(attribute);
    let (threshold, inclusive) = match threshold.strip_prefix('=') {
        Some(rest) => (rest, true),
        None => (threshold, false),
    };
    let Ok(limit) = trim_rule_text(threshold).parse::<i64>() else {
        trace!(attribute, threshold, "threshold is not an integer");
        return false;
    };
    match ctx.get(attribute) {
        Some(Value::Int(actual)) => cmp(*actual, limit, inclusive),
        Some(Value::Text(_)) => {
            trace!(attribute, "numeric comparison on text attribute evaluates to false");
            false
        }
        None => {
            trace!(attribute, "missing attribute evaluates to false");
            false
        }
    }
}
