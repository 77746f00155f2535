use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Logical connective held by an operator node.
///
/// Anything other than the exact, case-sensitive symbols `AND` and `OR` is kept
/// verbatim as [`Connective::Other`]; such nodes always evaluate to `false`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum Connective {
    And,
    Or,
    Other(String),
}

impl Connective {
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Self {
        Self::from(symbol.to_owned())
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        match self {
            Connective::And => "AND",
            Connective::Or => "OR",
            Connective::Other(s) => s,
        }
    }

    /// The separator a rule string must contain to be split on this connective,
    /// e.g. `" AND "`. `None` for unrecognized connectives.
    #[must_use]
    pub(crate) fn separator(&self) -> Option<&'static str> {
        match self {
            Connective::And => Some(" AND "),
            Connective::Or => Some(" OR "),
            Connective::Other(_) => None,
        }
    }
}

impl From<String> for Connective {
    fn from(s: String) -> Self {
        match s.as_str() {
            "AND" => Connective::And,
            "OR" => Connective::Or,
            _ => Connective::Other(s),
        }
    }
}

impl From<Connective> for String {
    fn from(c: Connective) -> Self {
        match c {
            Connective::Other(s) => s,
            known => known.symbol().to_owned(),
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A node of a parsed rule tree.
///
/// Operands are leaves carrying the raw condition text (`"age > 30"`).
/// Operators own exactly two children; the tree is never shared or mutated
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum Node {
    Operand {
        value: String,
    },
    Operator {
        #[cfg_attr(feature = "serde", serde(rename = "value"))]
        connective: Connective,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    #[must_use]
    pub fn operand(condition: impl Into<String>) -> Node {
        Node::Operand {
            value: condition.into(),
        }
    }

    #[must_use]
    pub fn operator(connective: Connective, left: Node, right: Node) -> Node {
        Node::Operator {
            connective,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    #[must_use]
    pub fn and(self, other: Node) -> Node {
        Node::operator(Connective::And, self, other)
    }

    #[must_use]
    pub fn or(self, other: Node) -> Node {
        Node::operator(Connective::Or, self, other)
    }

    #[must_use]
    pub fn is_operand(&self) -> bool {
        matches!(self, Node::Operand { .. })
    }

    #[must_use]
    pub fn is_operator(&self) -> bool {
        matches!(self, Node::Operator { .. })
    }

    /// Condition text for operands, connective symbol for operators.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Node::Operand { value } => value,
            Node::Operator { connective, .. } => connective.symbol(),
        }
    }

    #[must_use]
    pub fn connective(&self) -> Option<&Connective> {
        match self {
            Node::Operator { connective, .. } => Some(connective),
            Node::Operand { .. } => None,
        }
    }

    #[must_use]
    pub fn left(&self) -> Option<&Node> {
        match self {
            Node::Operator { left, .. } => Some(left),
            Node::Operand { .. } => None,
        }
    }

    #[must_use]
    pub fn right(&self) -> Option<&Node> {
        match self {
            Node::Operator { right, .. } => Some(right),
            Node::Operand { .. } => None,
        }
    }

    /// Height of the tree; a lone operand has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Node::Operand { .. } => 1,
            Node::Operator { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    #[must_use]
    pub fn operand_count(&self) -> usize {
        match self {
            Node::Operand { .. } => 1,
            Node::Operator { left, right, .. } => left.operand_count() + right.operand_count(),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Operand { value } => write!(f, "{value}"),
            Node::Operator {
                connective,
                left,
                right,
            } => write!(f, "({left} {connective} {right})"),
        }
    }
}

// Combined trees are as deep as the number of rules folded into them; children
// are released from a work list rather than by recursion.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(self, &mut pending);
        while let Some(mut node) = pending.pop() {
            detach_children(&mut node, &mut pending);
        }
    }
}

fn detach_children(node: &mut Node, pending: &mut Vec<Node>) {
    if let Node::Operator { left, right, .. } = node {
        pending.push(std::mem::replace(&mut **left, Node::operand(String::new())));
        pending.push(std::mem::replace(&mut **right, Node::operand(String::new())));
    }
}
