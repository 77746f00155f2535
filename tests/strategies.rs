use astrule::{Context, Value};
use proptest::prelude::*;

// --- Fixed attribute schema ---
// age        : i64 (0..=100)
// salary     : i64 (0..=100_000)
// experience : i64 (0..=40)
// department : string, one of DEPARTMENTS
// Any attribute may be missing or carry the other value kind.

pub const INT_ATTRIBUTES: &[&str] = &["age", "salary", "experience"];
pub const DEPARTMENTS: &[&str] = &["Sales", "HR", "Engineering", "Legal"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntOp {
    Gt,
    Lt,
    Gte,
    Lte,
}

impl IntOp {
    pub fn symbol(self) -> &'static str {
        match self {
            IntOp::Gt => ">",
            IntOp::Lt => "<",
            IntOp::Gte => ">=",
            IntOp::Lte => "<=",
        }
    }

    pub fn apply(self, actual: i64, limit: i64) -> bool {
        match self {
            IntOp::Gt => actual > limit,
            IntOp::Lt => actual < limit,
            IntOp::Gte => actual >= limit,
            IntOp::Lte => actual <= limit,
        }
    }
}

/// A single condition together with enough structure to compute its expected
/// outcome independently of the crate.
#[derive(Debug, Clone)]
pub enum Leaf {
    Int {
        attribute: &'static str,
        op: IntOp,
        threshold: i64,
    },
    Text {
        attribute: &'static str,
        expected: &'static str,
    },
}

impl Leaf {
    pub fn text(&self) -> String {
        match self {
            Leaf::Int {
                attribute,
                op,
                threshold,
            } => format!("{attribute} {} {threshold}", op.symbol()),
            Leaf::Text {
                attribute,
                expected,
            } => format!("{attribute} = '{expected}'"),
        }
    }

    /// Reference outcome of this condition against `ctx`.
    pub fn expected(&self, ctx: &Context) -> bool {
        match self {
            Leaf::Int {
                attribute,
                op,
                threshold,
            } => match ctx.get(attribute) {
                Some(Value::Int(actual)) => op.apply(*actual, *threshold),
                _ => false,
            },
            Leaf::Text {
                attribute,
                expected,
            } => matches!(ctx.get(attribute), Some(Value::Text(actual)) if actual == expected),
        }
    }
}

pub fn arb_int_op() -> impl Strategy<Value = IntOp> {
    prop::sample::select(&[IntOp::Gt, IntOp::Lt, IntOp::Gte, IntOp::Lte][..])
}

pub fn arb_leaf() -> impl Strategy<Value = Leaf> {
    prop_oneof![
        (prop::sample::select(INT_ATTRIBUTES), arb_int_op(), 0_i64..=100_000).prop_map(
            |(attribute, op, threshold)| Leaf::Int {
                attribute,
                op,
                threshold,
            }
        ),
        prop::sample::select(DEPARTMENTS).prop_map(|expected| Leaf::Text {
            attribute: "department",
            expected,
        }),
    ]
}

/// A rule string with at most one connective, which is the shape the parser
/// can express without losing segments.
#[derive(Debug, Clone)]
pub enum GenRule {
    Leaf(Leaf),
    And(Leaf, Leaf),
    Or(Leaf, Leaf),
}

impl GenRule {
    pub fn text(&self) -> String {
        match self {
            GenRule::Leaf(leaf) => leaf.text(),
            GenRule::And(a, b) => format!("{} AND {}", a.text(), b.text()),
            GenRule::Or(a, b) => format!("{} OR {}", a.text(), b.text()),
        }
    }

    pub fn expected(&self, ctx: &Context) -> bool {
        match self {
            GenRule::Leaf(leaf) => leaf.expected(ctx),
            GenRule::And(a, b) => a.expected(ctx) && b.expected(ctx),
            GenRule::Or(a, b) => a.expected(ctx) || b.expected(ctx),
        }
    }
}

pub fn arb_rule() -> impl Strategy<Value = GenRule> {
    prop_oneof![
        arb_leaf().prop_map(GenRule::Leaf),
        (arb_leaf(), arb_leaf()).prop_map(|(a, b)| GenRule::And(a, b)),
        (arb_leaf(), arb_leaf()).prop_map(|(a, b)| GenRule::Or(a, b)),
    ]
}

pub fn arb_rules() -> impl Strategy<Value = Vec<GenRule>> {
    prop::collection::vec(arb_rule(), 1..6)
}

/// An attribute that is present with the expected kind, present with the
/// wrong kind, or missing.
fn arb_int_slot(range: std::ops::RangeInclusive<i64>) -> impl Strategy<Value = Option<Value>> {
    prop_oneof![
        6 => range.prop_map(|v| Some(Value::Int(v))),
        1 => "[0-9]{1,4}".prop_map(|s| Some(Value::Text(s))),
        1 => Just(None),
    ]
}

fn arb_text_slot() -> impl Strategy<Value = Option<Value>> {
    prop_oneof![
        6 => prop::sample::select(DEPARTMENTS).prop_map(|d| Some(Value::from(d))),
        1 => (0_i64..10).prop_map(|v| Some(Value::Int(v))),
        1 => Just(None),
    ]
}

pub fn arb_context() -> impl Strategy<Value = Context> {
    (
        arb_int_slot(0..=100),
        arb_int_slot(0..=100_000),
        arb_int_slot(0..=40),
        arb_text_slot(),
    )
        .prop_map(|(age, salary, experience, department)| {
            let mut ctx = Context::new();
            for (name, slot) in [
                ("age", age),
                ("salary", salary),
                ("experience", experience),
                ("department", department),
            ] {
                if let Some(value) = slot {
                    ctx.insert(name, value);
                }
            }
            ctx
        })
}
