use std::cmp::Ordering;

use rust_decimal::Decimal;

use crate::types::value::parse_number;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Gt,
    Lt,
    Gte,
    Lte,
}

impl CompareOp {
    /// Operator tokens, two-character ones first so `>=` wins over `>`.
    pub const TOKENS: [(&'static str, CompareOp); 6] = [
        (">=", CompareOp::Gte),
        ("<=", CompareOp::Lte),
        ("!=", CompareOp::Ne),
        (">", CompareOp::Gt),
        ("<", CompareOp::Lt),
        ("=", CompareOp::Eq),
    ];

    pub fn token(self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Ne => "!=",
            CompareOp::Gt => ">",
            CompareOp::Lt => "<",
            CompareOp::Gte => ">=",
            CompareOp::Lte => "<=",
        }
    }

    /// Whether `field <op> literal` holds given how the field orders against the literal
    pub fn accepts(self, ord: Ordering) -> bool {
        match self {
            CompareOp::Eq => ord == Ordering::Equal,
            CompareOp::Ne => ord != Ordering::Equal,
            CompareOp::Gt => ord == Ordering::Greater,
            CompareOp::Lt => ord == Ordering::Less,
            CompareOp::Gte => ord != Ordering::Less,
            CompareOp::Lte => ord != Ordering::Greater,
        }
    }
}

/// A single `column <op> literal` comparison, bound to its header position.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub column: String,
    pub index: usize,
    pub op: CompareOp,
    pub value: String,
    number: Option<Decimal>,
}

impl Predicate {
    pub fn new(column: impl Into<String>, index: usize, op: CompareOp, value: impl Into<String>) -> Self {
        let value = value.into();
        let number = parse_number(&value);
        Self {
            column: column.into(),
            index,
            op,
            value,
            number,
        }
    }

    /// The literal as a number, when it parses as one
    pub fn number(&self) -> Option<&Decimal> {
        self.number.as_ref()
    }
}

/// Predicates combined with logical AND. Empty means every row passes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    predicates: Vec<Predicate>,
}

impl FilterSet {
    pub fn new(predicates: Vec<Predicate>) -> Self {
        Self { predicates }
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}
