use std::cmp::Ordering;

use rust_decimal::Decimal;

/// Parses a plain decimal token: optional sign, ASCII digits, at most one '.'.
/// Anything else (exponents, underscores, blanks, values `Decimal` cannot hold
/// without rounding) is not a number.
pub fn parse_number(token: &str) -> Option<Decimal> {
    let body = token.strip_prefix(|c: char| c == '-' || c == '+').unwrap_or(token);

    let mut digits = 0usize;
    let mut dots = 0usize;
    for ch in body.chars() {
        match ch {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return None,
        }
    }
    if digits == 0 || dots > 1 {
        return None;
    }

    Decimal::from_str_exact(token).ok()
}

/// Orders a field against a literal. Numeric when both sides are numbers,
/// otherwise byte-wise on the raw strings.
pub fn compare_field(field: &str, literal: &str, literal_number: Option<&Decimal>) -> Ordering {
    match (literal_number, parse_number(field)) {
        (Some(rhs), Some(lhs)) => lhs.cmp(rhs),
        _ => field.as_bytes().cmp(literal.as_bytes()),
    }
}
