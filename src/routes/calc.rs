//! `/calc?a=<int>&b=<int>`
//!
//! Deliberately permissive: the query is matched positionally and whatever
//! does not match stays zero. There is no error response.

use crate::http::response::{Response, StatusCode};

/// Operands pulled out of a calculator path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Operands {
    pub a: i32,
    pub b: i32,
}

impl Operands {
    /// Wrapping sum; overflow is not checked.
    pub fn sum(&self) -> i32 {
        self.a.wrapping_add(self.b)
    }
}

/// Matches `?a=<int>&b=<int>` starting at the first `?` of `path`.
///
/// Matching stops at the first mismatch; operands not reached stay 0.
pub fn parse_operands(path: &str) -> Operands {
    let mut ops = Operands::default();

    let Some(start) = path.find('?') else {
        return ops;
    };

    let Some(rest) = path[start..].strip_prefix("?a=") else {
        return ops;
    };
    let Some((a, rest)) = scan_int(rest) else {
        return ops;
    };
    ops.a = a;

    let Some(rest) = rest.strip_prefix("&b=") else {
        return ops;
    };
    if let Some((b, _)) = scan_int(rest) {
        ops.b = b;
    }

    ops
}

/// Reads an optionally signed decimal integer from the front of `s`.
fn scan_int(s: &str) -> Option<(i32, &str)> {
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }

    let magnitude = digits[..len]
        .bytes()
        .fold(0i32, |acc, d| acc.wrapping_mul(10).wrapping_add(i32::from(d - b'0')));
    let value = if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    };

    Some((value, &digits[len..]))
}

pub fn respond(path: &str) -> Response {
    let ops = parse_operands(path);
    let body = format!(
        "<html><body><h1>Calculation Result</h1><p>{} + {} = {}</p></body></html>",
        ops.a,
        ops.b,
        ops.sum()
    );

    Response::html(StatusCode::Ok, body)
}
