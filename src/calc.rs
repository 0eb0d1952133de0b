use once_cell::sync::Lazy;
use regex::Regex;

/// Digits, the four operators, parentheses and whitespace. Everything the
/// evaluator is allowed to see has to pass this gate first, so the accepted
/// language never grows past plain arithmetic.
static MATH_EXPR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9+\-*/().\s]+$").expect("math expression pattern"));

#[derive(Debug, Clone, PartialEq)]
pub struct CalcResult {
    pub expression: String,
    pub value: f64,
}

pub fn is_math_expression(text: &str) -> bool {
    MATH_EXPR.is_match(text)
}

/// Advisory evaluation of the current query. Returns `None` for anything
/// that is not a complete, valid expression right now; transient states
/// while typing are not errors.
pub fn evaluate(query: &str) -> Option<CalcResult> {
    let expr = query.trim();
    if expr.is_empty() || !is_math_expression(expr) {
        return None;
    }
    let value = exmex::eval_str::<f64>(expr).ok()?;
    Some(CalcResult {
        expression: expr.to_string(),
        value,
    })
}
