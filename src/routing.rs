use once_cell::sync::Lazy;
use regex::Regex;

use crate::engines::{self, ENGINES};

/// One alphabetic character, at least one whitespace, then the rest of the
/// query (which may be empty).
static LETTER_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z])\s+(.*)$").expect("letter prefix pattern"));

/// Reactive pass, run on every keystroke.
///
/// Returns the target engine index and the query with the prefix stripped
/// when the leading letter names a different engine than `selected`. A
/// letter matching the current engine's label is left in place so the user
/// can keep typing.
pub fn route_on_input(query: &str, selected: usize) -> Option<(usize, String)> {
    let caps = LETTER_PREFIX.captures(query)?;
    let letter = caps[1].chars().next()?;
    if engines::label_starts_with(ENGINES[selected].label, letter) {
        return None;
    }
    let target = engines::by_first_letter(letter)?;
    Some((target, caps[2].to_string()))
}

/// Submit pass: strips the prefix whenever any engine matches, the
/// currently selected one included.
pub fn route_on_submit(query: &str, selected: usize) -> (usize, String) {
    if let Some(caps) = LETTER_PREFIX.captures(query) {
        if let Some(target) = caps[1]
            .chars()
            .next()
            .and_then(engines::by_first_letter)
        {
            return (target, caps[2].to_string());
        }
    }
    (selected, query.to_string())
}
