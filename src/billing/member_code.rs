use chrono::{DateTime, Datelike, Utc};

use crate::domain::Member;

const CODE_LETTER: char = 'A';

/// `A` followed by the two-digit year, e.g. `A24`.
pub fn year_prefix(year: i32) -> String {
    format!("{}{:02}", CODE_LETTER, year.rem_euclid(100))
}

/// Numeric sequence carried after the three-character prefix.
///
/// Anything that is not a plain number counts as 0 so a hand-edited or
/// corrupted code can never block registration.
pub fn sequence_of(code: &str) -> u32 {
    code.get(3..)
        .and_then(|suffix| suffix.parse::<u32>().ok())
        .unwrap_or(0)
}

/// Next display code for `year`, given the codes already handed out.
///
/// The sequence is one past the highest sequence among codes with this year's
/// prefix, restarting at `001` each year.
pub fn next_member_code<'a>(existing: impl IntoIterator<Item = &'a str>, year: i32) -> String {
    let prefix = year_prefix(year);
    let last = existing
        .into_iter()
        .filter(|code| code.starts_with(&prefix))
        .map(sequence_of)
        .max()
        .unwrap_or(0);

    format!("{}{:03}", prefix, last.saturating_add(1))
}

/// Allocates the code for a member registered at `now`.
pub fn allocate_member_code<'a>(members: impl IntoIterator<Item = &'a Member>, now: DateTime<Utc>) -> String {
    next_member_code(members.into_iter().map(|m| m.member_code.as_str()), now.year())
}
