/// Sibling ordering for the route tree
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Total order applied to siblings and roots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortingType {
    /// Case-insensitive, numeric-aware: `page2` before `page10`
    #[default]
    Natural,
    /// Plain lexicographic comparison
    Basic,
}

impl SortingType {
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match self {
            SortingType::Natural => natural_cmp(a, b),
            SortingType::Basic => a.cmp(b),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

fn chunks(s: &str) -> Vec<Chunk<'_>> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut in_digits = None;

    for (idx, ch) in s.char_indices() {
        let is_digit = ch.is_ascii_digit();
        match in_digits {
            Some(prev) if prev != is_digit => {
                out.push(make_chunk(&s[start..idx], prev));
                start = idx;
            }
            _ => {}
        }
        in_digits = Some(is_digit);
    }

    if let Some(prev) = in_digits {
        out.push(make_chunk(&s[start..], prev));
    }
    out
}

fn make_chunk(text: &str, digits: bool) -> Chunk<'_> {
    if digits {
        Chunk::Digits(text)
    } else {
        Chunk::Text(text)
    }
}

fn compare_digits(a: &str, b: &str) -> Ordering {
    let a_trim = a.trim_start_matches('0');
    let b_trim = b.trim_start_matches('0');
    a_trim
        .len()
        .cmp(&b_trim.len())
        .then_with(|| a_trim.cmp(b_trim))
        // Fewer leading zeros first
        .then_with(|| a.len().cmp(&b.len()))
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Numeric-aware, case-insensitive string comparison
///
/// Falls back to plain comparison when the strings are otherwise equal so the
/// order stays total.
///
/// # Examples
///
/// ```
/// use routeview_router::tree::natural_cmp;
/// use std::cmp::Ordering;
///
/// assert_eq!(natural_cmp("/page2", "/page10"), Ordering::Less);
/// assert_eq!(natural_cmp("/About", "/blog"), Ordering::Less);
/// ```
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let left = chunks(a);
    let right = chunks(b);

    for (l, r) in left.iter().zip(right.iter()) {
        let ordering = match (l, r) {
            (Chunk::Digits(x), Chunk::Digits(y)) => compare_digits(x, y),
            (Chunk::Text(x), Chunk::Text(y)) => compare_text(x, y),
            // Digits sort before text, as in most file managers
            (Chunk::Digits(_), Chunk::Text(_)) => Ordering::Less,
            (Chunk::Text(_), Chunk::Digits(_)) => Ordering::Greater,
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    left.len().cmp(&right.len()).then_with(|| a.cmp(b))
}
