//! Human ordering of names: letters compare case-insensitively and by
//! their base letter ("É" sorts with "E"), digit runs compare by numeric
//! value, so "Person 2" sorts before "Person 10".

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, PartialEq, Eq)]
enum Chunk<'a> {
    Text(String),
    Number(&'a str),
}

fn chunks(s: &str) -> Vec<Chunk<'_>> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut in_digits: Option<bool> = None;

    for (i, c) in s.char_indices() {
        let digit = c.is_ascii_digit();
        match in_digits {
            Some(prev) if prev != digit => {
                out.push(make_chunk(&s[start..i], prev));
                start = i;
            }
            _ => {}
        }
        in_digits = Some(digit);
    }
    if let Some(digit) = in_digits {
        out.push(make_chunk(&s[start..], digit));
    }
    out
}

fn make_chunk(s: &str, digit: bool) -> Chunk<'_> {
    if digit {
        Chunk::Number(s)
    } else {
        Chunk::Text(fold(s))
    }
}

/// Lowercase and strip accents: decompose, then drop combining marks.
fn fold(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

fn compare_numbers(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn compare_chunk(a: &Chunk<'_>, b: &Chunk<'_>) -> Ordering {
    match (a, b) {
        (Chunk::Number(x), Chunk::Number(y)) => compare_numbers(x, y),
        (Chunk::Text(x), Chunk::Text(y)) => x.cmp(y),
        // A leading number sorts ahead of text.
        (Chunk::Number(_), Chunk::Text(_)) => Ordering::Less,
        (Chunk::Text(_), Chunk::Number(_)) => Ordering::Greater,
    }
}

/// Compare two strings in natural order. Strings that only differ by
/// accents, case or zero padding are ordered by their lowercased form and
/// then by plain byte order so the result is total.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let left = chunks(a);
    let right = chunks(b);
    for (x, y) in left.iter().zip(right.iter()) {
        let ord = compare_chunk(x, y);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    left.len()
        .cmp(&right.len())
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}
