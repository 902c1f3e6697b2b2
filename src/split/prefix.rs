//! Character-level name comparison shared by the partitioner and the namer.
//!
//! Every comparison works on Unicode scalar values and ignores case, so two
//! names that sort together under a case-insensitive sort also compare equal
//! here. Lengths and indexes count characters, not bytes.

/// Case-insensitive equality of two characters.
pub fn chars_eq(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Number of characters in `name`.
pub fn char_len(name: &str) -> usize {
    name.chars().count()
}

/// Length of the longest common prefix of `a` and `b`.
pub fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| chars_eq(*x, *y))
        .count()
}

/// Index of the first character at which `a` and `b` differ.
///
/// When one name is a prefix of the other the overlap never diverges, and
/// the result is the length of the shorter name.
pub fn divergence_index(a: &str, b: &str) -> usize {
    common_prefix_len(a, b)
}

/// Compare the first `n` characters of `a` and `b`.
///
/// A name shorter than `n` contributes all of its characters, so `"ab"` and
/// `"abc"` differ at `n = 3` but match at `n = 2`.
pub fn prefix_eq(a: &str, b: &str, n: usize) -> bool {
    let mut left = a.chars().take(n);
    let mut right = b.chars().take(n);
    loop {
        match (left.next(), right.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) if chars_eq(x, y) => {}
            _ => return false,
        }
    }
}

/// The first `n` characters of `name`, keeping the original casing.
pub fn take_chars(name: &str, n: usize) -> &str {
    match name.char_indices().nth(n) {
        Some((byte, _)) => &name[..byte],
        None => name,
    }
}

/// Case-insensitive equality of two labels.
pub fn labels_eq(a: &str, b: &str) -> bool {
    char_len(a) == char_len(b) && prefix_eq(a, b, char_len(a))
}

#[cfg(test)]
#[path = "prefix_test.rs"]
mod tests;
