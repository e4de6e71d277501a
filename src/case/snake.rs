//! String-level snake_case conversion
//!
//! A pure, locale-independent word splitter used by the recursive case
//! converter. Word boundaries are case transitions (`fooBar`), acronym tails
//! (`HTTPResponse`), and letter/digit transitions in either direction; any
//! non-alphanumeric character also separates words without being emitted.

/// Rewrite an identifier to snake_case.
///
/// ```
/// use wireform::case::snake_case;
///
/// assert_eq!(snake_case("durationSeconds"), "duration_seconds");
/// assert_eq!(snake_case("already_snake"), "already_snake");
/// ```
pub fn snake_case(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len() + 4);

    for (i, &ch) in chars.iter().enumerate() {
        if !ch.is_ascii_alphanumeric() {
            continue;
        }
        if !out.is_empty() && !out.ends_with('_') && is_boundary(&chars, i) {
            out.push('_');
        }
        out.push(ch.to_ascii_lowercase());
    }

    out
}

/// Whether a new word starts at position `i`. Only called with at least one
/// emitted character, so `i > 0` holds.
fn is_boundary(chars: &[char], i: usize) -> bool {
    let prev = chars[i - 1];
    let ch = chars[i];

    if !prev.is_ascii_alphanumeric() {
        return true;
    }
    if prev.is_ascii_lowercase() && ch.is_ascii_uppercase() {
        return true;
    }
    if prev.is_ascii_digit() != ch.is_ascii_digit() {
        return true;
    }
    // Acronym tail: the last uppercase of a run starts the next word when
    // followed by a lowercase character, e.g. HTTPResponse -> http_response.
    prev.is_ascii_uppercase()
        && ch.is_ascii_uppercase()
        && chars.get(i + 1).is_some_and(|next| next.is_ascii_lowercase())
}
