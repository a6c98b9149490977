//! Tokenizing and word-level similarity

/// Weight of a substring match relative to the length ratio
pub const SUBSTRING_SIMILARITY_MULTIPLIER: f64 = 0.9;
/// Weight of a shared prefix relative to the longer word
pub const PREFIX_SIMILARITY_MULTIPLIER: f64 = 0.7;

/// Split text into lowercase words
///
/// A word boundary falls before every uppercase letter and at underscores
/// and whitespace, so `"DocumentTitle"` and `"document_title"` both yield
/// `["document", "title"]`.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut spaced = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        if c.is_uppercase() {
            spaced.push(' ');
        }
        if c == '_' {
            spaced.push(' ');
        } else {
            spaced.push(c);
        }
    }
    spaced
        .split_whitespace()
        .map(str::to_lowercase)
        .collect()
}

/// Similarity of two words in `[0, 1]`
///
/// Identical words score 1. When one contains the other the score is 0.9
/// times the length ratio; otherwise a shared prefix of `p` characters scores
/// `0.7 * p / max_len`. Comparison is case-sensitive; callers lowercase.
pub fn word_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    let len_a = a.chars().count();
    let len_b = b.chars().count();

    if b.contains(a) {
        return SUBSTRING_SIMILARITY_MULTIPLIER * ratio(len_a, len_b);
    }
    if a.contains(b) {
        return SUBSTRING_SIMILARITY_MULTIPLIER * ratio(len_b, len_a);
    }

    let prefix = a
        .chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .count();
    if prefix > 0 {
        return PREFIX_SIMILARITY_MULTIPLIER * ratio(prefix, len_a.max(len_b));
    }
    0.0
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}
