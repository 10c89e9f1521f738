//! Ratcliff/Obershelp string similarity.
//!
//! `ratio` returns `2·M / (|a| + |b|)` where `M` is the number of characters
//! in the matching blocks found by recursively taking the longest common
//! substring. No junk heuristic is applied.

/// Similarity of `a` and `b` in `[0.0, 1.0]`.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_characters(&a, &b) as f64 / total as f64
}

/// Index of the candidate closest to `word`, if its ratio reaches `cutoff`.
///
/// The candidate is the first sequence passed to [`ratio`] and `word` the
/// second. Equal scores go to the candidate that sorts greater.
pub fn closest_match(word: &str, candidates: &[&str], cutoff: f64) -> Option<usize> {
    candidates
        .iter()
        .enumerate()
        .map(|(index, candidate)| (index, *candidate, ratio(candidate, word)))
        .filter(|(_, _, score)| *score >= cutoff)
        .max_by(|(_, lhs, lhs_score), (_, rhs, rhs_score)| {
            lhs_score.total_cmp(rhs_score).then_with(|| lhs.cmp(rhs))
        })
        .map(|(index, _, _)| index)
}

fn matching_characters(a: &[char], b: &[char]) -> usize {
    let (i, j, size) = longest_common_block(a, b);
    if size == 0 {
        return 0;
    }
    size + matching_characters(&a[..i], &b[..j])
        + matching_characters(&a[i + size..], &b[j + size..])
}

/// Longest common substring as `(start_in_a, start_in_b, len)`.
///
/// Among blocks of equal length the one starting earliest in `a`, then
/// earliest in `b`, wins.
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut previous = vec![0usize; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        let mut current = vec![0usize; b.len() + 1];
        for (j, cb) in b.iter().enumerate() {
            if ca == cb {
                let len = previous[j] + 1;
                current[j + 1] = len;
                if len > best.2 {
                    best = (i + 1 - len, j + 1 - len, len);
                }
            }
        }
        previous = current;
    }
    best
}
