//! Approximate string matching for pronunciation answers.

/// Calculate Levenshtein distance between two strings.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Use two rows instead of the full matrix for memory efficiency
    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };

            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Calculate normalized similarity (0.0 to 1.0) based on Levenshtein distance:
/// `(max_len - distance) / max_len`, over character counts.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0; // Both empty strings are identical
    }

    let distance = levenshtein_distance(a, b);
    (max_len - distance) as f64 / max_len as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("abc", "abc"), 0);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("saturday", "sunday"), 3);
    }

    #[test]
    fn test_similarity_identity() {
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("cat", "cat"), 1.0);
        assert_eq!(similarity("abc", "abc"), 1.0);
    }

    #[test]
    fn test_similarity_symmetry() {
        for (a, b) in [("kitten", "sitting"), ("apple", "appl"), ("", "word")] {
            assert_eq!(similarity(a, b), similarity(b, a));
        }
    }

    #[test]
    fn test_similarity_disjoint() {
        // Three substitutions over length three
        assert_eq!(similarity("cat", "dog"), 0.0);
    }

    #[test]
    fn test_similarity_ranges() {
        assert!(similarity("kitten", "sitting") > 0.5);
        assert!(similarity("abc", "xyz") < 0.5);
        let s = similarity("apple", "appl");
        assert!((0.0..=1.0).contains(&s));
        assert_eq!(s, 0.8);
    }

    #[test]
    fn test_similarity_multibyte() {
        // Distance is measured in characters, not bytes
        assert_eq!(similarity("café", "cafe"), 0.75);
    }
}
