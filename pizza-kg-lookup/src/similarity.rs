//! I-Sub string similarity
//!
//! Stoilos, Stamou and Kollias, "A String Metric for Ontology Alignment"
//! (ISWC 2005). The score combines the commonality of repeatedly removed
//! longest common substrings with a Hamacher-product dissimilarity of the
//! unmatched remainders and a Winkler prefix bonus. The raw score lies in
//! `[-1, 1]`; this implementation returns it normalized to `[0, 1]`.

/// Hamacher parameter of the dissimilarity term
const HAMACHER_P: f64 = 0.6;

/// Substrings of this length or shorter do not count as common
const MIN_COMMON_LEN: usize = 2;

/// Winkler bonus per shared prefix character, capped at 4 characters
const WINKLER_SCALE: f64 = 0.1;
const WINKLER_MAX_PREFIX: usize = 4;

fn normalize(s: &str) -> Vec<char> {
    s.to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '.' | '_' | ' '))
        .collect()
}

/// Longest common substring as `(len, start_in_a, start_in_b)`, first found wins.
fn longest_common_substring(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    for i in 0..a.len() {
        if a.len() - i <= best.0 {
            break;
        }
        for j in 0..b.len() {
            if b.len() - j <= best.0 {
                break;
            }
            let mut k = 0;
            while i + k < a.len() && j + k < b.len() && a[i + k] == b[j + k] {
                k += 1;
            }
            if k > best.0 {
                best = (k, i, j);
            }
        }
    }
    best
}

fn winkler_improvement(a: &[char], b: &[char], commonality: f64) -> f64 {
    let prefix = a
        .iter()
        .zip(b)
        .take_while(|(x, y)| x == y)
        .count()
        .min(WINKLER_MAX_PREFIX);
    prefix as f64 * WINKLER_SCALE * (1.0 - commonality)
}

/// Lexical similarity of two names in `[0, 1]`; `1.0` for equal names.
///
/// Comparison is case-insensitive and ignores `.`, `_` and spaces.
pub fn isub(a: &str, b: &str) -> f64 {
    let norm_a = normalize(a);
    let norm_b = normalize(b);
    let (len_a, len_b) = (norm_a.len(), norm_b.len());

    if len_a == 0 && len_b == 0 {
        return 1.0;
    }
    if len_a == 0 || len_b == 0 {
        return 0.0;
    }

    let mut rest_a = norm_a.clone();
    let mut rest_b = norm_b.clone();
    let mut common = 0usize;

    while !rest_a.is_empty() && !rest_b.is_empty() {
        let (len, i, j) = longest_common_substring(&rest_a, &rest_b);
        if len <= MIN_COMMON_LEN {
            break;
        }
        common += len;
        rest_a.drain(i..i + len);
        rest_b.drain(j..j + len);
    }

    let commonality = (2 * common) as f64 / (len_a + len_b) as f64;
    let winkler = winkler_improvement(&norm_a, &norm_b, commonality);

    let unmatched_a = (len_a - common) as f64 / len_a as f64;
    let unmatched_b = (len_b - common) as f64 / len_b as f64;
    let sum = unmatched_a + unmatched_b;
    let product = unmatched_a * unmatched_b;
    let dissimilarity = if sum - product != 0.0 {
        product / (HAMACHER_P + (1.0 - HAMACHER_P) * (sum - product))
    } else {
        0.0
    };

    ((commonality - dissimilarity + winkler) + 1.0) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_identical_names_score_one() {
        assert!((isub("London", "London") - 1.0).abs() < EPS);
        assert!((isub("new york", "New_York") - 1.0).abs() < EPS);
    }

    #[test]
    fn test_empty_inputs() {
        assert!((isub("", "") - 1.0).abs() < EPS);
        assert_eq!(isub("London", ""), 0.0);
        assert_eq!(isub("", "London"), 0.0);
        // Only ignored characters
        assert!((isub("._ ", "") - 1.0).abs() < EPS);
    }

    #[test]
    fn test_bounded() {
        let pairs = [
            ("London", "Londonderry"),
            ("Paris", "Paris, Texas"),
            ("abc", "xyz"),
            ("a", "b"),
            ("Margherita", "Margarita"),
        ];
        for (a, b) in pairs {
            let s = isub(a, b);
            assert!((0.0..=1.0).contains(&s), "{a} vs {b} gave {s}");
        }
    }

    #[test]
    fn test_disjoint_names_score_low() {
        assert!(isub("abcdef", "uvwxyz") < 0.1);
    }

    #[test]
    fn test_closer_label_scores_higher() {
        let exact = isub("london", "London");
        let longer = isub("london", "London Borough of Camden");
        let other = isub("london", "Paris");
        assert!(exact > longer);
        assert!(longer > other);
    }

    #[test]
    fn test_symmetric_for_simple_pairs() {
        let ab = isub("Pizza Hut", "Pizza Hut Delivery");
        let ba = isub("Pizza Hut Delivery", "Pizza Hut");
        assert!((ab - ba).abs() < EPS);
    }

    #[test]
    fn test_short_overlaps_are_ignored() {
        // Shared "ab" is only two characters long and never counts as common
        let (len, _, _) = longest_common_substring(&normalize("abx"), &normalize("aby"));
        assert_eq!(len, 2);
        let s = isub("abx", "aby");
        assert!(s < 0.5);
    }
}
