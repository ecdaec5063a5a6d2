//! Canonical integer encodings of strings under several equivalence notions.
//!
//! Every encoder maps a string of length `n` to a sequence of `n` integers. Two
//! strings are equivalent under a notion exactly when their encodings are
//! equal element-wise.

use ahash::AHashMap as HashMap;
use std::fmt;
use std::hash::Hash;

/// Which notion of symbol equivalence to compare factors under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Equivalence {
    /// Literal symbol equality.
    Strict,
    /// Equal up to a bijective renaming of symbols.
    Parameterized,
    /// Same relative order of symbols, equal symbols sharing a rank.
    OrderPreserving,
    /// Same ranking of positions, ties broken by position.
    WeakOrderPreserving,
    /// Same previous-smaller-value structure (Cartesian tree).
    Cartesian,
}

impl Equivalence {
    pub const ALL: [Equivalence; 5] = [
        Equivalence::Strict,
        Equivalence::Parameterized,
        Equivalence::OrderPreserving,
        Equivalence::WeakOrderPreserving,
        Equivalence::Cartesian,
    ];

    /// Upper-case configuration name.
    pub fn name(self) -> &'static str {
        match self {
            Equivalence::Strict => "STRICT",
            Equivalence::Parameterized => "PARAMETERIZED",
            Equivalence::OrderPreserving => "ORDER_PRESERVING",
            Equivalence::WeakOrderPreserving => "WEAK_ORDER_PRESERVING",
            Equivalence::Cartesian => "CARTESIAN",
        }
    }

    /// Encodes `s` under this notion.
    pub fn encode<T>(self, s: &[T]) -> Vec<usize>
    where
        T: Ord + Hash + Copy + Into<u32>,
    {
        match self {
            Equivalence::Strict => strict_encoding(s),
            Equivalence::Parameterized => prev_encoding(s),
            Equivalence::OrderPreserving => order_preserving_encoding(s),
            Equivalence::WeakOrderPreserving => weak_order_preserving_encoding(s),
            Equivalence::Cartesian => psv_encoding(s),
        }
    }

    /// Returns true if `a` and `b` encode identically.
    ///
    /// Strict comparison skips the encoding step.
    pub fn equivalent<T>(self, a: &[T], b: &[T]) -> bool
    where
        T: Ord + Hash + Copy + Into<u32>,
    {
        if a.len() != b.len() {
            return false;
        }
        match self {
            Equivalence::Strict => a == b,
            _ => self.encode(a) == self.encode(b),
        }
    }
}

impl fmt::Display for Equivalence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identity encoding: each position holds its symbol's code point.
pub fn strict_encoding<T: Copy + Into<u32>>(s: &[T]) -> Vec<usize> {
    s.iter().map(|&c| c.into() as usize).collect()
}

/// Prev-encoding: distance back to the previous occurrence of the same
/// symbol, or 0 for a first occurrence.
pub fn prev_encoding<T: Hash + Eq + Copy>(s: &[T]) -> Vec<usize> {
    let mut last_seen: HashMap<T, usize> = HashMap::default();
    s.iter()
        .enumerate()
        .map(|(i, &c)| match last_seen.insert(c, i) {
            Some(prev) => i - prev,
            None => 0,
        })
        .collect()
}

/// Rank of each symbol among the distinct symbols of `s`.
pub fn order_preserving_encoding<T: Ord + Copy>(s: &[T]) -> Vec<usize> {
    let mut distinct: Vec<T> = s.to_vec();
    distinct.sort_unstable();
    distinct.dedup();
    s.iter()
        .map(|c| distinct.binary_search(c).unwrap_or_default())
        .collect()
}

/// Rank of each position when positions are ordered by symbol, then index.
///
/// The result is always a permutation of `0..s.len()`.
pub fn weak_order_preserving_encoding<T: Ord>(s: &[T]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..s.len()).collect();
    // Stable sort keeps equal symbols in index order.
    order.sort_by(|&i, &j| s[i].cmp(&s[j]));
    let mut rank = vec![0; s.len()];
    for (r, i) in order.into_iter().enumerate() {
        rank[i] = r;
    }
    rank
}

/// Previous-smaller-value encoding: distance to the nearest earlier position
/// whose symbol is not greater than the current one, or 0 if none exists.
pub fn psv_encoding<T: Ord + Copy>(s: &[T]) -> Vec<usize> {
    let mut stack: Vec<(T, usize)> = Vec::new();
    let mut result = Vec::with_capacity(s.len());
    for (i, &c) in s.iter().enumerate() {
        while matches!(stack.last(), Some(&(top, _)) if top > c) {
            stack.pop();
        }
        result.push(stack.last().map_or(0, |&(_, j)| i - j));
        stack.push((c, i));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_psv_encoding() {
        assert_eq!(psv_encoding::<char>(&[]), Vec::<usize>::new());
        assert_eq!(psv_encoding(&chars("a")), vec![0]);
        assert_eq!(psv_encoding(&chars("aa")), vec![0, 1]);
        assert_eq!(psv_encoding(&chars("ab")), vec![0, 1]);
        assert_eq!(psv_encoding(&chars("ba")), vec![0, 0]);
        assert_eq!(psv_encoding(&chars("abc")), vec![0, 1, 1]);
        assert_eq!(psv_encoding(&chars("cba")), vec![0, 0, 0]);
        assert_eq!(psv_encoding(&chars("banana")), vec![0, 0, 1, 2, 1, 2]);
        assert_eq!(psv_encoding(&chars("aaaa")), vec![0, 1, 1, 1]);
        assert_eq!(
            psv_encoding(&chars("abcdabcd")),
            vec![0, 1, 1, 1, 4, 1, 1, 1]
        );
    }

    #[test]
    fn test_prev_encoding() {
        assert_eq!(prev_encoding(&chars("abc")), vec![0, 0, 0]);
        assert_eq!(prev_encoding(&chars("abca")), vec![0, 0, 0, 3]);
        assert_eq!(
            prev_encoding(&chars("abacabad")),
            vec![0, 0, 2, 0, 2, 4, 2, 0]
        );
        assert_eq!(prev_encoding(&chars("a")), vec![0]);
        assert_eq!(prev_encoding::<char>(&[]), Vec::<usize>::new());
        assert_eq!(prev_encoding(&chars("aaaa")), vec![0, 1, 1, 1]);
    }

    #[test]
    fn test_weak_order_preserving_encoding() {
        let cases: [(&str, &[usize]); 9] = [
            ("a", &[0]),
            ("aa", &[0, 1]),
            ("ab", &[0, 1]),
            ("ba", &[1, 0]),
            ("abc", &[0, 1, 2]),
            ("cba", &[2, 1, 0]),
            ("banana", &[3, 0, 4, 1, 5, 2]),
            ("aaaa", &[0, 1, 2, 3]),
            ("abcdabcd", &[0, 2, 4, 6, 1, 3, 5, 7]),
        ];
        for (input, expected) in cases {
            assert_eq!(
                weak_order_preserving_encoding(&chars(input)),
                expected,
                "input {:?}",
                input
            );
        }
        assert!(weak_order_preserving_encoding::<char>(&[]).is_empty());
    }

    #[test]
    fn test_order_preserving_encoding() {
        let cases: [(&str, &[usize]); 9] = [
            ("a", &[0]),
            ("aa", &[0, 0]),
            ("ab", &[0, 1]),
            ("ba", &[1, 0]),
            ("abc", &[0, 1, 2]),
            ("cba", &[2, 1, 0]),
            ("banana", &[1, 0, 2, 0, 2, 0]),
            ("aaaa", &[0, 0, 0, 0]),
            ("abcdabcd", &[0, 1, 2, 3, 0, 1, 2, 3]),
        ];
        for (input, expected) in cases {
            assert_eq!(
                order_preserving_encoding(&chars(input)),
                expected,
                "input {:?}",
                input
            );
        }
        assert!(order_preserving_encoding::<char>(&[]).is_empty());
    }

    #[test]
    fn test_strict_encoding() {
        assert_eq!(strict_encoding(&chars("ab")), vec![97, 98]);
        assert_eq!(strict_encoding(&[3u8, 1, 3]), vec![3, 1, 3]);
    }

    #[test]
    fn test_strict_single_symbol_keeps_code_point() {
        assert_eq!(strict_encoding(&chars("a")), vec![97]);
        assert_eq!(Equivalence::Strict.encode(&['a'][..]), vec![97]);
    }

    #[test]
    fn test_single_symbol_encodes_to_zero() {
        for eq in Equivalence::ALL {
            if eq != Equivalence::Strict {
                assert_eq!(eq.encode(&['q'][..]), vec![0], "{}", eq);
            }
        }
    }

    #[test]
    fn test_equivalent() {
        let ab = chars("ab");
        let ba = chars("ba");
        let xy = chars("xy");
        assert!(!Equivalence::Strict.equivalent(&ab, &xy));
        assert!(Equivalence::Parameterized.equivalent(&ab, &ba));
        assert!(!Equivalence::OrderPreserving.equivalent(&ab, &ba));
        assert!(Equivalence::OrderPreserving.equivalent(&ab, &xy));
        assert!(Equivalence::Cartesian.equivalent(&chars("aba"), &chars("bcb")));
        assert!(!Equivalence::Cartesian.equivalent(&chars("ab"), &chars("abc")));
    }

    #[test]
    fn test_parameterized_ignores_renaming() {
        let s = chars("abacabad");
        let renamed: Vec<char> = s
            .iter()
            .map(|c| match c {
                'a' => 'd',
                'b' => 'a',
                'c' => 'b',
                _ => 'c',
            })
            .collect();
        assert_eq!(prev_encoding(&s), prev_encoding(&renamed));
    }
}
