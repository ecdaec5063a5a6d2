use crate::alphabet::Alphabet;
use crate::encoding::{
    order_preserving_encoding, prev_encoding, weak_order_preserving_encoding, Equivalence,
};
use crate::morphism::Morphism;
use crate::search::DepthFirstSearch;
use crate::structure::{find_cube, find_square, is_square_free, FreenessCheck, Structure};
use proptest::prelude::*;

/// Short strings over `a..d`; long enough to contain repetitions, short
/// enough for the exhaustive checks.
fn small_text() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(prop::sample::select(vec!['a', 'b', 'c', 'd']), 0..16)
}

fn equivalence() -> impl Strategy<Value = Equivalence> {
    prop::sample::select(Equivalence::ALL.to_vec())
}

proptest! {
    /// Property 1: Length preservation
    /// Every encoding has exactly one value per input position.
    #[test]
    fn prop_encoding_length(s in small_text(), eq in equivalence()) {
        prop_assert_eq!(eq.encode(&s).len(), s.len());
    }

    /// Property 2: Renaming invariance
    /// The prev-encoding does not change under a bijective renaming.
    #[test]
    fn prop_prev_encoding_ignores_renaming(
        s in small_text(),
        perm in Just(vec!['w', 'x', 'y', 'z']).prop_shuffle(),
    ) {
        let renamed: Vec<char> = s.iter().map(|&c| perm[(c as u8 - b'a') as usize]).collect();
        prop_assert_eq!(prev_encoding(&s), prev_encoding(&renamed));
    }

    /// Property 3: Weak ranks are a permutation of the positions.
    #[test]
    fn prop_weak_order_is_permutation(s in small_text()) {
        let mut ranks = weak_order_preserving_encoding(&s);
        ranks.sort_unstable();
        prop_assert_eq!(ranks, (0..s.len()).collect::<Vec<_>>());
    }

    /// Property 4: Strict ranks stay below the number of distinct symbols.
    #[test]
    fn prop_order_ranks_bounded(s in small_text()) {
        let mut distinct = s.clone();
        distinct.sort_unstable();
        distinct.dedup();
        for rank in order_preserving_encoding(&s) {
            prop_assert!(rank < distinct.len());
        }
    }

    /// Property 5: Witnesses survive in any text that contains them.
    #[test]
    fn prop_witness_in_context(
        prefix in small_text(),
        s in small_text(),
        suffix in small_text(),
        eq in equivalence(),
        min_root in 1usize..3,
    ) {
        if let Some(witness) = find_square(min_root, eq, &s) {
            let factor = &s[witness.start..witness.end()];
            prop_assert!(!is_square_free(min_root, eq, factor));

            let mut wider = prefix.clone();
            wider.extend_from_slice(&s);
            wider.extend_from_slice(&suffix);
            prop_assert!(!is_square_free(min_root, eq, &wider));
        }
    }

    /// Property 6: Raising the minimum root can only remove repetitions.
    #[test]
    fn prop_min_root_monotone(s in small_text(), eq in equivalence(), min_root in 1usize..4) {
        if is_square_free(min_root, eq, &s) {
            prop_assert!(is_square_free(min_root + 1, eq, &s));
        }
    }

    /// Property 7: Strict squares are squares under every equivalence.
    #[test]
    fn prop_strict_is_finest(s in small_text(), eq in equivalence()) {
        if is_square_free(1, eq, &s) {
            prop_assert!(is_square_free(1, Equivalence::Strict, &s));
        }
    }

    /// Property 8: Determinism
    /// Repeated calls agree.
    #[test]
    fn prop_deterministic(s in small_text(), eq in equivalence()) {
        prop_assert_eq!(eq.encode(&s), eq.encode(&s));
        prop_assert_eq!(find_square(1, eq, &s), find_square(1, eq, &s));
        prop_assert_eq!(find_cube(1, eq, &s), find_cube(1, eq, &s));
    }

    /// Property 9: Witness shape
    /// A reported repetition has the right length and fits in the text.
    #[test]
    fn prop_witness_shape(s in small_text(), eq in equivalence(), min_root in 1usize..3) {
        for structure in Structure::ALL {
            if let Some(witness) = structure.find(min_root, eq, &s) {
                prop_assert_eq!(witness.length % structure.exponent(), 0);
                prop_assert!(witness.root_len() >= min_root);
                prop_assert!(witness.end() <= s.len());
            }
        }
    }

    /// Property 10: Morphism images concatenate.
    #[test]
    fn prop_apply_length(
        s in prop::collection::vec(prop::sample::select(vec!['a', 'b', 'c']), 0..32)
    ) {
        let seed = Morphism::seed();
        let expected: usize = s.iter().map(|&c| seed.image(c).map_or(0, <[char]>::len)).sum();
        prop_assert_eq!(seed.apply(&s).unwrap().len(), expected);
    }
}

/// Bolero fuzz test: No panics on arbitrary input
#[cfg(test)]
#[test]
fn fuzz_no_panic() {
    bolero::check!().with_type::<Vec<u8>>().for_each(|input| {
        let text = &input[..input.len().min(24)];
        for eq in Equivalence::ALL {
            assert_eq!(eq.encode(text).len(), text.len());
            for structure in Structure::ALL {
                let _ = structure.is_free(1, eq, text);
            }
        }
    });
}

/// Bolero fuzz test: apply either succeeds or names the offending symbol
#[cfg(test)]
#[test]
fn fuzz_apply_undefined() {
    bolero::check!().with_type::<Vec<u8>>().for_each(|input| {
        let text: Vec<char> = input.iter().map(|&b| char::from(b'a' + b % 5)).collect();
        match Morphism::seed().apply(&text) {
            Ok(image) => assert!(image.len() >= text.len()),
            Err(crate::Error::UndefinedSymbol { symbol }) => {
                assert!(symbol == 'd' || symbol == 'e')
            }
            Err(other) => panic!("unexpected error {:?}", other),
        }
    });
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_dfs_results_are_prefix_closed() {
        let check = FreenessCheck::new(Structure::Square, Equivalence::Parameterized, 2);
        let found: Vec<String> =
            DepthFirstSearch::new(Alphabet::latin(2).unwrap(), check).collect();
        for word in &found {
            let chars: Vec<char> = word.chars().collect();
            assert!(check.is_free(&chars), "{} should be square-free", word);
            for end in 0..chars.len() {
                let prefix: String = chars[..end].iter().collect();
                assert!(found.contains(&prefix), "prefix {:?} of {:?} missing", prefix, word);
            }
        }
    }

    #[test]
    fn test_seed_generator_six_iterations() {
        let seed = Morphism::seed();
        let mut text = vec!['a'];
        for _ in 0..6 {
            text = seed.apply(&text).unwrap();
            assert!(FreenessCheck::strict_square().is_free(&text));
        }
    }
}
