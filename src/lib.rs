//! # Square-free strings under relaxed equivalences
//!
//! Checks strings for squares (`XX`) and cubes (`XXX`) where the repeated
//! factors only need to be *equivalent*, not equal, and searches for
//! morphisms that keep a known square-free sequence repetition-free.
//!
//! Supported equivalences:
//! 1. **Strict**: literal equality
//! 2. **Parameterized**: equal up to renaming symbols (prev-encoding)
//! 3. **Order-preserving**: same relative order of symbols
//! 4. **Weak order-preserving**: same ranking of positions
//! 5. **Cartesian**: same previous-smaller-value structure
//!
//! ## Example
//!
//! ```
//! use squarefree_rs::{is_square_free, Equivalence};
//!
//! let text: Vec<char> = "abcbac".chars().collect();
//! assert!(is_square_free(1, Equivalence::Strict, &text));
//!
//! // "ab" and "cd" are the same up to renaming.
//! let text: Vec<char> = "abcd".chars().collect();
//! assert!(!is_square_free(2, Equivalence::Parameterized, &text));
//! ```
//!
//! ## Searching
//!
//! ```
//! use squarefree_rs::{Alphabet, DepthFirstSearch, FreenessCheck};
//!
//! let search = DepthFirstSearch::new(Alphabet::latin(2).unwrap(), FreenessCheck::strict_square());
//! // Only seven binary words are square-free.
//! assert_eq!(search.count(), 7);
//! ```
//!
//! Checks are exhaustive scans over all factors, cubic in the text length.

mod alphabet;
mod config;
mod encoding;
mod enumerate;
mod error;
mod morphism;
mod search;
mod seed;
mod structure;

#[cfg(test)]
mod tests;

pub use alphabet::{Alphabet, MAX_LATIN_SIZE};
pub use config::SearchConfig;
pub use encoding::{
    order_preserving_encoding, prev_encoding, psv_encoding, strict_encoding,
    weak_order_preserving_encoding, Equivalence,
};
pub use enumerate::{
    candidate_count, candidate_images, enumerate_morphisms, strings_of_length, ImageOrder,
    MorphismEnumerator,
};
pub use error::{Error, Result};
pub use morphism::Morphism;
pub use search::{DepthFirstSearch, MorphismSearch, SearchStats, StringPredicate};
pub use seed::{grow_seed_texts, verify_code, DEFAULT_VERIFY_ITERATIONS};
pub use structure::{
    find_cube, find_square, is_cube_free, is_square_free, FreenessCheck, Repetition, Structure,
};
