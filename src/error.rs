use crate::structure::Repetition;
use thiserror::Error;

/// Errors raised while building alphabets, morphisms and search configurations.
///
/// The freeness checks themselves are total and never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown equivalence type: {0}")]
    UnknownEquivalence(String),

    #[error("unknown structure type: {0}")]
    UnknownStructure(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("symbol {symbol:?} is not in the morphism's domain")]
    UndefinedSymbol { symbol: char },

    #[error("symbol {symbol:?} is not in the target alphabet")]
    ForeignSymbol { symbol: char },

    #[error("image of {symbol:?} is empty")]
    EmptyImage { symbol: char },

    #[error("expected {expected} images, found {found}")]
    ImageCountMismatch { expected: usize, found: usize },

    #[error("seed text {iteration} is not square-free: {witness}")]
    SeedNotSquareFree {
        iteration: usize,
        witness: Repetition,
    },

    #[error("code fails on seed text {iteration}: {witness}")]
    CodeRejected {
        iteration: usize,
        witness: Repetition,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
