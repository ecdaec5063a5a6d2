use crate::error::{Error, Result};
use std::fmt;

/// Largest alphabet `Alphabet::latin` will build (`a` through `z`).
pub const MAX_LATIN_SIZE: usize = 26;

/// An ordered set of distinct symbols.
///
/// Symbol order matters: it fixes the rank used to index morphism images and
/// the order in which searches extend strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from the given symbols, in order.
    ///
    /// Fails on an empty list or a repeated symbol.
    pub fn new<I: IntoIterator<Item = char>>(symbols: I) -> Result<Self> {
        let symbols: Vec<char> = symbols.into_iter().collect();
        if symbols.is_empty() {
            return Err(Error::InvalidConfig("alphabet must not be empty".into()));
        }
        for (i, c) in symbols.iter().enumerate() {
            if symbols[..i].contains(c) {
                return Err(Error::InvalidConfig(format!(
                    "alphabet symbol {:?} appears twice",
                    c
                )));
            }
        }
        Ok(Self { symbols })
    }

    /// Wraps symbols already known to be distinct and non-empty.
    pub(crate) fn from_distinct(symbols: Vec<char>) -> Self {
        debug_assert!(!symbols.is_empty(), "alphabet must not be empty");
        Self { symbols }
    }

    /// The first `size` lower-case latin letters, `a` through `a + size - 1`.
    pub fn latin(size: usize) -> Result<Self> {
        if size == 0 || size > MAX_LATIN_SIZE {
            return Err(Error::InvalidConfig(format!(
                "alphabet size must be in 1..={}, got {}",
                MAX_LATIN_SIZE, size
            )));
        }
        Self::new((b'a'..b'a' + size as u8).map(char::from))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True if the alphabet has no symbols; never the case once constructed.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }

    /// Position of `symbol` in the alphabet, if present.
    pub fn rank(&self, symbol: char) -> Option<usize> {
        self.symbols.iter().position(|&c| c == symbol)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.rank(symbol).is_some()
    }

    /// First symbol outside the alphabet in `text`, if any.
    pub fn first_foreign(&self, text: &[char]) -> Option<char> {
        text.iter().copied().find(|&c| !self.contains(c))
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, c) in self.symbols.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, "}}")
    }
}
