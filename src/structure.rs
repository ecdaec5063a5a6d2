//! Exhaustive square and cube detection under an equivalence.
//!
//! Factors are scanned by start position ascending, then by length ascending,
//! and the scan stops at the first repetition found.

use crate::encoding::Equivalence;
use std::fmt;
use std::hash::Hash;

/// Which kind of repetition to forbid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Structure {
    /// Two adjacent equivalent factors, `XX`.
    Square,
    /// Three adjacent equivalent factors, `XXX`.
    Cube,
}

impl Structure {
    pub const ALL: [Structure; 2] = [Structure::Square, Structure::Cube];

    /// Number of adjacent copies of the root.
    pub fn exponent(self) -> usize {
        match self {
            Structure::Square => 2,
            Structure::Cube => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Structure::Square => "SQUARE",
            Structure::Cube => "CUBE",
        }
    }

    /// Finds the first repetition of this kind with root length at least
    /// `min_root`.
    pub fn find<T>(
        self,
        min_root: usize,
        equivalence: Equivalence,
        text: &[T],
    ) -> Option<Repetition>
    where
        T: Ord + Hash + Copy + Into<u32>,
    {
        find_repetition(self, min_root, equivalence, text)
    }

    pub fn is_free<T>(self, min_root: usize, equivalence: Equivalence, text: &[T]) -> bool
    where
        T: Ord + Hash + Copy + Into<u32>,
    {
        self.find(min_root, equivalence, text).is_none()
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A factor `text[start..start + length]` made of equivalent adjacent roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Repetition {
    pub structure: Structure,
    pub start: usize,
    pub length: usize,
}

impl Repetition {
    pub fn root_len(&self) -> usize {
        self.length / self.structure.exponent()
    }

    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

impl fmt::Display for Repetition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {} of length {} (root {})",
            self.structure.name().to_lowercase(),
            self.start,
            self.length,
            self.root_len()
        )
    }
}

fn find_repetition<T>(
    structure: Structure,
    min_root: usize,
    equivalence: Equivalence,
    text: &[T],
) -> Option<Repetition>
where
    T: Ord + Hash + Copy + Into<u32>,
{
    let exponent = structure.exponent();
    // Empty roots would match trivially. A saturated bound exceeds any text.
    let min_length = min_root.max(1).saturating_mul(exponent);
    let n = text.len();

    for start in 0..n {
        for length in (min_length..=n - start).step_by(exponent) {
            let root = length / exponent;
            let first = &text[start..start + root];
            let repeated = (1..exponent).all(|k| {
                let other = &text[start + k * root..start + (k + 1) * root];
                equivalence.equivalent(first, other)
            });
            if repeated {
                return Some(Repetition {
                    structure,
                    start,
                    length,
                });
            }
        }
    }
    None
}

/// First square in `text` whose root is at least `min_root` long.
pub fn find_square<T>(min_root: usize, equivalence: Equivalence, text: &[T]) -> Option<Repetition>
where
    T: Ord + Hash + Copy + Into<u32>,
{
    find_repetition(Structure::Square, min_root, equivalence, text)
}

/// First cube in `text` whose root is at least `min_root` long.
pub fn find_cube<T>(min_root: usize, equivalence: Equivalence, text: &[T]) -> Option<Repetition>
where
    T: Ord + Hash + Copy + Into<u32>,
{
    find_repetition(Structure::Cube, min_root, equivalence, text)
}

pub fn is_square_free<T>(min_root: usize, equivalence: Equivalence, text: &[T]) -> bool
where
    T: Ord + Hash + Copy + Into<u32>,
{
    find_square(min_root, equivalence, text).is_none()
}

pub fn is_cube_free<T>(min_root: usize, equivalence: Equivalence, text: &[T]) -> bool
where
    T: Ord + Hash + Copy + Into<u32>,
{
    find_cube(min_root, equivalence, text).is_none()
}

/// A freeness predicate with its structure, equivalence and minimum root
/// length fixed up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FreenessCheck {
    pub structure: Structure,
    pub equivalence: Equivalence,
    pub min_root: usize,
}

impl FreenessCheck {
    pub fn new(structure: Structure, equivalence: Equivalence, min_root: usize) -> Self {
        Self {
            structure,
            equivalence,
            min_root,
        }
    }

    /// Literal square-freeness with no short repeats allowed.
    pub fn strict_square() -> Self {
        Self::new(Structure::Square, Equivalence::Strict, 1)
    }

    pub fn find<T>(&self, text: &[T]) -> Option<Repetition>
    where
        T: Ord + Hash + Copy + Into<u32>,
    {
        self.structure.find(self.min_root, self.equivalence, text)
    }

    pub fn is_free<T>(&self, text: &[T]) -> bool
    where
        T: Ord + Hash + Copy + Into<u32>,
    {
        self.find(text).is_none()
    }
}

impl fmt::Display for FreenessCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-free under {} (min root {})",
            self.structure.name().to_lowercase(),
            self.equivalence,
            self.min_root
        )
    }
}
