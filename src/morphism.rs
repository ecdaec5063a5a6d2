use crate::alphabet::Alphabet;
use crate::error::{Error, Result};
use std::fmt;

/// A total substitution from a domain alphabet to non-empty image strings.
///
/// Images are stored by symbol rank, so lookup follows the domain's order.
/// Morphisms are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Morphism {
    domain: Alphabet,
    images: Vec<Vec<char>>,
}

/// `a -> abc, b -> ac, c -> b`: iterating it from `a` yields square-free words.
const SEED: [(char, &str); 3] = [('a', "abc"), ('b', "ac"), ('c', "b")];

const PARAMETERIZED_CODE: [(char, &str); 3] = [('a', "a"), ('b', "b"), ('c', "cbbbc")];
const ORDER_CODE: [(char, &str); 3] = [('a', "a"), ('b', "ccb"), ('c', "bac")];
const CARTESIAN_CODE: [(char, &str); 3] = [('a', "bac"), ('b', "ccb"), ('c', "a")];

impl Morphism {
    /// Builds a morphism with `images[i]` as the image of the `i`-th domain
    /// symbol.
    pub fn new(domain: Alphabet, images: Vec<Vec<char>>) -> Result<Self> {
        if images.len() != domain.len() {
            return Err(Error::ImageCountMismatch {
                expected: domain.len(),
                found: images.len(),
            });
        }
        if let Some((symbol, _)) = domain.iter().zip(&images).find(|(_, img)| img.is_empty()) {
            return Err(Error::EmptyImage { symbol });
        }
        Ok(Self { domain, images })
    }

    /// Builds a morphism from `(symbol, image)` pairs; the domain is the
    /// pair symbols in the given order.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, &'a str)>,
    {
        let (symbols, images): (Vec<char>, Vec<Vec<char>>) = pairs
            .into_iter()
            .map(|(c, image)| (c, image.chars().collect()))
            .unzip();
        Self::new(Alphabet::new(symbols)?, images)
    }

    fn from_table(table: &[(char, &str)]) -> Self {
        Self {
            domain: Alphabet::from_distinct(table.iter().map(|&(c, _)| c).collect()),
            images: table.iter().map(|&(_, img)| img.chars().collect()).collect(),
        }
    }

    /// The square-free generating morphism `{a->abc, b->ac, c->b}`.
    pub fn seed() -> Self {
        Self::from_table(&SEED)
    }

    /// `{a->a, b->b, c->cbbbc}`, parameterized square-free for roots of
    /// length 3 and more on the seed texts.
    pub fn parameterized_code() -> Self {
        Self::from_table(&PARAMETERIZED_CODE)
    }

    /// `{a->a, b->ccb, c->bac}`, order-preserving square-free for roots of
    /// length 3 and more on the seed texts.
    pub fn order_code() -> Self {
        Self::from_table(&ORDER_CODE)
    }

    /// `{a->bac, b->ccb, c->a}`, Cartesian square-free for roots of length 4
    /// and more on the seed texts.
    pub fn cartesian_code() -> Self {
        Self::from_table(&CARTESIAN_CODE)
    }

    pub fn domain(&self) -> &Alphabet {
        &self.domain
    }

    pub fn images(&self) -> &[Vec<char>] {
        &self.images
    }

    /// Image of a single symbol.
    pub fn image(&self, symbol: char) -> Result<&[char]> {
        self.domain
            .rank(symbol)
            .map(|r| self.images[r].as_slice())
            .ok_or(Error::UndefinedSymbol { symbol })
    }

    /// Replaces every symbol of `text` by its image.
    ///
    /// Fails on the first symbol outside the domain.
    pub fn apply(&self, text: &[char]) -> Result<Vec<char>> {
        let mut out = Vec::with_capacity(text.len() * self.max_image_len());
        for &symbol in text {
            out.extend_from_slice(self.image(symbol)?);
        }
        Ok(out)
    }

    /// Applies the morphism to a text given as domain ranks.
    ///
    /// Every rank must be below `domain().len()`.
    pub(crate) fn apply_ranks(&self, ranks: &[usize]) -> Vec<char> {
        let mut out = Vec::with_capacity(ranks.len() * self.max_image_len());
        for &rank in ranks {
            out.extend_from_slice(&self.images[rank]);
        }
        out
    }

    pub fn apply_str(&self, text: &str) -> Result<String> {
        let chars: Vec<char> = text.chars().collect();
        Ok(self.apply(&chars)?.into_iter().collect())
    }

    pub fn max_image_len(&self) -> usize {
        self.images.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Checks that every image only uses symbols of `codomain`.
    pub fn check_images(&self, codomain: &Alphabet) -> Result<()> {
        match self.images.iter().find_map(|img| codomain.first_foreign(img)) {
            Some(symbol) => Err(Error::ForeignSymbol { symbol }),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Morphism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (symbol, image)) in self.domain.iter().zip(&self.images).enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}->", symbol)?;
            for c in image {
                write!(f, "{}", c)?;
            }
        }
        write!(f, "}}")
    }
}
