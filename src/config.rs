use crate::alphabet::Alphabet;
use crate::encoding::Equivalence;
use crate::enumerate::{ImageOrder, MorphismEnumerator};
use crate::error::{Error, Result};
use crate::morphism::Morphism;
use crate::search::{DepthFirstSearch, MorphismSearch};
use crate::seed::grow_seed_texts;
use crate::structure::{FreenessCheck, Structure};
use std::str::FromStr;

impl FromStr for Equivalence {
    type Err = Error;

    /// Accepts the upper-case names (`WEAK_ORDER_PRESERVING`) in any case,
    /// with `-` or `_`, plus the short names `order`, `weak-order` and `cart`.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "strict" => Ok(Equivalence::Strict),
            "parameterized" => Ok(Equivalence::Parameterized),
            "order_preserving" | "order" => Ok(Equivalence::OrderPreserving),
            "weak_order_preserving" | "weak_order" => Ok(Equivalence::WeakOrderPreserving),
            "cartesian" | "cart" => Ok(Equivalence::Cartesian),
            _ => Err(Error::UnknownEquivalence(s.to_string())),
        }
    }
}

impl FromStr for Structure {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "square" => Ok(Structure::Square),
            "cube" => Ok(Structure::Cube),
            _ => Err(Error::UnknownStructure(s.to_string())),
        }
    }
}

/// Everything a search run needs, resolved before the search starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Alphabet size; symbols are `a..a + sigma - 1`
    pub sigma: usize,
    pub structure: Structure,
    pub equivalence: Equivalence,
    /// Shortest repeated root that counts as a repetition
    pub min_root: usize,
    /// Longest image a candidate morphism may assign
    pub max_image_len: usize,
    /// Applications of the seed morphism
    pub iterations: usize,
    /// Seed for shuffling candidate images; `None` draws a fresh one
    pub rng_seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            sigma: 2,
            structure: Structure::Square,
            equivalence: Equivalence::Parameterized,
            min_root: 1,
            max_image_len: 5,
            iterations: 6,
            rng_seed: None,
        }
    }
}

impl SearchConfig {
    /// Checks the settings both searches share.
    pub fn validate(&self) -> Result<()> {
        if self.min_root == 0 {
            return Err(Error::InvalidConfig("minimum root length must be at least 1".into()));
        }
        self.alphabet().map(|_| ())
    }

    /// Checks the settings only the morphism search reads.
    pub fn validate_morphism_search(&self) -> Result<()> {
        self.validate()?;
        if self.max_image_len == 0 {
            return Err(Error::InvalidConfig("image length bound must be at least 1".into()));
        }
        if self.iterations == 0 {
            return Err(Error::InvalidConfig("iteration count must be at least 1".into()));
        }
        Ok(())
    }

    pub fn alphabet(&self) -> Result<Alphabet> {
        Alphabet::latin(self.sigma)
    }

    pub fn check(&self) -> FreenessCheck {
        FreenessCheck::new(self.structure, self.equivalence, self.min_root)
    }

    pub fn image_order(&self) -> ImageOrder {
        ImageOrder::from_seed(self.rng_seed)
    }

    /// Depth-first search over the configured alphabet.
    pub fn depth_first_search(&self) -> Result<DepthFirstSearch> {
        self.validate()?;
        Ok(DepthFirstSearch::new(self.alphabet()?, self.check()))
    }

    /// Morphism search from the seed morphism's alphabet into the configured
    /// alphabet, tested against the grown seed texts.
    pub fn morphism_search(&self) -> Result<MorphismSearch> {
        self.validate_morphism_search()?;
        let seed = Morphism::seed();
        let texts = grow_seed_texts(&seed, self.iterations)?;
        let candidates = MorphismEnumerator::new(
            seed.domain().clone(),
            &self.alphabet()?,
            self.max_image_len,
            self.image_order(),
        )?;
        MorphismSearch::new(candidates, texts, self.check())
    }
}
