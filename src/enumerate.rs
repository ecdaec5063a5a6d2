use crate::alphabet::Alphabet;
use crate::error::{Error, Result};
use crate::morphism::Morphism;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// How candidate images are ordered before enumeration.
///
/// Images are grouped by length; within a group they are always in
/// lexicographic order. Only the order of the length groups varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageOrder {
    /// Ascending image length. Fully reproducible.
    Sequential,
    /// Length groups shuffled with a fixed seed.
    Seeded(u64),
    /// Length groups shuffled with a fresh random seed per run.
    #[default]
    Unseeded,
}

impl ImageOrder {
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or(ImageOrder::Unseeded, ImageOrder::Seeded)
    }

    fn lengths(self, max_len: usize) -> Vec<usize> {
        let mut lengths: Vec<usize> = (1..=max_len).collect();
        match self {
            ImageOrder::Sequential => {}
            ImageOrder::Seeded(seed) => lengths.shuffle(&mut StdRng::seed_from_u64(seed)),
            ImageOrder::Unseeded => lengths.shuffle(&mut StdRng::from_entropy()),
        }
        lengths
    }
}

/// All strings of exactly `len` symbols over `alphabet`, in lexicographic
/// order of symbol rank.
pub fn strings_of_length(alphabet: &Alphabet, len: usize) -> Vec<Vec<char>> {
    let mut out = vec![Vec::with_capacity(len)];
    for _ in 0..len {
        out = out
            .into_iter()
            .flat_map(|prefix| {
                alphabet.iter().map(move |c| {
                    let mut s = prefix.clone();
                    s.push(c);
                    s
                })
            })
            .collect();
    }
    out
}

/// Every string of length `1..=max_len` over `alphabet`, grouped by length in
/// the order `order` picks.
pub fn candidate_images(alphabet: &Alphabet, max_len: usize, order: ImageOrder) -> Vec<Vec<char>> {
    order
        .lengths(max_len)
        .into_iter()
        .flat_map(|len| strings_of_length(alphabet, len))
        .collect()
}

/// Number of morphisms `MorphismEnumerator` yields, or `None` on overflow.
pub fn candidate_count(domain_size: usize, codomain_size: usize, max_len: usize) -> Option<u128> {
    let sigma = codomain_size as u128;
    let mut images: u128 = 0;
    for len in 1..=max_len {
        images = images.checked_add(sigma.checked_pow(u32::try_from(len).ok()?)?)?;
    }
    images.checked_pow(u32::try_from(domain_size).ok()?)
}

/// Lazily enumerates every morphism from `domain` to strings of length
/// `1..=max_len` over `codomain`.
///
/// Assignments are produced as a cartesian product over the candidate image
/// list, the last domain symbol varying fastest.
pub struct MorphismEnumerator {
    domain: Alphabet,
    codomain: Alphabet,
    candidates: Vec<Vec<char>>,
    /// Candidate index per domain symbol; `None` once exhausted.
    cursor: Option<Vec<usize>>,
}

impl MorphismEnumerator {
    pub fn new(
        domain: Alphabet,
        codomain: &Alphabet,
        max_len: usize,
        order: ImageOrder,
    ) -> Result<Self> {
        if max_len == 0 {
            return Err(Error::InvalidConfig(
                "morphism image length bound must be at least 1".into(),
            ));
        }
        let candidates = candidate_images(codomain, max_len, order);
        let cursor = Some(vec![0; domain.len()]);
        Ok(Self {
            domain,
            codomain: codomain.clone(),
            candidates,
            cursor,
        })
    }

    /// Symbols every enumerated morphism maps.
    pub fn domain(&self) -> &Alphabet {
        &self.domain
    }

    /// Symbols every image is drawn from.
    pub fn codomain(&self) -> &Alphabet {
        &self.codomain
    }

    pub fn candidates(&self) -> &[Vec<char>] {
        &self.candidates
    }

    fn advance(&mut self) {
        let Some(cursor) = self.cursor.as_mut() else {
            return;
        };
        for slot in cursor.iter_mut().rev() {
            *slot += 1;
            if *slot < self.candidates.len() {
                return;
            }
            *slot = 0;
        }
        self.cursor = None;
    }
}

/// Enumerates morphisms from `alphabet` to itself.
pub fn enumerate_morphisms(
    alphabet: &Alphabet,
    max_len: usize,
    order: ImageOrder,
) -> Result<MorphismEnumerator> {
    MorphismEnumerator::new(alphabet.clone(), alphabet, max_len, order)
}

impl Iterator for MorphismEnumerator {
    type Item = Morphism;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.cursor.as_ref()?;
        let images = cursor.iter().map(|&i| self.candidates[i].clone()).collect();
        let morphism = Morphism::new(self.domain.clone(), images).ok();
        self.advance();
        morphism
    }
}
