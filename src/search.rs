//! The two search strategies, both driven by a freeness check.
//!
//! Both are lazy iterators: results are produced as they are found and the
//! caller decides when to stop.

use crate::alphabet::Alphabet;
use crate::enumerate::MorphismEnumerator;
use crate::error::{Error, Result};
use crate::morphism::Morphism;
use crate::structure::FreenessCheck;
use tracing::{debug, trace};

/// Counters describing how far a search has progressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidates the predicate was evaluated on
    pub tested: usize,
    /// Candidates reported
    pub accepted: usize,
    /// Candidates discarded
    pub rejected: usize,
}

impl SearchStats {
    /// Share of tested candidates that were accepted, as a percentage.
    pub fn acceptance_rate(&self) -> f64 {
        if self.tested == 0 {
            0.0
        } else {
            (self.accepted as f64 / self.tested as f64) * 100.0
        }
    }

    fn record(&mut self, accepted: bool) {
        self.tested += 1;
        if accepted {
            self.accepted += 1;
        } else {
            self.rejected += 1;
        }
    }
}

/// A test applied to candidate strings during depth-first search.
pub trait StringPredicate {
    fn accepts(&self, candidate: &[char]) -> bool;
}

impl StringPredicate for FreenessCheck {
    fn accepts(&self, candidate: &[char]) -> bool {
        self.is_free(candidate)
    }
}

impl<F: Fn(&[char]) -> bool> StringPredicate for F {
    fn accepts(&self, candidate: &[char]) -> bool {
        self(candidate)
    }
}

/// Filters enumerated morphisms, keeping those whose image of every seed
/// text passes the check.
///
/// Seed texts are tried shortest first and a candidate is dropped at its
/// first failing text.
pub struct MorphismSearch {
    candidates: MorphismEnumerator,
    /// Seed texts as ranks in the candidates' domain
    texts: Vec<Vec<usize>>,
    check: FreenessCheck,
    stats: SearchStats,
}

impl MorphismSearch {
    /// Fails with `UndefinedSymbol` if a text uses a symbol the candidates
    /// do not map.
    pub fn new(
        candidates: MorphismEnumerator,
        mut texts: Vec<Vec<char>>,
        check: FreenessCheck,
    ) -> Result<Self> {
        texts.sort_by_key(Vec::len);
        let domain = candidates.domain();
        let texts = texts
            .iter()
            .map(|text| {
                text.iter()
                    .map(|&symbol| {
                        domain
                            .rank(symbol)
                            .ok_or(Error::UndefinedSymbol { symbol })
                    })
                    .collect::<Result<Vec<usize>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            %check,
            texts = texts.len(),
            images = candidates.candidates().len(),
            "starting morphism search"
        );
        Ok(Self {
            candidates,
            texts,
            check,
            stats: SearchStats::default(),
        })
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Returns true if `code` keeps every seed text repetition-free.
    ///
    /// Fails if a seed text uses a symbol `code` does not map, or if an image
    /// leaves the search's codomain.
    pub fn accepts(&self, code: &Morphism) -> Result<bool> {
        code.check_images(self.candidates.codomain())?;
        let symbols = self.candidates.domain().symbols();
        for (i, ranks) in self.texts.iter().enumerate() {
            let text: Vec<char> = ranks.iter().map(|&r| symbols[r]).collect();
            let encoded = code.apply(&text)?;
            if let Some(witness) = self.check.find(&encoded) {
                trace!(%code, text = i, %witness, "rejected");
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Candidates share the domain the texts were ranked against.
    fn passes(&self, code: &Morphism) -> bool {
        self.texts.iter().enumerate().all(|(i, ranks)| {
            let encoded = code.apply_ranks(ranks);
            match self.check.find(&encoded) {
                Some(witness) => {
                    trace!(%code, text = i, %witness, "rejected");
                    false
                }
                None => true,
            }
        })
    }
}

impl Iterator for MorphismSearch {
    type Item = Morphism;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let code = self.candidates.next()?;
            let accepted = self.passes(&code);
            self.stats.record(accepted);
            if accepted {
                debug!(%code, tested = self.stats.tested, "accepted");
                return Some(code);
            }
        }
    }
}

/// Depth-first exploration of strings over an alphabet, pruning every
/// string that fails the predicate.
///
/// Starts from the empty string. Uses a LIFO stack, so strings come out in
/// discovery order: extensions by the last alphabet symbol are explored
/// first. Unbounded unless `max_len` is set.
pub struct DepthFirstSearch<P = FreenessCheck> {
    alphabet: Alphabet,
    predicate: P,
    stack: Vec<Vec<char>>,
    max_len: Option<usize>,
    stats: SearchStats,
}

impl<P: StringPredicate> DepthFirstSearch<P> {
    pub fn new(alphabet: Alphabet, predicate: P) -> Self {
        debug!(%alphabet, "starting depth-first search");
        Self {
            alphabet,
            predicate,
            stack: vec![Vec::new()],
            max_len: None,
            stats: SearchStats::default(),
        }
    }

    /// Stops extending strings once they reach `max_len` symbols.
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Strings waiting to be tested.
    pub fn pending(&self) -> usize {
        self.stack.len()
    }
}

impl<P: StringPredicate> Iterator for DepthFirstSearch<P> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(candidate) = self.stack.pop() {
            let accepted = self.predicate.accepts(&candidate);
            self.stats.record(accepted);
            if !accepted {
                continue;
            }

            if self.max_len.map_or(true, |max| candidate.len() < max) {
                for symbol in self.alphabet.iter() {
                    let mut extended = Vec::with_capacity(candidate.len() + 1);
                    extended.extend_from_slice(&candidate);
                    extended.push(symbol);
                    self.stack.push(extended);
                }
            }
            return Some(candidate.into_iter().collect());
        }
        None
    }
}
