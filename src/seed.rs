use crate::encoding::Equivalence;
use crate::error::{Error, Result};
use crate::morphism::Morphism;
use crate::structure::{find_square, FreenessCheck};
use tracing::info;

/// Iterations `verify_code` applies when checking a hand-picked code.
pub const DEFAULT_VERIFY_ITERATIONS: usize = 7;

/// Grows test texts by iterating `seed` from its first domain symbol.
///
/// Returns `iterations + 1` texts: `texts[0]` is the single start symbol and
/// `texts[i]` is `seed` applied to `texts[i - 1]`. Every text is checked to be
/// strictly square-free, so a mis-specified seed is reported instead of
/// silently producing bad test data.
pub fn grow_seed_texts(seed: &Morphism, iterations: usize) -> Result<Vec<Vec<char>>> {
    let strict = FreenessCheck::strict_square();
    let start = seed.domain().symbols()[0];

    let mut texts = Vec::with_capacity(iterations.saturating_add(1));
    texts.push(vec![start]);
    for iteration in 1..=iterations {
        let next = seed.apply(&texts[iteration - 1])?;
        if let Some(witness) = strict.find(&next) {
            return Err(Error::SeedNotSquareFree { iteration, witness });
        }
        texts.push(next);
    }

    info!(
        seed = %seed,
        texts = texts.len(),
        longest = texts.last().map_or(0, Vec::len),
        "grew seed texts"
    );
    Ok(texts)
}

/// Checks that `code` maps each of the first `iterations` seed texts (after
/// the start symbol) to a text that is square-free under `equivalence` with
/// roots of at least `min_root`.
pub fn verify_code(
    code: &Morphism,
    min_root: usize,
    equivalence: Equivalence,
    iterations: usize,
) -> Result<()> {
    let texts = grow_seed_texts(&Morphism::seed(), iterations)?;
    for (iteration, text) in texts.iter().enumerate().skip(1) {
        let encoded = code.apply(text)?;
        if let Some(witness) = find_square(min_root, equivalence, &encoded) {
            return Err(Error::CodeRejected { iteration, witness });
        }
    }
    Ok(())
}
