//! Declarative weighted-choice tables resolved to concrete tile indices.

use crate::rng::RandomSource;
use crate::types::TileIndex;

/// What a weighted entry can hand back: one fixed index, or a uniform pick
/// among a set of interchangeable variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Candidate {
    Single(TileIndex),
    AnyOf(&'static [TileIndex]),
}

impl Candidate {
    fn resolve(self, rng: &mut dyn RandomSource) -> TileIndex {
        match self {
            Self::Single(index) => index,
            Self::AnyOf(set) => set[rng.between(0, set.len() as i32 - 1) as usize],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeightedEntry {
    pub candidate: Candidate,
    pub weight: u32,
}

/// A tile choice: either one fixed index, or a non-empty weighted list where
/// an entry's selection probability is `weight / total`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileTable {
    Fixed(TileIndex),
    Weighted(&'static [WeightedEntry]),
}

impl TileTable {
    /// Draws `r` in `[0, total_weight)` and walks the entries until the
    /// running weight sum exceeds it. `Fixed` tables resolve without
    /// touching the source.
    pub fn resolve(&self, rng: &mut dyn RandomSource) -> TileIndex {
        match self {
            Self::Fixed(index) => *index,
            Self::Weighted(entries) => {
                let total: u32 = entries.iter().map(|entry| entry.weight).sum();
                let draw = rng.unit() * f64::from(total);
                let mut running = 0.0;
                for entry in *entries {
                    running += f64::from(entry.weight);
                    if draw < running {
                        return entry.candidate.resolve(rng);
                    }
                }
                // unit() < 1 keeps draw below the total; the walk cannot
                // fall through with positive weights.
                entries[entries.len() - 1].candidate.resolve(rng)
            }
        }
    }

    /// Every index this table can produce, in declaration order. The ground
    /// collision mask is built by excluding exactly this set.
    pub fn candidate_indices(&self) -> Vec<TileIndex> {
        match self {
            Self::Fixed(index) => vec![*index],
            Self::Weighted(entries) => {
                let mut indices = Vec::new();
                for entry in *entries {
                    match entry.candidate {
                        Candidate::Single(index) => indices.push(index),
                        Candidate::AnyOf(set) => indices.extend_from_slice(set),
                    }
                }
                indices
            }
        }
    }
}
