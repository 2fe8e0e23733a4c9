//! Default configuration values.

use super::{Generalization, PolarityLean};

/// Decisions with no phase hint lean towards false.
pub const POLARITY_LEAN: PolarityLean = 0.0;

/// Decisions reuse the previous value of an atom.
pub const PHASE_SAVING: bool = true;

/// The seed of a context's source of randomness.
pub const RANDOM_SEED: u64 = 0;

/// Enumerate until the bounds meet.
pub const THRESHOLD: f64 = 0.0;

/// A count of fresh cubes to accumulate before a recount of the bounds.
pub const CUBE_LIMIT: usize = 64;

/// Conflicts are minimized before learning a blocking clause.
pub const MINIMIZE_CORES: bool = true;

/// Satisfying models are generalized by a greedy minimum hitting set.
pub const GENERALIZATION: Generalization = Generalization::HittingSet;
