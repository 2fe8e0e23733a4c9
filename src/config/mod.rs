/*!
Configuration of a context and of an enumeration.

[Config] collects the options of the [context](crate::context) --- the engine behind both solvers of an enumeration --- while [EnumerationConfig] collects the parameters of the [enumeration driver](crate::ssat::enumeration).

Defaults are collected in [defaults].
*/

pub mod defaults;

/// The probability of assigning true when deciding the value of an atom with no phase hint.
pub type PolarityLean = f64;

/// Configuration of a context.
#[derive(Clone, Debug)]
pub struct Config {
    /// The probability of assigning true when deciding the value of an atom with no phase hint.
    pub polarity_lean: PolarityLean,

    /// Whether decisions reuse the previous value of an atom.
    pub phase_saving: bool,

    /// The seed of the context's source of randomness.
    pub random_seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        use defaults::*;
        Config {
            polarity_lean: POLARITY_LEAN,
            phase_saving: PHASE_SAVING,
            random_seed: RANDOM_SEED,
        }
    }
}

/// The SAT-branch generalization policy of an enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Generalization {
    /// Generalize a satisfying model to a subcube by a greedy minimum hitting set.
    HittingSet,

    /// Block exactly the tested assignment, with no generalization.
    Negation,
}

/// Parameters of an enumeration.
#[derive(Clone, Debug)]
pub struct EnumerationConfig {
    /// Terminate once the gap between the bounds is within `threshold`.
    pub threshold: f64,

    /// A count of fresh cubes to accumulate before a recount of the bounds.
    pub cube_limit: usize,

    /// Whether to minimize conflicts before learning a blocking clause.
    pub minimize_cores: bool,

    /// The SAT-branch generalization policy.
    pub generalization: Generalization,
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        use defaults::*;
        EnumerationConfig {
            threshold: THRESHOLD,
            cube_limit: CUBE_LIMIT,
            minimize_cores: MINIMIZE_CORES,
            generalization: GENERALIZATION,
        }
    }
}
