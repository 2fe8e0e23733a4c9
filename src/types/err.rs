/*!
Error types used in the library.

- Most of these are very unlikely to occur during use.
- Some are external --- e.g. a prefix without a random root block is reported when a solve is requested on a problem the library does not support.
- None are recovered from: the enumeration is a tight loop over a deterministic state machine, and every error here is terminal for the solve which raised it.

Names of the error enums --- for the most part --- overlap with the corresponding structures.
*/

use crate::structures::{clause::CClause, literal::CLiteral, prefix::Probability};

/// A union of varied error kinds.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ErrorKind {
    /// An error in the shape of a problem or of a learnt cube.
    #[error("shape: {0}")]
    Prefix(#[from] PrefixError),

    /// An error when building a problem.
    #[error("problem: {0}")]
    Problem(#[from] ProblemError),

    /// An error in the clause database.
    #[error("clause database: {0}")]
    ClauseDb(#[from] ClauseDbError),

    /// An error during conflict analysis.
    #[error("analysis: {0}")]
    Analysis(#[from] AnalysisError),

    /// An error when generalizing a satisfying model to a cube.
    #[error("generalization: {0}")]
    Generalization(#[from] GeneralizationError),

    /// There are no more fresh atoms.
    #[error("there are no more fresh atoms")]
    AtomsExhausted,

    /// The engine failed to produce a decision.
    #[error("the engine failed to produce a decision")]
    Indecision,

    /// A duplicated literal was detected in a blocking clause.
    #[error("duplicated literal {0} in a blocking clause")]
    DuplicateBlockingLiteral(CLiteral),
}

/// Errors in the shape of a quantifier prefix.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum PrefixError {
    /// The outermost quantifier block is not random.
    #[error("the outermost quantifier block is not random")]
    RootNotRandom,

    /// A probability outside the unit interval.
    #[error("probability {0} is outside the unit interval")]
    ProbabilityRange(Probability),
}

/// Errors when building a problem.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ProblemError {
    /// An atom of a clause does not belong to the prefix.
    #[error("an atom of the clause does not belong to the prefix")]
    UnknownAtom,

    /// An attempt to reserve clause selectors twice.
    #[error("clause selectors are already reserved")]
    SelectorsReserved,

    /// An attempt to add a clause after selectors fixed clause identities.
    #[error("clauses cannot be added after selectors have been reserved")]
    ClausesFrozen,
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ClauseDbError {
    /// A stored clause is missing.
    #[error("a stored clause is missing")]
    Missing,
}

/// Errors during conflict analysis.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    /// The trail was exhausted without finding a unique implication point.
    #[error("the trail was exhausted without finding a unique implication point")]
    NoAssertion,

    /// A resolved assignment has no reason clause.
    #[error("a resolved assignment has no reason clause")]
    MissingReason,
}

/// Errors when generalizing a satisfying model to a cube.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GeneralizationError {
    /// The hitting set is wider than the random block.
    #[error("cube {cube:?} is wider than the random block")]
    CapacityExceeded {
        /// The offending cube, as a blocking clause.
        cube: CClause,
    },

    /// A clause of the formula has no satisfying literal in the model.
    #[error("a clause has no satisfying literal in the model")]
    UncoveredClause,
}
