//! Counters related to a context.

/// Counters over the lifetime of a context.
#[derive(Clone, Copy, Debug, Default)]
pub struct Counters {
    /// A count of iterations of the solve loop.
    pub iterations: usize,

    /// A count of conflicts observed.
    pub conflicts: usize,

    /// A count of decisions made.
    pub decisions: usize,

    /// A count of solves requested.
    pub solves: usize,
}
