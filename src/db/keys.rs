//! Keys to clauses stored in the clause database.
//!
//! Each key notes whether the clause belongs to the original formula or was added during a solve, together with the index of the clause in the relevant store.

/// A key to a clause stored in the clause database.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClauseKey {
    /// A key to a clause of the original formula.
    Original(u32),

    /// A key to a clause added to the context, e.g. by conflict analysis or as a blocking clause.
    Addition(u32),
}

impl std::fmt::Display for ClauseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Original(index) => write!(f, "Original({index})"),
            Self::Addition(index) => write!(f, "Addition({index})"),
        }
    }
}
