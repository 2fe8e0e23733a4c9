/*!
Reports from a context or an enumeration.
*/

use crate::context::ContextState;

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula of the context is satisfiable (on the assumptions made, if any).
    Satisfiable,

    /// The formula of the context is unsatisfiable (on the assumptions made, if any).
    Unsatisfiable,

    /// Satisfiability of the formula of the context is unknown, for some reason.
    Unknown,
}

impl From<&ContextState> for Report {
    fn from(state: &ContextState) -> Self {
        match state {
            ContextState::Input | ContextState::Solving => Self::Unknown,
            ContextState::Satisfiable => Self::Satisfiable,
            ContextState::Unsatisfiable | ContextState::AssumptionsUnsatisfiable => {
                Self::Unsatisfiable
            }
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// The way an enumeration concluded.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum SsatStatus {
    /// The whole random space was enumerated, and the bounds are exact.
    Exact,

    /// The gap between the bounds closed within the configured threshold.
    LowerBound,

    /// The enumeration was cancelled, and the bounds are those of the last recount.
    Cancelled,
}

impl std::fmt::Display for SsatStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "Exact"),
            Self::LowerBound => write!(f, "LowerBound"),
            Self::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// The conclusion of an enumeration.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct SsatReport {
    /// The accumulated probability of the enumerated satisfiable subcubes.
    pub sat_pb: f64,

    /// The accumulated probability of the enumerated unsatisfiable assignments.
    pub unsat_pb: f64,

    /// The way the enumeration concluded.
    pub status: SsatStatus,
}

impl SsatReport {
    /// The satisfying probability, when exact, and a certified lower bound otherwise.
    pub fn value(&self) -> f64 {
        self.sat_pb
    }

    /// The bracketing interval of the satisfying probability.
    pub fn bounds(&self) -> (f64, f64) {
        (self.sat_pb, 1.0 - self.unsat_pb)
    }
}

impl std::fmt::Display for SsatReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} in [{:.6}, {:.6}]",
            self.status,
            self.sat_pb,
            1.0 - self.unsat_pb
        )
    }
}
