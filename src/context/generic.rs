use crate::{
    config::Config,
    context::{ContextState, Counters},
    db::{atom::AtomDB, clause::ClauseDB, trail::Trail, watches::Watches},
    reports::Report,
    structures::{
        atom::Atom,
        consequence::Assignment,
        literal::{CLiteral, Literal},
        valuation::CValuation,
    },
};

/// A generic context, parameterised to a source of randomness.
///
/// Requires a source of [rng](rand::Rng) which (also) implements [Default](std::default::Default).
pub struct GenericContext<R: rand::Rng + std::default::Default> {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to the context.
    pub counters: Counters,

    /// The clause database.
    pub clause_db: ClauseDB,

    /// The atom database.
    pub atom_db: AtomDB,

    /// The trail of assignments.
    pub trail: Trail,

    /// The clauses watching each literal.
    pub watches: Watches,

    /// The state of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,

    /// The assumptions of the solve in progress, in assertion order.
    pub(crate) assumptions: Vec<CLiteral>,

    /// The failed assumptions of the last unsatisfiable solve.
    pub(crate) failed: Vec<CLiteral>,

    /// Scratch marks on atoms, used by analysis procedures.
    pub(crate) seen: Vec<bool>,

    /// The atoms marked in [seen](GenericContext::seen), for cheap clearing.
    pub(crate) to_clear: Vec<Atom>,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(&self.state)
    }

    /// The value of `atom` on the current valuation, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.atom_db.value_of(atom)
    }

    /// The current valuation of the context.
    pub fn valuation(&self) -> &CValuation {
        &self.atom_db.valuation
    }

    /// The assumptions used to derive the unsatisfiability of the last solve.
    ///
    /// Empty, in particular, when the formula is unsatisfiable regardless of assumptions.
    pub fn failed_assumptions(&self) -> &[CLiteral] {
        &self.failed
    }

    /// The value of `literal` on the current valuation: true if the polarity of the literal matches the value of its atom, and nothing if the atom has no value.
    pub fn value_of_literal(&self, literal: CLiteral) -> Option<bool> {
        self.atom_db
            .value_of(literal.atom())
            .map(|value| value == literal.polarity())
    }

    /// Values the atom of the assignment at the current level and queues the consequences of doing so.
    ///
    /// # Soundness
    /// The atom of the assignment must have no value.
    pub(crate) fn record_assignment(&mut self, assignment: Assignment) {
        debug_assert!(self.atom_db.value_of(assignment.atom()).is_none());

        self.atom_db
            .set_value(assignment.atom(), assignment.value(), self.trail.level());
        self.trail.write_assignment(assignment);
    }
}
