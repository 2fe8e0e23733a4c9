/*!
Generalization of a satisfying model to a subcube of the random block.

Given a model *m* of the formula extending a candidate assignment *r*, generalization builds a blocking clause *B* over the random block such that every assignment falsifying *B* --- every assignment in the subcube ¬*B* --- extends to a satisfying assignment.
In particular, ¬*B* together with the existential part of *m* satisfies every clause of the formula, and so the whole subcube may be counted towards the lower bound at once.

The clause is built by a greedy minimum hitting set over the satisfying literals of *m*, in three phases:

1. *Forced picks.* A clause whose only satisfying literal is ℓ must be covered by ℓ: the atom of ℓ is picked, and, if random, ¬ℓ joins *B*.
2. *Minterm collection.* Each remaining uncovered clause is inspected once. A satisfying existential (or internal) literal covers the clause for free. Otherwise every satisfying literal is random: all are picked, and collected into a working minterm.
3. *Minterm reduction.* Each minterm literal is tentatively unpicked. If every clause of the formula keeps some satisfying literal with a picked atom the literal stays dropped, and otherwise it is re-picked and its negation joins *B*.

Throughout, a clause counts as *covered* exactly when some literal true under *m* has a picked atom.

A well-formed hitting set over the random block cannot exceed the size of the block: a wider clause indicates a defect and is a fatal [capacity error](crate::types::err::GeneralizationError::CapacityExceeded).

The scratch structures of the generalizer are owned and reused across iterations of the enumeration.
*/

use crate::{
    context::Context,
    misc::log::targets,
    ssat::problem::Problem,
    structures::{
        atom::Atom,
        clause::CClause,
        literal::{CLiteral, Literal},
    },
    types::err::{ErrorKind, GeneralizationError},
};

/// Scratch structures for generalizing satisfying models, reused across iterations.
#[derive(Clone, Debug, Default)]
pub struct Generalizer {
    /// Which atoms are picked for the hitting set, indexed by atom.
    picked: Vec<bool>,

    /// The atoms picked, for cheap clearing.
    chosen: Vec<Atom>,

    /// The working minterm of phase two, reduced in phase three.
    minterm: Vec<CLiteral>,
}

impl Generalizer {
    /// A generalizer with marks covering `bound` atoms.
    pub fn with_capacity(bound: Atom) -> Self {
        Generalizer {
            picked: vec![false; bound as usize + 1],
            chosen: Vec::default(),
            minterm: Vec::default(),
        }
    }

    /// Generalizes the model held by `body` to a blocking clause over the random block.
    ///
    /// # Soundness
    /// The valuation of `body` must be a full model of the formula of `problem`.
    pub(crate) fn reduce(
        &mut self,
        problem: &Problem,
        body: &Context,
    ) -> Result<CClause, ErrorKind> {
        self.clear();

        let model = |literal: CLiteral| body.value_of(literal.atom()) == Some(literal.polarity());
        let mut blocking: CClause = Vec::default();

        // Phase one: forced picks.
        for clause in problem.clauses() {
            if clause
                .iter()
                .any(|literal| model(*literal) && self.picked[literal.atom() as usize])
            {
                continue;
            }

            let mut satisfying = clause.iter().filter(|literal| model(**literal));
            match (satisfying.next(), satisfying.next()) {
                (Some(literal), None) => {
                    self.pick(literal.atom());
                    if problem.prefix().is_random(literal.atom()) {
                        blocking.push(literal.negate());
                    }
                }

                (Some(_), Some(_)) => {}

                (None, _) => return Err(GeneralizationError::UncoveredClause.into()),
            }
        }

        // Phase two: minterm collection.
        for clause in problem.clauses() {
            if clause
                .iter()
                .any(|literal| model(*literal) && self.picked[literal.atom() as usize])
            {
                continue;
            }

            let witness = clause.iter().find(|literal| {
                model(**literal) && !problem.prefix().is_random(literal.atom())
            });

            match witness {
                Some(literal) => self.pick(literal.atom()),

                None => {
                    for literal in clause.iter().filter(|literal| model(**literal)) {
                        self.pick(literal.atom());
                        self.minterm.push(*literal);
                    }
                }
            }
        }

        // Phase three: minterm reduction.
        let minterm = std::mem::take(&mut self.minterm);
        for literal in &minterm {
            self.picked[literal.atom() as usize] = false;

            let covered = problem.clauses().iter().all(|clause| {
                clause
                    .iter()
                    .any(|literal| model(*literal) && self.picked[literal.atom() as usize])
            });

            if !covered {
                self.picked[literal.atom() as usize] = true;
                blocking.push(literal.negate());
            }
        }
        self.minterm = minterm;

        log::trace!(target: targets::GENERALIZATION, "Blocking clause: {:?}", blocking);

        if blocking.len() > problem.prefix().random_atoms().len() {
            return Err(GeneralizationError::CapacityExceeded { cube: blocking }.into());
        }

        Ok(blocking)
    }

    fn pick(&mut self, atom: Atom) {
        if !self.picked[atom as usize] {
            self.picked[atom as usize] = true;
            self.chosen.push(atom);
        }
    }

    fn clear(&mut self) {
        for atom in self.chosen.drain(..) {
            self.picked[atom as usize] = false;
        }
        self.minterm.clear();
    }
}
