/*!
Assumptions.

# Overview

Assumptions are literals asserted for the duration of a single solve, each on its own fresh level below every decision.

The [solve procedure](crate::procedures::solve) asserts assumptions lazily: whenever the trail has fewer levels than there are assumptions, the next level is reserved for the next assumption.
This way a backjump below the assumption levels is benign, as the affected assumptions are simply re-asserted before any further decision is made.

A solve is unsatisfiable *under the assumptions* when some assumption is false on the valuation built from the remaining assumptions and the formula.
The assumptions responsible are identified by [failed_assumptions_from](crate::context::GenericContext::failed_assumptions_from).

# Implementation

The identification of failed assumptions is derived from reading MiniSAT's `analyzeFinal`.

The falsity of an assumption, if observed, is due to some chain of BCP.
And, so long as an assumption was used in some part of the chain, it was used to derive the conflict.

Each part of the chain can be examined by walking the trail in reverse.
And, as the walk is made backwards, a literal is used before it is assumed or derived.
So, by keeping track of use through the reverse walk, use of an assumption is noted before the assumption is met, and use of a derived literal is noted before the literals used to derive it are met.

Assignments at level zero are skipped, as these hold regardless of any assumption.
*/

use crate::{
    context::GenericContext,
    misc::log::targets,
    structures::{
        consequence::AssignmentSource,
        literal::{CLiteral, Literal},
    },
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Identifies the assumptions used to derive the falsity of `assumption`, `assumption` included.
    ///
    /// # Soundness
    /// To be called only when the atom of `assumption` is valued against the polarity of `assumption`, and before any part of the trail used to derive the value is cleared.
    pub(crate) fn failed_assumptions_from(&mut self, assumption: CLiteral) -> Vec<CLiteral> {
        let mut failed = vec![assumption];

        self.seen[assumption.atom() as usize] = true;
        self.to_clear.push(assumption.atom());

        let level_zero_length = self.trail.level_zero_length();

        for index in (level_zero_length..self.trail.assignments.len()).rev() {
            let assignment = self.trail.assignments[index];
            if !self.seen[assignment.atom() as usize] {
                continue;
            }

            match assignment.source() {
                AssignmentSource::Assumption => {
                    failed.push(*assignment.literal());
                }

                AssignmentSource::BCP(key) => {
                    if let Ok(clause) = self.clause_db.get(key) {
                        for literal in clause {
                            let atom = literal.atom();
                            if !self.seen[atom as usize] {
                                self.seen[atom as usize] = true;
                                self.to_clear.push(atom);
                            }
                        }
                    }
                }

                AssignmentSource::Decision
                | AssignmentSource::Original
                | AssignmentSource::Addition => {
                    // Decisions are cleared before assumptions fail, and unit sources live at level zero.
                }
            }
        }

        self.clear_seen();

        log::info!(target: targets::ANALYSIS, "Failed assumptions: {:?}", failed);
        failed
    }
}
