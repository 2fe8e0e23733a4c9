/*!
Analysis of an unsatisfiable clause.

Takes a key to a clause which is unsatisfiable on the current valuation and applies resolution, using the clauses which (eventually) made the observation of the conflict possible given the decisions made, until a clause asserting the negation of some assignment at the current level remains.

Resolution stops at the first unique implication point: the first point at which exactly one literal of the resolved clause was valued at the current level.
The resolved clause is stored, the context backjumps to the second highest level among the literals of the clause, and the asserted literal is queued with the stored clause as its source.

# Implementation

Resolution walks the trail in reverse, using scratch marks on atoms:
- Literals of the conflicting clause (and of each reason clause) valued below the current level are collected for the resolved clause, with their atoms marked.
- For literals valued at the current level only a count is kept.
- The walk resolves each marked trail assignment against its source until the count is exhausted, at which point the most recent marked assignment is the unique implication point.

# Literature

The procedure was developed by reading [Decision Procedures](https://doi.org/10.1007/978-3-662-50497-0) and the [Handbook of satisfiability](https://www.iospress.com/catalog/books/handbook-of-satisfiability-2), though the presentation given is original.
*/

use crate::{
    context::GenericContext,
    db::ClauseKey,
    misc::log::targets,
    structures::{
        atom::Atom,
        clause::Clause,
        consequence::{Assignment, AssignmentSource},
        literal::{CLiteral, Literal},
    },
    types::err::{AnalysisError, ErrorKind},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Derives an asserting clause from the conflict stored under `key`, backjumps, and queues the asserted literal.
    ///
    /// # Soundness
    /// To be called only when the current level is above zero, as otherwise no assignment of the conflict can be undone.
    pub fn apply_analysis(&mut self, key: ClauseKey) -> Result<(), ErrorKind> {
        let current_level = self.trail.level();
        debug_assert!(current_level > 0);

        log::trace!(target: targets::ANALYSIS, "Analysis of {key} at level {current_level}");

        // Index zero holds a place for the asserted literal.
        let mut resolved: Vec<CLiteral> = vec![0];
        let mut current_count: usize = 0;
        let mut pivot: Option<Atom> = None;
        let mut reason = key;
        let mut index = self.trail.assignments.len();

        let uip = 'resolution_loop: loop {
            let clause = self.clause_db.get(&reason)?;
            for literal in clause.literals() {
                let atom = literal.atom();
                if Some(atom) == pivot || self.seen[atom as usize] {
                    continue;
                }

                let level = self.atom_db.level_of(atom);
                if level == 0 {
                    continue;
                }

                self.seen[atom as usize] = true;
                self.to_clear.push(atom);

                if level == current_level {
                    current_count += 1;
                } else {
                    resolved.push(literal);
                }
            }

            // The most recent marked assignment either resolves or is the unique implication point.
            let assignment = loop {
                if index == 0 {
                    self.clear_seen();
                    return Err(AnalysisError::NoAssertion.into());
                }
                index -= 1;
                let assignment = self.trail.assignments[index];
                if self.seen[assignment.atom() as usize] {
                    break assignment;
                }
            };

            self.seen[assignment.atom() as usize] = false;
            current_count -= 1;

            if current_count == 0 {
                break 'resolution_loop assignment;
            }

            pivot = Some(assignment.atom());
            reason = match assignment.source() {
                AssignmentSource::BCP(reason_key) => *reason_key,
                _ => {
                    // Any assignment above the unique implication point follows from BCP.
                    self.clear_seen();
                    return Err(AnalysisError::MissingReason.into());
                }
            };
        };

        resolved[0] = uip.literal().negate();
        self.clear_seen();

        log::trace!(target: targets::ANALYSIS, "Resolved clause: {}", resolved.as_dimacs(false));

        match resolved.len() {
            1 => {
                let asserted = resolved[0];
                self.backjump(0);
                self.clause_db.note_unit();
                self.record_assignment(Assignment::from(asserted, AssignmentSource::Addition));
            }

            _ => {
                // The literal at the second highest level is swapped to index one, to be watched.
                let mut high_index = 1;
                let mut high_level = self.atom_db.level_of(resolved[1].atom());
                for (literal_index, literal) in resolved.iter().enumerate().skip(2) {
                    let level = self.atom_db.level_of(literal.atom());
                    if level > high_level {
                        high_index = literal_index;
                        high_level = level;
                    }
                }
                resolved.swap(1, high_index);

                let asserted = resolved[0];
                let watched = resolved[1];

                self.backjump(high_level);

                let fresh_key = self.clause_db.store_addition(resolved);
                self.watches.watch(asserted, fresh_key);
                self.watches.watch(watched, fresh_key);
                self.record_assignment(Assignment::from(
                    asserted,
                    AssignmentSource::BCP(fresh_key),
                ));
            }
        }

        Ok(())
    }

    /// Clears the scratch marks made on atoms.
    pub(crate) fn clear_seen(&mut self) {
        for atom in self.to_clear.drain(..) {
            self.seen[atom as usize] = false;
        }
    }
}
