/*!
Boolean constraint propagation.

# Overview

Propagates an atom being assigned some value, given as a literal.

This is done by examining clauses watching the negation of the literal and, for each such clause, either updating the watches of the clause, queuing the literal the clause asserts, or identifying that the clause conflicts with the current valuation.

# Implementation

The watched literals of a clause are those at indices zero and one.
On examination the falsified watch is moved to index one, and so:
- If a replacement watch is found, it is swapped into index one and the clause moves to the watch list of the replacement.
- Otherwise, the literal at index zero is either a witness to the satisfaction of the clause, asserted by the clause, or the source of a conflict.

The list of clauses watching the falsified literal is taken from the watch database for the duration of the examination and restored afterwards.
This avoids a borrow of the database conflicting with updates to *other* watch lists, and is sound as the falsified literal is never a candidate replacement watch (its atom has a value, and that value conflicts with the literal).
*/

use crate::{
    context::GenericContext,
    db::ClauseKey,
    misc::log::targets,
    structures::{
        consequence::{Assignment, AssignmentSource},
        literal::{CLiteral, Literal},
    },
    types::err::ErrorKind,
};

/// Noted outcomes of propagating a literal.
pub enum BCPOk {
    /// Propagation completed without conflict.
    Settled,

    /// A clause conflicts with the current valuation.
    Conflict(ClauseKey),
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Propagates the consequences of `literal` being made true.
    ///
    /// Returns the key of a conflicting clause, if one is found.
    pub fn bcp(&mut self, literal: CLiteral) -> Result<BCPOk, ErrorKind> {
        let falsified = literal.negate();
        let list = self.watches.take(falsified);
        let mut kept: Vec<ClauseKey> = Vec::with_capacity(list.len());

        let mut index = 0;
        'clause_loop: while index < list.len() {
            let key = list[index];
            index += 1;

            let watch = {
                let clause = match self.clause_db.get_mut(&key) {
                    Ok(clause) => clause,
                    Err(e) => {
                        kept.extend_from_slice(&list[index..]);
                        self.watches.restore(falsified, kept);
                        return Err(e.into());
                    }
                };

                // Move the falsified watch to index one.
                if clause[0] == falsified {
                    clause.swap(0, 1);
                }
                debug_assert!(clause[1] == falsified);

                clause[0]
            };

            // The other watch may witness satisfaction of the clause.
            if let Some(true) = self.value_of_literal(watch) {
                kept.push(key);
                continue 'clause_loop;
            }

            // Search for a replacement watch among the remaining literals.
            let replacement = {
                let clause = match self.clause_db.get_mut(&key) {
                    Ok(clause) => clause,
                    Err(e) => {
                        kept.extend_from_slice(&list[index..]);
                        self.watches.restore(falsified, kept);
                        return Err(e.into());
                    }
                };

                let mut found = None;
                for candidate_index in 2..clause.len() {
                    let candidate = clause[candidate_index];
                    let falsified_candidate = match self.atom_db.value_of(candidate.atom()) {
                        Some(value) => value != candidate.polarity(),
                        None => false,
                    };

                    if !falsified_candidate {
                        clause.swap(1, candidate_index);
                        found = Some(candidate);
                        break;
                    }
                }
                found
            };

            if let Some(fresh_watch) = replacement {
                self.watches.watch(fresh_watch, key);
                continue 'clause_loop;
            }

            // No replacement: the clause asserts the other watch, or conflicts.
            kept.push(key);
            match self.value_of_literal(watch) {
                None => {
                    log::trace!(target: targets::PROPAGATION, "{key} asserts {watch}");
                    self.record_assignment(Assignment::from(watch, AssignmentSource::BCP(key)));
                }

                Some(false) => {
                    log::trace!(target: targets::PROPAGATION, "Consequence of {key} and {literal} is contradiction");
                    kept.extend_from_slice(&list[index..]);
                    self.watches.restore(falsified, kept);
                    return Ok(BCPOk::Conflict(key));
                }

                Some(true) => {
                    // Caught by the witness check above.
                }
            }
        }

        self.watches.restore(falsified, kept);
        Ok(BCPOk::Settled)
    }

    /// Propagates queued assignments until the queue is exhausted or a conflict is found.
    ///
    /// Returns the key of a conflicting clause, if one is found.
    pub fn propagate(&mut self) -> Result<BCPOk, ErrorKind> {
        while let Some(assignment) = self.trail.next_queued() {
            match self.bcp(assignment.literal)? {
                BCPOk::Settled => continue,
                conflict => return Ok(conflict),
            }
        }
        Ok(BCPOk::Settled)
    }
}
