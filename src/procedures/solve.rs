/*!
Determines the satisfiability of the formula in a context, optionally under assumptions.

# Overview

Abstracting from bookkeeping, a solve interleaves three actions:

- [Propagation](crate::procedures::bcp) of queued assignments, until a conflict is found or the queue is exhausted.
- [Analysis](crate::procedures::analysis) of any conflict, adding a clause to the formula and backjumping.
- Extension of the valuation, by asserting the next pending [assumption](crate::procedures::assumptions) or making a [decision](crate::procedures::decision).

Roughly, the loop is as diagrammed:

```none
          +-----------------------+
  +-------| assumption / decision |-----> satisfiable, if the valuation is full
  |       +-----------------------+-----> unsatisfiable, if a pending assumption is false
  |               ⌃
  |               | if the queue is exhausted
  |               |
  ⌄       +-----------+
--+------>| propagate |
  ⌃       +-----------+
  |               |
  |               | if a clause conflicts with the valuation
  |               ⌄
  |       +----------------------+
  +-------| analyse and backjump |-----> unsatisfiable, if the conflict is at level zero
          +----------------------+
```

Unsatisfiability under assumptions is observed only when asserting a pending assumption whose atom is already valued against the assumption, at which point the assumptions responsible are recorded and may be read through [failed_assumptions](crate::context::GenericContext::failed_assumptions).
A conflict at level zero, in contrast, witnesses unsatisfiability of the formula itself, and the context is closed to further solves.

# Incrementality

A solve begins by clearing the assumptions, decisions, and valuation of any previous solve (proven literals at level zero are kept).
Clauses may be added between solves, and each solve may use a different collection of assumptions.
*/

use crate::{
    context::{ContextState, GenericContext},
    misc::log::targets,
    procedures::{bcp::BCPOk, decision::DecisionOk},
    reports::Report,
    structures::{
        consequence::{Assignment, AssignmentSource},
        literal::{CLiteral, Literal},
    },
    types::err::ErrorKind,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Determines the satisfiability of the context, with no assumptions made.
    pub fn solve(&mut self) -> Result<Report, ErrorKind> {
        self.solve_given(Vec::default())
    }

    /// Determines the satisfiability of the context, under the given assumptions.
    pub fn solve_given(&mut self, assumptions: Vec<CLiteral>) -> Result<Report, ErrorKind> {
        if matches!(self.state, ContextState::Unsatisfiable) {
            return Ok(self.report());
        }

        self.refresh();
        self.counters.solves += 1;

        for assumption in &assumptions {
            self.ensure_atom(assumption.atom())?;
        }
        self.assumptions = assumptions;
        self.state = ContextState::Solving;

        'solve_loop: loop {
            self.counters.iterations += 1;

            match self.propagate()? {
                BCPOk::Conflict(key) => {
                    self.counters.conflicts += 1;

                    if self.trail.level() == 0 {
                        log::info!(target: targets::PROPAGATION, "Fundamental conflict from {key}");
                        self.state = ContextState::Unsatisfiable;
                        break 'solve_loop;
                    }

                    self.apply_analysis(key)?;
                }

                BCPOk::Settled => {
                    let level = self.trail.level();

                    if level < self.assumptions.len() {
                        // The next level is reserved for the next pending assumption.
                        let assumption = self.assumptions[level];

                        match self.value_of_literal(assumption) {
                            Some(true) => {
                                // Hold the level of the assumption, with nothing to propagate.
                                self.trail.push_fresh_level();
                            }

                            Some(false) => {
                                self.failed = self.failed_assumptions_from(assumption);
                                self.state = ContextState::AssumptionsUnsatisfiable;
                                break 'solve_loop;
                            }

                            None => {
                                self.trail.push_fresh_level();
                                self.record_assignment(Assignment::from(
                                    assumption,
                                    AssignmentSource::Assumption,
                                ));
                            }
                        }
                    } else {
                        match self.make_decision() {
                            DecisionOk::Literal(decision) => {
                                self.counters.decisions += 1;
                                log::trace!(target: targets::PROPAGATION, "Decided {decision} at level {}", level + 1);

                                self.trail.push_fresh_level();
                                self.record_assignment(Assignment::from(
                                    decision,
                                    AssignmentSource::Decision,
                                ));
                            }

                            DecisionOk::Exhausted => {
                                self.state = ContextState::Satisfiable;
                                break 'solve_loop;
                            }
                        }
                    }
                }
            }
        }

        Ok(self.report())
    }

    /// Returns the context to its input state: assumptions, decisions, and their consequences are cleared, while proven literals and stored clauses are kept.
    pub fn refresh(&mut self) {
        if !matches!(self.state, ContextState::Unsatisfiable) {
            self.state = ContextState::Input;
        }
        self.backjump(0);
        self.assumptions.clear();
        self.failed.clear();
    }
}
