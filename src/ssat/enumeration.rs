/*!
The enumeration driver.

# Overview

The driver repeatedly asks the selector solver for an assignment to the random block not yet excluded by a learnt cube, and tests the assignment on the body solver:

- On an unsatisfiable test, the conflict (optionally [minimized](crate::ssat::minimize)) becomes a blocking clause: a region of the random space on which the formula is unsatisfiable.
- On a satisfiable test, the model is [generalized](crate::ssat::generalize) to a subcube which remains satisfiable, and the negation of the subcube becomes a blocking clause.

Either way the blocking clause is appended to the selector solver, so no excluded assignment is revisited, and to the matching [cube store](crate::ssat::cubes).
Once a store accumulates [cube_limit](crate::config::EnumerationConfig::cube_limit) fresh cubes, the [network](crate::ssat::network) sink recounts the store into the matching bound.

The loop ends in one of three ways:
- The gap between the bounds closes within [threshold](crate::config::EnumerationConfig::threshold), and the lower bound is returned.
- The selector solver is unsatisfiable: the random space is fully covered, both stores are recounted a final time, and the bounds are exact.
- A cancellation callback, polled once per iteration, returns true, and the bounds of the last recount are returned.

Every iteration excludes a non-empty fresh region of a finite space, so the loop terminates.

# Progress

Each recount reports progress on the standard output stream:

```text
  > Collect <N> UNSAT cubes, convert to network
  > current unsat prob = <f>
  > current time <t>
```

and likewise for SAT cubes.
*/

use std::time::Instant;

use crate::{
    config::Generalization,
    misc::log::targets,
    reports::{SsatReport, SsatStatus},
    ssat::{network, SsatSolver, TestOutcome},
    structures::literal::Literal,
    types::err::ErrorKind,
};

impl SsatSolver {
    /// Computes the satisfying probability of the problem, to within the configured threshold.
    ///
    /// The outermost quantifier block must be random.
    pub fn solve(&mut self) -> Result<SsatReport, ErrorKind> {
        self.problem.prefix().require_random_root()?;

        let cube_limit = std::cmp::max(1, self.config.cube_limit);
        let clock = Instant::now();

        loop {
            if 1.0 - self.unsat_pb - self.sat_pb <= self.config.threshold {
                log::info!(target: targets::ENUMERATION, "Bounds within threshold after {} cubes", self.unsat_cubes.len() + self.sat_cubes.len());
                return Ok(self.report(SsatStatus::LowerBound));
            }

            if let Some(callback) = &mut self.cancel_callback {
                if callback() {
                    log::info!(target: targets::ENUMERATION, "Enumeration cancelled");
                    return Ok(self.report(SsatStatus::Cancelled));
                }
            }

            let Some(candidate) = self.next_candidate()? else {
                // The random space is fully covered, and a final recount makes the bounds exact.
                self.recount_unsat(&clock)?;
                self.recount_sat(&clock)?;
                return Ok(self.report(SsatStatus::Exact));
            };

            match self.test(&candidate)? {
                TestOutcome::Unsatisfiable(conflict) => {
                    let blocking = match self.config.minimize_cores {
                        true => self.minimize_conflict(conflict)?,
                        false => conflict,
                    };

                    self.selector.add_clause(blocking.clone())?;
                    self.unsat_cubes.push(blocking);

                    if self.unsat_cubes.pending() >= cube_limit {
                        self.recount_unsat(&clock)?;
                    }
                }

                TestOutcome::Satisfiable => {
                    let blocking = match self.config.generalization {
                        Generalization::HittingSet => {
                            self.generalizer.reduce(&self.problem, &self.body)?
                        }
                        Generalization::Negation => {
                            candidate.iter().map(|literal| literal.negate()).collect()
                        }
                    };

                    self.selector.add_clause(blocking.clone())?;
                    self.sat_cubes.push(blocking);

                    if self.sat_cubes.pending() >= cube_limit {
                        self.recount_sat(&clock)?;
                    }
                }
            }
        }
    }

    /// Recounts the store of unsatisfiable cubes into the upper bound, reporting progress.
    fn recount_unsat(&mut self, clock: &Instant) -> Result<(), ErrorKind> {
        println!(
            "  > Collect {} UNSAT cubes, convert to network",
            self.unsat_cubes.pending()
        );

        let recount = network::union_probability(self.unsat_cubes.clauses(), self.problem.prefix())?;
        debug_assert!(recount + 1e-9 >= self.unsat_pb);
        self.unsat_pb = recount;
        self.unsat_cubes.mark_counted();

        println!("  > current unsat prob = {:.6}", self.unsat_pb);
        println!("  > current time {:.2} sec", clock.elapsed().as_secs_f64());
        Ok(())
    }

    /// Recounts the store of satisfiable cubes into the lower bound, reporting progress.
    fn recount_sat(&mut self, clock: &Instant) -> Result<(), ErrorKind> {
        println!(
            "  > Collect {} SAT cubes, convert to network",
            self.sat_cubes.pending()
        );

        let recount = network::union_probability(self.sat_cubes.clauses(), self.problem.prefix())?;
        debug_assert!(recount + 1e-9 >= self.sat_pb);
        self.sat_pb = recount;
        self.sat_cubes.mark_counted();

        println!("  > current sat prob = {:.6}", self.sat_pb);
        println!("  > current time {:.2} sec", clock.elapsed().as_secs_f64());
        Ok(())
    }

    fn report(&self, status: SsatStatus) -> SsatReport {
        SsatReport {
            sat_pb: self.sat_pb,
            unsat_pb: self.unsat_pb,
            status,
        }
    }
}
