/*!
Minimization of conflicts over the random block.

A conflict returned by the body solver is sufficient to derive unsatisfiability, but rarely necessary: dropping a literal often leaves a partial assignment which still cannot be extended to a satisfying assignment, and a smaller conflict excludes a larger region of the random space.

Minimization is destructive: each literal of the conflict is tentatively dropped, and the body solver is asked whether the remaining literals still witness unsatisfiability.
If so, the literal is gone for good; if not, the literal is kept and the next is tried.
The result is locally minimal --- dropping any single kept literal admits a satisfying assignment.

When selectors are reserved, selector literals of the conflict are set aside and restored afterwards: every clause stays activated during the re-queries, and only the random part of the conflict is shrunk.
*/

use crate::{
    context::ContextState,
    misc::log::targets,
    reports::Report,
    ssat::SsatSolver,
    structures::literal::{CLiteral, Literal},
    types::err::ErrorKind,
};

impl SsatSolver {
    /// Minimizes `conflict` to a locally minimal conflict over the random block.
    ///
    /// The result is a subset of the literals of `conflict` whose negation still yields unsatisfiability on the body solver.
    pub(crate) fn minimize_conflict(
        &mut self,
        conflict: Vec<CLiteral>,
    ) -> Result<Vec<CLiteral>, ErrorKind> {
        // With a fundamentally unsatisfiable body there is nothing to shrink.
        if matches!(self.body.state, ContextState::Unsatisfiable) {
            return Ok(conflict);
        }

        let (mut core, passive): (Vec<CLiteral>, Vec<CLiteral>) = conflict
            .into_iter()
            .partition(|literal| self.problem.prefix().is_random(literal.atom()));

        let activations: Vec<CLiteral> = (0..self.problem.clauses().len())
            .filter_map(|index| self.problem.selector_literal(index))
            .map(|selector| selector.negate())
            .collect();

        let mut index = 0;
        while index < core.len() {
            let mut assumptions = activations.clone();
            assumptions.extend(
                core.iter()
                    .enumerate()
                    .filter(|(position, _)| *position != index)
                    .map(|(_, literal)| literal.negate()),
            );

            match self.body.solve_given(assumptions)? {
                Report::Unsatisfiable => {
                    let _ = core.swap_remove(index);
                }
                Report::Satisfiable => {
                    index += 1;
                }
                Report::Unknown => return Err(ErrorKind::Indecision),
            }
        }

        log::trace!(target: targets::ENUMERATION, "Minimized conflict: {:?}", core);

        core.extend(passive);
        Ok(core)
    }
}
