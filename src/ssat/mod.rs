/*!
Two-level stochastic solving by counterexample-guided enumeration.

The [SsatSolver] owns a frozen [problem](problem) together with two contexts:
- The *body* solver, loaded with the formula of the problem, tests candidate assignments to the random block under assumptions.
- The *selector* solver, initialised as a tautology over the atoms of the problem, enumerates candidate assignments not yet excluded by a learnt cube.

The [enumeration] procedure drives both, learning a blocking clause from every candidate:
- Unsatisfiable candidates yield a conflict over the random block, optionally [minimized](minimize).
- Satisfiable candidates are [generalized](generalize) to a subcube of the random block which remains satisfiable.

Learnt cubes accumulate in two [stores](cubes), periodically recounted by the [network](network) sink into the bounds of the satisfying probability.
*/

pub mod cubes;
pub mod enumeration;
pub mod generalize;
pub mod minimize;
pub mod network;
pub mod problem;

use crate::{
    config::{Config, EnumerationConfig},
    context::Context,
    misc::log::targets,
    reports::Report,
    ssat::{cubes::CubeStore, generalize::Generalizer, problem::Problem},
    structures::literal::{CLiteral, Literal},
    types::err::ErrorKind,
};

/// The outcome of testing a candidate assignment on the body solver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TestOutcome {
    /// The formula is satisfiable under the candidate, with a model held by the body solver.
    Satisfiable,

    /// The formula is unsatisfiable under the candidate, with the given conflict.
    ///
    /// The conflict is a clause over negations of the assumptions used, sufficient to derive the unsatisfiability.
    Unsatisfiable(Vec<CLiteral>),
}

/// A solver for two-level stochastic formulas.
pub struct SsatSolver {
    /// The problem of interest.
    problem: Problem,

    /// Parameters of the enumeration.
    pub config: EnumerationConfig,

    /// The body solver, holding the formula of the problem.
    body: Context,

    /// The selector solver, enumerating unexcluded assignments to the random block.
    selector: Context,

    /// Blocking clauses learnt from unsatisfiable candidates.
    unsat_cubes: CubeStore,

    /// Blocking clauses learnt from satisfiable candidates.
    sat_cubes: CubeStore,

    /// The accumulated probability of the enumerated unsatisfiable assignments.
    pub(crate) unsat_pb: f64,

    /// The accumulated probability of the enumerated satisfiable subcubes.
    pub(crate) sat_pb: f64,

    /// Scratch structures for generalizing satisfying models.
    pub(crate) generalizer: Generalizer,

    /// An optional callback, polled once per iteration of the enumeration, cancelling the enumeration on true.
    pub(crate) cancel_callback: Option<Box<dyn FnMut() -> bool>>,
}

impl SsatSolver {
    /// Creates a solver for `problem`, building both contexts.
    pub fn new(problem: Problem, config: EnumerationConfig) -> Result<Self, ErrorKind> {
        let body = Self::build_body(&problem)?;
        let selector = Self::build_selector(&problem)?;
        let generalizer = Generalizer::with_capacity(problem.atom_bound());

        Ok(SsatSolver {
            problem,
            config,
            body,
            selector,
            unsat_cubes: CubeStore::default(),
            sat_cubes: CubeStore::default(),
            unsat_pb: 0.0,
            sat_pb: 0.0,
            generalizer,
            cancel_callback: None,
        })
    }

    /// The problem of the solver.
    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    /// Blocking clauses learnt from unsatisfiable candidates, in order of discovery.
    pub fn unsat_cubes(&self) -> &CubeStore {
        &self.unsat_cubes
    }

    /// Blocking clauses learnt from satisfiable candidates, in order of discovery.
    pub fn sat_cubes(&self) -> &CubeStore {
        &self.sat_cubes
    }

    /// Sets a callback polled once per iteration of the enumeration, cancelling the enumeration on true.
    pub fn set_cancel_callback(&mut self, callback: Box<dyn FnMut() -> bool>) {
        self.cancel_callback = Some(callback);
    }

    /// The body solver: the formula of the problem, with selector literals disjoined when reserved.
    ///
    /// The atoms of the context mirror the atoms of the problem, identically numbered.
    fn build_body(problem: &Problem) -> Result<Context, ErrorKind> {
        let mut body = Context::from_config(Config::default());
        for _ in 0..problem.atom_bound() {
            body.fresh_atom()?;
        }

        for (index, clause) in problem.clauses().iter().enumerate() {
            let mut the_clause = clause.clone();
            if let Some(selector) = problem.selector_literal(index) {
                the_clause.push(selector);
            }
            body.add_clause(the_clause)?;
        }

        Ok(body)
    }

    /// The selector solver: no clauses over the atoms of the problem, with reserved selector atoms pinned false.
    fn build_selector(problem: &Problem) -> Result<Context, ErrorKind> {
        let mut selector = Context::from_config(Config::default());
        for _ in 0..problem.atom_bound() {
            selector.fresh_atom()?;
        }

        for index in 0..problem.clauses().len() {
            if let Some(literal) = problem.selector_literal(index) {
                selector.add_clause(literal.negate())?;
            }
        }

        Ok(selector)
    }

    /// The next candidate assignment to the random block, or nothing once the whole space is excluded.
    ///
    /// A random atom unvalued in the selector's model reads as false.
    pub(crate) fn next_candidate(&mut self) -> Result<Option<Vec<CLiteral>>, ErrorKind> {
        match self.selector.solve()? {
            Report::Unsatisfiable => Ok(None),

            Report::Satisfiable => {
                let candidate = self
                    .problem
                    .prefix()
                    .random_atoms()
                    .iter()
                    .map(|&atom| {
                        CLiteral::new(atom, self.selector.value_of(atom).unwrap_or(false))
                    })
                    .collect();
                Ok(Some(candidate))
            }

            Report::Unknown => Err(ErrorKind::Indecision),
        }
    }

    /// Tests `candidate` on the body solver.
    ///
    /// When selectors are reserved every clause is activated alongside the candidate, and so conflicts may mention selector literals.
    pub(crate) fn test(&mut self, candidate: &[CLiteral]) -> Result<TestOutcome, ErrorKind> {
        let mut assumptions = Vec::with_capacity(
            candidate.len() + if self.problem.has_selectors() { self.problem.clauses().len() } else { 0 },
        );
        for index in 0..self.problem.clauses().len() {
            if let Some(selector) = self.problem.selector_literal(index) {
                assumptions.push(selector.negate());
            }
        }
        assumptions.extend_from_slice(candidate);

        match self.body.solve_given(assumptions)? {
            Report::Satisfiable => Ok(TestOutcome::Satisfiable),

            Report::Unsatisfiable => {
                let conflict = self
                    .body
                    .failed_assumptions()
                    .iter()
                    .map(|assumption| assumption.negate())
                    .collect();
                log::trace!(target: targets::ENUMERATION, "Candidate excluded by conflict: {:?}", conflict);
                Ok(TestOutcome::Unsatisfiable(conflict))
            }

            Report::Unknown => Err(ErrorKind::Indecision),
        }
    }
}
