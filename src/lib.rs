/*!
A library for computing the satisfying probability of two-level stochastic boolean formulas written in conjunctive normal form.

A *two-level stochastic* formula quantifies a block of *random* atoms --- each assigned true with an independent probability --- outside a block of *existential* atoms.
The satisfying probability of such a formula Φ is the probability, over assignments to the random block, that some assignment to the existential block satisfies Φ.

otter_ssat computes this probability by counterexample-guided enumeration, built on two cooperating instances of an in-crate CDCL engine:
- A *body* solver holds Φ, and tests candidate assignments to the random block under assumptions.
- A *selector* solver enumerates assignments to the random block which have not yet been excluded.

Unsatisfiable candidates are minimized to conflict cubes, and satisfiable candidates are generalized to subcubes by a greedy minimum hitting set over the satisfying model.
Both are learnt as blocking clauses by the selector solver, and their accumulated probability brackets the satisfying probability from below (satisfiable subcubes) and above (unsatisfiable cubes) until the bounds meet, or come within a configured threshold.

# Orientation

The library is designed around two structures:
- A [context] --- a CDCL engine with incremental clause addition, solving under assumptions, and extraction of failed assumptions.
- An [SsatSolver](crate::ssat::SsatSolver) --- the enumeration driver, owning a problem and both contexts.

Useful starting points may be:
- The [enumeration procedure](crate::ssat::enumeration) to inspect the dynamics of an enumeration.
- The [problem structure](crate::ssat::problem) to see how formulas and prefixes are represented.
- The high-level [solve procedure](crate::procedures::solve) of the engine behind both solvers.
- The [configuration](crate::config) to see what is adjustable.

# Example

Pr[x₁ ∨ ∃y. …] for the formula (x₁ ∨ y) ∧ (x₂ ∨ ¬y) over random x₁, x₂ and existential y is ¾.

```rust
# use otter_ssat::config::EnumerationConfig;
# use otter_ssat::reports::SsatStatus;
# use otter_ssat::ssat::{problem::Problem, SsatSolver};
# use otter_ssat::structures::literal::{CLiteral, Literal};
let mut problem = Problem::default();
let x_one = problem.fresh_random(0.5).expect("atom");
let x_two = problem.fresh_random(0.5).expect("atom");
let y = problem.fresh_exist();

problem.add_clause(vec![CLiteral::new(x_one, true), CLiteral::new(y, true)]).expect("clause");
problem.add_clause(vec![CLiteral::new(x_two, true), CLiteral::new(y, false)]).expect("clause");

let mut solver = SsatSolver::new(problem, EnumerationConfig::default()).expect("solver");
let report = solver.solve().expect("solve");

assert_eq!(report.status, SsatStatus::Exact);
assert!((report.value() - 0.75).abs() < 1e-9);
```

# Logs

To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
As logging is only built on request, and further can be requested by level, logs are verbose.

The targets are listed in [misc::log].

Progress of an enumeration, in contrast, is part of the external contract and is reported on the standard output stream by the [driver](crate::ssat::enumeration).
*/

#![allow(clippy::collapsible_else_if)]
#![allow(clippy::single_match)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod generic;

pub mod reports;

pub mod db;

pub mod misc;

pub mod ssat;
