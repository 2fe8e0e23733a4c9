use otter_ssat::{
    config::EnumerationConfig,
    reports::SsatStatus,
    ssat::{problem::Problem, SsatSolver},
    structures::literal::{CLiteral, Literal},
};

/// True if `clauses` hold under `assignment`, with every atom of every clause assigned.
fn satisfies(clauses: &[Vec<CLiteral>], assignment: &[(u32, bool)]) -> bool {
    clauses.iter().all(|clause| {
        clause.iter().any(|literal| {
            assignment
                .iter()
                .any(|&(atom, value)| atom == literal.atom() && value == literal.polarity())
        })
    })
}

/// True if some assignment to `exist_atoms` extends `random_assignment` to satisfy `clauses`.
fn extensible(
    clauses: &[Vec<CLiteral>],
    random_assignment: &[(u32, bool)],
    exist_atoms: &[u32],
) -> bool {
    let count = exist_atoms.len() as u32;
    (0..2_u64.pow(count)).any(|bits| {
        let mut assignment = random_assignment.to_vec();
        for (index, &atom) in exist_atoms.iter().enumerate() {
            assignment.push((atom, (bits >> index) & 1 == 1));
        }
        satisfies(clauses, &assignment)
    })
}

fn chain_problem() -> Problem {
    let mut problem = Problem::default();
    let x_one = problem.fresh_random(0.5).expect("atom");
    let x_two = problem.fresh_random(0.5).expect("atom");
    let x_three = problem.fresh_random(0.5).expect("atom");
    let y = problem.fresh_exist();
    let z = problem.fresh_exist();

    problem
        .add_clause(vec![CLiteral::new(x_one, true), CLiteral::new(y, true)])
        .expect("clause");
    problem
        .add_clause(vec![CLiteral::new(y, false), CLiteral::new(z, true)])
        .expect("clause");
    problem
        .add_clause(vec![CLiteral::new(x_two, true), CLiteral::new(z, false)])
        .expect("clause");
    problem
        .add_clause(vec![
            CLiteral::new(x_three, true),
            CLiteral::new(x_one, false),
            CLiteral::new(z, true),
        ])
        .expect("clause");
    problem
}

#[test]
fn chain_probability() {
    // Satisfiable on five of the eight assignments to the random block.
    let mut solver = SsatSolver::new(chain_problem(), EnumerationConfig::default()).expect("solver");
    let report = solver.solve().expect("solve");

    assert_eq!(report.status, SsatStatus::Exact);
    assert!((report.sat_pb - 0.625).abs() < 1e-9);
}

#[test]
fn hitting_set_soundness() {
    let mut solver = SsatSolver::new(chain_problem(), EnumerationConfig::default()).expect("solver");
    let report = solver.solve().expect("solve");
    assert_eq!(report.status, SsatStatus::Exact);

    let problem = solver.problem();
    let random_atoms = problem.prefix().random_atoms().to_vec();
    let exist_atoms = problem.prefix().exist_atoms().to_vec();
    let clauses: Vec<Vec<CLiteral>> = problem.clauses().to_vec();

    for blocking in solver.sat_cubes().clauses() {
        // Every assignment to the random block falsifying the blocking clause extends to a model.
        for bits in 0..2_u64.pow(random_atoms.len() as u32) {
            let assignment: Vec<(u32, bool)> = random_atoms
                .iter()
                .enumerate()
                .map(|(index, &atom)| (atom, (bits >> index) & 1 == 1))
                .collect();

            let falsifies = blocking.iter().all(|literal| {
                assignment
                    .iter()
                    .any(|&(atom, value)| atom == literal.atom() && value != literal.polarity())
            });

            if falsifies {
                assert!(extensible(&clauses, &assignment, &exist_atoms));
            }
        }
    }
}

#[test]
fn capacity_bound() {
    let mut solver = SsatSolver::new(chain_problem(), EnumerationConfig::default()).expect("solver");
    solver.solve().expect("solve");

    let width = solver.problem().prefix().random_atoms().len();
    for blocking in solver.sat_cubes().clauses() {
        assert!(blocking.len() <= width);
    }
}

#[test]
fn unsat_cube_soundness() {
    let mut solver = SsatSolver::new(chain_problem(), EnumerationConfig::default()).expect("solver");
    let report = solver.solve().expect("solve");
    assert_eq!(report.status, SsatStatus::Exact);

    let problem = solver.problem();
    let random_atoms = problem.prefix().random_atoms().to_vec();
    let exist_atoms = problem.prefix().exist_atoms().to_vec();
    let clauses: Vec<Vec<CLiteral>> = problem.clauses().to_vec();

    for blocking in solver.unsat_cubes().clauses() {
        // Every assignment to the random block falsifying the blocking clause fails to extend.
        for bits in 0..2_u64.pow(random_atoms.len() as u32) {
            let assignment: Vec<(u32, bool)> = random_atoms
                .iter()
                .enumerate()
                .map(|(index, &atom)| (atom, (bits >> index) & 1 == 1))
                .collect();

            let falsifies = blocking.iter().all(|literal| {
                assignment
                    .iter()
                    .any(|&(atom, value)| atom == literal.atom() && value != literal.polarity())
            });

            if falsifies {
                assert!(!extensible(&clauses, &assignment, &exist_atoms));
            }
        }
    }
}
