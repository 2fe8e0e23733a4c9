use otter_ssat::{
    config::{EnumerationConfig, Generalization},
    reports::SsatStatus,
    ssat::{problem::Problem, SsatSolver},
    structures::literal::{CLiteral, Literal},
};

const TOLERANCE: f64 = 1e-9;

fn solve(problem: Problem, config: EnumerationConfig) -> otter_ssat::reports::SsatReport {
    let mut solver = SsatSolver::new(problem, config).expect("solver");
    solver.solve().expect("solve")
}

mod scenarios {
    use super::*;

    #[test]
    fn single_random_satisfiable_iff_true() {
        let mut problem = Problem::default();
        let x = problem.fresh_random(0.5).expect("atom");
        problem.add_clause(CLiteral::new(x, true)).expect("clause");

        let report = solve(problem, EnumerationConfig::default());

        assert_eq!(report.status, SsatStatus::Exact);
        assert!((report.sat_pb - 0.5).abs() < TOLERANCE);
        assert!((report.unsat_pb - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn tautological_formula() {
        let mut problem = Problem::default();
        let x_one = problem.fresh_random(0.5).expect("atom");
        let _x_two = problem.fresh_random(0.5).expect("atom");
        problem
            .add_clause(vec![CLiteral::new(x_one, true), CLiteral::new(x_one, false)])
            .expect("clause");

        let report = solve(problem, EnumerationConfig::default());

        assert_eq!(report.status, SsatStatus::Exact);
        assert!((report.sat_pb - 1.0).abs() < TOLERANCE);
        assert!(report.unsat_pb.abs() < TOLERANCE);
    }

    #[test]
    fn contradictory_formula() {
        let mut problem = Problem::default();
        let x = problem.fresh_random(0.5).expect("atom");
        problem.add_clause(CLiteral::new(x, true)).expect("clause");
        problem.add_clause(CLiteral::new(x, false)).expect("clause");

        let report = solve(problem, EnumerationConfig::default());

        assert_eq!(report.status, SsatStatus::Exact);
        assert!(report.sat_pb.abs() < TOLERANCE);
        assert!((report.unsat_pb - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn existential_witness() {
        let mut problem = Problem::default();
        let x = problem.fresh_random(0.5).expect("atom");
        let y = problem.fresh_exist();
        problem
            .add_clause(vec![CLiteral::new(x, true), CLiteral::new(y, true)])
            .expect("clause");
        problem
            .add_clause(vec![CLiteral::new(x, false), CLiteral::new(y, true)])
            .expect("clause");

        let report = solve(problem, EnumerationConfig::default());

        assert_eq!(report.status, SsatStatus::Exact);
        assert!((report.sat_pb - 1.0).abs() < TOLERANCE);
        assert!(report.unsat_pb.abs() < TOLERANCE);
    }

    fn mixed_problem() -> Problem {
        let mut problem = Problem::default();
        let x_one = problem.fresh_random(0.5).expect("atom");
        let x_two = problem.fresh_random(0.5).expect("atom");
        let y = problem.fresh_exist();
        problem
            .add_clause(vec![CLiteral::new(x_one, true), CLiteral::new(y, true)])
            .expect("clause");
        problem
            .add_clause(vec![CLiteral::new(x_two, true), CLiteral::new(y, false)])
            .expect("clause");
        problem
    }

    #[test]
    fn mixed_converges_to_three_quarters() {
        let report = solve(mixed_problem(), EnumerationConfig::default());

        assert_eq!(report.status, SsatStatus::Exact);
        assert!((report.sat_pb - 0.75).abs() < TOLERANCE);
        assert!((report.unsat_pb - 0.25).abs() < TOLERANCE);
    }

    #[test]
    fn threshold_early_exit() {
        let config = EnumerationConfig {
            threshold: 0.5,
            cube_limit: 1,
            ..EnumerationConfig::default()
        };

        let report = solve(mixed_problem(), config);

        assert_eq!(report.status, SsatStatus::LowerBound);

        // The reported lower bound never exceeds the satisfying probability.
        assert!(report.sat_pb <= 0.75 + TOLERANCE);

        // And the gap between the bounds honours the threshold.
        assert!(1.0 - report.sat_pb - report.unsat_pb <= 0.5 + TOLERANCE);
    }
}

mod laws {
    use super::*;

    #[test]
    fn exactness_at_termination() {
        for config in [
            EnumerationConfig::default(),
            EnumerationConfig {
                cube_limit: 1,
                ..EnumerationConfig::default()
            },
        ] {
            let report = solve(scenarios_mixed(), config);
            assert_eq!(report.status, SsatStatus::Exact);
            assert!((report.sat_pb + report.unsat_pb - 1.0).abs() < TOLERANCE);
        }
    }

    fn scenarios_mixed() -> Problem {
        let mut problem = Problem::default();
        let x_one = problem.fresh_random(0.5).expect("atom");
        let x_two = problem.fresh_random(0.5).expect("atom");
        let y = problem.fresh_exist();
        problem
            .add_clause(vec![CLiteral::new(x_one, true), CLiteral::new(y, true)])
            .expect("clause");
        problem
            .add_clause(vec![CLiteral::new(x_two, true), CLiteral::new(y, false)])
            .expect("clause");
        problem
    }

    #[test]
    fn parameter_independence() {
        let mut values = Vec::new();

        for minimize_cores in [true, false] {
            for generalization in [Generalization::HittingSet, Generalization::Negation] {
                for cube_limit in [1, 2, 64] {
                    let config = EnumerationConfig {
                        threshold: 0.0,
                        cube_limit,
                        minimize_cores,
                        generalization,
                    };
                    let report = solve(scenarios_mixed(), config);
                    assert_eq!(report.status, SsatStatus::Exact);
                    values.push(report.sat_pb);
                }
            }
        }

        for value in &values {
            assert!((value - values[0]).abs() < TOLERANCE);
        }
    }

    #[test]
    fn idempotence() {
        let first = solve(scenarios_mixed(), EnumerationConfig::default());
        let second = solve(scenarios_mixed(), EnumerationConfig::default());

        assert_eq!(first, second);
    }

    #[test]
    fn biased_probabilities() {
        // Pr[x₁ ∨ x₂] with Pr[x₁] = 0.9 and Pr[x₂] = 0.2 is 1 - 0.1 · 0.8.
        let mut problem = Problem::default();
        let x_one = problem.fresh_random(0.9).expect("atom");
        let x_two = problem.fresh_random(0.2).expect("atom");
        problem
            .add_clause(vec![CLiteral::new(x_one, true), CLiteral::new(x_two, true)])
            .expect("clause");

        let report = solve(problem, EnumerationConfig::default());

        assert_eq!(report.status, SsatStatus::Exact);
        assert!((report.sat_pb - 0.92).abs() < TOLERANCE);
    }
}

mod control {
    use super::*;

    #[test]
    fn cancellation_returns_current_bounds() {
        let mut problem = Problem::default();
        for _ in 0..4 {
            let _ = problem.fresh_random(0.5).expect("atom");
        }
        let atoms: Vec<u32> = problem.prefix().random_atoms().to_vec();
        problem
            .add_clause(
                atoms
                    .iter()
                    .map(|&atom| CLiteral::new(atom, true))
                    .collect::<Vec<CLiteral>>(),
            )
            .expect("clause");

        let mut solver =
            SsatSolver::new(problem, EnumerationConfig::default()).expect("solver");

        solver.set_cancel_callback(Box::new(|| true));
        let report = solver.solve().expect("solve");

        assert_eq!(report.status, SsatStatus::Cancelled);
        assert!(report.sat_pb.abs() < TOLERANCE);
        assert!(report.unsat_pb.abs() < TOLERANCE);

        // Both stores are left intact by cancellation.
        assert!(solver.unsat_cubes().is_empty());
        assert!(solver.sat_cubes().is_empty());
    }

    #[test]
    fn probabilities_outside_the_unit_interval_are_rejected() {
        let mut problem = Problem::default();
        assert!(problem.fresh_random(1.5).is_err());
        assert!(problem.fresh_random(-0.25).is_err());
    }

    #[test]
    fn non_random_root_is_rejected() {
        let mut problem = Problem::default();
        let y = problem.fresh_exist();
        problem.add_clause(CLiteral::new(y, true)).expect("clause");

        let mut solver =
            SsatSolver::new(problem, EnumerationConfig::default()).expect("solver");

        assert!(solver.solve().is_err());
    }

    #[test]
    fn selectors_leave_the_probability_unchanged() {
        let mut problem = Problem::default();
        let x_one = problem.fresh_random(0.5).expect("atom");
        let x_two = problem.fresh_random(0.5).expect("atom");
        let y = problem.fresh_exist();
        problem
            .add_clause(vec![CLiteral::new(x_one, true), CLiteral::new(y, true)])
            .expect("clause");
        problem
            .add_clause(vec![CLiteral::new(x_two, true), CLiteral::new(y, false)])
            .expect("clause");
        problem.reserve_selectors().expect("selectors");

        assert!(problem.has_selectors());
        assert!(problem.selector_literal(0).is_some());
        assert!(problem.selector_literal(1).is_some());

        let report = solve(problem, EnumerationConfig::default());

        assert_eq!(report.status, SsatStatus::Exact);
        assert!((report.sat_pb - 0.75).abs() < TOLERANCE);
        assert!((report.unsat_pb - 0.25).abs() < TOLERANCE);
    }

    #[test]
    fn cube_stores_cover_the_space() {
        let mut solver = SsatSolver::new(
            {
                let mut problem = Problem::default();
                let x = problem.fresh_random(0.5).expect("atom");
                problem.add_clause(CLiteral::new(x, true)).expect("clause");
                problem
            },
            EnumerationConfig::default(),
        )
        .expect("solver");

        let report = solver.solve().expect("solve");

        assert_eq!(report.status, SsatStatus::Exact);
        assert_eq!(solver.unsat_cubes().len(), 1);
        assert_eq!(solver.sat_cubes().len(), 1);

        // The unsatisfiable cube blocks the assignment x₁ = false.
        assert_eq!(solver.unsat_cubes().clauses()[0], vec![1]);

        // The satisfiable cube blocks the subcube x₁ = true.
        assert_eq!(solver.sat_cubes().clauses()[0], vec![-1]);
    }
}
