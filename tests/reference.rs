use proptest::prelude::*;

use otter_ssat::{
    config::{EnumerationConfig, Generalization},
    reports::SsatStatus,
    ssat::{problem::Problem, SsatSolver},
    structures::literal::{CLiteral, Literal},
};

/// The satisfying probability by brute force: sum, over assignments to the random block, of the
/// weight of each assignment which some assignment to the existential block extends to a model.
fn brute_force(
    clauses: &[Vec<CLiteral>],
    random_atoms: &[(u32, f64)],
    exist_atoms: &[u32],
) -> f64 {
    let mut probability = 0.0;

    for random_bits in 0..2_u64.pow(random_atoms.len() as u32) {
        let mut weight = 1.0;
        let mut assignment: Vec<(u32, bool)> = Vec::new();
        for (index, &(atom, p)) in random_atoms.iter().enumerate() {
            let value = (random_bits >> index) & 1 == 1;
            weight *= if value { p } else { 1.0 - p };
            assignment.push((atom, value));
        }

        let extensible = (0..2_u64.pow(exist_atoms.len() as u32)).any(|exist_bits| {
            let mut extended = assignment.clone();
            for (index, &atom) in exist_atoms.iter().enumerate() {
                extended.push((atom, (exist_bits >> index) & 1 == 1));
            }

            clauses.iter().all(|clause| {
                clause.iter().any(|literal| {
                    extended
                        .iter()
                        .any(|&(atom, value)| atom == literal.atom() && value == literal.polarity())
                })
            })
        });

        if extensible {
            probability += weight;
        }
    }

    probability
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn enumeration_matches_brute_force(
        probabilities in prop::collection::vec(prop::sample::select(vec![0.0, 0.25, 0.5, 0.75, 1.0]), 1..=3),
        exist_count in 0_usize..=2,
        clause_shapes in prop::collection::vec(
            prop::collection::vec((any::<bool>(), 0_usize..8), 1..=3),
            1..=4,
        ),
        minimize_cores in any::<bool>(),
        hitting_set in any::<bool>(),
    ) {
        let mut problem = Problem::default();

        let random_atoms: Vec<(u32, f64)> = probabilities
            .iter()
            .map(|&p| (problem.fresh_random(p).expect("atom"), p))
            .collect();
        let exist_atoms: Vec<u32> = (0..exist_count).map(|_| problem.fresh_exist()).collect();

        let mut atoms: Vec<u32> = random_atoms.iter().map(|&(atom, _)| atom).collect();
        atoms.extend(&exist_atoms);

        let mut clauses: Vec<Vec<CLiteral>> = Vec::new();
        for shape in &clause_shapes {
            let clause: Vec<CLiteral> = shape
                .iter()
                .map(|&(polarity, index)| CLiteral::new(atoms[index % atoms.len()], polarity))
                .collect();
            problem.add_clause(clause.clone()).expect("clause");
            clauses.push(clause);
        }

        let expected = brute_force(&clauses, &random_atoms, &exist_atoms);

        let config = EnumerationConfig {
            threshold: 0.0,
            cube_limit: 1,
            minimize_cores,
            generalization: match hitting_set {
                true => Generalization::HittingSet,
                false => Generalization::Negation,
            },
        };

        let mut solver = SsatSolver::new(problem, config).expect("solver");
        let report = solver.solve().expect("solve");

        prop_assert_eq!(report.status, SsatStatus::Exact);
        prop_assert!((report.sat_pb - expected).abs() < 1e-9);
        prop_assert!((report.sat_pb + report.unsat_pb - 1.0).abs() < 1e-9);
    }
}
