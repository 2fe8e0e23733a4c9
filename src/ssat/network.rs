/*!
The cube network: from stores of learnt cubes to exact probabilities.

The sink consumes a [store](crate::ssat::cubes) of blocking clauses together with the [prefix](crate::structures::prefix) of the problem and returns the probability of the disjunction of the stored cubes --- each cube being the negation of its blocking clause, a conjunction of literals over the random block.

The same quantity could be obtained by building a multi-level boolean network from the cubes and handing it to an exact weighted model counter.
Here it is computed directly by Shannon expansion over the cube list: the disjunction is cofactored on a random atom, and the probability is the weighted sum of the probabilities of the two cofactors.
Cofactoring terminates once some cube is empty (the disjunction is the whole space) or no cube remains (the disjunction is empty).

Two details of the translation from blocking clauses:
- A blocking clause with a duplicated atom cannot arise from a well-formed cube, and is rejected before counting.
- Literals over non-random atoms (clause selectors, pinned false in the selector solver) are inert and are skipped.

Guarantees to the enumeration driver: recounting a grown store never decreases the returned probability, and a recount is always exact for the cubes counted.
*/

use crate::{
    misc::log::targets,
    structures::{
        atom::Atom,
        clause::CClause,
        literal::{CLiteral, Literal},
        prefix::Prefix,
    },
    types::err::ErrorKind,
};

/// The probability of the disjunction of the cubes blocked by `clauses`, over the distribution of `prefix`.
pub fn union_probability(clauses: &[CClause], prefix: &Prefix) -> Result<f64, ErrorKind> {
    let mut cubes: Vec<Vec<CLiteral>> = Vec::with_capacity(clauses.len());

    for clause in clauses {
        let mut cube: Vec<CLiteral> = Vec::with_capacity(clause.len());
        for literal in clause {
            if !prefix.is_random(literal.atom()) {
                continue;
            }
            if cube.iter().any(|seen| seen.atom() == literal.atom()) {
                return Err(ErrorKind::DuplicateBlockingLiteral(*literal));
            }
            cube.push(literal.negate());
        }
        cubes.push(cube);
    }

    let probability = shannon(cubes, prefix);
    log::trace!(target: targets::NETWORK, "Union of {} cubes has probability {probability}", clauses.len());

    Ok(probability)
}

/// Shannon expansion of the disjunction of `cubes` on the atoms of the random block.
fn shannon(cubes: Vec<Vec<CLiteral>>, prefix: &Prefix) -> f64 {
    if cubes.is_empty() {
        return 0.0;
    }
    if cubes.iter().any(|cube| cube.is_empty()) {
        return 1.0;
    }

    // Branch on the first literal of the first cube.
    let atom = cubes[0][0].atom();
    let probability = match prefix.probability_of(atom) {
        Some(probability) => probability,
        // Unreachable for well-formed input, and a weight of one half mirrors an unbiased atom.
        None => 0.5,
    };

    let positive = cofactor(&cubes, atom, true);
    let negative = cofactor(&cubes, atom, false);

    probability * shannon(positive, prefix) + (1.0 - probability) * shannon(negative, prefix)
}

/// The cubes of `cubes` consistent with valuing `atom` as `value`, with the atom dropped.
fn cofactor(cubes: &[Vec<CLiteral>], atom: Atom, value: bool) -> Vec<Vec<CLiteral>> {
    let mut remaining = Vec::with_capacity(cubes.len());

    'cube_loop: for cube in cubes {
        let mut reduced = Vec::with_capacity(cube.len());
        for literal in cube {
            if literal.atom() == atom {
                if literal.polarity() != value {
                    continue 'cube_loop;
                }
                continue;
            }
            reduced.push(*literal);
        }
        remaining.push(reduced);
    }

    remaining
}

#[cfg(test)]
mod network_tests {
    use super::*;
    use crate::structures::prefix::Quantifier;

    fn two_random_prefix() -> Prefix {
        let mut prefix = Prefix::default();
        prefix.record(1, Quantifier::Random(0.5)).expect("atom");
        prefix.record(2, Quantifier::Random(0.5)).expect("atom");
        prefix
    }

    #[test]
    fn empty_union() {
        let prefix = two_random_prefix();
        assert_eq!(union_probability(&[], &prefix), Ok(0.0));
    }

    #[test]
    fn whole_space() {
        let prefix = two_random_prefix();
        let clauses = vec![vec![]];
        assert_eq!(union_probability(&clauses, &prefix), Ok(1.0));
    }

    #[test]
    fn overlapping_cubes() {
        let prefix = two_random_prefix();
        // Blocking clauses -1 and -2, so the cubes 1 and 2, with union probability 3/4.
        let clauses = vec![vec![-1], vec![-2]];
        assert_eq!(union_probability(&clauses, &prefix), Ok(0.75));
    }

    #[test]
    fn duplicated_atom_rejected() {
        let prefix = two_random_prefix();
        let clauses = vec![vec![1, -1]];
        assert!(union_probability(&clauses, &prefix).is_err());
    }

    #[test]
    fn biased_atom() {
        let mut prefix = Prefix::default();
        prefix.record(1, Quantifier::Random(0.2)).expect("atom");
        // The cube -1 has probability 0.8.
        let clauses = vec![vec![1]];
        let probability = union_probability(&clauses, &prefix).expect("count");
        assert!((probability - 0.8).abs() < 1e-12);
    }
}
