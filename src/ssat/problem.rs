/*!
A two-level stochastic problem.

A problem pairs a [prefix](crate::structures::prefix) with a formula in conjunctive normal form, and is built once:
- Atoms are created through [fresh_random](Problem::fresh_random), [fresh_exist](Problem::fresh_exist), and [fresh_internal](Problem::fresh_internal).
- Clauses are added through [add_clause](Problem::add_clause), which drops duplicate literals and skips tautologies.
- Optionally, [reserve_selectors](Problem::reserve_selectors) reserves a distinct auxiliary atom for each clause, after which the clause list is frozen.

When selectors are reserved, the body solver of an [SsatSolver](crate::ssat::SsatSolver) loads clause *cᵢ* as (*sᵢ* ∨ *cᵢ*): asserting ¬*sᵢ* activates the clause, and asserting *sᵢ* deactivates it.
Selector identity is fixed at reservation and may be read through [selector_literal](Problem::selector_literal).
*/

use crate::{
    builder::ClauseOk,
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
        prefix::{Prefix, Probability, Quantifier},
    },
    types::err::{ErrorKind, PrefixError, ProblemError},
};

/// A two-level stochastic problem: a prefix, a formula, and (optionally) clause selectors.
#[derive(Clone, Debug, Default)]
pub struct Problem {
    /// The quantification of every atom of the problem.
    prefix: Prefix,

    /// The clauses of the formula, in order of addition.
    clauses: Vec<CClause>,

    /// The selector literal of each clause, when reserved.
    selectors: Option<Vec<CLiteral>>,

    /// A count of the atoms of the problem, selectors included.
    atoms: Atom,
}

impl Problem {
    /// Extends the problem with a fresh random atom, assigned true with (independent) `probability`.
    pub fn fresh_random(&mut self, probability: Probability) -> Result<Atom, ErrorKind> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(PrefixError::ProbabilityRange(probability).into());
        }

        let atom = self.fresh_atom();
        self.prefix.record(atom, Quantifier::Random(probability))?;
        Ok(atom)
    }

    /// Extends the problem with a fresh existential atom.
    pub fn fresh_exist(&mut self) -> Atom {
        let atom = self.fresh_atom();
        // Only random probabilities are checked, so the result may be discarded.
        let _ = self.prefix.record(atom, Quantifier::Exist);
        atom
    }

    /// Extends the problem with a fresh internal atom.
    pub fn fresh_internal(&mut self) -> Atom {
        let atom = self.fresh_atom();
        let _ = self.prefix.record(atom, Quantifier::Internal);
        atom
    }

    fn fresh_atom(&mut self) -> Atom {
        self.atoms += 1;
        self.atoms
    }

    /// Adds a clause to the formula of the problem.
    ///
    /// Duplicate literals are dropped and tautologies are noted and skipped.
    /// Every atom of the clause must belong to the prefix, and clauses cannot be added once selectors are reserved.
    pub fn add_clause(&mut self, clause: impl Clause) -> Result<ClauseOk, ErrorKind> {
        if self.selectors.is_some() {
            return Err(ProblemError::ClausesFrozen.into());
        }

        let mut the_clause = clause.canonical();
        for literal in &the_clause {
            if self.prefix.quantifier_of(literal.atom()).is_none() {
                return Err(ProblemError::UnknownAtom.into());
            }
        }

        the_clause.sort_unstable_by_key(|literal| (literal.atom(), literal.polarity()));
        the_clause.dedup();

        if the_clause
            .windows(2)
            .any(|pair| pair[0].atom() == pair[1].atom())
        {
            return Ok(ClauseOk::Tautology);
        }

        self.clauses.push(the_clause);
        Ok(ClauseOk::Added)
    }

    /// Reserves a distinct selector atom for each clause of the formula, freezing the clause list.
    pub fn reserve_selectors(&mut self) -> Result<(), ErrorKind> {
        if self.selectors.is_some() {
            return Err(ProblemError::SelectorsReserved.into());
        }

        let mut selectors = Vec::with_capacity(self.clauses.len());
        for _ in 0..self.clauses.len() {
            let atom = self.fresh_atom();
            let _ = self.prefix.record(atom, Quantifier::Internal);
            selectors.push(CLiteral::new(atom, true));
        }

        self.selectors = Some(selectors);
        Ok(())
    }

    /// The prefix of the problem.
    pub fn prefix(&self) -> &Prefix {
        &self.prefix
    }

    /// The clauses of the formula, in order of addition.
    pub fn clauses(&self) -> &[CClause] {
        &self.clauses
    }

    /// True if selectors have been reserved, false otherwise.
    pub fn has_selectors(&self) -> bool {
        self.selectors.is_some()
    }

    /// The selector literal of the clause at `index`, when reserved.
    pub fn selector_literal(&self, index: usize) -> Option<CLiteral> {
        match &self.selectors {
            Some(selectors) => selectors.get(index).copied(),
            None => None,
        }
    }

    /// A count of the atoms of the problem, selectors included.
    pub fn atom_bound(&self) -> Atom {
        self.atoms
    }
}
