/*!
Tools for building a context.

The library has two basic methods for building a context:
- [fresh_atom](crate::context::GenericContext::fresh_atom), to obtain a fresh atom.
- [add_clause](crate::context::GenericContext::add_clause), to add a clause.

A formula may be added to a context by interweaving these two methods.
In rough strokes, the pattern is to:
- Obtain a collection of atoms to represent a clause.
- Create [CLiteral](crate::structures::literal::CLiteral)s from the atoms.
- Bundle the literals into a [CClause](crate::structures::clause::CClause).
- Add the clause to the context.

# Example

```rust
# use otter_ssat::context::Context;
# use otter_ssat::config::Config;
# use otter_ssat::reports::Report;
# use otter_ssat::structures::literal::{CLiteral, Literal};
let mut ctx = Context::from_config(Config::default());
let p = ctx.fresh_atom().expect("atom");
let q = ctx.fresh_atom().expect("atom");

let clause_a = vec![CLiteral::new(p, true), CLiteral::new(q, false)];
let clause_b = vec![CLiteral::new(p, false), CLiteral::new(q, true)];

assert!(ctx.add_clause(clause_a).is_ok());
assert!(ctx.add_clause(clause_b).is_ok());
ctx.solve();
assert_eq!(ctx.report(), Report::Satisfiable)
```
*/

use crate::{
    context::{ContextState, GenericContext},
    misc::log::targets,
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::Clause,
        consequence::{Assignment, AssignmentSource},
        literal::Literal,
    },
    types::err::ErrorKind,
};

/// Ok results when adding a clause to the context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the context.
    Added,

    /// The clause was a tautology (and so was not added to the context).
    Tautology,

    /// The clause is satisfied at level zero (and so was not added to the context).
    Satisfied,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Expands the context to include a fresh (new) atom.
    /// Atoms form a contiguous range from 1 to some limit.
    pub fn fresh_atom(&mut self) -> Result<Atom, ErrorKind> {
        if self.atom_db.count() as Atom > ATOM_MAX {
            return Err(ErrorKind::AtomsExhausted);
        }

        let atom = self.atom_db.fresh_atom();
        self.watches.fresh_atom();
        self.seen.push(false);
        debug_assert_eq!(self.watches.atom_count(), self.atom_db.count());

        Ok(atom)
    }

    /// Ensures `atom` belongs to the context, extending the context with fresh atoms as needed.
    pub fn ensure_atom(&mut self, atom: Atom) -> Result<(), ErrorKind> {
        while !self.atom_db.contains(atom) {
            self.fresh_atom()?;
        }
        Ok(())
    }

    /// Adds a clause to the context.
    ///
    /// The clause is canonicalized before storage:
    /// - Duplicate literals are dropped.
    /// - Tautologies are noted and skipped.
    /// - Literals false at level zero are dropped, and the clause is skipped if some literal is true at level zero.
    ///
    /// Adding a clause clears any decisions and assumptions of the context.
    /// An empty clause sets the context unsatisfiable.
    pub fn add_clause(&mut self, clause: impl Clause) -> Result<ClauseOk, ErrorKind> {
        if self.trail.level_is_made() {
            self.backjump(0);
        }
        if !matches!(self.state, ContextState::Unsatisfiable) {
            self.state = ContextState::Input;
        }

        let mut the_clause = clause.canonical();
        for literal in &the_clause {
            self.ensure_atom(literal.atom())?;
        }

        the_clause.sort_unstable_by_key(|literal| (literal.atom(), literal.polarity()));
        the_clause.dedup();

        if the_clause
            .windows(2)
            .any(|pair| pair[0].atom() == pair[1].atom())
        {
            log::trace!(target: targets::CLAUSE_DB, "Tautology skipped: {}", the_clause.as_dimacs(false));
            return Ok(ClauseOk::Tautology);
        }

        // Simplification against the level zero valuation.
        let mut satisfied = false;
        the_clause.retain(|literal| match self.atom_db.value_of(literal.atom()) {
            None => true,
            Some(value) => {
                if value == literal.polarity() {
                    satisfied = true;
                }
                false
            }
        });

        if satisfied {
            return Ok(ClauseOk::Satisfied);
        }

        match the_clause.len() {
            0 => {
                log::info!(target: targets::CLAUSE_DB, "An unsatisfiable clause was added");
                self.state = ContextState::Unsatisfiable;
                Ok(ClauseOk::Added)
            }

            1 => {
                let literal = the_clause[0];
                self.clause_db.note_unit();
                self.record_assignment(Assignment::from(literal, AssignmentSource::Original));
                Ok(ClauseOk::Added)
            }

            _ => {
                let zero = the_clause[0];
                let one = the_clause[1];
                let key = self.clause_db.store_original(the_clause);
                self.watches.watch(zero, key);
                self.watches.watch(one, key);
                Ok(ClauseOk::Added)
            }
        }
    }
}
