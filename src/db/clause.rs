/*!
The clause database.

Clauses of length two or greater are stored in one of two stores:
- The *original* store, for clauses belonging to the formula of interest.
- The *addition* store, for clauses added during a solve (learnt clauses, blocking clauses, etc.).

Clauses are accessed through [keys](crate::db::ClauseKey) which pair the store with an index, and no clause is ever removed from a store.

Unit clauses are not stored.
Instead, the literal of a unit clause is valued at level zero with the relevant [source](crate::structures::consequence::AssignmentSource) and a count is kept for reporting.
*/

use crate::{
    db::ClauseKey,
    misc::log::targets,
    structures::{
        clause::{CClause, Clause},
        literal::CLiteral,
    },
    types::err::ClauseDbError,
};

/// The clause database, indexed by [ClauseKey]s.
#[derive(Default)]
pub struct ClauseDB {
    /// Clauses of the original formula.
    originals: Vec<CClause>,

    /// Clauses added to the context.
    additions: Vec<CClause>,

    /// A count of unit clauses absorbed into the level zero valuation.
    unit_count: usize,
}

impl ClauseDB {
    /// The clause stored under `key`, as a slice of literals.
    pub fn get(&self, key: &ClauseKey) -> Result<&[CLiteral], ClauseDbError> {
        match key {
            ClauseKey::Original(index) => match self.originals.get(*index as usize) {
                Some(clause) => Ok(clause.as_slice()),
                None => Err(ClauseDbError::Missing),
            },

            ClauseKey::Addition(index) => match self.additions.get(*index as usize) {
                Some(clause) => Ok(clause.as_slice()),
                None => Err(ClauseDbError::Missing),
            },
        }
    }

    /// A mutable borrow of the clause stored under `key`.
    pub fn get_mut(&mut self, key: &ClauseKey) -> Result<&mut CClause, ClauseDbError> {
        match key {
            ClauseKey::Original(index) => match self.originals.get_mut(*index as usize) {
                Some(clause) => Ok(clause),
                None => Err(ClauseDbError::Missing),
            },

            ClauseKey::Addition(index) => match self.additions.get_mut(*index as usize) {
                Some(clause) => Ok(clause),
                None => Err(ClauseDbError::Missing),
            },
        }
    }

    /// Stores `clause` as an original clause, returning the key to the clause.
    pub fn store_original(&mut self, clause: CClause) -> ClauseKey {
        let key = ClauseKey::Original(self.originals.len() as u32);
        log::trace!(target: targets::CLAUSE_DB, "{key}: {}", clause.as_dimacs(false));
        self.originals.push(clause);
        key
    }

    /// Stores `clause` as an addition clause, returning the key to the clause.
    pub fn store_addition(&mut self, clause: CClause) -> ClauseKey {
        let key = ClauseKey::Addition(self.additions.len() as u32);
        log::trace!(target: targets::CLAUSE_DB, "{key}: {}", clause.as_dimacs(false));
        self.additions.push(clause);
        key
    }

    /// Notes a unit clause was absorbed into the level zero valuation.
    pub fn note_unit(&mut self) {
        self.unit_count += 1;
    }

    /// A count of stored original clauses.
    pub fn original_count(&self) -> usize {
        self.originals.len()
    }

    /// A count of stored addition clauses.
    pub fn addition_count(&self) -> usize {
        self.additions.len()
    }

    /// A count of unit clauses absorbed into the level zero valuation.
    pub fn unit_count(&self) -> usize {
        self.unit_count
    }
}
