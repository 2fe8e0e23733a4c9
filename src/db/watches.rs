/*!
A structure to record which clauses are watching which literals.

# Theory

A core part of a solve is [boolean constraint propagation](crate::procedures::bcp) (BCP).
In short, BCP is the observation that some literal in a clause must be true due to all other literals in the clause being false.

Two watched literals per clause make BCP lazy:
- So long as two distinct literals of a clause are not known to be false, the clause cannot assert anything.
- So, it suffices to inspect a clause only when one of two distinguished ('watched') literals is made false, and then to either find a replacement watch, note the asserted literal, or note a conflict.

Here, the watched literals of a clause are those at indices zero and one, and the watch lists record, for each literal, the keys of the clauses watching that literal.

# Literature

[The art of computer programming, Volume 4](https://www-cs-faculty.stanford.edu/~knuth/taocp.html) discusses watched literals in the *Lazy data structures* section of *Backtracking Algorithms*, with general use of watched literals following from [Chaff](https://dl.acm.org/doi/10.1145/378239.379017).
*/

use crate::{
    db::ClauseKey,
    structures::literal::{CLiteral, Literal},
};

/// The clauses watching each literal, split by polarity and indexed by atom.
#[derive(Default)]
pub struct Watches {
    /// Watchers of the positive literal of an atom.
    positive: Vec<Vec<ClauseKey>>,

    /// Watchers of the negative literal of an atom.
    negative: Vec<Vec<ClauseKey>>,
}

impl Watches {
    /// Extends the watch lists to cover a fresh atom.
    pub fn fresh_atom(&mut self) {
        self.positive.push(Vec::default());
        self.negative.push(Vec::default());
    }

    /// Notes `key` is watching `literal`.
    pub fn watch(&mut self, literal: CLiteral, key: ClauseKey) {
        match literal.polarity() {
            true => self.positive[literal.atom() as usize].push(key),
            false => self.negative[literal.atom() as usize].push(key),
        }
    }

    /// Takes the list of clauses watching `literal`, leaving an empty list in its place.
    ///
    /// To be used in conjunction with [restore](Watches::restore), e.g. around an examination of the list which may revise other watch lists.
    pub fn take(&mut self, literal: CLiteral) -> Vec<ClauseKey> {
        match literal.polarity() {
            true => std::mem::take(&mut self.positive[literal.atom() as usize]),
            false => std::mem::take(&mut self.negative[literal.atom() as usize]),
        }
    }

    /// Restores a (revised) list of clauses watching `literal`.
    ///
    /// # Soundness
    /// Any keys added to the list of `literal` between the take and the restore are lost.
    /// This does not happen during BCP, as the atom of `literal` has a value, and so is not a candidate for a replacement watch.
    pub fn restore(&mut self, literal: CLiteral, list: Vec<ClauseKey>) {
        match literal.polarity() {
            true => self.positive[literal.atom() as usize] = list,
            false => self.negative[literal.atom() as usize] = list,
        }
    }

    /// A count of atoms covered by the watch lists.
    pub fn atom_count(&self) -> usize {
        self.positive.len()
    }
}
