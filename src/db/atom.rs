/*!
The atom database.

For each atom the database records:
- The current (optional) value of the atom, as part of the canonical [valuation](crate::structures::valuation).
- The level at which the value was set, meaningful only while the atom has some value.
- The previous value of the atom, used as a phase hint by the [decision procedure](crate::procedures::decision).

The database always contains the reserved top atom, valued true.
*/

use crate::{
    db::LevelIndex,
    structures::{
        atom::Atom,
        valuation::{CValuation, Valuation},
    },
};

/// The values, levels, and phases of the atoms of a context.
pub struct AtomDB {
    /// The current valuation, indexed by atoms.
    pub valuation: CValuation,

    /// The level at which each atom was valued, stale unless the atom has some value.
    level: Vec<LevelIndex>,

    /// The value each atom last had, if any, used as a phase hint.
    previous: Vec<Option<bool>>,
}

impl Default for AtomDB {
    fn default() -> Self {
        AtomDB {
            valuation: vec![Some(true)],
            level: vec![0],
            previous: vec![Some(true)],
        }
    }
}

impl AtomDB {
    /// Extends the database with a fresh atom, returning the atom.
    pub fn fresh_atom(&mut self) -> Atom {
        let atom = self.valuation.len() as Atom;
        self.valuation.push(None);
        self.level.push(0);
        self.previous.push(None);
        atom
    }

    /// A count of all atoms in the database (including top).
    pub fn count(&self) -> usize {
        self.valuation.atom_count()
    }

    /// True if `atom` belongs to the database, false otherwise.
    pub fn contains(&self, atom: Atom) -> bool {
        (atom as usize) < self.valuation.len()
    }

    /// The value of `atom` on the current valuation, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation.value_of(atom).flatten()
    }

    /// The level at which `atom` was valued.
    ///
    /// # Soundness
    /// Stale unless `atom` has some value.
    pub fn level_of(&self, atom: Atom) -> LevelIndex {
        self.level[atom as usize]
    }

    /// The value `atom` last had, if any, used as a phase hint.
    pub fn previous_value_of(&self, atom: Atom) -> Option<bool> {
        self.previous[atom as usize]
    }

    /// Sets the value of `atom` at `level`.
    pub fn set_value(&mut self, atom: Atom, value: bool, level: LevelIndex) {
        self.valuation[atom as usize] = Some(value);
        self.level[atom as usize] = level;
    }

    /// Clears the value of `atom`, keeping the cleared value as a phase hint.
    pub fn clear_value(&mut self, atom: Atom) {
        if let Some(value) = self.valuation[atom as usize] {
            self.previous[atom as usize] = Some(value);
        }
        self.valuation[atom as usize] = None;
    }

    /// The first atom without a value, in atom order, if any.
    pub fn first_unvalued(&self) -> Option<Atom> {
        self.valuation.unvalued_atoms().next()
    }
}
