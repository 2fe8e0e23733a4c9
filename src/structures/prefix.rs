/*!
The quantification of atoms.

A prefix records, for each atom, whether the atom is:
- *Random*, assigned true with an independent probability.
- *Existential*, free to take whichever value helps satisfy the formula.
- *Internal*, introduced by some encoding (e.g. Tseitin translation) and treated existentially.

A two-level stochastic formula quantifies every random atom outside every existential atom, and so the prefix reduces to three blocks, kept in quantification order:
- Block 0: the random atoms, each with a probability.
- Block 1: the existential atoms.
- Block 2: the internal atoms.

The prefix is built once, alongside the [problem](crate::ssat::problem), and is frozen thereafter.
*/

use crate::{
    structures::atom::Atom,
    types::err::{ErrorKind, PrefixError},
};

/// The probability some random atom is assigned true.
pub type Probability = f64;

/// The quantification of a single atom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Quantifier {
    /// Assigned true with the given (independent) probability.
    Random(Probability),

    /// Free to take whichever value helps satisfy the formula.
    Exist,

    /// Introduced by an encoding, treated existentially.
    Internal,
}

impl Quantifier {
    /// The quantification level of the atom: 0 random, 1 existential, 2 internal.
    pub fn level(&self) -> u8 {
        match self {
            Self::Random(_) => 0,
            Self::Exist => 1,
            Self::Internal => 2,
        }
    }
}

/// The quantification of every atom of a problem, as three ordered blocks.
#[derive(Clone, Debug, Default)]
pub struct Prefix {
    /// The quantifier of each atom, indexed by the atom (index zero is unused).
    tags: Vec<Option<Quantifier>>,

    /// The atoms of each block, in order of creation.
    blocks: [Vec<Atom>; 3],
}

impl Prefix {
    /// Records the quantification of `atom`.
    ///
    /// Probabilities outside the unit interval are rejected.
    pub fn record(&mut self, atom: Atom, quantifier: Quantifier) -> Result<(), ErrorKind> {
        if let Quantifier::Random(probability) = quantifier {
            if !(0.0..=1.0).contains(&probability) {
                return Err(PrefixError::ProbabilityRange(probability).into());
            }
        }

        if (self.tags.len() as Atom) <= atom {
            self.tags.resize(atom as usize + 1, None);
        }

        self.tags[atom as usize] = Some(quantifier);
        self.blocks[quantifier.level() as usize].push(atom);
        Ok(())
    }

    /// The quantifier of `atom`, if the atom is part of the prefix.
    pub fn quantifier_of(&self, atom: Atom) -> Option<Quantifier> {
        self.tags.get(atom as usize).copied().flatten()
    }

    /// The probability of `atom`, if the atom is random.
    pub fn probability_of(&self, atom: Atom) -> Option<Probability> {
        match self.quantifier_of(atom) {
            Some(Quantifier::Random(probability)) => Some(probability),
            _ => None,
        }
    }

    /// True if `atom` is random, false otherwise.
    pub fn is_random(&self, atom: Atom) -> bool {
        matches!(self.quantifier_of(atom), Some(Quantifier::Random(_)))
    }

    /// The quantification level of `atom`: 0 random, 1 existential, 2 internal.
    pub fn level_of(&self, atom: Atom) -> Option<u8> {
        self.quantifier_of(atom).map(|quantifier| quantifier.level())
    }

    /// The random atoms, in order of creation.
    pub fn random_atoms(&self) -> &[Atom] {
        &self.blocks[0]
    }

    /// The existential atoms, in order of creation.
    pub fn exist_atoms(&self) -> &[Atom] {
        &self.blocks[1]
    }

    /// The internal atoms, in order of creation.
    pub fn internal_atoms(&self) -> &[Atom] {
        &self.blocks[2]
    }

    /// Confirms the outermost block is random, as required for two-level stochastic solving.
    pub fn require_random_root(&self) -> Result<(), ErrorKind> {
        match self.blocks[0].is_empty() {
            true => Err(PrefixError::RootNotRandom.into()),
            false => Ok(()),
        }
    }
}
