/*!
Choosing the value of some unvalued atom.

The decision procedure is deliberately simple: the first unvalued atom, in atom order, is chosen.

The *value* decided for the atom is taken from the phase hint left when the value of the atom was last cleared, if [phase saving](crate::config::Config::phase_saving) is enabled, and is otherwise sampled with the configured [polarity lean](crate::config::Config::polarity_lean).
As the context's source of randomness is seeded, decisions --- and so whole solves --- are deterministic.
*/

use crate::{
    context::GenericContext,
    structures::literal::{CLiteral, Literal},
};

/// Possible 'Ok' results of asking for a decision.
pub enum DecisionOk {
    /// A decision was made.
    Literal(CLiteral),

    /// Every atom has some value.
    Exhausted,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// The next decision to make, if some atom lacks a value.
    pub fn make_decision(&mut self) -> DecisionOk {
        match self.atom_db.first_unvalued() {
            Some(atom) => {
                let hint = match self.config.phase_saving {
                    true => self.atom_db.previous_value_of(atom),
                    false => None,
                };
                let value = match hint {
                    Some(previous) => previous,
                    None => self.rng.random_bool(self.config.polarity_lean),
                };
                DecisionOk::Literal(CLiteral::new(atom, value))
            }
            None => DecisionOk::Exhausted,
        }
    }
}
