//! Backjumping, aka. returning the context to a lower level of the trail.
//!
//! Assignments above the target level are removed from the trail and their values cleared, with each cleared value kept as a phase hint for a later [decision](crate::procedures::decision).

use crate::{context::GenericContext, db::LevelIndex, misc::log::targets};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Returns the context to `level`, clearing the valuation of any assignment made above `level`.
    pub fn backjump(&mut self, level: LevelIndex) {
        log::trace!(target: targets::BACKJUMP, "Backjump from {} to {level}", self.trail.level());

        // The queue head is settled by the trail: every assignment kept was examined before the first removed level was opened.
        let removed = self.trail.clear_assignments_above(level);
        for assignment in &removed {
            self.atom_db.clear_value(assignment.atom());
        }
    }
}
