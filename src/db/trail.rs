//! The trail of assignments.
//!
//! All assignments made, with each assignment distinguished by the level at which it was made.
//!
//! The first level (level zero) contains proven literals, and each level greater than zero begins with either an assumption or a decision.
//! Every following assignment on the level is a consequence of boolean constraint propagation.
//!
//! The trail doubles as the propagation queue: assignments at or beyond [q_head](Trail::q_head) have not yet had their consequences examined.

use crate::{db::LevelIndex, structures::consequence::Assignment};

/// A structure to hold the trail.
#[derive(Default)]
pub struct Trail {
    /// Each assignment made, in order from first to last.
    pub assignments: Vec<Assignment>,

    /// Indices to the initial assignment of each level (level zero excluded).
    pub level_indices: Vec<usize>,

    /// The index of the first assignment whose consequences have not been examined.
    pub q_head: usize,
}

impl Trail {
    /// Writes an assignment to the top level.
    pub fn write_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Opens a fresh level, whose assignments begin with the next assignment made.
    pub fn push_fresh_level(&mut self) {
        self.level_indices.push(self.assignments.len());
    }

    /// The current level.
    pub fn level(&self) -> LevelIndex {
        self.level_indices.len()
    }

    /// Returns true if some level above level zero exists, false otherwise.
    pub fn level_is_made(&self) -> bool {
        !self.level_indices.is_empty()
    }

    /// The index at which assignments above level zero begin.
    pub fn level_zero_length(&self) -> usize {
        match self.level_indices.first() {
            Some(&index) => index,
            None => self.assignments.len(),
        }
    }

    /// Removes levels above (and excluding) `level`, returning the removed assignments.
    ///
    /// # Soundness
    /// Does not clear the *valuation* of the removed assignments.
    pub fn clear_assignments_above(&mut self, level: LevelIndex) -> Vec<Assignment> {
        if let Some(&level_start) = self.level_indices.get(level) {
            self.level_indices.truncate(level);
            let removed = self.assignments.split_off(level_start);
            self.q_head = std::cmp::min(self.q_head, self.assignments.len());
            removed
        } else {
            Vec::default()
        }
    }

    /// The next queued assignment, if any, advancing the queue head.
    pub fn next_queued(&mut self) -> Option<Assignment> {
        match self.assignments.get(self.q_head) {
            Some(assignment) => {
                self.q_head += 1;
                Some(*assignment)
            }
            None => None,
        }
    }
}
