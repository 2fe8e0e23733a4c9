//! Generic structures, not specific to any part of a solve.

pub mod minimal_pcg;
