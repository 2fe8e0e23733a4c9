/*!
(The internal representation of) an atom (aka. a 'variable').

Each atom is a u32 *u* such that either:
- *u* is 0, or:
- *u - 1* is an atom.

In other words, the atoms of a context are [0..*m*) for some *m*, with the atom 0 reserved.
This representation allows atoms to be used as the indicies of a structure, e.g. a [valuation](crate::structures::valuation), without taking too much space.

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
- The quantification of an atom (random, existential, internal) is not part of the atom itself, and is instead recorded in a [prefix](crate::structures::prefix).
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The atom `0` is fixed internally with a value of true.
pub static TOP_ATOM: Atom = 0;

/// The maximum instance of an atom, bound to allow representation of any literal as a signed integer.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
