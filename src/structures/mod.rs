/*!
The abstract elements of a solve and their representation.

- [atoms](atom), things to which a boolean value may be assigned.
- [literals](literal), atoms paired with a polarity.
- [clauses](clause), disjunctions of literals.
- [valuations](valuation), partial functions from atoms to values.
- [consequences](consequence), atom-value binds together with their sources.
- [prefixes](prefix), the quantification of atoms as random, existential, or internal.
*/

pub mod atom;
pub mod clause;
pub mod consequence;
pub mod literal;
pub mod prefix;
pub mod valuation;
