/*!
Procedures of a solve.

The algorithm for determining satisfiability is factored into a collection of procedures, each extending the [context](crate::context) with methods:

- [bcp], boolean constraint propagation.
- [decision], choosing the value of some unvalued atom.
- [backjump], returning to a lower level of the trail.
- [analysis], deriving an asserting clause from a conflict.
- [assumptions], asserting assumptions and identifying those which made a formula unsatisfiable.
- [solve], the loop tying the above together.
*/

pub mod analysis;
pub mod assumptions;
pub mod backjump;
pub mod bcp;
pub mod decision;
pub mod solve;
