/*!
The context --- to which formulas are added and within which solves take place.

Strictly, a [GenericContext] and a [Context].

The generic context is designed to be generic over various parameters.
Though, for the moment this is limited to the source of randomness.

# Example

```rust
# use otter_ssat::context::Context;
# use otter_ssat::config::Config;
# use otter_ssat::reports::Report;
# use otter_ssat::structures::literal::{CLiteral, Literal};
let mut ctx = Context::from_config(Config::default());

let p = ctx.fresh_atom().expect("atom");
let q = ctx.fresh_atom().expect("atom");

let p_q_clause = vec![CLiteral::new(p, true), CLiteral::new(q, true)];
assert!(ctx.add_clause(p_q_clause).is_ok());

let not_p = CLiteral::new(p, false);
assert!(ctx.add_clause(not_p).is_ok());

assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

assert_eq!(ctx.value_of(p), Some(false));
assert_eq!(ctx.value_of(q), Some(true));
```
*/

mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;

/// The state of a context.
#[derive(Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows input.
    Input,

    /// The formula is consistent with the valuation of the last solve.
    Satisfiable,

    /// The formula is inconsistent with the assumptions of the last solve.
    AssumptionsUnsatisfiable,

    /// The formula is inconsistent, regardless of assumptions.
    Unsatisfiable,

    /// The consistency of the formula is unknown.
    Solving,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::AssumptionsUnsatisfiable => write!(f, "AssumptionsUnsatisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Solving => write!(f, "Solving"),
        }
    }
}
