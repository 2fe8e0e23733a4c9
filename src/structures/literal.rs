/*!
Literals are atoms paired with a (boolean) polarity.

Or, rather, anything which has methods for returning an atom and a polarity (and a few other useful things).

The canonical implementation of the literal trait is given by the [IntLiteral] structure, which aliases a literal to an integer such that the absolute value of the integer is the atom of the literal, and the sign of the integer is the polarity of the literal.

# Examples

```rust
# use otter_ssat::structures::literal::{CLiteral, Literal};
let atom = 79;
let polarity = true;
let literal = CLiteral::new(atom, polarity);

assert!(literal.polarity());
assert_eq!(literal.atom(), 79);
assert_eq!(literal.negate(), -literal);
```
*/

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The literal in it's 'canonical' form.
    fn canonical(&self) -> CLiteral;

    /// The literal in it's integer form, with sign indicating polarity.
    fn as_int(&self) -> isize;
}

/// The representation of a literal as a signed integer.
pub type IntLiteral = i32;

/// The canonical implementation of a literal.
pub type CLiteral = IntLiteral;

impl Literal for IntLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as IntLiteral,
            false => -(atom as IntLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }

    fn canonical(&self) -> CLiteral {
        *self
    }

    fn as_int(&self) -> isize {
        *self as isize
    }
}
