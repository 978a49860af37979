//! # Layer 1: Skills
//!
//! A skill set decides, at compile time, which operators a wrapper exposes.
//!
//! - **Operators** (`op`): one marker per operator, identified by a Peano number.
//! - **Skills** (`markers`): user-facing capability markers and bundles.
//! - **Composition**: tuples of skills grant the union of their members.
//! - **Conversions** (`convert`): `ImplicitlyConvertibleTo<D>` lookup.
//!
//! ```text
//! NamedType<T, Tag, (Addable, Comparable)>
//!                     |
//!                     v
//!   Grants<op::Add>  = Or<Addable::Grants<op::Add>, Comparable::Grants<op::Add>>
//!                    = Or<Present, Absent> = Present
//! ```

pub mod convert;
pub mod markers;
pub mod op;

use crate::primitives::{Absent, Bool, IsTrue};
use op::Operator;

pub use convert::{ConvertsTo, ImplicitlyConvertibleTo};
pub use markers::*;

/// A set of capabilities attached to a wrapper type.
///
/// Implemented by every capability marker, by bundles, and by tuples of skill
/// sets. User code can declare its own bundle by forwarding to a tuple:
///
/// ```
/// use named_type::prelude::*;
/// use named_type::skill::op::Operator;
///
/// pub struct Money;
/// impl Skill for Money {
///     type Grants<Op: Operator> = <(Addable, Comparable, Printable) as Skill>::Grants<Op>;
/// }
///
/// assert!(named_type::grants::<Money, op::Add>());
/// assert!(!named_type::grants::<Money, op::Mul>());
/// ```
pub trait Skill {
    /// `Present` when this set grants `Op`.
    type Grants<Op: Operator>: Bool;
}

/// Holds when skill set `Self` grants operator `Op`.
///
/// Every optional operator impl on [`NamedType`](crate::NamedType) is gated
/// on this trait.
pub trait Require<Op> {}

impl<Set, Op> Require<Op> for Set
where
    Set: Skill,
    Op: Operator,
    Set::Grants<Op>: IsTrue<Set, Op>,
{
}

/// Whether skill set `Set` grants operator `Op`.
pub const fn grants<Set: Skill, Op: Operator>() -> bool {
    <Set::Grants<Op> as Bool>::VALUE
}

// =============================================================================
// Tuple composition
// =============================================================================

impl Skill for () {
    type Grants<Op: Operator> = Absent;
}

macro_rules! any_grants {
    ($op:ident; $S:ident) => {
        <$S as Skill>::Grants<$op>
    };
    ($op:ident; $S:ident, $($rest:ident),+) => {
        <<$S as Skill>::Grants<$op> as Bool>::Or<any_grants!($op; $($rest),+)>
    };
}

macro_rules! tuple_skill {
    ($($S:ident),+) => {
        impl<$($S: Skill),+> Skill for ($($S,)+) {
            type Grants<Op: Operator> = any_grants!(Op; $($S),+);
        }
    };
}

tuple_skill!(A);
tuple_skill!(A, B);
tuple_skill!(A, B, C);
tuple_skill!(A, B, C, D);
tuple_skill!(A, B, C, D, E);
tuple_skill!(A, B, C, D, E, F);
tuple_skill!(A, B, C, D, E, F, G);
tuple_skill!(A, B, C, D, E, F, G, H);
tuple_skill!(A, B, C, D, E, F, G, H, I);
tuple_skill!(A, B, C, D, E, F, G, H, I, J);
tuple_skill!(A, B, C, D, E, F, G, H, I, J, K);
tuple_skill!(A, B, C, D, E, F, G, H, I, J, K, L);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_grants_nothing() {
        assert!(!grants::<(), op::Add>());
        assert!(!grants::<(), op::Hash>());
        assert!(!grants::<(), op::Deref>());
    }

    #[test]
    fn tuples_grant_the_union() {
        type Set = (Addable, Comparable);
        assert!(grants::<Set, op::Add>());
        assert!(grants::<Set, op::AddAssign>());
        assert!(grants::<Set, op::Pos>());
        assert!(grants::<Set, op::Compare>());
        assert!(!grants::<Set, op::Sub>());
        assert!(!grants::<Set, op::Hash>());
    }

    #[test]
    fn nested_tuples_compose() {
        type Set = ((Hashable,), (Printable, (BitWiseAndable,)));
        assert!(grants::<Set, op::Hash>());
        assert!(grants::<Set, op::Print>());
        assert!(grants::<Set, op::BitAndAssign>());
        assert!(!grants::<Set, op::BitOr>());
    }
}
