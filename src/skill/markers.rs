//! Capability markers.
//!
//! Each marker is a zero-sized type granting a fixed list of operators.
//! Bundles forward to a tuple of markers.

use crate::primitives::{Bool, Peano};
use super::op::{self, Operator};
use super::Skill;

/// Builds `Present` when the queried operator is one of the listed ones.
macro_rules! matches_any {
    ($query:ident; $op:ident) => {
        <<$query as Operator>::Id as Peano>::Eq<<op::$op as Operator>::Id>
    };
    ($query:ident; $op:ident, $($rest:ident),+) => {
        <matches_any!($query; $op) as Bool>::Or<matches_any!($query; $($rest),+)>
    };
}

macro_rules! skills {
    ($($(#[$meta:meta])* $name:ident => [$($op:ident),+];)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $name;

            impl Skill for $name {
                type Grants<Query: Operator> = matches_any!(Query; $($op),+);
            }
        )*
    };
}

macro_rules! bundles {
    ($($(#[$meta:meta])* $name:ident => ($($part:ty),+);)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $name;

            impl Skill for $name {
                type Grants<Query: Operator> = <($($part,)+) as Skill>::Grants<Query>;
            }
        )*
    };
}

skills! {
    /// `a += b`.
    Incrementable => [AddAssign];
    /// `a -= b`.
    Decrementable => [SubAssign];
    /// `a.pre_increment()`: adds one in place, returns the wrapper.
    PreIncrementable => [PreIncrement];
    /// `a.post_increment()`: adds one in place, returns the previous value.
    PostIncrementable => [PostIncrement];
    /// `a.pre_decrement()`.
    PreDecrementable => [PreDecrement];
    /// `a.post_decrement()`.
    PostDecrementable => [PostDecrement];

    /// `a + b` and `a += b`.
    BinaryAddable => [Add, AddAssign];
    /// `a.pos()`.
    UnaryAddable => [Pos];
    /// `a - b` and `a -= b`.
    BinarySubtractable => [Sub, SubAssign];
    /// `-a`.
    UnarySubtractable => [Neg];
    /// `a * b` and `a *= b`.
    Multiplicable => [Mul, MulAssign];
    /// `a / b` and `a /= b`.
    Divisible => [Div, DivAssign];
    /// `a % b` and `a %= b`.
    Modulable => [Rem, RemAssign];
    /// `-a`.
    Negatable => [Neg];

    /// `!a`.
    BitWiseInvertable => [Not];
    /// `a & b` and `a &= b`.
    BitWiseAndable => [BitAnd, BitAndAssign];
    /// `a | b` and `a |= b`.
    BitWiseOrable => [BitOr, BitOrAssign];
    /// `a ^ b` and `a ^= b`.
    BitWiseXorable => [BitXor, BitXorAssign];
    /// `a << b` and `a <<= b`.
    BitWiseLeftShiftable => [Shl, ShlAssign];
    /// `a >> b` and `a >>= b`.
    BitWiseRightShiftable => [Shr, ShrAssign];

    /// Equality and ordering, all derived from the underlying `<`.
    Comparable => [Compare];
    /// `Display` through the underlying value's formatting.
    Printable => [Print];
    /// Makes the wrapper hashable with the underlying value's hash.
    ///
    /// Without it the wrapper does not implement `Hash` and cannot key a
    /// hashed container.
    Hashable => [Hash];

    /// Borrow the wrapper as the underlying type (`AsRef` / `AsMut`).
    FunctionCallable => [AsUnderlying];
    /// Call the underlying type's methods on the wrapper (`Deref` / `DerefMut`).
    MethodCallable => [Deref];
}

bundles! {
    /// `BinaryAddable` + `UnaryAddable`.
    Addable => (BinaryAddable, UnaryAddable);
    /// `BinarySubtractable` + `UnarySubtractable`.
    Subtractable => (BinarySubtractable, UnarySubtractable);
    /// `FunctionCallable` + `MethodCallable`.
    Callable => (FunctionCallable, MethodCallable);
    /// Everything a number needs.
    Arithmetic => (
        (Incrementable, Decrementable),
        (PreIncrementable, PostIncrementable, PreDecrementable, PostDecrementable),
        Addable,
        Subtractable,
        Multiplicable,
        Divisible,
        Negatable,
        Comparable,
        Printable,
        Hashable
    );
}
