//! Operator markers.
//!
//! One zero-sized marker per operator the wrapper can expose. Each carries a
//! unique Peano identifier; skill sets are queried with these markers through
//! [`Skill::Grants`](super::Skill::Grants).

use crate::primitives::Peano;
use crate::primitives::peano::{
    N0, N1, N2, N3, N4, N5, N6, N7, N8, N9, N10, N11, N12, N13, N14, N15,
    N16, N17, N18, N19, N20, N21, N22, N23, N24, N25, N26, N27, N28, N29, N30, N31,
};

/// An operator of the wrapper's optional surface.
pub trait Operator: 'static {
    /// Identifier compared against the operators a skill grants.
    type Id: Peano;
}

macro_rules! operators {
    ($($(#[$meta:meta])* $name:ident = $id:ident;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug)]
            pub struct $name;

            impl Operator for $name {
                type Id = $id;
            }
        )*
    };
}

operators! {
    /// `a + b`
    Add = N0;
    /// `a += b`
    AddAssign = N1;
    /// `a.pos()`, the unary plus
    Pos = N2;
    /// `a - b`
    Sub = N3;
    /// `a -= b`
    SubAssign = N4;
    /// `-a`
    Neg = N5;
    /// `a * b`
    Mul = N6;
    /// `a *= b`
    MulAssign = N7;
    /// `a / b`
    Div = N8;
    /// `a /= b`
    DivAssign = N9;
    /// `a % b`
    Rem = N10;
    /// `a %= b`
    RemAssign = N11;
    /// `!a`, bitwise inversion
    Not = N12;
    /// `a & b`
    BitAnd = N13;
    /// `a &= b`
    BitAndAssign = N14;
    /// `a | b`
    BitOr = N15;
    /// `a |= b`
    BitOrAssign = N16;
    /// `a ^ b`
    BitXor = N17;
    /// `a ^= b`
    BitXorAssign = N18;
    /// `a << b`
    Shl = N19;
    /// `a <<= b`
    ShlAssign = N20;
    /// `a >> b`
    Shr = N21;
    /// `a >>= b`
    ShrAssign = N22;
    /// `a.pre_increment()`
    PreIncrement = N23;
    /// `a.post_increment()`
    PostIncrement = N24;
    /// `a.pre_decrement()`
    PreDecrement = N25;
    /// `a.post_decrement()`
    PostDecrement = N26;
    /// `==`, `<`, `>=`, ... and `Ord`
    Compare = N27;
    /// `Display` and `print`
    Print = N28;
    /// `core::hash::Hash`
    Hash = N29;
    /// `AsRef` / `AsMut` to the underlying value
    AsUnderlying = N30;
    /// `Deref` / `DerefMut` to the underlying value
    Deref = N31;
}
