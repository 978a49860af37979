//! `ImplicitlyConvertibleTo<D>` and its lookup inside skill sets.
//!
//! The destination is an arbitrary type, so it cannot be matched through the
//! operator table. Instead `ConvertsTo<D, Index>` walks the (possibly nested)
//! skill tuple; `Index` records the path and is always inferred.

use core::marker::PhantomData;
use crate::primitives::{Absent, Z};
use crate::primitives::peano::{N0, N1, N2, N3, N4, N5, N6, N7, N8, N9, N10, N11};
use super::op::Operator;
use super::Skill;

/// Lets the wrapper convert into `D` with
/// [`convert`](crate::NamedType::convert) and
/// [`convert_into`](crate::NamedType::convert_into).
pub struct ImplicitlyConvertibleTo<D>(PhantomData<fn() -> D>);

impl<D> Skill for ImplicitlyConvertibleTo<D> {
    type Grants<Op: Operator> = Absent;
}

/// Holds when skill set `Self` contains `ImplicitlyConvertibleTo<D>`.
#[diagnostic::on_unimplemented(
    message = "skill set `{Self}` does not allow conversion into `{D}`",
    note = "add `ImplicitlyConvertibleTo<{D}>` to the wrapper's skill list"
)]
pub trait ConvertsTo<D, Index> {}

impl<D> ConvertsTo<D, Z> for ImplicitlyConvertibleTo<D> {}

macro_rules! tuple_converts {
    ($($S:ident),+) => {
        tuple_converts!(@each [$($S),+] [$($S),+] [N0 N1 N2 N3 N4 N5 N6 N7 N8 N9 N10 N11]);
    };
    (@each [$($All:ident),+] [] [$($pos:ident)*]) => {};
    (@each [$($All:ident),+] [$Cur:ident $(, $Rest:ident)*] [$pos:ident $($more:ident)*]) => {
        impl<Dest, Inner, $($All),+> ConvertsTo<Dest, ($pos, Inner)> for ($($All,)+)
        where
            $Cur: ConvertsTo<Dest, Inner>,
        {
        }

        tuple_converts!(@each [$($All),+] [$($Rest),*] [$($more)*]);
    };
}

tuple_converts!(A);
tuple_converts!(A, B);
tuple_converts!(A, B, C);
tuple_converts!(A, B, C, D);
tuple_converts!(A, B, C, D, E);
tuple_converts!(A, B, C, D, E, F);
tuple_converts!(A, B, C, D, E, F, G);
tuple_converts!(A, B, C, D, E, F, G, H);
tuple_converts!(A, B, C, D, E, F, G, H, I);
tuple_converts!(A, B, C, D, E, F, G, H, I, J);
tuple_converts!(A, B, C, D, E, F, G, H, I, J, K);
tuple_converts!(A, B, C, D, E, F, G, H, I, J, K, L);
