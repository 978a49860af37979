//! Peano naturals with type-level equality.
//!
//! Used for two things: the identifiers of operator markers (compared with
//! `Peano::Eq`) and the inferred positions produced when plucking values out
//! of heterogeneous lists.

use core::marker::PhantomData;
use super::bool::{Absent, Bool, Present};

/// Zero.
#[derive(Debug)]
pub struct Z;

/// Successor.
#[derive(Debug)]
pub struct S<N>(PhantomData<N>);

/// Type-level natural number.
pub trait Peano: 'static {
    const VALUE: usize;

    /// `Present` for `Z`, `Absent` otherwise.
    type IsZero: Bool;

    /// Predecessor, saturating at `Z`.
    type Pred: Peano;

    /// Structural equality with another natural.
    type Eq<Other: Peano>: Bool;
}

impl Peano for Z {
    const VALUE: usize = 0;
    type IsZero = Present;
    type Pred = Z;
    type Eq<Other: Peano> = Other::IsZero;
}

impl<N: Peano> Peano for S<N> {
    const VALUE: usize = N::VALUE + 1;
    type IsZero = Absent;
    type Pred = N;
    type Eq<Other: Peano> = <Other::IsZero as Bool>::Elif<Absent, N::Eq<Other::Pred>>;
}

macro_rules! peano_chain {
    ($prev:ident) => {};
    ($prev:ident, $next:ident $(, $rest:ident)*) => {
        pub type $next = S<$prev>;
        peano_chain!($next $(, $rest)*);
    };
}

pub type N0 = Z;

peano_chain!(
    N0, N1, N2, N3, N4, N5, N6, N7, N8, N9, N10, N11, N12, N13, N14, N15,
    N16, N17, N18, N19, N20, N21, N22, N23, N24, N25, N26, N27, N28, N29, N30, N31
);
