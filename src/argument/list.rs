//! Heterogeneous lists used to reorder call arguments by type.
//!
//! ```text
//! (Last, First)  --into_list-->  HCons<Last, HCons<First, HNil>>
//!                --sculpt----->  HCons<First, HCons<Last, HNil>>   (indices inferred)
//!                --from_list-->  (First, Last)
//! ```

use crate::primitives::{S, Z};

/// Empty list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HNil;

/// Non-empty list: `head` followed by the list `tail`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HCons<H, T> {
    pub head: H,
    pub tail: T,
}

// =============================================================================
// Pluck: remove one element by type
// =============================================================================

/// Removes the element of type `Target` from the list.
///
/// `Index` is the element's position as a Peano number and is always
/// inferred. A list holding `Target` twice is ambiguous and fails to compile.
#[diagnostic::on_unimplemented(
    message = "`{Target}` is not among the supplied arguments",
    note = "every declared parameter must be passed exactly once"
)]
pub trait Pluck<Target, Index> {
    /// The list without the plucked element.
    type Remainder;

    fn pluck(self) -> (Target, Self::Remainder);
}

impl<Target, Tail> Pluck<Target, Z> for HCons<Target, Tail> {
    type Remainder = Tail;

    #[inline(always)]
    fn pluck(self) -> (Target, Tail) {
        (self.head, self.tail)
    }
}

impl<Head, Tail, Target, Index> Pluck<Target, S<Index>> for HCons<Head, Tail>
where
    Tail: Pluck<Target, Index>,
{
    type Remainder = HCons<Head, Tail::Remainder>;

    #[inline(always)]
    fn pluck(self) -> (Target, Self::Remainder) {
        let (target, tail) = self.tail.pluck();
        (target, HCons { head: self.head, tail })
    }
}

// =============================================================================
// Sculpt: reorder into a target list
// =============================================================================

/// Rearranges `Self` into the list type `Targets`, one pluck per element.
pub trait Sculpt<Targets, Indices> {
    /// Elements of `Self` not named by `Targets`.
    type Remainder;

    fn sculpt(self) -> (Targets, Self::Remainder);
}

impl<Source> Sculpt<HNil, HNil> for Source {
    type Remainder = Source;

    #[inline(always)]
    fn sculpt(self) -> (HNil, Source) {
        (HNil, self)
    }
}

impl<Source, Head, Tail, HeadIndex, TailIndices> Sculpt<HCons<Head, Tail>, HCons<HeadIndex, TailIndices>>
    for Source
where
    Source: Pluck<Head, HeadIndex>,
    <Source as Pluck<Head, HeadIndex>>::Remainder: Sculpt<Tail, TailIndices>,
{
    type Remainder = <<Source as Pluck<Head, HeadIndex>>::Remainder as Sculpt<Tail, TailIndices>>::Remainder;

    #[inline(always)]
    fn sculpt(self) -> (HCons<Head, Tail>, Self::Remainder) {
        let (head, rest) = self.pluck();
        let (tail, remainder) = rest.sculpt();
        (HCons { head, tail }, remainder)
    }
}

// =============================================================================
// Tuple <-> list
// =============================================================================

/// Tuples of arity 1 to 6, viewed as heterogeneous lists.
pub trait Tuple: Sized {
    type List;

    fn into_list(self) -> Self::List;

    fn from_list(list: Self::List) -> Self;
}

macro_rules! list_type {
    () => { HNil };
    ($Head:ident $(, $Tail:ident)*) => { HCons<$Head, list_type!($($Tail),*)> };
}

macro_rules! list_value {
    () => { HNil };
    ($head:ident $(, $tail:ident)*) => { HCons { head: $head, tail: list_value!($($tail),*) } };
}

macro_rules! tuple_list {
    ($($T:ident $v:ident),+) => {
        impl<$($T),+> Tuple for ($($T,)+) {
            type List = list_type!($($T),+);

            #[inline(always)]
            fn into_list(self) -> Self::List {
                let ($($v,)+) = self;
                list_value!($($v),+)
            }

            #[inline(always)]
            fn from_list(list: Self::List) -> Self {
                let list_value!($($v),+) = list;
                ($($v,)+)
            }
        }
    };
}

tuple_list!(A a);
tuple_list!(A a, B b);
tuple_list!(A a, B b, C c);
tuple_list!(A a, B b, C c, D d);
tuple_list!(A a, B b, C c, D d, E e);
tuple_list!(A a, B b, C c, D d, E e, F f);
