//! Equality and ordering.
//!
//! Everything is derived from the underlying `<`: `a == b` means neither
//! `a < b` nor `b < a`. `T`'s own `==` is never called, so the ordering and
//! the equality of the wrapper can not disagree.

use core::cmp::Ordering;

use crate::NamedType;
use crate::skill::{Require, op};

impl<T, Tag, S> NamedType<T, Tag, S>
where
    T: PartialOrd,
{
    #[inline]
    fn ordering(&self, other: &Self) -> Ordering {
        if self.get() < other.get() {
            Ordering::Less
        } else if other.get() < self.get() {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl<T, Tag, S> PartialEq for NamedType<T, Tag, S>
where
    T: PartialOrd,
    S: Require<op::Compare>,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ordering(other) == Ordering::Equal
    }
}

impl<T, Tag, S> PartialOrd for NamedType<T, Tag, S>
where
    T: PartialOrd,
    S: Require<op::Compare>,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.ordering(other))
    }

    #[inline]
    fn lt(&self, other: &Self) -> bool {
        self.get() < other.get()
    }

    #[inline]
    fn gt(&self, other: &Self) -> bool {
        other.get() < self.get()
    }

    #[inline]
    fn le(&self, other: &Self) -> bool {
        !self.gt(other)
    }

    #[inline]
    fn ge(&self, other: &Self) -> bool {
        !self.lt(other)
    }
}

impl<T, Tag, S> Eq for NamedType<T, Tag, S>
where
    T: Ord,
    S: Require<op::Compare>,
{
}

impl<T, Tag, S> Ord for NamedType<T, Tag, S>
where
    T: Ord,
    S: Require<op::Compare>,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordering(other)
    }
}
