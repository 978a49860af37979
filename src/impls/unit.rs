//! Increment and decrement by one.
//!
//! Rust has no `++`/`--`; the pre/post forms are methods. The unit comes from
//! [`num_traits::One`].

use core::ops::{AddAssign, SubAssign};

use num_traits::One;

use crate::NamedType;
use crate::skill::{Require, op};

impl<T, Tag, S> NamedType<T, Tag, S> {
    /// Adds one in place and returns the updated wrapper.
    #[inline]
    pub fn pre_increment(&mut self) -> &mut Self
    where
        T: One + AddAssign,
        S: Require<op::PreIncrement>,
    {
        *self.get_mut() += T::one();
        self
    }

    /// Adds one in place and returns the value held before.
    #[inline]
    pub fn post_increment(&mut self) -> Self
    where
        T: One + AddAssign + Clone,
        S: Require<op::PostIncrement>,
    {
        let previous = Self::new(self.get().clone());
        *self.get_mut() += T::one();
        previous
    }

    /// Subtracts one in place and returns the updated wrapper.
    #[inline]
    pub fn pre_decrement(&mut self) -> &mut Self
    where
        T: One + SubAssign,
        S: Require<op::PreDecrement>,
    {
        *self.get_mut() -= T::one();
        self
    }

    /// Subtracts one in place and returns the value held before.
    #[inline]
    pub fn post_decrement(&mut self) -> Self
    where
        T: One + SubAssign + Clone,
        S: Require<op::PostDecrement>,
    {
        let previous = Self::new(self.get().clone());
        *self.get_mut() -= T::one();
        previous
    }
}
