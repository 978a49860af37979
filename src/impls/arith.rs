//! Arithmetic operators.

use super::{binary_operator, unary_operator};
use crate::NamedType;
use crate::skill::{Require, op};

binary_operator!(Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem);

unary_operator!(Neg::neg);

impl<T, Tag, S> NamedType<T, Tag, S> {
    /// Unary plus. Rust has no `+a`, so this is a copy of the wrapper.
    #[inline]
    pub fn pos(&self) -> Self
    where
        T: Clone,
        S: Require<op::Pos>,
    {
        self.clone()
    }
}
