//! Conversion into the types listed by `ImplicitlyConvertibleTo<D>`.
//!
//! Conversion is never implicit here: the destination is inferred from the
//! call site and checked against the skill set.

use crate::NamedType;
use crate::skill::ConvertsTo;

impl<T, Tag, S> NamedType<T, Tag, S> {
    /// Produces a `D` from a copy of the underlying value.
    ///
    /// ```
    /// use named_type::prelude::*;
    ///
    /// enum FeetTag {}
    /// type Feet = NamedType<u32, FeetTag, ImplicitlyConvertibleTo<u64>>;
    ///
    /// let span: u64 = Feet::new(12).convert();
    /// assert_eq!(span, 12);
    /// ```
    ///
    /// Destinations outside the skill set are rejected:
    ///
    /// ```compile_fail
    /// use named_type::prelude::*;
    ///
    /// enum FeetTag {}
    /// type Feet = NamedType<u32, FeetTag, ImplicitlyConvertibleTo<u64>>;
    ///
    /// let span: i64 = Feet::new(12).convert();
    /// ```
    #[inline]
    pub fn convert<D, Index>(&self) -> D
    where
        S: ConvertsTo<D, Index>,
        T: Clone + Into<D>,
    {
        self.get().clone().into()
    }

    /// Like [`convert`](Self::convert), consuming the wrapper.
    #[inline]
    pub fn convert_into<D, Index>(self) -> D
    where
        S: ConvertsTo<D, Index>,
        T: Into<D>,
    {
        self.into_inner().into()
    }
}
