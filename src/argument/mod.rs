//! # Layer 4: Named arguments
//!
//! - [`Argument<W>`]: a token that builds a `W` from its underlying value, so
//!   a call site reads `FirstName::argument().assign("James")`.
//! - [`make_named_arg_function`]: adapts a function so its wrapper-typed
//!   arguments may be passed in any order ([`AnyOrder`]).

mod any_order;
pub mod list;

use core::fmt;
use core::marker::PhantomData;

use crate::StrongType;

pub use any_order::{AnyOrder, Invoke, make_named_arg_function};

/// Named-argument token for wrapper `W`.
///
/// Deliberately neither `Clone` nor `Copy`: it is spelled at the call site,
/// usually through a `const` or [`NamedType::argument`](crate::NamedType::argument).
///
/// ```
/// use named_type::prelude::*;
///
/// enum PortTag {}
/// type Port = NamedType<u16, PortTag, Comparable>;
/// const PORT: Argument<Port> = Argument::new();
///
/// assert!(PORT.assign(8080u16) == Port::new(8080));
/// assert!(PORT.assign(80u8) == Port::new(80));
/// ```
pub struct Argument<W>(PhantomData<fn() -> W>);

impl<W> Argument<W> {
    #[inline(always)]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<W: StrongType> Argument<W> {
    /// Wraps `value` (or anything convertible into the underlying type).
    #[inline(always)]
    pub fn assign<U>(&self, value: U) -> W
    where
        U: Into<W::Underlying>,
    {
        W::from_underlying(value.into())
    }
}

impl<W> Default for Argument<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> fmt::Debug for Argument<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Argument<{}>", core::any::type_name::<W>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NamedType;

    enum FirstNameTag {}
    enum LastNameTag {}
    type FirstName = NamedType<String, FirstNameTag>;
    type LastName = NamedType<String, LastNameTag>;

    const FIRST_NAME: Argument<FirstName> = Argument::new();
    const LAST_NAME: Argument<LastName> = Argument::new();

    fn concatenate(first: FirstName, last: LastName) -> String {
        first.into_inner() + last.get()
    }

    #[test]
    fn assign_builds_the_wrapper() {
        let first = FIRST_NAME.assign("James");
        assert_eq!(first.get(), "James");
        let last = LastName::argument().assign(String::from("Bond"));
        assert_eq!(last.get(), "Bond");
    }

    #[test]
    fn named_arguments_in_either_order() {
        let concatenate = make_named_arg_function::<(FirstName, LastName), _>(concatenate);
        assert_eq!(
            concatenate.call((FIRST_NAME.assign("James"), LAST_NAME.assign("Bond"))),
            "JamesBond"
        );
        assert_eq!(
            concatenate.call((LAST_NAME.assign("Bond"), FIRST_NAME.assign("James"))),
            "JamesBond"
        );
    }

    #[test]
    fn argument_tokens_take_no_room() {
        assert_eq!(core::mem::size_of::<Argument<FirstName>>(), 0);
    }
}
