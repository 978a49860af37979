//! Calling a function with its wrapper-typed arguments in any order.

use core::marker::PhantomData;

use super::list::{HNil, Sculpt, Tuple};

/// A function callable with the tuple of arguments `Params`.
pub trait Invoke<Params> {
    type Output;

    fn invoke(&self, params: Params) -> Self::Output;
}

macro_rules! invoke_fn {
    ($($T:ident $v:ident),+) => {
        impl<Func, Out, $($T),+> Invoke<($($T,)+)> for Func
        where
            Func: Fn($($T),+) -> Out,
        {
            type Output = Out;

            #[inline(always)]
            fn invoke(&self, ($($v,)+): ($($T,)+)) -> Out {
                self($($v),+)
            }
        }
    };
}

invoke_fn!(A a);
invoke_fn!(A a, B b);
invoke_fn!(A a, B b, C c);
invoke_fn!(A a, B b, C c, D d);
invoke_fn!(A a, B b, C c, D d, E e);
invoke_fn!(A a, B b, C c, D d, E e, F f);

/// `function` with its parameters declared as the tuple `Params`.
///
/// Built by [`make_named_arg_function`].
pub struct AnyOrder<Func, Params> {
    function: Func,
    _params: PhantomData<fn(Params)>,
}

impl<Func, Params> AnyOrder<Func, Params>
where
    Params: Tuple,
    Func: Invoke<Params>,
{
    /// Calls the function with `args`, a permutation of `Params`.
    ///
    /// Missing, repeated or extra arguments are compile errors.
    #[inline]
    pub fn call<Args, Indices>(&self, args: Args) -> Func::Output
    where
        Args: Tuple,
        Args::List: Sculpt<Params::List, Indices, Remainder = HNil>,
    {
        let (ordered, HNil) = args.into_list().sculpt();
        self.function.invoke(Params::from_list(ordered))
    }

    /// The wrapped function, callable in declared order.
    pub fn function(&self) -> &Func {
        &self.function
    }
}

/// Wraps `function` so it accepts its parameters in any order.
///
/// `Params` lists the parameter types in declared order; they must be
/// distinct types, which wrapper types with distinct tags are.
///
/// ```
/// use named_type::prelude::*;
///
/// enum FirstNameTag {}
/// enum LastNameTag {}
/// type FirstName = NamedType<String, FirstNameTag>;
/// type LastName = NamedType<String, LastNameTag>;
///
/// fn display_name(first: FirstName, last: LastName) -> String {
///     first.into_inner() + " " + last.get()
/// }
///
/// let display = make_named_arg_function::<(FirstName, LastName), _>(display_name);
/// let name = display.call((LastName::argument().assign("Bond"), FirstName::argument().assign("James")));
/// assert_eq!(name, "James Bond");
/// ```
///
/// A missing argument does not compile:
///
/// ```compile_fail
/// use named_type::prelude::*;
///
/// enum FirstNameTag {}
/// enum LastNameTag {}
/// type FirstName = NamedType<String, FirstNameTag>;
/// type LastName = NamedType<String, LastNameTag>;
///
/// fn display_name(first: FirstName, last: LastName) -> String {
///     first.into_inner() + last.get()
/// }
///
/// let display = make_named_arg_function::<(FirstName, LastName), _>(display_name);
/// display.call((LastName::new("Bond".into()),));
/// ```
///
/// Neither does an argument the function does not take:
///
/// ```compile_fail
/// use named_type::prelude::*;
///
/// enum FirstNameTag {}
/// enum LastNameTag {}
/// enum TitleTag {}
/// type FirstName = NamedType<String, FirstNameTag>;
/// type LastName = NamedType<String, LastNameTag>;
/// type Title = NamedType<String, TitleTag>;
///
/// fn display_name(first: FirstName, last: LastName) -> String {
///     first.into_inner() + last.get()
/// }
///
/// let display = make_named_arg_function::<(FirstName, LastName), _>(display_name);
/// display.call((
///     FirstName::new("James".into()),
///     LastName::new("Bond".into()),
///     Title::new("Commander".into()),
/// ));
/// ```
#[inline]
pub fn make_named_arg_function<Params, Func>(function: Func) -> AnyOrder<Func, Params>
where
    Params: Tuple,
    Func: Invoke<Params>,
{
    AnyOrder {
        function,
        _params: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NamedType;

    enum XTag {}
    enum YTag {}
    enum ZTag {}
    type X = NamedType<i32, XTag>;
    type Y = NamedType<i32, YTag>;
    type Z = NamedType<i32, ZTag>;

    fn weigh(x: X, y: Y, z: Z) -> i32 {
        100 * x.get() + 10 * y.get() + z.get()
    }

    #[test]
    fn every_permutation_gives_the_same_result() {
        let weigh = make_named_arg_function::<(X, Y, Z), _>(weigh);
        let (x, y, z) = (X::new(1), Y::new(2), Z::new(3));
        assert_eq!(weigh.call((x, y, z)), 123);
        assert_eq!(weigh.call((x, z, y)), 123);
        assert_eq!(weigh.call((y, x, z)), 123);
        assert_eq!(weigh.call((y, z, x)), 123);
        assert_eq!(weigh.call((z, x, y)), 123);
        assert_eq!(weigh.call((z, y, x)), 123);
        assert_eq!((weigh.function())(x, y, z), 123);
    }

    #[test]
    fn single_parameter() {
        let double = make_named_arg_function::<(X,), _>(|x: X| x.get() * 2);
        assert_eq!(double.call((X::new(21),)), 42);
    }

    #[test]
    fn closures_capture_their_environment() {
        let offset = 1000;
        let shifted = make_named_arg_function::<(X, Y), _>(move |x: X, y: Y| offset + x.get() - y.get());
        assert_eq!(shifted.call((Y::new(1), X::new(5))), 1004);
    }
}
