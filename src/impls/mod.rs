//! # Layer 3: Operator surface
//!
//! Std operator and trait impls for [`NamedType`](crate::NamedType). Every
//! impl here carries two bounds: one on the underlying type (it must support
//! the operation) and one on the skill set (`S: Require<op::X>`). Both are
//! only checked where the operator is used, so a skill that makes no sense for
//! some `T` only fails for the wrappers that actually call it.

mod arith;
mod bitwise;
mod callable;
mod compare;
mod convert;
mod hash;
mod print;
mod unit;

/// Implements a binary operator, its by-reference form and its compound
/// assignment, each gated on its own operator marker.
macro_rules! binary_operator {
    ($($Trait:ident :: $method:ident),* $(,)?) => {
        ::paste::paste! {
            $(
                impl<T, Tag, S> core::ops::$Trait for $crate::NamedType<T, Tag, S>
                where
                    T: core::ops::$Trait<Output = T>,
                    S: $crate::skill::Require<$crate::skill::op::$Trait>,
                {
                    type Output = Self;

                    #[inline]
                    fn $method(self, other: Self) -> Self {
                        Self::new(core::ops::$Trait::$method(self.into_inner(), other.into_inner()))
                    }
                }

                impl<'a, T, Tag, S> core::ops::$Trait<&'a $crate::NamedType<T, Tag, S>>
                    for &'a $crate::NamedType<T, Tag, S>
                where
                    &'a T: core::ops::$Trait<&'a T, Output = T>,
                    S: $crate::skill::Require<$crate::skill::op::$Trait>,
                {
                    type Output = $crate::NamedType<T, Tag, S>;

                    #[inline]
                    fn $method(self, other: Self) -> Self::Output {
                        $crate::NamedType::new(core::ops::$Trait::$method(self.get(), other.get()))
                    }
                }

                impl<T, Tag, S> core::ops::[<$Trait Assign>] for $crate::NamedType<T, Tag, S>
                where
                    T: core::ops::[<$Trait Assign>],
                    S: $crate::skill::Require<$crate::skill::op::[<$Trait Assign>]>,
                {
                    #[inline]
                    fn [<$method _assign>](&mut self, other: Self) {
                        core::ops::[<$Trait Assign>]::[<$method _assign>](self.get_mut(), other.into_inner());
                    }
                }
            )*
        }
    };
}

/// Implements a unary operator by value and by reference.
macro_rules! unary_operator {
    ($($Trait:ident :: $method:ident),* $(,)?) => {
        $(
            impl<T, Tag, S> core::ops::$Trait for $crate::NamedType<T, Tag, S>
            where
                T: core::ops::$Trait<Output = T>,
                S: $crate::skill::Require<$crate::skill::op::$Trait>,
            {
                type Output = Self;

                #[inline]
                fn $method(self) -> Self {
                    Self::new(core::ops::$Trait::$method(self.into_inner()))
                }
            }

            impl<'a, T, Tag, S> core::ops::$Trait for &'a $crate::NamedType<T, Tag, S>
            where
                &'a T: core::ops::$Trait<Output = T>,
                S: $crate::skill::Require<$crate::skill::op::$Trait>,
            {
                type Output = $crate::NamedType<T, Tag, S>;

                #[inline]
                fn $method(self) -> Self::Output {
                    $crate::NamedType::new(core::ops::$Trait::$method(self.get()))
                }
            }
        )*
    };
}

pub(crate) use binary_operator;
pub(crate) use unary_operator;
