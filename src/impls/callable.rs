//! Passing the wrapper where the underlying type is expected.
//!
//! - `FunctionCallable`: `AsRef<T>` / `AsMut<T>`, for free functions taking `&T`.
//! - `MethodCallable`: `Deref` / `DerefMut`, for calling `T`'s methods.
//!
//! Neither copies the value.

use core::ops::{Deref, DerefMut};

use crate::NamedType;
use crate::skill::{Require, op};

impl<T, Tag, S> AsRef<T> for NamedType<T, Tag, S>
where
    S: Require<op::AsUnderlying>,
{
    #[inline(always)]
    fn as_ref(&self) -> &T {
        self.get()
    }
}

impl<T, Tag, S> AsMut<T> for NamedType<T, Tag, S>
where
    S: Require<op::AsUnderlying>,
{
    #[inline(always)]
    fn as_mut(&mut self) -> &mut T {
        self.get_mut()
    }
}

impl<T, Tag, S> Deref for NamedType<T, Tag, S>
where
    S: Require<op::Deref>,
{
    type Target = T;

    #[inline(always)]
    fn deref(&self) -> &T {
        self.get()
    }
}

impl<T, Tag, S> DerefMut for NamedType<T, Tag, S>
where
    S: Require<op::Deref>,
{
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut T {
        self.get_mut()
    }
}
