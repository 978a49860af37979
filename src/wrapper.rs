//! # Layer 2: The strong wrapper
//!
//! `NamedType<T, Tag, S>` holds exactly one `T`. `Tag` makes the type
//! nominal, `S` selects the optional operator surface (see [`crate::skill`]).
//! Neither takes any room: the wrapper is `#[repr(transparent)]` over `T`.

use core::fmt;
use core::marker::PhantomData;

use crate::argument::Argument;

/// A value of type `T`, distinct from every other wrapper around `T`.
///
/// ```
/// use named_type::prelude::*;
///
/// enum WidthTag {}
/// enum HeightTag {}
/// type Width = NamedType<f64, WidthTag>;
/// type Height = NamedType<f64, HeightTag>;
///
/// fn area(width: Width, height: Height) -> f64 {
///     width.get() * height.get()
/// }
///
/// assert_eq!(area(Width::new(2.0), Height::new(3.0)), 6.0);
/// ```
///
/// Swapping the arguments does not compile:
///
/// ```compile_fail
/// # use named_type::prelude::*;
/// # enum WidthTag {}
/// # enum HeightTag {}
/// # type Width = NamedType<f64, WidthTag>;
/// # type Height = NamedType<f64, HeightTag>;
/// # fn area(width: Width, height: Height) -> f64 { width.get() * height.get() }
/// area(Height::new(3.0), Width::new(2.0));
/// ```
#[repr(transparent)]
pub struct NamedType<T, Tag, S = ()> {
    value: T,
    _marker: PhantomData<fn() -> (Tag, S)>,
}

impl<T, Tag, S> NamedType<T, Tag, S> {
    /// Wraps `value`. There is no `From<T>`: wrapping is always spelled out.
    ///
    /// ```compile_fail
    /// use named_type::prelude::*;
    ///
    /// enum MeterTag {}
    /// type Meter = NamedType<i32, MeterTag>;
    ///
    /// let meters: Meter = 5.into();
    /// ```
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    #[inline(always)]
    pub const fn get(&self) -> &T {
        &self.value
    }

    #[inline(always)]
    pub const fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Moves the value out of the wrapper.
    #[inline(always)]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Shared reference view: same tag and skills, borrows the value.
    #[inline(always)]
    pub const fn view(&self) -> NamedType<&T, Tag, S> {
        NamedType::new(&self.value)
    }

    /// Exclusive reference view. Writes through it land in `self`.
    #[inline(always)]
    pub const fn view_mut(&mut self) -> NamedType<&mut T, Tag, S> {
        NamedType::new(&mut self.value)
    }

    /// Token for named-argument call syntax, see [`Argument`].
    #[inline(always)]
    pub const fn argument() -> Argument<Self> {
        Argument::new()
    }
}

// =============================================================================
// Reference views
// =============================================================================

/// A view borrows its referent, so it cannot outlive it. Viewing a
/// temporary and using the view afterwards does not compile:
///
/// ```compile_fail
/// use named_type::prelude::*;
///
/// enum CountTag {}
///
/// let view = NamedType::<&mut i32, CountTag>::new(&mut 5);
/// assert_eq!(*view.referent(), 5);
/// ```
impl<'a, T: ?Sized, Tag, S> NamedType<&'a T, Tag, S> {
    /// The value this view points at.
    #[inline(always)]
    pub const fn referent(&self) -> &'a T {
        self.value
    }
}

impl<'a, T: ?Sized, Tag, S> NamedType<&'a mut T, Tag, S> {
    #[inline(always)]
    pub fn referent(&self) -> &T {
        &*self.value
    }

    /// Mutable access to the viewed value; changes are visible to its owner.
    #[inline(always)]
    pub fn referent_mut(&mut self) -> &mut T {
        &mut *self.value
    }
}

impl<'a, T, Tag, S> From<&'a NamedType<T, Tag, S>> for NamedType<&'a T, Tag, S> {
    #[inline(always)]
    fn from(named: &'a NamedType<T, Tag, S>) -> Self {
        named.view()
    }
}

impl<'a, T, Tag, S> From<&'a mut NamedType<T, Tag, S>> for NamedType<&'a mut T, Tag, S> {
    #[inline(always)]
    fn from(named: &'a mut NamedType<T, Tag, S>) -> Self {
        named.view_mut()
    }
}

/// Shared view type of wrapper `W`.
pub type View<'a, W> = NamedType<
    &'a <W as StrongType>::Underlying,
    <W as StrongType>::Tag,
    <W as StrongType>::Skills,
>;

/// Exclusive view type of wrapper `W`.
pub type ViewMut<'a, W> = NamedType<
    &'a mut <W as StrongType>::Underlying,
    <W as StrongType>::Tag,
    <W as StrongType>::Skills,
>;

// =============================================================================
// StrongType: access to the wrapper from generic code
// =============================================================================

/// Implemented by every [`NamedType`].
///
/// Generic code that should work on "any wrapper" (named arguments,
/// user-defined skills) goes through this trait:
///
/// ```
/// use named_type::prelude::*;
///
/// trait Halve {
///     fn halve(&mut self);
/// }
///
/// impl<W> Halve for W
/// where
///     W: StrongType,
///     W::Underlying: core::ops::DivAssign + From<u8>,
/// {
///     fn halve(&mut self) {
///         *self.underlying_mut() /= W::Underlying::from(2);
///     }
/// }
///
/// enum LitersTag {}
/// let mut volume = NamedType::<f64, LitersTag>::new(3.0);
/// volume.halve();
/// assert_eq!(*volume.get(), 1.5);
/// ```
pub trait StrongType: Sized {
    type Underlying;
    type Tag;
    type Skills;

    fn from_underlying(value: Self::Underlying) -> Self;

    fn underlying(&self) -> &Self::Underlying;

    fn underlying_mut(&mut self) -> &mut Self::Underlying;

    fn into_underlying(self) -> Self::Underlying;
}

impl<T, Tag, S> StrongType for NamedType<T, Tag, S> {
    type Underlying = T;
    type Tag = Tag;
    type Skills = S;

    #[inline(always)]
    fn from_underlying(value: T) -> Self {
        Self::new(value)
    }

    #[inline(always)]
    fn underlying(&self) -> &T {
        &self.value
    }

    #[inline(always)]
    fn underlying_mut(&mut self) -> &mut T {
        &mut self.value
    }

    #[inline(always)]
    fn into_underlying(self) -> T {
        self.value
    }
}

/// Builds a wrapper whose tag and skills come from the expected type.
///
/// Meant for wrapper aliases that are generic over the underlying type, where
/// the underlying type is unnameable (closures):
///
/// ```
/// use named_type::prelude::*;
///
/// enum ComparatorTag {}
/// type Comparator<F> = NamedType<F, ComparatorTag>;
///
/// fn perform<F: Fn() -> String>(comparator: Comparator<F>) -> String {
///     (comparator.get())()
/// }
///
/// assert_eq!(perform(make_named(|| String::from("compare"))), "compare");
/// ```
#[inline(always)]
pub const fn make_named<T, Tag, S>(value: T) -> NamedType<T, Tag, S> {
    NamedType::new(value)
}

// =============================================================================
// Skill-independent impls
// =============================================================================

impl<T: Clone, Tag, S> Clone for NamedType<T, Tag, S> {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T: Copy, Tag, S> Copy for NamedType<T, Tag, S> {}

impl<T: Default, Tag, S> Default for NamedType<T, Tag, S> {
    #[inline(always)]
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Formats as `TagName(value)`.
impl<T: fmt::Debug, Tag, S> fmt::Debug for NamedType<T, Tag, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(short_type_name::<Tag>()).field(&self.value).finish()
    }
}

fn short_type_name<X: ?Sized>() -> &'static str {
    let full = core::any::type_name::<X>();
    // Generic tags keep their arguments; only the leading path is dropped.
    let base = full.split('<').next().unwrap_or(full);
    match base.rfind("::") {
        Some(at) => &full[at + 2..],
        None => full,
    }
}
