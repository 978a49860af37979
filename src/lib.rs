#![cfg_attr(not(any(feature = "std", test)), no_std)]

// Feature flags handled:
// - std: default, enables `NamedType::print` into `std::io::Write`

//! # named-type
//!
//! Strong types with opt-in operators.
//!
//! `NamedType<T, Tag, Skills>` wraps one `T` in a type that is distinct from
//! every other wrapper around `T`. The wrapper starts with no operators at
//! all; each skill listed in `Skills` adds back exactly the operators it
//! names, so a `String`-backed wrapper can be `Comparable` and `Hashable`
//! without becoming `Addable`.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Present/Absent, Peano naturals with type-level equality        |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Skills                                                  |
//! |  - op::* markers, Skill::Grants<Op>, tuples as unions, Require    |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: NamedType, StrongType, reference views                  |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: std operators gated on S: Require<op::X>                |
//! |  Layer 4: Named arguments (Argument, AnyOrder)                    |
//! +-------------------------------------------------------------------+
//! ```
//!
//! Everything is decided at compile time. The wrapper has the size and
//! alignment of `T`, and a missing skill is a compile error naming the
//! operator.
//!
//! ## Quick Start
//!
//! ```
//! use named_type::prelude::*;
//!
//! #[named_type(Addable, Comparable, Printable)]
//! type Meter = u64;
//!
//! let total = Meter::new(10) + Meter::new(12);
//! assert!(total == Meter::new(22));
//! assert!(Meter::new(10) < Meter::new(12));
//! assert_eq!(total.to_string(), "22");
//! ```
//!
//! Using an operator the skill set does not grant fails to compile:
//!
//! ```compile_fail
//! use named_type::prelude::*;
//!
//! #[named_type(Addable)]
//! type Meter = u64;
//!
//! let area = Meter::new(2) * Meter::new(3);
//! ```

// Allow `::named_type` to work inside the crate itself
extern crate self as named_type;

// =============================================================================
// Layer 0: Primitives
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Skills
// =============================================================================
pub mod skill;

// =============================================================================
// Layer 2: The wrapper
// =============================================================================
mod wrapper;

// =============================================================================
// Layer 3: Operator surface
// =============================================================================
mod impls;

// =============================================================================
// Layer 4: Named arguments
// =============================================================================
pub mod argument;

// skill_check!
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use argument::{AnyOrder, Argument, make_named_arg_function};
pub use wrapper::{NamedType, StrongType, View, ViewMut, make_named};
pub use skill::{Require, Skill, grants};

pub use macros::named_type;

/// Common items for declaring and using strong types.
pub mod prelude {
    pub use crate::argument::{AnyOrder, Argument, make_named_arg_function};
    pub use crate::wrapper::{NamedType, StrongType, View, ViewMut, make_named};
    pub use crate::skill::markers::*;
    pub use crate::skill::{ImplicitlyConvertibleTo, Require, Skill, op};
    pub use macros::named_type;
}
