//! # Layer 0: Primitives
//!
//! Basic building blocks for the skill table:
//! - `bool.rs`: Type-level boolean logic (Present/Absent).
//! - `peano.rs`: Type-level naturals (Z/S) with equality.

pub mod bool;
pub mod peano;

// Re-export key types at this level
pub use bool::{Absent, Bool, IsTrue, Present};
pub use peano::{Peano, S, Z};
