//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[named_type]` | on type alias | Declare a strong type with its tag and skills |

mod named_type;

pub use named_type::{NamedTypeArgs, expand_named_type};
