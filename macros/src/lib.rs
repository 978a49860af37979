//! Procedural macros for the named-type crate
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[named_type(...)]` | type alias | Declare a strong type: tag + wrapper alias + optional argument token |
//!
//! ## Example
//!
//! ```ignore
//! #[named_type(Addable, Comparable, argument = DISTANCE)]
//! pub type Distance = u32;
//!
//! let total = Distance::new(10) + DISTANCE.assign(12u32);
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (common / user)
// =============================================================================

mod common;
mod user;

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Declare a strong type from a type alias.
///
/// # Usage
///
/// ```ignore
/// // Skills only: the tag is named `MeterTag`
/// #[named_type(Addable, Comparable)]
/// pub type Meter = u64;
///
/// // Explicit tag name and a named-argument token
/// #[named_type(Printable, tag = LastNameMarker, argument = LAST_NAME)]
/// pub type LastName = String;
///
/// // Generic over the underlying type (build with `make_named`)
/// #[named_type(Callable)]
/// pub type Comparator<F> = F;
/// ```
///
/// Every skill may appear once; `argument` is rejected on generic aliases.
#[proc_macro_attribute]
pub fn named_type(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as user::NamedTypeArgs);

    let Ok(item) = syn::parse::<syn::ItemType>(item) else {
        return syn::Error::new(
            proc_macro2::Span::call_site(),
            "#[named_type] can only be applied to a type alias: `type Name = Underlying;`",
        )
        .to_compile_error()
        .into();
    };

    user::expand_named_type(args, item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
