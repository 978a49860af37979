//! Common parsing utilities
//!
//! Shared parsing helpers for the attribute arguments.

use quote::ToTokens;
use syn::{Ident, Token, Type, parse::ParseStream};

// =============================================================================
// Keyword Detection
// =============================================================================

/// Check if the next identifier is a specific keyword
pub fn peek_keyword(input: ParseStream, keyword: &str) -> bool {
    if input.peek(Ident) {
        let fork = input.fork();
        if let Ok(ident) = fork.parse::<Ident>() {
            return ident == keyword;
        }
    }
    false
}

/// Check if the next tokens are `keyword = ...`
pub fn peek_option(input: ParseStream, keyword: &str) -> bool {
    peek_keyword(input, keyword) && input.peek2(Token![=])
}

/// Parse `keyword = Ident`, returning the identifier
pub fn parse_option_ident(input: ParseStream, keyword: &str) -> syn::Result<Ident> {
    let key: Ident = input.parse()?;
    if key != keyword {
        return Err(syn::Error::new_spanned(key, format!("expected `{keyword}`")));
    }
    input.parse::<Token![=]>()?;
    input.parse()
}

// =============================================================================
// Duplicate Detection
// =============================================================================

/// Types are compared by their token text, ignoring whitespace.
pub fn type_key(ty: &Type) -> String {
    ty.to_token_stream().to_string().replace(' ', "")
}

/// Reject a skill that appears twice in one list
pub fn check_duplicates(types: &[Type]) -> syn::Result<()> {
    use std::collections::HashSet;

    let mut seen = HashSet::new();
    for ty in types {
        let key = type_key(ty);
        if !seen.insert(key.clone()) {
            return Err(syn::Error::new_spanned(
                ty,
                format!(
                    "duplicate skill `{key}`\n\
                     \n\
                     Each skill should appear only once in a skill list."
                ),
            ));
        }
    }
    Ok(())
}
