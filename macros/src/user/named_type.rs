//! Strong type declaration: `#[named_type]`
//!
//! # Syntax
//!
//! ```ignore
//! #[named_type(Addable, Comparable)]
//! pub type Meter = u64;
//!
//! #[named_type(Printable, tag = FirstNameTag, argument = FIRST_NAME)]
//! pub type FirstName = String;
//!
//! #[named_type(Callable)]
//! pub type Comparator<F> = F;
//! ```
//!
//! expands to
//!
//! ```ignore
//! pub enum MeterTag {}
//! pub type Meter = ::named_type::NamedType<u64, MeterTag, (Addable, Comparable,)>;
//! ```

use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    GenericParam, Ident, ItemType, Token, Type,
    parse::{Parse, ParseStream},
};

use crate::common::{check_duplicates, parse_option_ident, peek_option};

/// Skill tuples are implemented up to this arity.
const MAX_SKILLS: usize = 12;

// =============================================================================
// NamedTypeArgs - Attribute Arguments Parser
// =============================================================================

pub struct NamedTypeArgs {
    pub skills: Vec<Type>,
    pub tag: Option<Ident>,
    pub argument: Option<Ident>,
}

impl Parse for NamedTypeArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut skills = Vec::new();
        let mut tag = None;
        let mut argument = None;

        while !input.is_empty() {
            if peek_option(input, "tag") {
                let span = input.span();
                if tag.replace(parse_option_ident(input, "tag")?).is_some() {
                    return Err(syn::Error::new(span, "`tag` given twice"));
                }
            } else if peek_option(input, "argument") {
                let span = input.span();
                if argument.replace(parse_option_ident(input, "argument")?).is_some() {
                    return Err(syn::Error::new(span, "`argument` given twice"));
                }
            } else {
                skills.push(input.parse::<Type>()?);
            }

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        check_duplicates(&skills)?;
        if let Some(extra) = skills.get(MAX_SKILLS) {
            return Err(syn::Error::new_spanned(
                extra,
                format!("at most {MAX_SKILLS} skills per list; group the rest into a nested tuple"),
            ));
        }

        Ok(NamedTypeArgs { skills, tag, argument })
    }
}

// =============================================================================
// Expansion
// =============================================================================

pub fn expand_named_type(args: NamedTypeArgs, item: ItemType) -> syn::Result<TokenStream2> {
    let ItemType {
        attrs,
        vis,
        ident,
        generics,
        ty,
        ..
    } = item;

    if let Some(where_clause) = &generics.where_clause {
        return Err(syn::Error::new_spanned(
            where_clause,
            "`where` clauses are not enforced on type aliases; bound the functions that use it",
        ));
    }
    if let Some(bounded) = generics.params.iter().find(|param| match param {
        GenericParam::Type(param) => !param.bounds.is_empty(),
        GenericParam::Lifetime(param) => !param.bounds.is_empty(),
        GenericParam::Const(_) => false,
    }) {
        return Err(syn::Error::new_spanned(
            bounded,
            "bounds are not enforced on type aliases; bound the functions that use it",
        ));
    }

    if let Some(argument) = &args.argument {
        if !generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                argument,
                "`argument` needs a concrete type; generic aliases have no single argument token",
            ));
        }
    }

    let tag = args.tag.unwrap_or_else(|| format_ident!("{}Tag", ident));
    let skills = &args.skills;

    let argument = args.argument.map(|name| {
        let doc = format!("Named-argument token for [`{ident}`].");
        quote! {
            #[doc = #doc]
            #[allow(dead_code)]
            #vis const #name: ::named_type::Argument<#ident> = ::named_type::Argument::new();
        }
    });

    let tag_doc = format!("Tag of [`{ident}`].");

    Ok(quote! {
        #[doc = #tag_doc]
        #vis enum #tag {}

        #(#attrs)*
        #vis type #ident #generics = ::named_type::NamedType<#ty, #tag, (#(#skills,)*)>;

        #argument
    })
}
