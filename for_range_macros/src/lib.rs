//! Attribute macros that remove the derive boilerplate required by the
//! `for_range::Metric` and `for_range::Aggregate` traits.
//!
//! Both macros expect the `for_range` crate to be reachable as `::for_range`
//! and `serde` to be a dependency of the calling crate.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{ItemStruct, parse_macro_input};

extern crate proc_macro;

fn derives() -> TokenStream2 {
    quote! {
        #[derive(
            serde::Serialize,
            serde::Deserialize,
            std::cmp::PartialOrd,
            std::cmp::PartialEq,
            std::fmt::Debug,
            std::clone::Clone
        )]
    }
}

/// Derives everything a `Metric` needs and implements the marker trait.
///
/// `Display` is not derived: the executor prints the final sample, so each
/// metric decides how it reads on the console.
#[proc_macro_attribute]
pub fn metric(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(item as ItemStruct);
    let ident = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();
    let derives = derives();

    let expanded = quote! {
        #derives
        #ast

        impl #impl_generics ::for_range::metric::Metric for #ident #ty_generics #where_clause {}
    };

    TokenStream::from(expanded)
}

/// Derives the traits an `Aggregate` is bound by. The trait itself still has
/// to be implemented by hand.
#[proc_macro_attribute]
pub fn aggregate(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(item as ItemStruct);
    let derives = derives();

    let expanded = quote! {
        #derives
        #ast
    };

    TokenStream::from(expanded)
}
