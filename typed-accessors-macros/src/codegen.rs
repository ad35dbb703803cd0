//! Accessor generation for the typed_accessors macro.
//!
//! Takes the validated declarations from [`crate::parse`] and emits the
//! struct (declaration attributes stripped) followed by one inherent impl
//! block of readers and coercing writers. Generated code reaches the
//! coercion functions and error type through the `typed_accessors` facade
//! crate, so that is the only dependency users carry.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ItemStruct;

use crate::parse::{self, AccessorField, SemanticType};

/// Expand a `#[typed_accessors]` struct into the struct plus its
/// generated accessor impl.
pub fn expand_struct(item: ItemStruct) -> syn::Result<TokenStream> {
    let fields = parse::collect_declarations(&item)?;
    let item = strip_declaration_attrs(item);

    let ident = &item.ident;
    let (impl_generics, ty_generics, where_clause) = item.generics.split_for_impl();

    let methods: Vec<TokenStream> = fields.iter().map(generate_field_methods).collect();

    Ok(quote! {
        #item

        impl #impl_generics #ident #ty_generics #where_clause {
            #(#methods)*
        }
    })
}

/// Remove the consumed declaration attributes from every field.
fn strip_declaration_attrs(mut item: ItemStruct) -> ItemStruct {
    if let syn::Fields::Named(fields) = &mut item.fields {
        for field in &mut fields.named {
            field.attrs.retain(|attr| !parse::is_declaration_attr(attr));
        }
    }
    item
}

/// Generate the reader and/or writer for one declared field.
fn generate_field_methods(field: &AccessorField) -> TokenStream {
    let mut methods = TokenStream::new();

    if field.declaration.reader {
        methods.extend(generate_reader(field));
    }
    if field.declaration.writer {
        methods.extend(generate_writer(field));
    }

    methods
}

fn generate_reader(field: &AccessorField) -> TokenStream {
    let ident = &field.ident;
    let ty = &field.ty;
    let doc = format!("Returns the current value of `{ident}`, or `None` if never written.");

    quote! {
        #[doc = #doc]
        pub fn #ident(&self) -> #ty {
            self.#ident
        }
    }
}

fn generate_writer(field: &AccessorField) -> TokenStream {
    let ident = &field.ident;
    let setter = format_ident!("set_{}", ident);
    let field_name = ident.to_string();

    match field.declaration.semantic {
        // Total over all inputs, so no Result
        SemanticType::BoolYn => {
            let doc = format!("Coerces `value` to a yes/no boolean and stores it in `{ident}`.");
            quote! {
                #[doc = #doc]
                pub fn #setter(&mut self, value: impl Into<typed_accessors::BoolYnInput>) {
                    self.#ident = Some(typed_accessors::coerce::bool_yn(value.into()));
                }
            }
        }
        SemanticType::Float => {
            let doc = format!("Coerces `value` to `f64` and stores it in `{ident}`.");
            quote! {
                #[doc = #doc]
                pub fn #setter(
                    &mut self,
                    value: impl Into<typed_accessors::FloatInput>,
                ) -> Result<(), typed_accessors::AccessorError> {
                    self.#ident = Some(typed_accessors::coerce::float(#field_name, value.into())?);
                    Ok(())
                }
            }
        }
        SemanticType::Int => {
            let doc = format!("Coerces `value` to `i64` and stores it in `{ident}`.");
            quote! {
                #[doc = #doc]
                pub fn #setter(
                    &mut self,
                    value: impl Into<typed_accessors::IntInput>,
                ) -> Result<(), typed_accessors::AccessorError> {
                    self.#ident = Some(typed_accessors::coerce::int(#field_name, value.into())?);
                    Ok(())
                }
            }
        }
        SemanticType::Date => {
            let doc = format!("Parses or passes `value` through and stores it in `{ident}`.");
            quote! {
                #[doc = #doc]
                pub fn #setter(
                    &mut self,
                    value: impl Into<typed_accessors::DateInput>,
                ) -> Result<(), typed_accessors::AccessorError> {
                    self.#ident = Some(typed_accessors::coerce::date(#field_name, value.into())?);
                    Ok(())
                }
            }
        }
    }
}
