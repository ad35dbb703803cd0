//! # typed-accessors-macros
//!
//! Procedural macro for generating typed property accessors.
//!
//! This crate provides the `#[typed_accessors]` attribute macro that turns
//! field-level declarations on a struct into generated reader and writer
//! methods:
//!
//! - Readers return the storage slot as-is (`Option<T>`)
//! - Writers coerce raw input into the slot type before storing it
//!
//! ## Usage
//!
//! ```rust,ignore
//! use typed_accessors::typed_accessors;
//!
//! #[typed_accessors]
//! pub struct Sensor {
//!     #[accessor(float)]
//!     distance: Option<f64>,
//!     #[accessor(bool_yn)]
//!     onfire: Option<bool>,
//! }
//! ```
//!
//! ## Supported Attributes
//!
//! - `#[accessor(<type>)]` - reader and writer
//! - `#[reader(<type>)]` - reader only
//! - `#[writer(<type>)]` - writer only
//!
//! where `<type>` is one of `bool_yn`, `float`, `int`, `date`.

mod codegen;
mod parse;

use proc_macro::TokenStream;
use syn::{parse_macro_input, ItemStruct};

/// Process a `#[typed_accessors]` attribute on a struct.
///
/// Fields carrying `#[accessor(..)]`, `#[reader(..)]`, or `#[writer(..)]`
/// become storage slots with generated accessor methods; other fields pass
/// through untouched. The declaration attributes are stripped from the
/// emitted struct.
///
/// ```rust,ignore
/// #[typed_accessors]
/// pub struct Sensor {
///     #[accessor(int)]
///     count: Option<i64>,
///     #[reader(date)]
///     day: Option<chrono::NaiveDate>,
/// }
/// ```
#[proc_macro_attribute]
pub fn typed_accessors(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new(
            proc_macro2::Span::call_site(),
            "#[typed_accessors] takes no arguments",
        )
        .to_compile_error()
        .into();
    }

    let input = parse_macro_input!(item as ItemStruct);
    match codegen::expand_struct(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
