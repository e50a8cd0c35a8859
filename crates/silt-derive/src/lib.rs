//! Attribute macro declaring the table mapping (and, optionally, the
//! full-text column set) of a concrete entity struct.
//!
//! Generated code references the `silt` facade crate, which re-exports
//! everything the expansion needs.

use darling::{Error as DarlingError, FromMeta, ast::NestedMeta};
use proc_macro::TokenStream;
use syn::ItemStruct;

mod entity;

use entity::EntityArgs;

/// Map a struct to a table and register it with the mapper at startup.
///
/// ```ignore
/// #[entity(table = "articles", fulltext(title, body))]
/// pub struct Article {
///     pub id: u64,
///     pub title: String,
///     pub body: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn entity(args: TokenStream, input: TokenStream) -> TokenStream {
    // Phase 1: parse attribute arguments.
    let attr_args = match NestedMeta::parse_meta_list(args.into()) {
        Ok(attr_args) => attr_args,
        Err(err) => return DarlingError::from(err).write_errors().into(),
    };
    let args = match EntityArgs::from_list(&attr_args) {
        Ok(args) => args,
        Err(err) => return err.write_errors().into(),
    };

    // Phase 2: parse the annotated struct.
    let item = match syn::parse::<ItemStruct>(input) {
        Ok(item) => item,
        Err(err) => return err.to_compile_error().into(),
    };

    // Phase 3: validate and expand.
    match entity::expand(&args, &item) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.write_errors().into(),
    }
}
