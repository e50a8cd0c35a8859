use darling::{Error as DarlingError, FromMeta, util::PathList};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Fields, ItemStruct};

///
/// EntityArgs
///

#[derive(Debug, FromMeta)]
pub struct EntityArgs {
    pub table: String,

    #[darling(default)]
    pub schema: Option<String>,

    #[darling(default)]
    pub name: Option<String>,

    #[darling(default)]
    pub fulltext: Option<PathList>,
}

/// Validate the declaration and emit the model statics, trait impls, and
/// the registration constructor.
pub fn expand(args: &EntityArgs, item: &ItemStruct) -> Result<TokenStream, DarlingError> {
    let ident = &item.ident;

    // Phase 1: validate the struct shape.
    if !item.generics.params.is_empty() {
        return Err(DarlingError::custom("entity structs cannot be generic").with_span(ident));
    }
    let Fields::Named(named) = &item.fields else {
        return Err(DarlingError::custom("entity structs must use named fields").with_span(ident));
    };
    let columns: Vec<String> = named
        .named
        .iter()
        .filter_map(|field| field.ident.as_ref())
        .map(ToString::to_string)
        .collect();
    if columns.is_empty() {
        return Err(
            DarlingError::custom("entity structs must declare at least one field").with_span(ident),
        );
    }
    if args.table.is_empty() {
        return Err(DarlingError::custom("entity table name must not be empty").with_span(ident));
    }

    // Phase 2: validate the full-text declaration against the fields.
    let fulltext_columns = match &args.fulltext {
        Some(paths) => Some(validate_fulltext(paths, &columns, item)?),
        None => None,
    };

    // Phase 3: emit constants and impls.
    let upper = ident.to_string().to_ascii_uppercase();
    let table_const = format_ident!("{upper}_TABLE_CONST");
    let caps_const = format_ident!("{upper}_CAPABILITIES_CONST");
    let model_const = format_ident!("{upper}_MODEL_CONST");
    let fulltext_const = format_ident!("{upper}_FULLTEXT_CONST");

    let table = &args.table;
    let schema = match &args.schema {
        Some(schema) => quote!(Some(#schema)),
        None => quote!(None),
    };
    let entity_name = args.name.clone().unwrap_or_else(|| ident.to_string());

    let (fulltext_static, caps_static, fulltext_impl) = match &fulltext_columns {
        Some(cols) => (
            quote! {
                static #fulltext_const: ::silt::fulltext::FullTextIndex =
                    ::silt::fulltext::FullTextIndex { columns: &[#(#cols),*] };
            },
            quote! {
                static #caps_const: [&dyn ::silt::core::model::EntityCapability; 1] =
                    [&#fulltext_const];
            },
            quote! {
                impl ::silt::fulltext::FullText for #ident {
                    const FULLTEXT: &'static ::silt::fulltext::FullTextIndex = &#fulltext_const;
                }
            },
        ),
        None => (
            quote!(),
            quote! {
                static #caps_const: [&dyn ::silt::core::model::EntityCapability; 0] = [];
            },
            quote!(),
        ),
    };

    Ok(quote! {
        #item

        // MODEL CONSTANTS
        #fulltext_static
        #caps_static

        static #table_const: ::silt::core::model::TableModel =
            ::silt::core::model::TableModel {
                name: #table,
                schema: #schema,
            };

        static #model_const: ::silt::core::model::EntityModel =
            ::silt::core::model::EntityModel {
                path: concat!(module_path!(), "::", stringify!(#ident)),
                entity_name: #entity_name,
                table: &#table_const,
                columns: &[#(#columns),*],
                capabilities: &#caps_const,
            };

        // IMPLEMENTATIONS
        impl ::silt::core::traits::EntityKind for #ident {
            const MODEL: &'static ::silt::core::model::EntityModel = &#model_const;
        }

        #fulltext_impl

        // REGISTRATION
        #[::silt::__reexports::ctor::ctor(unsafe, anonymous, crate_path = ::silt::__reexports::ctor)]
        fn __ctor() {
            if let Err(err) = ::silt::core::mapper::register_entity(
                <#ident as ::silt::core::traits::EntityKind>::MODEL,
            ) {
                panic!("entity registration failed for {}: {err}", stringify!(#ident));
            }
        }
    })
}

// Full-text columns must be a non-empty, duplicate-free subset of the
// struct's fields.
fn validate_fulltext(
    paths: &PathList,
    columns: &[String],
    item: &ItemStruct,
) -> Result<Vec<String>, DarlingError> {
    let mut cols = Vec::new();

    for path in paths.iter() {
        let Some(path_ident) = path.get_ident() else {
            return Err(
                DarlingError::custom("fulltext columns must be plain field names").with_span(path),
            );
        };
        let column = path_ident.to_string();

        if !columns.contains(&column) {
            return Err(DarlingError::custom(format!(
                "fulltext column '{column}' does not name a field of {}",
                item.ident
            ))
            .with_span(path_ident));
        }
        if cols.contains(&column) {
            return Err(
                DarlingError::custom(format!("duplicate fulltext column '{column}'"))
                    .with_span(path_ident),
            );
        }

        cols.push(column);
    }

    if cols.is_empty() {
        return Err(
            DarlingError::custom("fulltext() requires at least one column").with_span(&item.ident),
        );
    }

    Ok(cols)
}
