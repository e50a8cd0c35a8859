//! ## Crate layout
//! - `core`: mapping-layer seam: entity models, the mapper registry and
//!   its DDL lifecycle hooks, expression nodes, and the SQL compiler.
//! - `fulltext`: MySQL full-text capability, search node, and dialect rule.
//! - `entity`: attribute macro declaring mapped (and searchable) entities.

pub use silt_core as core;
pub use silt_fulltext as fulltext;

pub use silt_derive::entity;

/// re-exports
///
/// macro-generated code uses these, stops the user having to specify all
/// the dependencies in the Cargo.toml file manually
pub mod __reexports {
    pub use ctor;
}

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::entity;
    pub use silt_core::{
        compile::{CompiledSql, Dialect, SqlCompiler},
        expr::BindParam,
        mapper,
        traits::EntityKind as _,
        value::Value,
    };
    pub use silt_fulltext::{FullText as _, FullTextSearch, MatchMode};
}
