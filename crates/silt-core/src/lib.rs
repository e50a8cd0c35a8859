//! Core mapping-layer seam for Silt: static entity metadata, the mapper
//! registry with its registration event and DDL lifecycle hooks, generic
//! expression nodes, and the dialect-keyed SQL compiler.

pub mod compile;
pub mod expr;
pub mod mapper;
pub mod model;
pub mod sanitize;
pub mod traits;
pub mod value;

use crate::{compile::CompileError, mapper::MapperError};
use thiserror::Error as ThisError;

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Mapper(#[from] MapperError),
}

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, registries, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        compile::{CompiledSql, Dialect, SqlCompiler},
        expr::{BindParam, ClauseNode, NodeKind},
        model::{EntityModel, TableModel},
        traits::EntityKind,
        value::Value,
    };
}
