use crate::{index::fulltext_index, search::FullTextSearch};
use silt_core::{
    compile::{self, CompileError, Dialect, SqlCompiler},
    expr::ClauseNode,
    mapper,
};
use thiserror::Error as ThisError;

///
/// FullTextCompileError
///

#[derive(Debug, ThisError)]
pub enum FullTextCompileError {
    #[error("entity {entity} is not full-text searchable")]
    NotSearchable { entity: &'static str },

    #[error("entity {entity} resolved to an empty table reference")]
    UnresolvedTable { entity: &'static str },
}

/// Render a [`FullTextSearch`] node as a MySQL `MATCH … AGAINST` fragment.
///
/// The target must be an activated searchable entity: registered with the
/// mapper and carrying a non-empty full-text column set. Anything else is
/// a programming error surfaced as a compile failure naming the type;
/// silently emitting degraded SQL would be worse than refusing.
pub(crate) fn render_mysql(
    node: &dyn ClauseNode,
    compiler: &mut SqlCompiler,
) -> Result<String, CompileError> {
    let search = node
        .as_any()
        .downcast_ref::<FullTextSearch>()
        .ok_or(CompileError::NodeMismatch {
            expected: FullTextSearch::NODE_KIND,
            actual: node.node_kind(),
        })?;

    let model = search.target();
    let index = fulltext_index(model)
        .filter(|index| !index.is_empty())
        .ok_or_else(|| {
            CompileError::rule(FullTextCompileError::NotSearchable { entity: model.path })
        })?;

    if !mapper::is_registered(model.path) {
        return Err(CompileError::rule(FullTextCompileError::NotSearchable {
            entity: model.path,
        }));
    }

    let table = search.table_reference();
    if table.is_empty() {
        return Err(CompileError::rule(FullTextCompileError::UnresolvedTable {
            entity: model.path,
        }));
    }

    let columns = index
        .columns
        .iter()
        .map(|column| format!("{table}.{column}"))
        .collect::<Vec<_>>()
        .join(", ");

    let placeholder = compiler.process(search.against())?;
    let mode = search.match_mode().as_sql();

    Ok(if mode.is_empty() {
        format!("MATCH ({columns}) AGAINST ({placeholder})")
    } else {
        format!("MATCH ({columns}) AGAINST ({placeholder} {mode})")
    })
}

/// Register the MySQL rule. Dialect-scoped on purpose: under any other
/// dialect a full-text node has no rule and compilation fails instead of
/// emitting MySQL syntax it cannot mean.
pub(crate) fn install() {
    compile::register_rule(FullTextSearch::NODE_KIND, Dialect::MySql, render_mysql);
}
