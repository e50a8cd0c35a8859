
use crate::{
    expr::{BindParam, ClauseNode, NodeKind},
    value::Value,
};
use derive_more::Display;
use log::trace;
use std::{
    collections::HashMap,
    error::Error as StdError,
    sync::{LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard},
};
use thiserror::Error as ThisError;

///
/// Dialect
/// Target SQL dialect a statement is compiled for.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[remain::sorted]
pub enum Dialect {
    #[display("mysql")]
    MySql,

    #[display("postgres")]
    Postgres,

    #[display("sqlite")]
    Sqlite,
}

///
/// CompileError
///

#[derive(Debug, ThisError)]
pub enum CompileError {
    #[error("no compiler rule registered for node {kind} under dialect {dialect}")]
    NoRule { kind: NodeKind, dialect: Dialect },

    #[error("node kind mismatch: rule expected {expected}, got {actual}")]
    NodeMismatch { expected: NodeKind, actual: NodeKind },

    #[error(transparent)]
    Rule(Box<dyn StdError + Send + Sync>),
}

impl CompileError {
    /// Wrap a rule-specific failure.
    pub fn rule(source: impl StdError + Send + Sync + 'static) -> Self {
        Self::Rule(Box::new(source))
    }
}

/// Render function for one clause-node type under one dialect.
pub type RenderFn = fn(&dyn ClauseNode, &mut SqlCompiler) -> Result<String, CompileError>;

///
/// RULES
/// Process-wide dispatch table, populated at startup and read-only during
/// compilation.
///

static RULES: LazyLock<RwLock<HashMap<(NodeKind, Dialect), RenderFn>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

fn rules_read() -> RwLockReadGuard<'static, HashMap<(NodeKind, Dialect), RenderFn>> {
    RULES
        .read()
        .expect("compiler rule table poisoned while acquiring read lock")
}

fn rules_write() -> RwLockWriteGuard<'static, HashMap<(NodeKind, Dialect), RenderFn>> {
    RULES
        .write()
        .expect("compiler rule table poisoned while acquiring write lock")
}

/// Register a render function for `(kind, dialect)`.
///
/// Registration is idempotent: the first rule for a key wins and repeated
/// startup hooks are no-ops.
pub fn register_rule(kind: NodeKind, dialect: Dialect, render: RenderFn) {
    rules_write().entry((kind, dialect)).or_insert(render);
}

#[must_use]
pub fn has_rule(kind: NodeKind, dialect: Dialect) -> bool {
    rules_read().contains_key(&(kind, dialect))
}

///
/// CompiledSql
/// Rendered statement fragment plus its ordered bound parameters.
///

#[derive(Clone, Debug, PartialEq)]
pub struct CompiledSql {
    pub sql: String,
    pub params: Vec<Value>,
}

///
/// SqlCompiler
///
/// Per-statement compilation context. Holds the target dialect and the
/// parameters collected so far; all other state is the process-wide rule
/// table, which is only read here. Compiling the same node twice yields
/// the same output.
///

#[derive(Debug)]
pub struct SqlCompiler {
    dialect: Dialect,
    params: Vec<Value>,
}

impl SqlCompiler {
    #[must_use]
    pub const fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            params: Vec::new(),
        }
    }

    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Compile a full expression tree into SQL text plus parameters.
    pub fn compile(mut self, node: &dyn ClauseNode) -> Result<CompiledSql, CompileError> {
        let sql = self.process(node)?;

        Ok(CompiledSql {
            sql,
            params: self.params,
        })
    }

    /// Render one node to a fragment, collecting its bound parameters.
    ///
    /// Dialect rules call back into this for their sub-nodes.
    pub fn process(&mut self, node: &dyn ClauseNode) -> Result<String, CompileError> {
        trace!(
            "compiling node {} for dialect {}",
            node.node_kind(),
            self.dialect
        );

        if let Some(bind) = node.as_any().downcast_ref::<BindParam>() {
            return Ok(self.render_bind(bind));
        }

        // Copy the fn pointer out so no lock is held while rendering.
        let render = rules_read()
            .get(&(node.node_kind(), self.dialect))
            .copied()
            .ok_or(CompileError::NoRule {
                kind: node.node_kind(),
                dialect: self.dialect,
            })?;

        render(node, self)
    }

    // Bound parameters are the one node the compiler renders itself:
    // placeholder syntax is a dialect property, not an extension concern.
    fn render_bind(&mut self, bind: &BindParam) -> String {
        self.params.push(bind.value().clone());

        match self.dialect {
            Dialect::MySql | Dialect::Sqlite => "?".to_string(),
            Dialect::Postgres => format!("${}", self.params.len()),
        }
    }
}
