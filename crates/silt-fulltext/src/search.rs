use crate::modes::MatchMode;
use silt_core::{
    expr::{BindParam, ClauseNode, NodeKind},
    model::EntityModel,
    traits::EntityKind,
};
use std::any::Any;

///
/// FullTextSearch
///
/// A full-text predicate over one entity's declared column set. Pure
/// value: the query travels as a bound parameter, the builders consume
/// `self`, and nothing is validated until the statement is compiled,
/// since the target's mapping state may not be final at construction
/// time.
///

#[derive(Clone, Debug)]
pub struct FullTextSearch {
    against: BindParam,
    model: &'static EntityModel,
    alias: Option<String>,
    mode: MatchMode,
}

impl FullTextSearch {
    pub const NODE_KIND: NodeKind = NodeKind("fulltext_search");

    #[must_use]
    pub fn new<E: EntityKind>(query: &str) -> Self {
        Self {
            against: BindParam::new(query),
            model: E::MODEL,
            alias: None,
            mode: MatchMode::default(),
        }
    }

    #[must_use]
    pub fn mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Target a query-time alias instead of the canonical table.
    #[must_use]
    pub fn aliased(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    #[must_use]
    pub const fn against(&self) -> &BindParam {
        &self.against
    }

    #[must_use]
    pub const fn target(&self) -> &'static EntityModel {
        self.model
    }

    #[must_use]
    pub const fn match_mode(&self) -> &MatchMode {
        &self.mode
    }

    /// Alias name when aliased, canonical fully-qualified table name
    /// otherwise. Emptiness is the compiler rule's problem.
    #[must_use]
    pub fn table_reference(&self) -> String {
        match &self.alias {
            Some(alias) => alias.clone(),
            None => self.model.table.fullname(),
        }
    }
}

impl ClauseNode for FullTextSearch {
    fn node_kind(&self) -> NodeKind {
        Self::NODE_KIND
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
