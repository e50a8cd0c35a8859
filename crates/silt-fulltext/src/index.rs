use serde::Serialize;
use silt_core::{
    model::{EntityCapability, EntityModel},
    sanitize::strip_quotes,
    traits::EntityKind,
};
use std::{
    any::Any,
    fmt::{self, Display},
};

/// Name the capability is registered under on an entity model.
pub const CAPABILITY_NAME: &str = "fulltext";

///
/// FullTextIndex
///
/// The ordered column set a concrete entity exposes to full-text search.
/// Declared per type; a type without its own declaration has no entry,
/// so the capability is never picked up transitively.
///

#[derive(Debug, Serialize)]
pub struct FullTextIndex {
    pub columns: &'static [&'static str],
}

impl FullTextIndex {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    #[must_use]
    /// Column list as it appears in index DDL: quote-stripped, `", "`-joined.
    pub fn ddl_columns(&self) -> String {
        self.columns
            .iter()
            .map(|column| strip_quotes(column))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Display for FullTextIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.ddl_columns())
    }
}

impl EntityCapability for FullTextIndex {
    fn capability_name(&self) -> &'static str {
        CAPABILITY_NAME
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

///
/// FullText
/// Entity-side declaration surface; implemented by the entity macro for
/// types annotated with a `fulltext(…)` column list.
///

pub trait FullText: EntityKind {
    const FULLTEXT: &'static FullTextIndex;
}

#[must_use]
/// The full-text index declared on a model, if any.
pub fn fulltext_index(model: &EntityModel) -> Option<&FullTextIndex> {
    model
        .capability(CAPABILITY_NAME)?
        .as_any()
        .downcast_ref::<FullTextIndex>()
}
