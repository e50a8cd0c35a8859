use crate::model::{capability::EntityCapability, table::TableModel};
use serde::Serialize;

///
/// EntityModel
/// Minimal, macro-generated runtime model for one mapped entity.
///

#[derive(Debug, Serialize)]
pub struct EntityModel {
    /// Fully-qualified Rust type path (for dispatch and diagnostics).
    pub path: &'static str,
    /// Stable external name used in registries and diagnostics.
    pub entity_name: &'static str,
    /// Backing table metadata.
    pub table: &'static TableModel,
    /// Ordered mapped column list (authoritative for rendering).
    pub columns: &'static [&'static str],
    /// Capabilities declared directly on this concrete type.
    #[serde(skip)]
    pub capabilities: &'static [&'static dyn EntityCapability],
}

impl EntityModel {
    #[must_use]
    /// Look up a declared capability by name.
    pub fn capability(&self, name: &str) -> Option<&'static dyn EntityCapability> {
        self.capabilities
            .iter()
            .copied()
            .find(|capability| capability.capability_name() == name)
    }

    #[must_use]
    pub fn has_capability(&self, name: &str) -> bool {
        self.capability(name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;

    #[derive(Debug)]
    struct Tag;

    impl EntityCapability for Tag {
        fn capability_name(&self) -> &'static str {
            "tag"
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    static TAG: Tag = Tag;
    static CAPS: [&dyn EntityCapability; 1] = [&TAG];

    static TABLE: TableModel = TableModel {
        name: "things",
        schema: None,
    };

    static MODEL: EntityModel = EntityModel {
        path: "silt_core::model::entity::tests::Thing",
        entity_name: "Thing",
        table: &TABLE,
        columns: &["id", "label"],
        capabilities: &CAPS,
    };

    #[test]
    fn capability_lookup_is_by_name() {
        assert!(MODEL.has_capability("tag"));
        assert!(MODEL.capability("tag").is_some());
        assert!(MODEL.capability("fulltext").is_none());
    }

    #[test]
    fn capability_payload_downcasts() {
        let capability = MODEL.capability("tag").unwrap();
        assert!(capability.as_any().downcast_ref::<Tag>().is_some());
    }
}
