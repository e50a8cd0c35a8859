use crate::value::Value;
use derive_more::Display;
use std::any::Any;

///
/// NodeKind
/// Stable dispatch key for a clause-node type.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub struct NodeKind(pub &'static str);

///
/// ClauseNode
///
/// A leaf or branch in a statement's expression tree. Nodes are pure
/// values: construction performs no validation and compilation never
/// mutates them, so they are safely shareable across threads building
/// unrelated statements.
///

pub trait ClauseNode: Send + Sync + 'static {
    fn node_kind(&self) -> NodeKind;

    fn as_any(&self) -> &dyn Any;
}

///
/// BindParam
///
/// Generic literal node. The wrapped value travels out-of-band as a bound
/// parameter; it is never interpolated into the rendered SQL text.
///

#[derive(Clone, Debug, PartialEq)]
pub struct BindParam {
    value: Value,
}

impl BindParam {
    pub const NODE_KIND: NodeKind = NodeKind("bind_param");

    #[must_use]
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
        }
    }

    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }
}

impl ClauseNode for BindParam {
    fn node_kind(&self) -> NodeKind {
        Self::NODE_KIND
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
