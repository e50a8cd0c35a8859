use std::{any::Any, fmt::Debug};

///
/// EntityCapability
///
/// Runtime tag for a cross-cutting behavior attached to a mapped entity.
/// Capabilities are declared per concrete type and carried on the entity's
/// model; extensions look their payload up by name and downcast it.
///

pub trait EntityCapability: Debug + Send + Sync {
    /// Stable name the capability is looked up under.
    fn capability_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;
}
