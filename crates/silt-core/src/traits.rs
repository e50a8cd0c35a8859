use crate::model::EntityModel;

///
/// EntityKind
/// A concrete Rust type mapped to a table, carrying its static model.
///

pub trait EntityKind: 'static {
    const MODEL: &'static EntityModel;
}
