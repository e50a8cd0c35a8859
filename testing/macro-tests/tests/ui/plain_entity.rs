use silt::prelude::*;

#[entity(table = "tags")]
pub struct Tag {
    pub id: u64,
    pub label: String,
}

fn main() {
    assert!(mapper::is_registered(Tag::MODEL.path));
    assert!(mapper::ddl_hooks("tags", mapper::DdlEvent::AfterCreate).is_empty());
}
