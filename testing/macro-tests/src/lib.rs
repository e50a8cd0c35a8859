//! Fixture entities for the macro surface, registered at load time by the
//! generated constructors.

use silt::entity;

#[entity(table = "articles", fulltext(title, body))]
pub struct Article {
    pub id: u64,
    pub title: String,
    pub body: String,
}

#[entity(table = "notes")]
pub struct Note {
    pub id: u64,
    pub body: String,
}

#[entity(table = "docs", schema = "cms", name = "document", fulltext(content))]
pub struct Document {
    pub id: u64,
    pub content: String,
}
