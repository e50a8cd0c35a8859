use silt::prelude::*;

#[entity(table = "posts", fulltext(title, body))]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
}

fn main() {
    let hooks = mapper::ddl_hooks("posts", mapper::DdlEvent::AfterCreate);
    assert_eq!(
        hooks,
        vec!["ALTER TABLE posts ADD FULLTEXT (title, body)".to_string()]
    );

    let search = FullTextSearch::new::<Post>("needle").mode(MatchMode::Boolean);
    let compiled = SqlCompiler::new(Dialect::MySql).compile(&search).unwrap();
    assert_eq!(
        compiled.sql,
        "MATCH (posts.title, posts.body) AGAINST (? IN BOOLEAN MODE)"
    );
}
