use crate::{
    FullText, FullTextIndex, FullTextSearch, MatchMode, fulltext_index, index::CAPABILITY_NAME,
};
use silt_core::{
    compile::{CompileError, Dialect, SqlCompiler},
    mapper::{self, DdlEvent},
    model::{EntityCapability, EntityModel, TableModel},
    traits::EntityKind,
    value::Value,
};

///
/// Fixtures
/// Hand-built models; the entity macro generates the same shape.
///

static ARTICLE_TABLE: TableModel = TableModel {
    name: "articles",
    schema: None,
};

static ARTICLE_INDEX: FullTextIndex = FullTextIndex {
    columns: &["title", "body"],
};

static ARTICLE_CAPS: [&dyn EntityCapability; 1] = [&ARTICLE_INDEX];

static ARTICLE_MODEL: EntityModel = EntityModel {
    path: "silt_fulltext::tests::Article",
    entity_name: "Article",
    table: &ARTICLE_TABLE,
    columns: &["id", "title", "body"],
    capabilities: &ARTICLE_CAPS,
};

struct Article;

impl EntityKind for Article {
    const MODEL: &'static EntityModel = &ARTICLE_MODEL;
}

impl FullText for Article {
    const FULLTEXT: &'static FullTextIndex = &ARTICLE_INDEX;
}

static QUOTED_TABLE: TableModel = TableModel {
    name: "quoted_docs",
    schema: None,
};

static QUOTED_INDEX: FullTextIndex = FullTextIndex {
    columns: &[r#"a"b"#, "c'd"],
};

static QUOTED_CAPS: [&dyn EntityCapability; 1] = [&QUOTED_INDEX];

static QUOTED_MODEL: EntityModel = EntityModel {
    path: "silt_fulltext::tests::QuotedDoc",
    entity_name: "QuotedDoc",
    table: &QUOTED_TABLE,
    columns: &[r#"a"b"#, "c'd"],
    capabilities: &QUOTED_CAPS,
};

static EMPTY_TABLE: TableModel = TableModel {
    name: "empty_docs",
    schema: None,
};

static EMPTY_INDEX: FullTextIndex = FullTextIndex { columns: &[] };

static EMPTY_CAPS: [&dyn EntityCapability; 1] = [&EMPTY_INDEX];

static EMPTY_MODEL: EntityModel = EntityModel {
    path: "silt_fulltext::tests::EmptyDoc",
    entity_name: "EmptyDoc",
    table: &EMPTY_TABLE,
    columns: &["id"],
    capabilities: &EMPTY_CAPS,
};

static PLAIN_TABLE: TableModel = TableModel {
    name: "plain_notes",
    schema: None,
};

static PLAIN_MODEL: EntityModel = EntityModel {
    path: "silt_fulltext::tests::PlainNote",
    entity_name: "PlainNote",
    table: &PLAIN_TABLE,
    columns: &["id", "body"],
    capabilities: &[],
};

struct PlainNote;

impl EntityKind for PlainNote {
    const MODEL: &'static EntityModel = &PLAIN_MODEL;
}

static GHOST_TABLE: TableModel = TableModel {
    name: "ghost_docs",
    schema: None,
};

static GHOST_INDEX: FullTextIndex = FullTextIndex {
    columns: &["title"],
};

static GHOST_CAPS: [&dyn EntityCapability; 1] = [&GHOST_INDEX];

static GHOST_MODEL: EntityModel = EntityModel {
    path: "silt_fulltext::tests::GhostDoc",
    entity_name: "GhostDoc",
    table: &GHOST_TABLE,
    columns: &["title"],
    capabilities: &GHOST_CAPS,
};

// Never registered with the mapper.
struct GhostDoc;

impl EntityKind for GhostDoc {
    const MODEL: &'static EntityModel = &GHOST_MODEL;
}

///
/// Provisioning
///

#[test]
fn repeated_registration_provisions_exactly_one_index() {
    mapper::register_entity(&ARTICLE_MODEL).unwrap();
    mapper::register_entity(&ARTICLE_MODEL).unwrap();
    mapper::register_entity(&ARTICLE_MODEL).unwrap();

    let hooks = mapper::ddl_hooks("articles", DdlEvent::AfterCreate);
    assert_eq!(
        hooks,
        vec!["ALTER TABLE articles ADD FULLTEXT (title, body)".to_string()]
    );
}

#[test]
fn quote_characters_cannot_escape_index_ddl() {
    mapper::register_entity(&QUOTED_MODEL).unwrap();

    let hooks = mapper::ddl_hooks("quoted_docs", DdlEvent::AfterCreate);
    assert_eq!(
        hooks,
        vec!["ALTER TABLE quoted_docs ADD FULLTEXT (ab, cd)".to_string()]
    );
}

#[test]
fn empty_column_set_is_a_declaration_error() {
    let err = mapper::register_entity(&EMPTY_MODEL).unwrap_err();
    let message = err.to_string();

    assert!(message.contains("silt_fulltext::tests::EmptyDoc"));
    assert!(message.contains("no columns"));
    assert!(mapper::ddl_hooks("empty_docs", DdlEvent::AfterCreate).is_empty());
}

#[test]
fn entity_without_declaration_is_inert() {
    mapper::register_entity(&PLAIN_MODEL).unwrap();

    assert!(mapper::ddl_hooks("plain_notes", DdlEvent::AfterCreate).is_empty());
    assert!(!PLAIN_MODEL.has_capability(CAPABILITY_NAME));
}

///
/// Compilation
///

#[test]
fn boolean_mode_renders_the_canonical_fragment() {
    mapper::register_entity(&ARTICLE_MODEL).unwrap();

    let search = FullTextSearch::new::<Article>("hello world").mode(MatchMode::Boolean);
    let compiled = SqlCompiler::new(Dialect::MySql).compile(&search).unwrap();

    assert_eq!(
        compiled.sql,
        "MATCH (articles.title, articles.body) AGAINST (? IN BOOLEAN MODE)"
    );
    assert_eq!(
        compiled.params,
        vec![Value::Text("hello world".to_string())]
    );
}

#[test]
fn aliased_reference_qualifies_columns_with_the_alias() {
    mapper::register_entity(&ARTICLE_MODEL).unwrap();

    let search = FullTextSearch::new::<Article>("hello world")
        .mode(MatchMode::Boolean)
        .aliased("a1");
    let compiled = SqlCompiler::new(Dialect::MySql).compile(&search).unwrap();

    assert_eq!(
        compiled.sql,
        "MATCH (a1.title, a1.body) AGAINST (? IN BOOLEAN MODE)"
    );
}

#[test]
fn default_mode_renders_no_trailing_modifier() {
    mapper::register_entity(&ARTICLE_MODEL).unwrap();

    let search = FullTextSearch::new::<Article>("hello world");
    let compiled = SqlCompiler::new(Dialect::MySql).compile(&search).unwrap();

    assert_eq!(
        compiled.sql,
        "MATCH (articles.title, articles.body) AGAINST (?)"
    );
}

#[test]
fn custom_mode_is_forwarded_verbatim() {
    mapper::register_entity(&ARTICLE_MODEL).unwrap();

    let search = FullTextSearch::new::<Article>("hello world")
        .mode(MatchMode::Custom("WITH QUERY EXPANSION".to_string()));
    let compiled = SqlCompiler::new(Dialect::MySql).compile(&search).unwrap();

    assert_eq!(
        compiled.sql,
        "MATCH (articles.title, articles.body) AGAINST (? WITH QUERY EXPANSION)"
    );
}

#[test]
fn compilation_is_idempotent() {
    mapper::register_entity(&ARTICLE_MODEL).unwrap();

    let search = FullTextSearch::new::<Article>("hello world").mode(MatchMode::Boolean);
    let first = SqlCompiler::new(Dialect::MySql).compile(&search).unwrap();
    let second = SqlCompiler::new(Dialect::MySql).compile(&search).unwrap();

    assert_eq!(first, second);
}

#[test]
fn unsearchable_entity_fails_compilation_by_name() {
    mapper::register_entity(&PLAIN_MODEL).unwrap();

    let search = FullTextSearch::new::<PlainNote>("anything");
    let err = SqlCompiler::new(Dialect::MySql)
        .compile(&search)
        .unwrap_err();

    assert!(
        err.to_string()
            .contains("silt_fulltext::tests::PlainNote")
    );
}

#[test]
fn unregistered_entity_is_not_activated() {
    let search = FullTextSearch::new::<GhostDoc>("anything");
    let err = SqlCompiler::new(Dialect::MySql)
        .compile(&search)
        .unwrap_err();

    assert!(err.to_string().contains("silt_fulltext::tests::GhostDoc"));
}

#[test]
fn foreign_dialect_has_no_fulltext_rule() {
    mapper::register_entity(&ARTICLE_MODEL).unwrap();

    let search = FullTextSearch::new::<Article>("hello world");
    let err = SqlCompiler::new(Dialect::Postgres)
        .compile(&search)
        .unwrap_err();

    match err {
        CompileError::NoRule { kind, dialect } => {
            assert_eq!(kind, FullTextSearch::NODE_KIND);
            assert_eq!(dialect, Dialect::Postgres);
        }
        other => panic!("expected NoRule, got {other:?}"),
    }
}

#[test]
fn empty_alias_is_an_unresolved_table_error() {
    mapper::register_entity(&ARTICLE_MODEL).unwrap();

    let search = FullTextSearch::new::<Article>("hello world").aliased("");
    let err = SqlCompiler::new(Dialect::MySql)
        .compile(&search)
        .unwrap_err();

    assert!(err.to_string().contains("empty table reference"));
}

///
/// Declaration surface
///

#[test]
fn fulltext_trait_exposes_the_declared_columns() {
    assert_eq!(Article::FULLTEXT.columns, &["title", "body"]);
    assert_eq!(
        fulltext_index(&ARTICLE_MODEL).unwrap().columns,
        Article::FULLTEXT.columns
    );
}

#[test]
fn index_displays_its_ddl_column_list() {
    assert_eq!(ARTICLE_INDEX.to_string(), "(title, body)");
    assert_eq!(QUOTED_INDEX.to_string(), "(ab, cd)");
}
