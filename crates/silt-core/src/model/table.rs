use serde::Serialize;

///
/// TableModel
/// Backing-table metadata for one mapped entity.
///
/// The name is taken verbatim from the declaration; identifier quoting is
/// owned by whatever executes the emitted SQL.
///

#[derive(Debug, Serialize)]
pub struct TableModel {
    pub name: &'static str,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<&'static str>,
}

impl TableModel {
    #[must_use]
    /// Fully-qualified table name, schema-prefixed when one is declared.
    pub fn fullname(&self) -> String {
        match self.schema {
            Some(schema) => format!("{schema}.{}", self.name),
            None => self.name.to_string(),
        }
    }
}
