use std::fmt::{self, Display};

///
/// MatchMode
///
/// Modifier appended to `AGAINST (…)`. The known MySQL modifiers get
/// variants; `Custom` is forwarded verbatim and left unvalidated, since
/// what the server accepts is the caller's concern, not this layer's.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum MatchMode {
    /// Natural-language ranked search; renders no modifier.
    #[default]
    Natural,
    Boolean,
    NaturalLanguage,
    QueryExpansion,
    NaturalLanguageQueryExpansion,
    Custom(String),
}

impl MatchMode {
    #[must_use]
    pub fn as_sql(&self) -> &str {
        match self {
            Self::Natural => "",
            Self::Boolean => "IN BOOLEAN MODE",
            Self::NaturalLanguage => "IN NATURAL LANGUAGE MODE",
            Self::QueryExpansion => "WITH QUERY EXPANSION",
            Self::NaturalLanguageQueryExpansion => {
                "IN NATURAL LANGUAGE MODE WITH QUERY EXPANSION"
            }
            Self::Custom(text) => text,
        }
    }
}

impl Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_modifiers_render_mysql_syntax() {
        assert_eq!(MatchMode::Natural.as_sql(), "");
        assert_eq!(MatchMode::Boolean.as_sql(), "IN BOOLEAN MODE");
        assert_eq!(
            MatchMode::NaturalLanguage.as_sql(),
            "IN NATURAL LANGUAGE MODE"
        );
        assert_eq!(MatchMode::QueryExpansion.as_sql(), "WITH QUERY EXPANSION");
        assert_eq!(
            MatchMode::NaturalLanguageQueryExpansion.as_sql(),
            "IN NATURAL LANGUAGE MODE WITH QUERY EXPANSION"
        );
    }

    #[test]
    fn custom_modifier_is_forwarded_verbatim() {
        let mode = MatchMode::Custom("IN FUTURE MODE".to_string());
        assert_eq!(mode.to_string(), "IN FUTURE MODE");
    }

    #[test]
    fn default_is_natural() {
        assert_eq!(MatchMode::default(), MatchMode::Natural);
    }
}
