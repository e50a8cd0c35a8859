use serde::Serialize;

///
/// Value
/// Bound-parameter payload carried alongside compiled SQL.
///
/// Deliberately small: only what a query parameter needs, not a full
/// column type system.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
#[remain::sorted]
pub enum Value {
    Bool(bool),
    Float(f64),
    Int(i64),
    Text(String),
    Uint(u64),
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Uint(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_impls_pick_the_matching_variant() {
        assert_eq!(Value::from("hello"), Value::Text("hello".to_string()));
        assert_eq!(Value::from(7_i64), Value::Int(7));
        assert_eq!(Value::from(7_u64), Value::Uint(7));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(0.5_f64), Value::Float(0.5));
    }
}
