use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

/// A test-case value as it appears in the definition file.
///
/// Shapes with no Java literal form (mappings, tagged values, integers past
/// the signed 64-bit range) are kept as `Unsupported` so that only the item
/// using them fails, not the whole load.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Literal {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array(Vec<Literal>),
    Unsupported { repr: String, kind: &'static str },
}

impl<'de> Deserialize<'de> for Literal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Literal::from)
    }
}

impl From<Value> for Literal {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Literal::Null,
            Value::Bool(b) => Literal::Bool(b),
            Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => Literal::Int(i),
                (None, Some(f)) if n.is_f64() => Literal::Float(f),
                _ => Literal::Unsupported {
                    repr: n.to_string(),
                    kind: "out-of-range integer",
                },
            },
            Value::String(s) => Literal::Str(s),
            Value::Sequence(items) => Literal::Array(items.into_iter().map(Literal::from).collect()),
            Value::Mapping(map) => Literal::Unsupported {
                repr: yaml_repr(&Value::Mapping(map)),
                kind: "mapping",
            },
            Value::Tagged(tagged) => Literal::Unsupported {
                repr: format!("{} {}", tagged.tag, yaml_repr(&tagged.value)),
                kind: "tagged value",
            },
        }
    }
}

fn yaml_repr(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("{:?}", value))
}

/// Scalars as plain text (`1.5`, `true`); anything else as its JSON form.
pub(crate) fn value_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s,
        other => yaml_repr(&other),
    }
}

impl Literal {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Literal::Null => "null",
            Literal::Bool(_) => "boolean",
            Literal::Int(_) => "integer",
            Literal::Float(_) => "float",
            Literal::Str(_) => "string",
            Literal::Array(_) => "sequence",
            Literal::Unsupported { kind, .. } => *kind,
        }
    }

    /// Null, false, zero, and empty strings or sequences are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Literal::Null => false,
            Literal::Bool(b) => *b,
            Literal::Int(n) => *n != 0,
            Literal::Float(f) => *f != 0.0,
            Literal::Str(s) => !s.is_empty(),
            Literal::Array(items) => !items.is_empty(),
            Literal::Unsupported { .. } => true,
        }
    }

    /// Text for prose contexts such as the README; strings are not quoted.
    pub fn plain_text(&self) -> String {
        match self {
            Literal::Null => String::new(),
            Literal::Str(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// JSON-like representation used in error messages.
impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Null => write!(f, "null"),
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Int(n) => write!(f, "{}", n),
            Literal::Float(x) => write!(f, "{:?}", x),
            Literal::Str(s) => write!(f, "{:?}", s),
            Literal::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Literal::Unsupported { repr, .. } => write!(f, "{}", repr),
        }
    }
}
