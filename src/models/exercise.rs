use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

use super::literal::{Literal, value_text};
use crate::error::{GenerateError, Result};
use crate::naming::slugify;

pub const MISSING_ID: &str = "<no-id>";
pub const MISSING_TITLE: &str = "<no-title>";

const DEFAULT_OBJECTIVES: [&str; 3] = [
    "Understand the concept",
    "Provide working code or proof-of-concept",
    "Add tests or verification steps",
];

const DEFAULT_ACCEPTANCE: [&str; 2] = [
    "Module builds with `mvn test` (for code tasks)",
    "README documents approach and pitfalls",
];

/// Integer ids stay numeric; any other value is kept as its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemId {
    Int(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value.as_i64() {
            Some(n) => ItemId::Int(n),
            None => ItemId::Text(value_text(value)),
        })
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Int(n) => write!(f, "{}", n),
            ItemId::Text(s) => write!(f, "{}", s),
        }
    }
}

// --- Lenient field readers: `null` means "not given" ---

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn optional_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?.map(value_text))
}

fn texts(value: Value) -> Vec<String> {
    match value {
        Value::Sequence(items) => items.into_iter().map(value_text).collect(),
        Value::Null => Vec::new(),
        scalar => vec![value_text(scalar)],
    }
}

fn text_list<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Vec<String>, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?
        .map(texts)
        .unwrap_or_default())
}

fn optional_text_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<Vec<String>>, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?.map(texts))
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TestCase {
    #[serde(default, deserialize_with = "null_as_default")]
    pub args: Vec<Literal>,
    #[serde(default)]
    pub expected: Literal,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExerciseItem {
    #[serde(default)]
    pub id: Option<ItemId>,
    #[serde(default, deserialize_with = "optional_text")]
    pub title: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "optional_text")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "text_list")]
    pub topics: Vec<String>,
    #[serde(default)]
    pub difficulty: Option<Literal>,
    #[serde(default, deserialize_with = "optional_text_list")]
    pub learning_objectives: Option<Vec<String>>,
    #[serde(default, deserialize_with = "optional_text_list")]
    pub acceptance_criteria: Option<Vec<String>>,
    #[serde(default, deserialize_with = "optional_text")]
    pub entry_class: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub method_signature: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub test_cases: Vec<TestCase>,
}

impl ExerciseItem {
    pub fn id_text(&self) -> String {
        self.id
            .as_ref()
            .map(ItemId::to_string)
            .unwrap_or_else(|| MISSING_ID.to_string())
    }

    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or(MISSING_TITLE)
    }

    /// `<id>_<slug>`, also used as the module's artifact id.
    pub fn module_dir_name(&self) -> String {
        format!("{}_{}", self.id_text(), slugify(self.title_text()))
    }

    pub fn objectives(&self) -> Vec<String> {
        self.learning_objectives
            .clone()
            .unwrap_or_else(|| DEFAULT_OBJECTIVES.iter().map(|s| s.to_string()).collect())
    }

    pub fn acceptance(&self) -> Vec<String> {
        self.acceptance_criteria
            .clone()
            .unwrap_or_else(|| DEFAULT_ACCEPTANCE.iter().map(|s| s.to_string()).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExerciseKind {
    Code,
    NonCode(String),
}

impl ExerciseKind {
    pub const DEFAULT_NON_CODE: &'static str = "env";

    pub fn as_str(&self) -> &str {
        match self {
            ExerciseKind::Code => "code",
            ExerciseKind::NonCode(kind) => kind,
        }
    }
}

/// A possibly dotted entry class: `time.TimeUtils` lives in the `time`
/// sub-package of the module package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryClass {
    pub subpackage: Option<String>,
    pub name: String,
}

impl EntryClass {
    pub fn parse(text: &str) -> Option<Self> {
        let segments: Vec<&str> = text
            .split('.')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        let (name, rest) = segments.split_last()?;
        let subpackage = if rest.is_empty() {
            None
        } else {
            Some(rest.join("."))
        };
        Some(Self {
            subpackage,
            name: name.to_string(),
        })
    }

    pub fn package_in(&self, base: &str) -> String {
        match &self.subpackage {
            Some(sub) => format!("{}.{}", base, sub),
            None => base.to_string(),
        }
    }
}

impl fmt::Display for EntryClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.subpackage {
            Some(sub) => write!(f, "{}.{}", sub, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

pub fn load_exercises(path: &Path) -> Result<Vec<ExerciseItem>> {
    if !path.exists() {
        return Err(GenerateError::InputMissing {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| GenerateError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_exercises(&content)
}

/// An empty document is an empty exercise list.
pub fn parse_exercises(content: &str) -> Result<Vec<ExerciseItem>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let items: Option<Vec<ExerciseItem>> = serde_yaml::from_str(content)?;
    Ok(items.unwrap_or_default())
}
