use std::path::PathBuf;

use thiserror::Error;

/// Failure to parse a single-line method signature.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    #[error("Can't parse method signature: {signature:?}")]
    Malformed { signature: String },

    #[error("Can't parse parameter part: {segment:?} in signature {signature:?}")]
    Parameter { segment: String, signature: String },
}

/// A value with no Java literal form. Every variant keeps the offending
/// value's text and its runtime kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LiteralError {
    #[error("Unsupported literal type: {value} ({kind})")]
    Unsupported { value: String, kind: &'static str },

    #[error("Expected list of lists for nested arrays, found {value} ({kind})")]
    NestedRow { value: String, kind: &'static str },

    #[error("Nested array element is not an integer: {value} ({kind})")]
    NestedElement { value: String, kind: &'static str },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TestGenError {
    #[error("Test case {case}: args length {args} != params {params}")]
    ArgCount {
        case: usize,
        args: usize,
        params: usize,
    },

    #[error("Test case {case}: {source}")]
    Literal {
        case: usize,
        #[source]
        source: LiteralError,
    },
}

/// Filesystem failure while scaffolding a module or the project root.
#[derive(Error, Debug)]
pub enum EmitError {
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to set permissions on {}: {source}", .path.display())]
    Permissions {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Conditions that end the run before any module is processed.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("{} not found in current directory. Create it first.", .path.display())]
    InputMissing { path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse exercise definitions: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Emit(#[from] EmitError),
}

pub type Result<T> = std::result::Result<T, GenerateError>;
