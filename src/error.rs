//! Error types surfaced by the library API.

use std::fmt;

/// Failures of the classification / analysis pipeline.
#[derive(Clone, Debug, PartialEq)]
pub enum AnalysisError {
    /// Image width or height is zero.
    InvalidGeometry { width: u32, height: u32 },
    /// A tunable parameter is outside its valid domain.
    InvalidParams { name: &'static str, value: f64 },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGeometry { width, height } => {
                write!(f, "invalid image geometry {width}x{height}: both sides must be > 0")
            }
            Self::InvalidParams { name, value } => {
                write!(f, "invalid parameter {name}={value}")
            }
        }
    }
}

impl std::error::Error for AnalysisError {}

/// Failures while loading or validating a scenario catalogue.
#[derive(Debug)]
pub enum CatalogueError {
    Io { path: String, source: std::io::Error },
    Parse(serde_json::Error),
    MissingEntry { id: String },
    EmptyDescription { id: String },
}

impl fmt::Display for CatalogueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to read catalogue {path}: {source}"),
            Self::Parse(err) => write!(f, "failed to parse catalogue: {err}"),
            Self::MissingEntry { id } => write!(f, "catalogue is missing scenario {id}"),
            Self::EmptyDescription { id } => {
                write!(f, "catalogue scenario {id} has an empty description")
            }
        }
    }
}

impl std::error::Error for CatalogueError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CatalogueError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Failures while reading detector output.
#[derive(Clone, Debug, PartialEq)]
pub enum DetectionError {
    /// A prediction line could not be parsed.
    MalformedLine { line: usize, reason: String },
    /// Hit JSON did not have the expected `[[x, y], ...]` shape.
    InvalidJson(String),
    Geometry(AnalysisError),
}

impl fmt::Display for DetectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedLine { line, reason } => {
                write!(f, "malformed detection on line {line}: {reason}")
            }
            Self::InvalidJson(reason) => write!(f, "invalid hit list: {reason}"),
            Self::Geometry(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for DetectionError {}

impl From<AnalysisError> for DetectionError {
    fn from(err: AnalysisError) -> Self {
        Self::Geometry(err)
    }
}
