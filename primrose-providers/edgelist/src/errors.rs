use std::fmt;

use primrose_core::GraphError;
use thiserror::Error;

/// Column of an edge line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EdgeField {
    Source,
    Destination,
    Weight,
}

impl EdgeField {
    /// Returns the lowercase column name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Destination => "destination",
            Self::Weight => "weight",
        }
    }
}

impl fmt::Display for EdgeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while loading an edge list. Line numbers are 1-based.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum EdgeListError {
    #[error("edge list is empty")]
    EmptyInput,
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: header must be `<vertex count> <edge count>`")]
    MalformedHeader { line: usize },
    #[error("line {line}: missing {field} field")]
    MissingField { line: usize, field: EdgeField },
    #[error("line {line}: unexpected trailing field `{raw}`")]
    UnexpectedField { line: usize, raw: String },
    #[error("line {line}: `{raw}` is not a valid vertex identifier")]
    InvalidVertex { line: usize, raw: String },
    #[error("line {line}: `{raw}` is not a valid weight")]
    InvalidWeight { line: usize, raw: String },
    #[error("header declares {declared} edges but {found} were read")]
    EdgeCountMismatch { declared: usize, found: usize },
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Stable codes describing [`EdgeListError`] variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum EdgeListErrorCode {
    EmptyInput,
    Io,
    MalformedHeader,
    MissingField,
    UnexpectedField,
    InvalidVertex,
    InvalidWeight,
    EdgeCountMismatch,
    GraphFailure,
}

impl EdgeListErrorCode {
    /// Return the stable machine-readable representation of this code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyInput => "EDGELIST_EMPTY_INPUT",
            Self::Io => "EDGELIST_IO",
            Self::MalformedHeader => "EDGELIST_MALFORMED_HEADER",
            Self::MissingField => "EDGELIST_MISSING_FIELD",
            Self::UnexpectedField => "EDGELIST_UNEXPECTED_FIELD",
            Self::InvalidVertex => "EDGELIST_INVALID_VERTEX",
            Self::InvalidWeight => "EDGELIST_INVALID_WEIGHT",
            Self::EdgeCountMismatch => "EDGELIST_EDGE_COUNT_MISMATCH",
            Self::GraphFailure => "EDGELIST_GRAPH_FAILURE",
        }
    }
}

impl fmt::Display for EdgeListErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EdgeListError {
    /// Retrieve the stable [`EdgeListErrorCode`] for this error.
    #[must_use]
    pub const fn code(&self) -> EdgeListErrorCode {
        match self {
            Self::EmptyInput => EdgeListErrorCode::EmptyInput,
            Self::Io(_) => EdgeListErrorCode::Io,
            Self::MalformedHeader { .. } => EdgeListErrorCode::MalformedHeader,
            Self::MissingField { .. } => EdgeListErrorCode::MissingField,
            Self::UnexpectedField { .. } => EdgeListErrorCode::UnexpectedField,
            Self::InvalidVertex { .. } => EdgeListErrorCode::InvalidVertex,
            Self::InvalidWeight { .. } => EdgeListErrorCode::InvalidWeight,
            Self::EdgeCountMismatch { .. } => EdgeListErrorCode::EdgeCountMismatch,
            Self::Graph(_) => EdgeListErrorCode::GraphFailure,
        }
    }
}
