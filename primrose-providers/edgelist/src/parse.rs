//! Line-level parsing for the edge-list format.

use std::str::SplitWhitespace;

use crate::errors::{EdgeField, EdgeListError};

/// Parsed `<vertex count> <edge count>` header.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Header {
    pub(crate) vertices: usize,
    pub(crate) edges: usize,
}

pub(crate) fn header(line: usize, text: &str) -> Result<Header, EdgeListError> {
    let malformed = || EdgeListError::MalformedHeader { line };
    let mut fields = text.split_whitespace();
    let mut count = || -> Result<usize, EdgeListError> {
        fields
            .next()
            .and_then(|raw| raw.parse().ok())
            .ok_or_else(malformed)
    };
    let vertices = count()?;
    let edges = count()?;
    if fields.next().is_some() {
        return Err(malformed());
    }
    Ok(Header { vertices, edges })
}

pub(crate) fn edge(line: usize, text: &str) -> Result<(u64, u64, f64), EdgeListError> {
    let mut fields = Fields {
        line,
        inner: text.split_whitespace(),
    };
    let source = fields.vertex(EdgeField::Source)?;
    let target = fields.vertex(EdgeField::Destination)?;
    let weight = fields.weight()?;
    if let Some(raw) = fields.inner.next() {
        return Err(EdgeListError::UnexpectedField {
            line,
            raw: raw.to_owned(),
        });
    }
    Ok((source, target, weight))
}

struct Fields<'a> {
    line: usize,
    inner: SplitWhitespace<'a>,
}

impl<'a> Fields<'a> {
    fn next(&mut self, field: EdgeField) -> Result<&'a str, EdgeListError> {
        self.inner.next().ok_or(EdgeListError::MissingField {
            line: self.line,
            field,
        })
    }

    fn vertex(&mut self, field: EdgeField) -> Result<u64, EdgeListError> {
        let raw = self.next(field)?;
        raw.parse().map_err(|_| EdgeListError::InvalidVertex {
            line: self.line,
            raw: raw.to_owned(),
        })
    }

    /// Non-finite weights parse here and are rejected by the graph builder.
    fn weight(&mut self) -> Result<f64, EdgeListError> {
        let raw = self.next(EdgeField::Weight)?;
        raw.parse().map_err(|_| EdgeListError::InvalidWeight {
            line: self.line,
            raw: raw.to_owned(),
        })
    }
}
