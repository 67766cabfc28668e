//! Edge-list provider loading graphs from readers and files.
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use primrose_core::Graph;
use tracing::{debug, instrument, warn};

use crate::{errors::EdgeListError, parse};

/// A graph loaded from the edge-list text format.
///
/// Vertices are `u64` identifiers and are registered in order of first
/// appearance, so the first endpoint of the first edge is the default start
/// vertex for the spanning-tree builders.
#[derive(Debug)]
pub struct EdgeListProvider {
    name: String,
    declared_vertices: usize,
    graph: Graph<u64>,
}

impl EdgeListProvider {
    /// Parses an edge list from `reader`.
    ///
    /// # Errors
    /// Returns [`EdgeListError::EmptyInput`] when the input holds no header,
    /// a line-level parse error for malformed lines,
    /// [`EdgeListError::EdgeCountMismatch`] when the header's edge count is
    /// wrong, and [`EdgeListError::Graph`] for non-finite weights.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    /// use primrose_providers_edgelist::EdgeListProvider;
    ///
    /// let provider = EdgeListProvider::try_from_reader("demo", Cursor::new("3 2\n1 2 3\n2 3 7\n"))?;
    /// assert_eq!(provider.graph().vertex_count(), 3);
    /// assert_eq!(provider.declared_vertices(), 3);
    /// # Ok::<(), primrose_providers_edgelist::EdgeListError>(())
    /// ```
    #[instrument(name = "edgelist.load", err, skip_all, fields(name = %name.as_ref()))]
    pub fn try_from_reader<R: BufRead>(
        name: impl AsRef<str> + Into<String>,
        reader: R,
    ) -> Result<Self, EdgeListError> {
        let mut header = None;
        let mut edges = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let text = line.trim();
            if text.is_empty() {
                continue;
            }
            let number = index + 1;
            match header {
                None => header = Some(parse::header(number, text)?),
                Some(_) => edges.push(parse::edge(number, text)?),
            }
        }

        let header = header.ok_or(EdgeListError::EmptyInput)?;
        if header.edges != edges.len() {
            return Err(EdgeListError::EdgeCountMismatch {
                declared: header.edges,
                found: edges.len(),
            });
        }

        let graph = Graph::from_edges(edges)?;
        if graph.vertex_count() != header.vertices {
            warn!(
                declared = header.vertices,
                found = graph.vertex_count(),
                "declared vertex count differs from the distinct endpoints"
            );
        }
        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "edge list loaded"
        );

        Ok(Self {
            name: name.into(),
            declared_vertices: header.vertices,
            graph,
        })
    }

    /// Parses the edge list stored at `path`.
    ///
    /// # Errors
    /// Returns [`EdgeListError::Io`] when the file cannot be opened, plus
    /// every error [`Self::try_from_reader`] can return.
    pub fn try_from_path(
        name: impl AsRef<str> + Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self, EdgeListError> {
        let file = File::open(path)?;
        Self::try_from_reader(name, BufReader::new(file))
    }

    /// Returns the data source name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parsed graph.
    #[must_use]
    pub fn graph(&self) -> &Graph<u64> {
        &self.graph
    }

    /// Returns the vertex count announced by the header.
    #[must_use]
    pub fn declared_vertices(&self) -> usize {
        self.declared_vertices
    }

    /// Consumes the provider and returns the graph.
    #[must_use]
    pub fn into_graph(self) -> Graph<u64> {
        self.graph
    }
}
