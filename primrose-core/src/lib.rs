//! Primrose core library.
//!
//! Minimum spanning trees of weighted undirected graphs with Prim's
//! algorithm, in a naive `O(V·E)` variant and a binary-heap `O(E log E)`
//! variant with lazy deletion.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod graph;
mod mst;

#[cfg(test)]
mod test_utils;

pub use crate::{
    error::{GraphError, GraphErrorCode, MstError, MstErrorCode, Result},
    graph::{Edge, Graph, GraphBuilder, Neighbors, Vertex},
    mst::{
        MinimumSpanningTree, MstEdge, PrimStrategy, heap_prim, heap_prim_from, naive_prim,
        naive_prim_from,
    },
};
