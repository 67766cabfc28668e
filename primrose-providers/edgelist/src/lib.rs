//! Edge-list provider that parses whitespace-separated text into a
//! [`primrose_core::Graph`].
//!
//! The format is a header line `<vertex count> <edge count>` followed by one
//! `<source> <destination> <weight>` line per edge. Blank lines are skipped.

mod errors;
mod parse;
mod provider;

pub use errors::{EdgeListError, EdgeListErrorCode, EdgeField};
pub use provider::EdgeListProvider;
