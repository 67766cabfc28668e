//! Error types for the primrose core library.
//!
//! Defines the graph and spanning-tree error enums exposed by the public API,
//! each paired with a stable, machine-readable code.

use std::{fmt, sync::Arc};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while building or querying a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// An edge carried a NaN or infinite weight.
    #[error("edge {index} ({left}, {right}) has non-finite weight {weight}")]
    NonFiniteWeight {
        /// Position of the offending edge in insertion order.
        index: usize,
        /// Rendered left endpoint.
        left: Arc<str>,
        /// Rendered right endpoint.
        right: Arc<str>,
        /// The rejected weight.
        weight: f64,
    },
    /// A lookup named a vertex that is not part of the graph.
    #[error("vertex `{vertex}` is not present in the graph")]
    UnknownVertex {
        /// Rendered identifier of the missing vertex.
        vertex: Arc<str>,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// Edge data was structurally invalid.
        MalformedInput => NonFiniteWeight { .. } => "GRAPH_MALFORMED_INPUT",
        /// A lookup named a vertex that is not part of the graph.
        UnknownVertex => UnknownVertex { .. } => "GRAPH_UNKNOWN_VERTEX",
    }
}

/// Errors returned while computing a minimum spanning tree.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MstError {
    /// The graph has no vertices, so there is no start vertex.
    #[error("cannot compute an MST for an empty graph")]
    EmptyGraph,
    /// The frontier stopped growing before it covered every vertex.
    #[error("graph is disconnected: reached {reached} of {vertex_count} vertices")]
    Disconnected {
        /// Number of vertices in the frontier when expansion stalled.
        reached: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// A graph lookup failed, for example an unknown start vertex.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// The graph has no vertices.
        EmptyGraph => EmptyGraph => "MST_EMPTY_GRAPH",
        /// The frontier stopped growing before it covered every vertex.
        DisconnectedGraph => Disconnected { .. } => "MST_DISCONNECTED_GRAPH",
        /// A graph lookup failed.
        GraphFailure => Graph(..) => "MST_GRAPH_FAILURE",
    }
}

impl MstError {
    /// Retrieve the inner [`GraphErrorCode`] when the error originated in the graph.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the spanning-tree builders.
pub type Result<T> = core::result::Result<T, MstError>;
