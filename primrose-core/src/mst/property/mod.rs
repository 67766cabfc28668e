//! Property-based tests for the Prim builders.
//!
//! Verifies both builders against a sequential Kruskal oracle, validates
//! structural invariants (edge count, acyclicity, spanning, edge
//! membership), and checks that repeated and concurrent runs over one
//! shared graph are deterministic, across graph topologies with varied
//! weight distributions.

mod determinism;
mod equivalence;
mod oracle;
mod strategies;
mod structural;
