//! Graph construction and representation
//!
//! Sentence similarity graphs are collected in a [`builder::GraphBuilder`]
//! and frozen into a [`csr::CsrGraph`] for power iteration.

pub mod builder;
pub mod csr;

pub use builder::GraphBuilder;
pub use csr::CsrGraph;
