//! Hierarchical, dot-separated accessibility identifiers.
//!
//! A prefix is threaded explicitly down a view tree; each node that asks for
//! an identifier composes its fragment onto the inherited prefix and hands
//! the result to its children.

pub mod cli;
pub mod compose;
pub mod report;
pub mod trace;
pub mod tree;

pub use compose::composer::compose;
pub use compose::prefix::Prefix;
