//! Error types for the grouping engine.

use thiserror::Error;

/// Errors surfaced by [`crate::engine::generate`] and the components it
/// drives. Every error is terminal for the call; no partial grouping is
/// ever returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GroupError {
    #[error("no items provided")]
    NoItems,

    #[error("number of groups must be at least 1")]
    InvalidGroupCount,

    #[error("pair refers to unknown item: {0}")]
    UnknownItemReference(String),

    #[error("exact equal groups requested but {total} items do not divide into {groups} groups; allow near-equal (±1) sizes to relax this")]
    NotDivisible { total: usize, groups: usize },

    #[error("{reason}")]
    PackingInfeasible { reason: PackingFailure },
}

/// Why the packer produced no grouping.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackingFailure {
    /// Deterministic: some component can never fit into any bin.
    #[error("a component of {size} items is larger than any group capacity ({max_capacity})")]
    ComponentTooLarge { size: usize, max_capacity: usize },

    /// Heuristic: the randomized search gave up. A retry or a larger
    /// attempt budget may still succeed.
    #[error("no packing found after {attempts} attempts; allowing ±1 group sizes or removing pairs may help")]
    AttemptsExhausted { attempts: usize },
}
