#![forbid(unsafe_code)]
//! netgrow: randomized growth of planar, road-like networks.
//!
//! Modules:
//! - distribution: weighted target-degree table and its sampler
//! - geometry: angle, distance and crossing checks for candidate links
//! - network: arena of nodes and links produced by a run
//! - growth: parameters, frontier, growth engine, events
//! - random: explicit-generator helpers shared by the above
//!
//! The generated [`network::Network`] is plain data; exporting or rendering it
//! is left to the caller.
pub mod distribution;
pub mod error;
pub mod geometry;
pub mod growth;
pub mod network;
pub mod random;

/// Convenient re-exports for common types. Import with `use netgrow::prelude::*;`.
pub mod prelude {
    pub use crate::distribution::{DegreeDistribution, DegreeSampler};
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{angles_ok, can_connect, distance_ok, Endpoint};
    pub use crate::growth::events::{
        EventSink, FnSink, FreezeReason, GrowthEvent, GrowthEventKind, MultiSink, RunSummary,
        VecSink,
    };
    pub use crate::growth::{GrowthEngine, GrowthParams, GrowthReport, OuterSet, Termination};
    pub use crate::network::{Link, LinkId, Network, Node, NodeId};
}
