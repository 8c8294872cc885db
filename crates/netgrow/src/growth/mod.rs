//! Randomized network growth: parameters, frontier bookkeeping, the growth
//! loop, and events for observing it.
//!
//! A run starts from a seed, repeatedly draws a base node from the frontier
//! ([`OuterSet`]) and tries to give it one more link, either to a new node at a
//! random angle and distance or to an existing outer node. Each candidate link
//! must pass [`crate::geometry::can_connect`]. A base node that fails
//! `num_tries` times in one visit is frozen.
pub mod engine;
pub mod events;
pub mod frontier;
pub mod params;

pub use engine::{GrowthEngine, GrowthReport, Termination};
pub use frontier::OuterSet;
pub use params::GrowthParams;
