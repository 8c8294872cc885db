//! Event types and sinks for observing growth runs.
//!
//! This module defines [`GrowthEvent`] and a set of sinks to collect, forward,
//! or fan out events while [`crate::growth::GrowthEngine`] builds a network.
use glam::Vec2;

use crate::growth::{GrowthParams, GrowthReport};
use crate::network::{LinkId, NodeId};

/// Why a node left the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreezeReason {
    /// The node reached its target degree.
    Saturated,
    /// A visit used up its retry budget without adding a link.
    Exhausted,
}

/// Describes events emitted while a network grows.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum GrowthEvent {
    /// Emitted once before the first base node is drawn.
    RunStarted {
        /// Parameters of the run.
        params: GrowthParams,
        /// Nodes present before growth (seed included).
        seed_nodes: usize,
    },

    /// Emitted when a node is added to the network.
    NodeCreated {
        id: NodeId,
        position: Vec2,
        /// Degree the node is meant to reach.
        target_degree: usize,
    },

    /// Emitted when a link is committed.
    LinkCreated {
        id: LinkId,
        from: NodeId,
        to: NodeId,
        /// True if both endpoints existed before the link.
        reconnect: bool,
    },

    /// Emitted when a node leaves the frontier for good.
    NodeFrozen { id: NodeId, reason: FreezeReason },

    /// Emitted once the run terminates.
    RunFinished {
        /// Summary of the finished run, without the network itself.
        summary: RunSummary,
    },
}

/// Discriminant of [`GrowthEvent`], used by sinks to filter what they receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrowthEventKind {
    RunStarted,
    NodeCreated,
    LinkCreated,
    NodeFrozen,
    RunFinished,
}

impl GrowthEvent {
    pub fn kind(&self) -> GrowthEventKind {
        match self {
            GrowthEvent::RunStarted { .. } => GrowthEventKind::RunStarted,
            GrowthEvent::NodeCreated { .. } => GrowthEventKind::NodeCreated,
            GrowthEvent::LinkCreated { .. } => GrowthEventKind::LinkCreated,
            GrowthEvent::NodeFrozen { .. } => GrowthEventKind::NodeFrozen,
            GrowthEvent::RunFinished { .. } => GrowthEventKind::RunFinished,
        }
    }
}

/// Counters of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub nodes: usize,
    pub links: usize,
    pub visits: usize,
    pub attempts: usize,
    pub rejected: usize,
    pub satisfied: bool,
}

impl From<&GrowthReport> for RunSummary {
    fn from(report: &GrowthReport) -> Self {
        Self {
            nodes: report.network.node_count(),
            links: report.network.link_count(),
            visits: report.visits,
            attempts: report.attempts,
            rejected: report.rejected,
            satisfied: report.termination.is_satisfied(),
        }
    }
}

/// A generic event sink that accepts [`GrowthEvent`]s.
pub trait EventSink {
    /// Whether events of `kind` should be built and sent at all.
    fn wants(&self, _kind: GrowthEventKind) -> bool {
        true
    }

    fn send(&mut self, event: GrowthEvent);
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn wants(&self, _kind: GrowthEventKind) -> bool {
        false
    }

    #[inline]
    fn send(&mut self, _event: GrowthEvent) {}
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(GrowthEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(GrowthEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(GrowthEvent),
{
    #[inline]
    fn send(&mut self, event: GrowthEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects events in a `Vec`, optionally only some kinds.
#[derive(Default)]
pub struct VecSink {
    events: Vec<GrowthEvent>,
    only: Option<Vec<GrowthEventKind>>,
}

impl VecSink {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            only: None,
        }
    }

    /// Collect only events of the listed kinds.
    pub fn filtered(kinds: impl IntoIterator<Item = GrowthEventKind>) -> Self {
        Self {
            events: Vec::new(),
            only: Some(kinds.into_iter().collect()),
        }
    }

    pub fn into_inner(self) -> Vec<GrowthEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[GrowthEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    fn wants(&self, kind: GrowthEventKind) -> bool {
        self.only.as_ref().is_none_or(|kinds| kinds.contains(&kind))
    }

    #[inline]
    fn send(&mut self, event: GrowthEvent) {
        self.events.push(event);
    }
}

/// Fan-out sink that forwards each event to every contained sink that wants it.
pub struct MultiSink<S: EventSink> {
    pub(crate) sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }

    pub fn into_inner(self) -> Vec<S> {
        self.sinks
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn wants(&self, kind: GrowthEventKind) -> bool {
        self.sinks.iter().any(|s| s.wants(kind))
    }

    fn send(&mut self, event: GrowthEvent) {
        let kind = event.kind();
        for sink in self.sinks.iter_mut().filter(|s| s.wants(kind)) {
            sink.send(event.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frozen(id: u32) -> GrowthEvent {
        GrowthEvent::NodeFrozen {
            id: NodeId(id),
            reason: FreezeReason::Exhausted,
        }
    }

    #[test]
    fn unit_sink_wants_nothing() {
        assert!(!EventSink::wants(&(), GrowthEventKind::RunStarted));
    }

    #[test]
    fn vec_sink_filters_by_kind() {
        let sink = VecSink::filtered([GrowthEventKind::NodeFrozen]);
        assert!(sink.wants(GrowthEventKind::NodeFrozen));
        assert!(!sink.wants(GrowthEventKind::LinkCreated));
        assert!(VecSink::new().wants(GrowthEventKind::LinkCreated));
    }

    #[test]
    fn multi_sink_fans_out_to_interested_sinks() {
        let mut multi = MultiSink::with_sinks(vec![
            VecSink::new(),
            VecSink::filtered([GrowthEventKind::RunFinished]),
        ]);
        assert!(multi.wants(GrowthEventKind::NodeFrozen));
        multi.send(frozen(3));
        let sinks = multi.into_inner();
        assert_eq!(sinks[0].len(), 1);
        assert!(sinks[1].is_empty());
        assert!(matches!(
            sinks[0].as_slice()[0],
            GrowthEvent::NodeFrozen {
                id: NodeId(3),
                reason: FreezeReason::Exhausted
            }
        ));
    }

    #[test]
    fn fn_sink_invokes_callback() {
        let mut count = 0;
        let mut sink = FnSink::new(|event: GrowthEvent| {
            assert_eq!(event.kind(), GrowthEventKind::NodeFrozen);
            count += 1;
        });
        sink.send(frozen(0));
        sink.send(frozen(1));
        drop(sink);
        assert_eq!(count, 2);
    }
}
