//! The growth loop: draws base nodes from the frontier and extends them.
use std::f32::consts::FRAC_PI_2;

use glam::Vec2;
use rand::RngCore;
use tracing::{debug, info, warn};

use crate::distribution::{DegreeDistribution, DegreeSampler};
use crate::error::Result;
use crate::geometry::{can_connect, Endpoint};
use crate::growth::events::{EventSink, FreezeReason, GrowthEvent, GrowthEventKind, RunSummary};
use crate::growth::frontier::OuterSet;
use crate::growth::GrowthParams;
use crate::network::{Network, NodeId};
use crate::random::{chance, rand_angle, rand_index, rand_range};

/// How a run ended. Neither outcome is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The network reached the requested node count.
    Satisfied,
    /// The frontier emptied first; the network is smaller than requested.
    Stalled,
}

impl Termination {
    pub fn is_satisfied(self) -> bool {
        matches!(self, Termination::Satisfied)
    }
}

/// Result of a growth run.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct GrowthReport {
    /// The grown network, seed included.
    pub network: Network,
    pub termination: Termination,
    /// Base nodes drawn from the frontier.
    pub visits: usize,
    /// Extension attempts made across all visits.
    pub attempts: usize,
    /// Attempts whose candidate failed validation.
    pub rejected: usize,
}

/// Grows random networks for a fixed set of parameters and degree distribution.
///
/// Construction validates everything up front, so a run never fails half way
/// for configuration reasons.
#[derive(Debug, Clone)]
pub struct GrowthEngine {
    params: GrowthParams,
    distribution: DegreeDistribution,
    sampler: DegreeSampler,
}

impl GrowthEngine {
    pub fn new(params: GrowthParams, distribution: DegreeDistribution) -> Result<Self> {
        params.validate()?;
        let sampler = distribution.sampler()?;
        Ok(Self {
            params,
            distribution,
            sampler,
        })
    }

    pub fn params(&self) -> &GrowthParams {
        &self.params
    }

    pub fn distribution(&self) -> &DegreeDistribution {
        &self.distribution
    }

    /// Grows a network from a single seed node at the origin until it holds
    /// `params.requested_nodes` nodes or the frontier empties.
    pub fn create_net(&self, rng: &mut dyn RngCore) -> Result<GrowthReport> {
        self.create_net_from_with_events(Network::new(), rng, &mut ())
    }

    pub fn create_net_with_events(
        &self,
        rng: &mut dyn RngCore,
        sink: &mut dyn EventSink,
    ) -> Result<GrowthReport> {
        self.create_net_from_with_events(Network::new(), rng, sink)
    }

    /// Grows an existing network. Nodes below their target degree form the
    /// initial frontier; an empty network gets a seed node at the origin.
    pub fn create_net_from(
        &self,
        network: Network,
        rng: &mut dyn RngCore,
    ) -> Result<GrowthReport> {
        self.create_net_from_with_events(network, rng, &mut ())
    }

    pub fn create_net_from_with_events(
        &self,
        network: Network,
        rng: &mut dyn RngCore,
        sink: &mut dyn EventSink,
    ) -> Result<GrowthReport> {
        let mut run = GrowthRun {
            params: &self.params,
            sampler: &self.sampler,
            outer: OuterSet::from_network(&network),
            network,
            rng,
            sink,
            visits: 0,
            attempts: 0,
            rejected: 0,
        };
        run.seed();
        run.grow()?;
        Ok(run.finish())
    }
}

/// Mutable state of one run. Owns the network and frontier exclusively.
struct GrowthRun<'a> {
    params: &'a GrowthParams,
    sampler: &'a DegreeSampler,
    network: Network,
    outer: OuterSet,
    rng: &'a mut dyn RngCore,
    sink: &'a mut dyn EventSink,
    visits: usize,
    attempts: usize,
    rejected: usize,
}

impl GrowthRun<'_> {
    fn seed(&mut self) {
        if self.network.node_count() == 0 {
            let target = self.sampler.sample(self.rng);
            let id = self.network.add_node(Vec2::ZERO, target);
            self.outer.insert_node(id);
            self.emit_node_created(id);
        }

        if self.sink.wants(GrowthEventKind::RunStarted) {
            self.sink.send(GrowthEvent::RunStarted {
                params: self.params.clone(),
                seed_nodes: self.network.node_count(),
            });
        }
        info!(
            "Growing network: {} seed node(s), {} outer, {} requested.",
            self.network.node_count(),
            self.outer.node_count(),
            self.params.requested_nodes,
        );
    }

    fn grow(&mut self) -> Result<()> {
        while self.network.node_count() < self.params.requested_nodes {
            let Some(base) = self.outer.pick_random_node(self.rng) else {
                break;
            };
            self.visits += 1;

            if self.is_saturated(base) {
                self.freeze(base, FreezeReason::Saturated);
                continue;
            }

            if !self.extend(base)? {
                debug!(
                    "Node {:?} exhausted {} tries; frozen.",
                    base, self.params.num_tries
                );
                self.freeze(base, FreezeReason::Exhausted);
            }
        }
        Ok(())
    }

    /// Tries to add one link at `base`. Returns `false` when every try failed.
    fn extend(&mut self, base: NodeId) -> Result<bool> {
        let mut candidates: Option<Vec<NodeId>> = None;

        for _ in 0..self.params.num_tries {
            self.attempts += 1;

            let candidates = candidates
                .get_or_insert_with(|| self.outer.find_candidates(&self.network, base, self.params));
            let reconnect = !candidates.is_empty() && chance(self.rng, self.params.connectivity);

            let committed = if reconnect {
                let other = candidates[rand_index(self.rng, candidates.len())];
                self.try_reconnect(base, other)?
            } else {
                self.try_new_node(base)?
            };

            if committed {
                return Ok(true);
            }
            self.rejected += 1;
        }
        Ok(false)
    }

    fn try_reconnect(&mut self, base: NodeId, other: NodeId) -> Result<bool> {
        if !can_connect(
            &self.network,
            base,
            Endpoint::Existing(other),
            self.params,
            self.outer.links(),
        ) {
            return Ok(false);
        }
        self.commit_link(base, other, true)?;
        Ok(true)
    }

    fn try_new_node(&mut self, base: NodeId) -> Result<bool> {
        let position = self.network.position(base) + self.random_offset();
        if !can_connect(
            &self.network,
            base,
            Endpoint::Fresh(position),
            self.params,
            self.outer.links(),
        ) {
            return Ok(false);
        }

        // A new node always arrives with one link, so it needs room for it.
        let target = self.sampler.sample(self.rng).max(1);
        let id = self.network.add_node(position, target);
        self.outer.insert_node(id);
        self.emit_node_created(id);
        self.commit_link(base, id, false)?;
        Ok(true)
    }

    fn random_offset(&mut self) -> Vec2 {
        let min = self.params.min_distance;
        let max = self.params.max_distance;
        let (angle, distance) = if self.params.grid_mode {
            let quarter = rand_index(self.rng, 4) as f32;
            let distance = rand_range(self.rng, min, max);
            (quarter * FRAC_PI_2, (distance / min).floor().max(1.0) * min)
        } else {
            let angle = rand_angle(self.rng);
            (angle, rand_range(self.rng, min, max))
        };
        Vec2::new(angle.cos(), angle.sin()) * distance
    }

    fn commit_link(&mut self, from: NodeId, to: NodeId, reconnect: bool) -> Result<()> {
        let id = self.network.connect(from, to)?;
        self.outer.insert_link(id);
        debug!(
            "Link {:?}: {:?} -> {:?} ({:.1}).",
            id,
            from,
            to,
            self.network.link_length(id)
        );
        if self.sink.wants(GrowthEventKind::LinkCreated) {
            self.sink.send(GrowthEvent::LinkCreated {
                id,
                from,
                to,
                reconnect,
            });
        }

        for node in [from, to] {
            if self.is_saturated(node) {
                self.freeze(node, FreezeReason::Saturated);
            }
        }
        Ok(())
    }

    fn is_saturated(&self, id: NodeId) -> bool {
        self.network.node(id).is_none_or(|n| n.is_saturated())
    }

    fn freeze(&mut self, id: NodeId, reason: FreezeReason) {
        self.outer.remove_node(&self.network, id);
        if self.sink.wants(GrowthEventKind::NodeFrozen) {
            self.sink.send(GrowthEvent::NodeFrozen { id, reason });
        }
    }

    fn emit_node_created(&mut self, id: NodeId) {
        if !self.sink.wants(GrowthEventKind::NodeCreated) {
            return;
        }
        if let Some(node) = self.network.node(id) {
            self.sink.send(GrowthEvent::NodeCreated {
                id,
                position: node.position,
                target_degree: node.target_degree,
            });
        }
    }

    fn finish(mut self) -> GrowthReport {
        let termination = if self.network.node_count() >= self.params.requested_nodes {
            Termination::Satisfied
        } else {
            Termination::Stalled
        };

        let report = GrowthReport {
            network: self.network,
            termination,
            visits: self.visits,
            attempts: self.attempts,
            rejected: self.rejected,
        };

        match termination {
            Termination::Satisfied => info!(
                "Network complete: {} nodes, {} links after {} visits.",
                report.network.node_count(),
                report.network.link_count(),
                report.visits,
            ),
            Termination::Stalled => warn!(
                "Growth stalled at {} of {} nodes ({} links, {} visits).",
                report.network.node_count(),
                self.params.requested_nodes,
                report.network.link_count(),
                report.visits,
            ),
        }

        if self.sink.wants(GrowthEventKind::RunFinished) {
            self.sink.send(GrowthEvent::RunFinished {
                summary: RunSummary::from(&report),
            });
        }
        report
    }
}
