//! The growth frontier: outer nodes and outer links.
//!
//! A node is outer while it may still gain links; a link is outer while at
//! least one of its endpoints is outer. Both sets hold handles only, backed by
//! a slot table so insertion, removal and uniform picks are O(1).
use rand::RngCore;

use crate::geometry::{can_connect, Endpoint};
use crate::growth::GrowthParams;
use crate::network::{LinkId, Network, NodeId};
use crate::random::rand_index;

trait Handle: Copy + PartialEq {
    fn slot(self) -> usize;
}

impl Handle for NodeId {
    #[inline]
    fn slot(self) -> usize {
        self.index()
    }
}

impl Handle for LinkId {
    #[inline]
    fn slot(self) -> usize {
        self.index()
    }
}

/// Dense list of handles with a reverse slot table.
#[derive(Debug, Clone)]
struct IndexedSet<T> {
    items: Vec<T>,
    slots: Vec<Option<usize>>,
}

impl<T: Handle> IndexedSet<T> {
    fn new() -> Self {
        Self {
            items: Vec::new(),
            slots: Vec::new(),
        }
    }

    fn contains(&self, item: T) -> bool {
        self.slots.get(item.slot()).is_some_and(Option::is_some)
    }

    fn insert(&mut self, item: T) -> bool {
        if self.contains(item) {
            return false;
        }
        let slot = item.slot();
        if slot >= self.slots.len() {
            self.slots.resize(slot + 1, None);
        }
        self.slots[slot] = Some(self.items.len());
        self.items.push(item);
        true
    }

    fn remove(&mut self, item: T) -> bool {
        let Some(pos) = self.slots.get_mut(item.slot()).and_then(Option::take) else {
            return false;
        };
        self.items.swap_remove(pos);
        if let Some(moved) = self.items.get(pos).copied() {
            self.slots[moved.slot()] = Some(pos);
        }
        true
    }
}

/// Outer nodes and links of a growing network.
///
/// Removed nodes are remembered and can never be re-inserted.
#[derive(Debug, Clone)]
pub struct OuterSet {
    nodes: IndexedSet<NodeId>,
    links: IndexedSet<LinkId>,
    retired: Vec<bool>,
}

impl Default for OuterSet {
    fn default() -> Self {
        Self::new()
    }
}

impl OuterSet {
    pub fn new() -> Self {
        Self {
            nodes: IndexedSet::new(),
            links: IndexedSet::new(),
            retired: Vec::new(),
        }
    }

    /// Frontier of an existing network: every unsaturated node and every link
    /// touching one of them.
    pub fn from_network(net: &Network) -> Self {
        let mut outer = Self::new();
        for node in net.nodes().iter().filter(|n| !n.is_saturated()) {
            outer.insert_node(node.id);
        }
        for link in net.links() {
            if outer.contains_node(link.from) || outer.contains_node(link.to) {
                outer.insert_link(link.id);
            }
        }
        outer
    }

    /// Outer nodes in frontier order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes.items
    }

    /// Outer links in frontier order.
    pub fn links(&self) -> &[LinkId] {
        &self.links.items
    }

    pub fn node_count(&self) -> usize {
        self.nodes.items.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.items.is_empty()
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains(id)
    }

    pub fn contains_link(&self, id: LinkId) -> bool {
        self.links.contains(id)
    }

    /// True once `id` has been removed from the frontier.
    pub fn is_retired(&self, id: NodeId) -> bool {
        self.retired.get(id.index()).copied().unwrap_or(false)
    }

    /// Adds a node to the frontier. Returns `false` if it is already outer or
    /// was removed earlier.
    pub fn insert_node(&mut self, id: NodeId) -> bool {
        if self.is_retired(id) {
            return false;
        }
        self.nodes.insert(id)
    }

    pub fn insert_link(&mut self, id: LinkId) -> bool {
        self.links.insert(id)
    }

    /// Uniformly random outer node, or `None` once the frontier is empty.
    pub fn pick_random_node(&self, rng: &mut dyn RngCore) -> Option<NodeId> {
        if self.nodes.items.is_empty() {
            return None;
        }
        let idx = rand_index(rng, self.nodes.items.len());
        self.nodes.items.get(idx).copied()
    }

    /// Permanently removes a node from the frontier and drops its links whose
    /// other endpoint is no longer outer either. Idempotent.
    pub fn remove_node(&mut self, net: &Network, id: NodeId) {
        if id.index() >= self.retired.len() {
            self.retired.resize(id.index() + 1, false);
        }
        self.retired[id.index()] = true;
        if !self.nodes.remove(id) {
            return;
        }
        let Some(node) = net.node(id) else {
            return;
        };
        for &link_id in node.links() {
            let Some(link) = net.link(link_id) else {
                continue;
            };
            if !self.contains_node(link.other(id)) {
                self.links.remove(link_id);
            }
        }
    }

    /// Idempotent.
    pub fn remove_link(&mut self, id: LinkId) {
        self.links.remove(id);
    }

    /// Outer nodes that `node` could be linked to right now.
    ///
    /// Both ends must be below their target degree, not already linked, and
    /// the link must pass [`can_connect`] against the current outer links.
    pub fn find_candidates(
        &self,
        net: &Network,
        node: NodeId,
        params: &GrowthParams,
    ) -> Vec<NodeId> {
        let Some(base) = net.node(node) else {
            return Vec::new();
        };
        if base.is_saturated() {
            return Vec::new();
        }
        self.nodes()
            .iter()
            .copied()
            .filter(|&other| other != node)
            .filter(|&other| net.node(other).is_some_and(|n| !n.is_saturated()))
            .filter(|&other| !net.are_connected(node, other))
            .filter(|&other| {
                can_connect(net, node, Endpoint::Existing(other), params, self.links())
            })
            .collect()
    }
}
