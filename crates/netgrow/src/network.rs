//! Arena-backed node/link graph produced by a growth run.
//!
//! Nodes and links live in owned vectors and refer to each other through
//! [`NodeId`] and [`LinkId`] handles. Nothing is ever removed, so a handle stays
//! valid for the lifetime of the [`Network`] that issued it.
use glam::Vec2;
use mint::Vector2;

use crate::error::{Error, Result};

/// Index of a node in its [`Network`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

/// Index of a link in its [`Network`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinkId(pub u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl LinkId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A point node with its attached links and the degree it is meant to reach.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    pub position: Vec2,
    /// Number of links this node should ultimately have.
    ///
    /// Nodes created by growth are born with one link, so a sampled target of
    /// zero is raised to one for them.
    pub target_degree: usize,
    links: Vec<LinkId>,
}

impl Node {
    /// Attached links in the order they were created.
    pub fn links(&self) -> &[LinkId] {
        &self.links
    }

    pub fn degree(&self) -> usize {
        self.links.len()
    }

    /// True once the node has as many links as its target degree.
    pub fn is_saturated(&self) -> bool {
        self.degree() >= self.target_degree
    }
}

/// An undirected straight link between two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub id: LinkId,
    pub from: NodeId,
    pub to: NodeId,
}

impl Link {
    pub fn connects(&self, node: NodeId) -> bool {
        self.from == node || self.to == node
    }

    /// The endpoint opposite to `node`.
    pub fn other(&self, node: NodeId) -> NodeId {
        if self.from == node {
            self.to
        } else {
            self.from
        }
    }

    /// True when both links share at least one endpoint.
    pub fn shares_endpoint(&self, other: &Link) -> bool {
        self.connects(other.from) || self.connects(other.to)
    }
}

/// Nodes and links of a generated network.
#[derive(Debug, Clone, Default)]
pub struct Network {
    nodes: Vec<Node>,
    links: Vec<Link>,
}

impl Network {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            links: Vec::new(),
        }
    }

    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            links: Vec::with_capacity(nodes * 2),
        }
    }

    /// Add an unconnected node.
    pub fn add_node(&mut self, position: Vec2, target_degree: usize) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            id,
            position,
            target_degree,
            links: Vec::new(),
        });
        id
    }

    /// Link two distinct existing nodes.
    ///
    /// Geometry is not checked here; growth validates candidates before
    /// calling this.
    pub fn connect(&mut self, from: NodeId, to: NodeId) -> Result<LinkId> {
        self.check_node(from)?;
        self.check_node(to)?;
        if from == to {
            return Err(Error::InvalidArgument(format!(
                "cannot link {from:?} to itself"
            )));
        }
        let id = LinkId(self.links.len() as u32);
        self.links.push(Link { id, from, to });
        self.nodes[from.index()].links.push(id);
        self.nodes[to.index()].links.push(id);
        Ok(id)
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    pub(crate) fn check_node(&self, id: NodeId) -> Result<()> {
        if self.contains_node(id) {
            Ok(())
        } else {
            Err(Error::UnknownNode { id })
        }
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn link(&self, id: LinkId) -> Option<&Link> {
        self.links.get(id.index())
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Position of a node handle issued by this network.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this network; use [`Network::node`]
    /// for handles of unknown origin.
    #[inline]
    pub fn position(&self, id: NodeId) -> Vec2 {
        self.nodes[id.index()].position
    }

    /// Node positions in id order, as engine-agnostic vectors.
    pub fn positions(&self) -> Vec<Vector2<f32>> {
        self.nodes.iter().map(|n| n.position.into()).collect()
    }

    pub fn are_connected(&self, a: NodeId, b: NodeId) -> bool {
        let Some(node) = self.node(a) else {
            return false;
        };
        node.links
            .iter()
            .any(|l| self.links[l.index()].other(a) == b)
    }

    /// Start and end position of a link.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this network.
    pub fn link_segment(&self, id: LinkId) -> (Vec2, Vec2) {
        let link = &self.links[id.index()];
        (self.position(link.from), self.position(link.to))
    }

    pub fn link_length(&self, id: LinkId) -> f32 {
        let (a, b) = self.link_segment(id);
        a.distance(b)
    }

    /// Vector pointing from `node` along `link` to its other endpoint.
    ///
    /// # Panics
    ///
    /// Panics if either handle was not issued by this network.
    pub fn direction_from(&self, node: NodeId, link: LinkId) -> Vec2 {
        let other = self.links[link.index()].other(node);
        self.position(other) - self.position(node)
    }

    /// Directions of all links attached to `node`; empty for an unknown node.
    pub fn link_directions(&self, node: NodeId) -> impl Iterator<Item = Vec2> + '_ {
        self.node(node)
            .map_or(&[][..], Node::links)
            .iter()
            .map(move |l| self.direction_from(node, *l))
    }

    /// Axis-aligned bounds `(min, max)` of all nodes, or `None` when empty.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let first = self.nodes.first()?.position;
        Some(
            self.nodes
                .iter()
                .fold((first, first), |(min, max), n| {
                    (min.min(n.position), max.max(n.position))
                }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> (Network, [NodeId; 3]) {
        let mut net = Network::new();
        let a = net.add_node(Vec2::ZERO, 2);
        let b = net.add_node(Vec2::new(3.0, 0.0), 2);
        let c = net.add_node(Vec2::new(0.0, 4.0), 2);
        net.connect(a, b).unwrap();
        net.connect(b, c).unwrap();
        (net, [a, b, c])
    }

    #[test]
    fn connect_updates_both_endpoints() {
        let (net, [a, b, c]) = triangle();
        assert_eq!(net.link_count(), 2);
        assert_eq!(net.node(a).unwrap().degree(), 1);
        assert_eq!(net.node(b).unwrap().degree(), 2);
        assert!(net.node(b).unwrap().is_saturated());
        assert!(net.are_connected(a, b));
        assert!(net.are_connected(c, b));
        assert!(!net.are_connected(a, c));
    }

    #[test]
    fn link_geometry_is_derived_from_nodes() {
        let (net, [a, b, c]) = triangle();
        let ab = net.node(a).unwrap().links()[0];
        let bc = net.node(c).unwrap().links()[0];
        assert_eq!(net.link_length(ab), 3.0);
        assert_eq!(net.link_length(bc), 5.0);
        assert_eq!(net.direction_from(a, ab), Vec2::new(3.0, 0.0));
        assert_eq!(net.direction_from(b, ab), Vec2::new(-3.0, 0.0));
        assert_eq!(net.link_directions(b).count(), 2);
        assert_eq!(net.link_directions(NodeId(99)).count(), 0);
    }

    #[test]
    fn connect_rejects_self_loops_and_unknown_nodes() {
        let (mut net, [a, ..]) = triangle();
        assert!(matches!(net.connect(a, a), Err(Error::InvalidArgument(_))));
        assert!(matches!(
            net.connect(a, NodeId(42)),
            Err(Error::UnknownNode { id: NodeId(42) })
        ));
        assert_eq!(net.link_count(), 2);
    }

    #[test]
    fn link_endpoint_helpers() {
        let (net, [a, b, c]) = triangle();
        let ab = net.links()[0];
        let bc = net.links()[1];
        assert_eq!(ab.other(a), b);
        assert_eq!(ab.other(b), a);
        assert!(ab.connects(a) && !ab.connects(c));
        assert!(ab.shares_endpoint(&bc));
    }

    #[test]
    fn bounds_cover_all_nodes() {
        let (net, _) = triangle();
        assert_eq!(
            net.bounds(),
            Some((Vec2::ZERO, Vec2::new(3.0, 4.0)))
        );
        assert!(Network::new().bounds().is_none());
        assert_eq!(net.positions().len(), 3);
    }
}
