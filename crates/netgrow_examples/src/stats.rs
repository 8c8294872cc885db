//! Summary statistics of a generated network, for printing from examples.
use std::collections::BTreeMap;
use std::fmt;

use glam::Vec2;
use netgrow::prelude::{GrowthReport, Network};

/// Count of nodes per degree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DegreeHistogram(pub BTreeMap<usize, usize>);

impl DegreeHistogram {
    pub fn of(network: &Network) -> Self {
        let mut counts = BTreeMap::new();
        for node in network.nodes() {
            *counts.entry(node.degree()).or_insert(0) += 1;
        }
        Self(counts)
    }

    pub fn get(&self, degree: usize) -> usize {
        self.0.get(&degree).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone)]
pub struct NetworkStats {
    pub nodes: usize,
    pub links: usize,
    pub mean_degree: f32,
    pub mean_link_length: f32,
    /// Nodes that never reached their target degree.
    pub unsaturated: usize,
    pub extent: Vec2,
    pub degrees: DegreeHistogram,
}

impl NetworkStats {
    pub fn of(network: &Network) -> Self {
        let nodes = network.node_count();
        let links = network.link_count();
        let total_length: f32 = network
            .links()
            .iter()
            .map(|l| network.link_length(l.id))
            .sum();
        let extent = network
            .bounds()
            .map(|(min, max)| max - min)
            .unwrap_or(Vec2::ZERO);

        Self {
            nodes,
            links,
            mean_degree: if nodes == 0 {
                0.0
            } else {
                2.0 * links as f32 / nodes as f32
            },
            mean_link_length: if links == 0 {
                0.0
            } else {
                total_length / links as f32
            },
            unsaturated: network.nodes().iter().filter(|n| !n.is_saturated()).count(),
            extent,
            degrees: DegreeHistogram::of(network),
        }
    }

    pub fn of_report(report: &GrowthReport) -> Self {
        Self::of(&report.network)
    }
}

impl fmt::Display for NetworkStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "nodes:            {}", self.nodes)?;
        writeln!(f, "links:            {}", self.links)?;
        writeln!(f, "mean degree:      {:.2}", self.mean_degree)?;
        writeln!(f, "mean link length: {:.1}", self.mean_link_length)?;
        writeln!(f, "unsaturated:      {}", self.unsaturated)?;
        writeln!(f, "extent:           {:.0} x {:.0}", self.extent.x, self.extent.y)?;
        write!(f, "degrees:         ")?;
        for (degree, count) in &self.degrees.0 {
            write!(f, " {degree}:{count}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_of_a_path() {
        let mut net = Network::new();
        let a = net.add_node(Vec2::ZERO, 1);
        let b = net.add_node(Vec2::new(3.0, 0.0), 3);
        let c = net.add_node(Vec2::new(3.0, 4.0), 1);
        net.connect(a, b).unwrap();
        net.connect(b, c).unwrap();

        let stats = NetworkStats::of(&net);
        assert_eq!(stats.nodes, 3);
        assert_eq!(stats.links, 2);
        assert!((stats.mean_degree - 4.0 / 3.0).abs() < 1e-6);
        assert!((stats.mean_link_length - 3.5).abs() < 1e-6);
        assert_eq!(stats.unsaturated, 1);
        assert_eq!(stats.extent, Vec2::new(3.0, 4.0));
        assert_eq!(stats.degrees.get(1), 2);
        assert_eq!(stats.degrees.get(2), 1);
        assert!(stats.to_string().contains("degrees:          1:2 2:1"));
    }

    #[test]
    fn stats_of_empty_network_are_zero() {
        let stats = NetworkStats::of(&Network::new());
        assert_eq!(stats.nodes, 0);
        assert_eq!(stats.mean_degree, 0.0);
        assert_eq!(stats.extent, Vec2::ZERO);
    }
}
