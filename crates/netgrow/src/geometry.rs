//! Geometric admission checks for candidate links.
//!
//! Every function here is pure: it reads the [`Network`] and the parameters it
//! is given and decides whether a link may be committed.
use glam::Vec2;

use crate::growth::GrowthParams;
use crate::network::{LinkId, Network, NodeId};

/// Far end of a candidate link: a node already in the network, or the
/// position of a node that would be created with the link.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Endpoint {
    Existing(NodeId),
    Fresh(Vec2),
}

impl Endpoint {
    fn position(self, net: &Network) -> Vec2 {
        match self {
            Endpoint::Existing(id) => net.position(id),
            Endpoint::Fresh(p) => p,
        }
    }

    fn node(self) -> Option<NodeId> {
        match self {
            Endpoint::Existing(id) => Some(id),
            Endpoint::Fresh(_) => None,
        }
    }
}

/// Unsigned angle between two vectors, in `[0, PI]`.
#[inline]
pub fn angle_between(a: Vec2, b: Vec2) -> f32 {
    a.perp_dot(b).atan2(a.dot(b)).abs()
}

/// True when `direction` keeps at least `min_angle` to every link already
/// attached to `node`. A node that is not in `net` never passes.
pub fn angles_ok(net: &Network, node: NodeId, direction: Vec2, min_angle: f32) -> bool {
    if !net.contains_node(node) {
        return false;
    }
    net.link_directions(node)
        .all(|existing| angle_between(direction, existing) >= min_angle)
}

/// True when the distance between `a` and `b` lies in `[min_dist, max_dist]`.
#[inline]
pub fn distance_ok(a: Vec2, b: Vec2, min_dist: f32, max_dist: f32) -> bool {
    let dist = a.distance(b);
    dist >= min_dist && dist <= max_dist
}

/// True when segments `p1-p2` and `q1-q2` intersect, including touching and
/// collinear overlap.
pub fn segments_intersect(p1: Vec2, p2: Vec2, q1: Vec2, q2: Vec2) -> bool {
    let d1 = orientation(q1, q2, p1);
    let d2 = orientation(q1, q2, p2);
    let d3 = orientation(p1, p2, q1);
    let d4 = orientation(p1, p2, q2);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && on_segment(q1, q2, p1))
        || (d2 == 0.0 && on_segment(q1, q2, p2))
        || (d3 == 0.0 && on_segment(p1, p2, q1))
        || (d4 == 0.0 && on_segment(p1, p2, q2))
}

#[inline]
fn orientation(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b - a).perp_dot(p - a)
}

#[inline]
fn on_segment(a: Vec2, b: Vec2, p: Vec2) -> bool {
    p.cmpge(a.min(b)).all() && p.cmple(a.max(b)).all()
}

/// Distance from `p` to its perpendicular foot on segment `a-b`.
///
/// `None` when the foot falls outside the segment or the segment is
/// degenerate.
pub fn perpendicular_distance(p: Vec2, a: Vec2, b: Vec2) -> Option<f32> {
    let ab = b - a;
    let len2 = ab.length_squared();
    if len2 <= 0.0 {
        return None;
    }
    let t = (p - a).dot(ab) / len2;
    if !(0.0..=1.0).contains(&t) {
        return None;
    }
    Some(p.distance(a + ab * t))
}

/// The single gate every candidate link must pass before it is committed.
///
/// Checks the link length, the link angles at `base` and (for an existing far
/// end) at the other node, and, when `params.planar` is set, that the link
/// neither crosses any of `outer_links` nor brings its far end closer than
/// `min_distance` to one of them.
///
/// Returns `false` when `base` or an existing far end is not in `net`.
pub fn can_connect(
    net: &Network,
    base: NodeId,
    target: Endpoint,
    params: &GrowthParams,
    outer_links: &[LinkId],
) -> bool {
    let target_node = target.node();
    if !net.contains_node(base) || target_node.is_some_and(|n| !net.contains_node(n)) {
        return false;
    }
    let base_pos = net.position(base);
    let target_pos = target.position(net);

    if target_node == Some(base) {
        return false;
    }

    if !distance_ok(
        base_pos,
        target_pos,
        params.min_distance,
        params.max_distance,
    ) {
        return false;
    }

    if !angles_ok(net, base, target_pos - base_pos, params.min_link_angle) {
        return false;
    }
    if let Some(node) = target_node {
        if !angles_ok(net, node, base_pos - target_pos, params.min_link_angle) {
            return false;
        }
    }

    if !params.planar {
        return true;
    }

    for &link_id in outer_links {
        let Some(link) = net.link(link_id) else {
            continue;
        };
        let (start, end) = net.link_segment(link_id);
        let touches_target = target_node.is_some_and(|n| link.connects(n));

        if !link.connects(base)
            && !touches_target
            && segments_intersect(base_pos, target_pos, start, end)
        {
            return false;
        }

        if !touches_target {
            if let Some(dist) = perpendicular_distance(target_pos, start, end) {
                if dist < params.min_distance {
                    return false;
                }
            }
        }
    }

    true
}
