//! Parameters of one growth run.
use std::f32::consts::FRAC_PI_4;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Geometric and stochastic limits applied while growing a network.
///
/// Immutable for the duration of a run; checked by [`GrowthParams::validate`]
/// before any node is created.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GrowthParams {
    /// Minimum angle between two links meeting at a node, in radians.
    pub min_link_angle: f32,
    /// Minimum length of a link.
    pub min_distance: f32,
    /// Maximum length of a link.
    pub max_distance: f32,
    /// Probability in [0, 1] of linking to an existing outer node instead of
    /// creating a new one, when such a link is possible.
    pub connectivity: f32,
    /// Attempts per visit of a base node before it is frozen.
    pub num_tries: usize,
    /// Node count at which growth stops.
    pub requested_nodes: usize,
    /// Place new nodes on a grid: right angles only, lengths in multiples of
    /// `min_distance`.
    pub grid_mode: bool,
    /// Reject links that cross outer links or pass closer than `min_distance`
    /// to a new node.
    pub planar: bool,
}

impl Default for GrowthParams {
    fn default() -> Self {
        Self {
            min_link_angle: FRAC_PI_4,
            min_distance: 100.0,
            max_distance: 250.0,
            connectivity: 0.95,
            num_tries: 50,
            requested_nodes: 2000,
            grid_mode: false,
            planar: true,
        }
    }
}

impl GrowthParams {
    /// Creates parameters with default limits and the given node count.
    pub fn new(requested_nodes: usize) -> Self {
        Self {
            requested_nodes,
            ..Default::default()
        }
    }

    /// Sets the minimum angle between links, in radians.
    pub fn with_min_link_angle(mut self, radians: f32) -> Self {
        self.min_link_angle = radians;
        self
    }

    /// Sets the minimum angle between links, in degrees.
    pub fn with_min_link_angle_degrees(self, degrees: f32) -> Self {
        self.with_min_link_angle(degrees.to_radians())
    }

    /// Sets the allowed link length range.
    pub fn with_distance_range(mut self, min_distance: f32, max_distance: f32) -> Self {
        self.min_distance = min_distance;
        self.max_distance = max_distance;
        self
    }

    /// Sets the probability of reusing an existing outer node.
    pub fn with_connectivity(mut self, connectivity: f32) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Sets the attempts per base-node visit.
    pub fn with_num_tries(mut self, num_tries: usize) -> Self {
        self.num_tries = num_tries;
        self
    }

    /// Sets the node count at which growth stops.
    pub fn with_requested_nodes(mut self, requested_nodes: usize) -> Self {
        self.requested_nodes = requested_nodes;
        self
    }

    pub fn with_grid_mode(mut self, grid_mode: bool) -> Self {
        self.grid_mode = grid_mode;
        self
    }

    pub fn with_planar(mut self, planar: bool) -> Self {
        self.planar = planar;
        self
    }

    /// Validates the parameters, returning an error if invalid.
    ///
    /// `num_tries == 0` is accepted: every base node is then frozen on its
    /// first visit and the seed is returned unchanged.
    pub fn validate(&self) -> Result<()> {
        if !self.min_link_angle.is_finite() || self.min_link_angle < 0.0 {
            return Err(Error::InvalidArgument(
                "min_link_angle must be finite and >= 0".into(),
            ));
        }
        if !self.min_distance.is_finite() || self.min_distance < 0.0 {
            return Err(Error::InvalidArgument(
                "min_distance must be finite and >= 0".into(),
            ));
        }
        if !self.max_distance.is_finite() || self.max_distance < 0.0 {
            return Err(Error::InvalidArgument(
                "max_distance must be finite and >= 0".into(),
            ));
        }
        if self.min_distance > self.max_distance {
            return Err(Error::InvalidArgument(format!(
                "min_distance ({}) must not exceed max_distance ({})",
                self.min_distance, self.max_distance
            )));
        }
        if !(0.0..=1.0).contains(&self.connectivity) {
            return Err(Error::InvalidArgument(
                "connectivity must lie in [0, 1]".into(),
            ));
        }
        if self.requested_nodes == 0 {
            return Err(Error::InvalidArgument("requested_nodes must be > 0".into()));
        }
        if self.grid_mode && self.min_distance <= 0.0 {
            return Err(Error::InvalidArgument(
                "grid_mode requires min_distance > 0".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let params = GrowthParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.num_tries, 50);
        assert!(params.planar);
    }

    #[test]
    fn inverted_distance_range_is_rejected() {
        let params = GrowthParams::new(10).with_distance_range(10.0, 5.0);
        assert!(matches!(
            params.validate(),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let cases = [
            GrowthParams::new(0),
            GrowthParams::new(5).with_connectivity(1.5),
            GrowthParams::new(5).with_connectivity(f32::NAN),
            GrowthParams::new(5).with_distance_range(-1.0, 5.0),
            GrowthParams::new(5).with_distance_range(1.0, f32::INFINITY),
            GrowthParams::new(5).with_min_link_angle(-0.1),
            GrowthParams::new(5)
                .with_distance_range(0.0, 5.0)
                .with_grid_mode(true),
        ];
        for params in cases {
            assert!(params.validate().is_err(), "{params:?} should be rejected");
        }
    }

    #[test]
    fn builder_sets_fields() {
        let params = GrowthParams::new(12)
            .with_min_link_angle_degrees(90.0)
            .with_distance_range(1.0, 2.0)
            .with_connectivity(0.0)
            .with_num_tries(0)
            .with_grid_mode(true)
            .with_planar(false);
        assert!((params.min_link_angle - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert_eq!(params.min_distance, 1.0);
        assert_eq!(params.max_distance, 2.0);
        assert_eq!(params.num_tries, 0);
        assert_eq!(params.requested_nodes, 12);
        assert!(params.grid_mode && !params.planar);
        assert!(params.validate().is_ok());
    }
}
