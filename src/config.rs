//! Run-time simulation configuration
//!
//! All simple scalar values supplied at startup; no file format.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// What happens when a body reaches the world edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BoundaryPolicy {
    /// Keep the body's circular extent strictly inside the world,
    /// with a one-pixel padding
    #[default]
    Clamp,
    /// Toroidal wraparound: exit one edge, reappear at the opposite edge
    Wrap,
}

/// Which integrator drives body motion
///
/// The two models come from different variants of the sandbox and are
/// mutually exclusive: drag-based multi-body simulation, or the older
/// single-body gravity/restitution bounce demo.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PhysicsModel {
    /// Linear drag with settling, the multi-ball collision playground
    Drag { coefficient: f32 },
    /// Frame-counted gravity fall with a decaying rebound per bounce
    GravityBounce { gravity: f32, restitution: f32 },
}

impl Default for PhysicsModel {
    fn default() -> Self {
        PhysicsModel::Drag {
            coefficient: DRAG_COEFF,
        }
    }
}

/// Startup configuration for a simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// World dimensions in pixels
    pub width: f32,
    pub height: f32,
    /// Target frame rate; the fixed timestep is `1 / fps`
    pub fps: u32,
    /// Number of bodies spawned at start (fixed for the run)
    pub body_count: usize,
    /// Spawn radius range, inclusive
    pub min_radius: f32,
    pub max_radius: f32,
    /// Boundary handling after integration
    pub boundary: BoundaryPolicy,
    /// Integrator strategy
    pub physics: PhysicsModel,
    /// Velocity imparted per pixel of pointer offset on a fling release
    pub fling_gain: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            fps: DEFAULT_FPS,
            body_count: BODY_COUNT,
            min_radius: MIN_RADIUS,
            max_radius: MAX_RADIUS,
            boundary: BoundaryPolicy::Clamp,
            physics: PhysicsModel::default(),
            fling_gain: FLING_GAIN,
        }
    }
}

impl SimConfig {
    /// Configuration matching the reference single-ball bounce demo:
    /// one ball, 400 fps, frame-unit gravity, restitution 0.9.
    pub fn bounce_demo() -> Self {
        Self {
            fps: BOUNCE_FPS,
            body_count: 1,
            min_radius: 30.0,
            max_radius: 30.0,
            physics: PhysicsModel::GravityBounce {
                gravity: BOUNCE_GRAVITY,
                restitution: RESTITUTION,
            },
            ..Self::default()
        }
    }

    /// Fixed timestep in seconds derived from the target frame rate
    #[inline]
    pub fn dt(&self) -> f32 {
        1.0 / self.fps.max(1) as f32
    }
}
