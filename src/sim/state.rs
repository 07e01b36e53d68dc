//! Simulation state and core body types
//!
//! Everything needed to reproduce a run lives here: no hidden statics, the
//! whole simulation is one owned [`SimState`] passed through `tick`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geom::Rect;
use super::pointer::Interaction;
use crate::config::{PhysicsModel, SimConfig};
use crate::consts::MASS_PER_RADIUS;

/// Palette slot a body is drawn with
///
/// Opaque to the simulation; the render collaborator maps tags to RGBA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisualTag {
    Red,
    Green,
    Blue,
    Orange,
    Grey,
    Black,
}

impl VisualTag {
    const PALETTE: [VisualTag; 6] = [
        VisualTag::Red,
        VisualTag::Green,
        VisualTag::Blue,
        VisualTag::Orange,
        VisualTag::Grey,
        VisualTag::Black,
    ];

    /// Round-robin tag for the body at `index`
    pub fn for_index(index: usize) -> Self {
        Self::PALETTE[index % Self::PALETTE.len()]
    }
}

/// A simulated circular body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub acc: Vec2,
    pub radius: f32,
    pub mass: f32,
    pub tag: VisualTag,
}

impl Body {
    /// New body at rest; mass is derived from radius
    pub fn new(pos: Vec2, radius: f32, tag: VisualTag) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            radius,
            mass: radius * MASS_PER_RADIUS,
            tag,
        }
    }
}

/// World bounds, fixed after initialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub width: f32,
    pub height: f32,
    /// Latched by the bounce model when a body escapes the world rect;
    /// the render collaborator reacts to it (the reference flips the
    /// clear color)
    pub out_of_bounds: bool,
}

impl World {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            out_of_bounds: false,
        }
    }

    /// The world as a rectangle at the origin
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Top-level simulation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SimMode {
    /// Physics steps every frame
    #[default]
    Running,
    /// No-op frames until unpaused
    Idle,
}

/// Per-run state of the gravity-bounce integrator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BounceState {
    /// Frames elapsed since the current fall began; reset on floor contact
    pub frames_falling: f32,
    /// Current rebound scale, decays by the restitution factor each bounce
    pub rebound: f32,
}

impl Default for BounceState {
    fn default() -> Self {
        Self {
            frames_falling: 0.0,
            rebound: 1.0,
        }
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub config: SimConfig,
    pub world: World,
    /// Fixed-size population for the run, stable index order
    pub bodies: Vec<Body>,
    /// Pointer selection state machine
    pub interaction: Interaction,
    pub mode: SimMode,
    pub bounce: BounceState,
    /// Frame counter
    pub frame: u64,
}

impl SimState {
    /// Create a simulation with `config.body_count` bodies spawned at
    /// seeded-random positions and radii inside the world.
    pub fn new(config: SimConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let world = World::new(config.width, config.height);

        let bodies = match config.physics {
            // The bounce demo spawns its ball dead center, like the reference
            PhysicsModel::GravityBounce { .. } => (0..config.body_count)
                .map(|i| {
                    Body::new(
                        Vec2::new(config.width / 2.0, config.height / 2.0),
                        config.max_radius,
                        VisualTag::for_index(i),
                    )
                })
                .collect(),
            PhysicsModel::Drag { .. } => (0..config.body_count)
                .map(|i| {
                    let radius = rng.random_range(config.min_radius..=config.max_radius);
                    let pos = Vec2::new(
                        rng.random_range(0.0..config.width),
                        rng.random_range(0.0..config.height),
                    );
                    Body::new(pos, radius, VisualTag::for_index(i))
                })
                .collect(),
        };

        log::info!(
            "simulation initialized: seed={} bodies={} world={}x{}",
            seed,
            config.body_count,
            config.width,
            config.height
        );

        Self {
            seed,
            config,
            world,
            bodies,
            interaction: Interaction::default(),
            mode: SimMode::Running,
            bounce: BounceState::default(),
            frame: 0,
        }
    }

    /// Current bodies in stable index order, for the render collaborator
    #[inline]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }
}
