//! Ball Pit - a deterministic 2D circular-body physics sandbox
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, collisions, pointer interaction)
//! - `config`: Run-time simulation configuration
//!
//! Windowing, rendering and raw event polling are external collaborators:
//! the simulation exposes its body list in stable index order every frame
//! and consumes a [`sim::TickInput`] snapshot, nothing more.

pub mod config;
pub mod sim;

pub use config::{BoundaryPolicy, PhysicsModel, SimConfig};
pub use sim::{Body, SimState, TickInput, VisualTag, tick};

/// Simulation tuning constants
pub mod consts {
    /// Default world dimensions in pixels
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 800.0;

    /// Default fixed frame rate the timestep is derived from
    pub const DEFAULT_FPS: u32 = 60;
    /// Frame rate of the reference gravity-bounce demo
    pub const BOUNCE_FPS: u32 = 400;

    /// Default body population
    pub const BODY_COUNT: usize = 20;
    /// Body radius range at spawn
    pub const MIN_RADIUS: f32 = 5.0;
    pub const MAX_RADIUS: f32 = 30.0;
    /// Mass is derived from radius at spawn
    pub const MASS_PER_RADIUS: f32 = 10.0;

    /// Linear drag coefficient for the multi-body model
    pub const DRAG_COEFF: f32 = 0.8;
    /// Squared-speed threshold below which velocity snaps to zero
    pub const SETTLE_THRESHOLD: f32 = 0.01;

    /// Gravity for the single-body bounce model, pixels per frame squared
    pub const BOUNCE_GRAVITY: f32 = 0.004;
    /// Fraction of speed retained per floor bounce
    pub const RESTITUTION: f32 = 0.9;

    /// Padding that keeps clamped bodies strictly inside the world
    pub const BOUNDARY_PADDING: f32 = 1.0;

    /// Velocity per pixel of pointer offset when flinging a body
    pub const FLING_GAIN: f32 = 5.0;
}
