//! Fixed timestep simulation tick
//!
//! Per-frame pipeline: integrate every body, scan for overlapping pairs,
//! resolve them, then let the pointer override the grabbed body. The render
//! collaborator reads the body list afterwards.

use glam::Vec2;

use super::collision::{detect_overlaps, resolve};
use super::geom::circle_rect_overlap;
use super::state::{Body, SimMode, SimState, World};
use crate::config::{BoundaryPolicy, PhysicsModel};
use crate::consts::{BOUNDARY_PADDING, SETTLE_THRESHOLD};

/// Input snapshot for a single tick, collected once per frame by the
/// platform layer.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer position in world coordinates
    pub pointer: Vec2,
    /// Primary button currently held
    pub primary_held: bool,
    /// Secondary button currently held
    pub secondary_held: bool,
    /// Pause toggle (one-shot, freshly pressed key)
    pub pause: bool,
}

impl TickInput {
    pub fn at(pointer: Vec2) -> Self {
        Self {
            pointer,
            ..Self::default()
        }
    }
}

/// Advance the simulation by one fixed timestep.
pub fn tick(state: &mut SimState, input: &TickInput, dt: f32) {
    if input.pause {
        state.mode = match state.mode {
            SimMode::Running => SimMode::Idle,
            SimMode::Idle => SimMode::Running,
        };
        log::info!("mode switched to {:?}", state.mode);
    }
    if state.mode == SimMode::Idle {
        return;
    }

    match state.config.physics {
        PhysicsModel::Drag { coefficient } => {
            let boundary = state.config.boundary;
            for body in &mut state.bodies {
                integrate_drag(body, coefficient, dt);
                apply_boundary(body, &state.world, boundary);
            }
        }
        PhysicsModel::GravityBounce {
            gravity,
            restitution,
        } => {
            // Frame-unit model from the original single-ball demo; dt is
            // implicit in the frame rate
            for body in &mut state.bodies {
                state.bounce.frames_falling += 1.0;
                body.vel.y += gravity * state.bounce.frames_falling;
                body.pos.y += body.vel.y;

                if body.pos.y + body.radius >= state.world.height {
                    // Floor contact: fall timer resets, rebound decays
                    state.bounce.frames_falling = 0.0;
                    state.bounce.rebound *= restitution;
                    body.vel.y = -body.vel.y.abs() * state.bounce.rebound;
                }

                clamp_to_world(body, &state.world);
                // Should never escape, but the reference still checks
                state.world.out_of_bounds =
                    !circle_rect_overlap(body.pos, body.radius, state.world.rect());
            }
        }
    }

    let pairs = detect_overlaps(&state.bodies);
    resolve(&mut state.bodies, &pairs);

    state
        .interaction
        .apply(&mut state.bodies, input, state.config.fling_gain);

    state.frame += 1;
}

/// Linear drag with numerical settling
fn integrate_drag(body: &mut Body, coefficient: f32, dt: f32) {
    body.acc = -body.vel * coefficient;
    body.vel += body.acc * dt;
    body.pos += body.vel * dt;

    if body.vel.length_squared() < SETTLE_THRESHOLD {
        body.vel = Vec2::ZERO;
    }
}

fn apply_boundary(body: &mut Body, world: &World, policy: BoundaryPolicy) {
    match policy {
        BoundaryPolicy::Clamp => clamp_to_world(body, world),
        BoundaryPolicy::Wrap => {
            // Toroidal wraparound on [0, width) x [0, height)
            if body.pos.x < 0.0 {
                body.pos.x += world.width;
            } else if body.pos.x >= world.width {
                body.pos.x -= world.width;
            }
            if body.pos.y < 0.0 {
                body.pos.y += world.height;
            } else if body.pos.y >= world.height {
                body.pos.y -= world.height;
            }
        }
    }
}

/// Keep the body's circular extent strictly inside the world.
///
/// A body too large to fit an axis pins to that axis midpoint; the margin is
/// capped at the half-extent so `clamp` never sees min > max.
fn clamp_to_world(body: &mut Body, world: &World) {
    let margin_x = (body.radius + BOUNDARY_PADDING).min(world.width / 2.0);
    let margin_y = (body.radius + BOUNDARY_PADDING).min(world.height / 2.0);
    body.pos.x = body.pos.x.clamp(margin_x, world.width - margin_x);
    body.pos.y = body.pos.y.clamp(margin_y, world.height - margin_y);
}
