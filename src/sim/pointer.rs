//! Pointer-driven body manipulation
//!
//! A small state machine over an optional selected index: primary press to
//! grab, hold primary to drag, release secondary to fling.

use serde::{Deserialize, Serialize};

use super::geom::point_in_circle;
use super::state::Body;
use super::tick::TickInput;

/// Selection state owned by the interaction layer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Interaction {
    /// Index of the grabbed body, if any
    pub selected: Option<usize>,
    prev_primary: bool,
    prev_secondary: bool,
}

impl Interaction {
    /// Apply one frame of pointer input. Runs after physics so a dragged
    /// body's position and velocity are overridden, not integrated.
    pub fn apply(&mut self, bodies: &mut [Body], input: &TickInput, fling_gain: f32) {
        // Only a fresh primary press grabs a body; the secondary button's
        // sole role is the fling release
        let pressed = input.primary_held && !self.prev_primary;

        if self.selected.is_none() && pressed {
            // First match by iteration order, not nearest or topmost;
            // preserved behavior of the original sandbox
            self.selected = bodies
                .iter()
                .position(|b| point_in_circle(b, input.pointer));
            if let Some(i) = self.selected {
                log::debug!("grabbed body {i}");
            }
        }

        if let Some(i) = self.selected {
            if input.primary_held {
                // Drag: pin to the pointer, suspend integration
                bodies[i].pos = input.pointer;
                bodies[i].vel = glam::Vec2::ZERO;
            } else if self.prev_secondary && !input.secondary_held {
                // Fling on secondary release, toward the pointer
                bodies[i].vel = (input.pointer - bodies[i].pos) * fling_gain;
                log::debug!("flung body {i} with velocity {:?}", bodies[i].vel);
                self.selected = None;
            } else if !input.secondary_held {
                // All buttons up: back to idle
                self.selected = None;
            }
        }

        self.prev_primary = input.primary_held;
        self.prev_secondary = input.secondary_held;
    }
}
