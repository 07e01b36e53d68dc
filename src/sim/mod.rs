//! Deterministic simulation module
//!
//! All physics logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by body index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod geom;
pub mod pointer;
pub mod state;
pub mod tick;

pub use collision::{detect_overlaps, resolve};
pub use geom::{circle_circle_overlap, circle_rect_overlap, distance, point_in_circle, Rect};
pub use pointer::Interaction;
pub use state::{Body, SimMode, SimState, VisualTag, World};
pub use tick::{TickInput, tick};
