// sim/ - Particle simulation
//
// Pure state: no DOM, no canvas. The engine feeds the viewport in each tick
// and hands the result to the renderer.

mod particles;
mod spawn;

pub use particles::{Drift, Particles, Pose};
pub use spawn::{initial_drift, initial_pose, respawn_pose};

/// Respawn counter value meaning "no limit".
pub const UNLIMITED: i32 = -1;

/// Particles may drift this far above the top edge before they count as gone.
pub const TOP_MARGIN: f64 = 100.0;

/// Spawn band below the bottom edge, in px.
pub const SPAWN_DEPTH: f64 = 100.0;

/// Draws above this go to the bottom edge, the rest to the right edge.
pub const BOTTOM_SPAWN_THRESHOLD: f64 = 0.4;

/// Largest rotation drawn at spawn, in radians.
pub const MAX_SPAWN_ROTATION: f64 = 6.0;

/// Logical viewport size in CSS px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub w: f64,
    pub h: f64,
}

impl Viewport {
    pub const fn new(w: f64, h: f64) -> Self {
        Self { w, h }
    }

    /// Inclusive bounds check: x in [0, w], y in [-TOP_MARGIN, h].
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= 0.0 && x <= self.w && y >= -TOP_MARGIN && y <= self.h
    }
}
