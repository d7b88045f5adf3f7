// render.rs - Turn particle state into draw calls
//
// Every particle is drawn every frame, visible or not:
//   clear, then per particle translate -> rotate -> alpha -> blit.
// The Stage does the actual canvas work.

use crate::sim::{Particles, Viewport};

/// Sprite edge length at scale 1, in px.
pub const SPRITE_SIZE: f64 = 40.0;

/// One blit of the shared bitmap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    /// Always within [0, 1].
    pub alpha: f64,
    pub size: f64,
}

/// Drawing surface owned by a running engine.
pub trait Stage {
    fn viewport(&self) -> Viewport;
    fn clear(&mut self);
    fn blit(&mut self, sprite: &Sprite);
    /// Remove the surface from the page. Must tolerate repeated calls.
    fn detach(&mut self);
}

/// Sprite for particle `i`.
#[inline]
pub fn sprite(particles: &Particles, i: usize) -> Sprite {
    let p = particles.pose[i];
    Sprite {
        x: p.x,
        y: p.y,
        rotation: p.r,
        alpha: p.a.clamp(0.0, 1.0),
        size: SPRITE_SIZE * p.s,
    }
}

/// Blit every particle without clearing first.
pub fn blit_all(particles: &Particles, stage: &mut impl Stage) {
    for i in 0..particles.len() {
        stage.blit(&sprite(particles, i));
    }
}

/// Full frame: clear, then blit everything.
pub fn draw(particles: &Particles, stage: &mut impl Stage) {
    stage.clear();
    blit_all(particles, stage);
}
