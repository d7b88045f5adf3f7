// spawn.rs - Randomized start states
//
// Draw order matters for scripted tests: x, y, s, r, a, then drift.

use super::{BOTTOM_SPAWN_THRESHOLD, Drift, MAX_SPAWN_ROTATION, Pose, SPAWN_DEPTH, Viewport};
use crate::config::ParticleConfig;
use crate::rng::Entropy;

/// Fresh particle: anywhere along the bottom band.
pub fn initial_pose(cfg: &ParticleConfig, view: Viewport, rng: &mut impl Entropy) -> Pose {
    let x = rng.next_unit() * view.w;
    let y = view.h + rng.next_unit() * SPAWN_DEPTH;
    finish_pose(cfg, x, y, rng)
}

/// Velocities are fixed for the particle's whole life; respawn keeps them.
pub fn initial_drift(cfg: &ParticleConfig, rng: &mut impl Entropy) -> Drift {
    let speed = &cfg.speed;
    Drift {
        dx: speed.horizontal.sample(rng.next_unit()),
        // Upward: screen y decreases
        dy: -speed.vertical.sample(rng.next_unit()),
        dr: speed.rotation * 0.1,
        da: speed.fade_speed * 0.01,
    }
}

/// Reset after leaving the screen: bottom band or the right edge.
pub fn respawn_pose(cfg: &ParticleConfig, view: Viewport, rng: &mut impl Entropy) -> Pose {
    let (x, y) = if rng.next_unit() > BOTTOM_SPAWN_THRESHOLD {
        let x = rng.next_unit() * view.w;
        (x, view.h + rng.next_unit() * SPAWN_DEPTH)
    } else {
        (view.w, view.h + rng.next_unit() * SPAWN_DEPTH)
    };
    finish_pose(cfg, x, y, rng)
}

fn finish_pose(cfg: &ParticleConfig, x: f64, y: f64, rng: &mut impl Entropy) -> Pose {
    Pose {
        x,
        y,
        s: cfg.size.sample(rng.next_unit()),
        r: rng.next_unit() * MAX_SPAWN_ROTATION,
        a: cfg.opacity.sample(rng.next_unit()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Range;
    use crate::rng::testing::Script;
    use pretty_assertions::assert_eq;

    fn cfg() -> ParticleConfig {
        let mut cfg = ParticleConfig::default();
        cfg.size = Range::new(1.0, 3.0);
        cfg.opacity = Range::new(0.5, 1.0);
        cfg.speed.horizontal = Range::new(-2.0, 2.0);
        cfg.speed.vertical = Range::new(1.0, 2.0);
        cfg.speed.rotation = 0.5;
        cfg.speed.fade_speed = 2.0;
        cfg
    }

    #[test]
    fn initial_pose_sits_below_viewport() {
        let view = Viewport::new(800.0, 600.0);
        let pose = initial_pose(&cfg(), view, &mut Script::constant(0.5));
        assert_eq!(pose, Pose { x: 400.0, y: 650.0, s: 2.0, r: 3.0, a: 0.75 });
    }

    #[test]
    fn drift_moves_up_and_fades() {
        let drift = initial_drift(&cfg(), &mut Script::new(&[0.75, 0.5]));
        assert_eq!(drift, Drift { dx: 1.0, dy: -1.5, dr: 0.05, da: 0.02 });
    }

    #[test]
    fn respawn_high_draw_uses_bottom_band() {
        let view = Viewport::new(800.0, 600.0);
        let pose = respawn_pose(&cfg(), view, &mut Script::new(&[0.9, 0.25, 0.0, 0.0, 0.0, 0.0]));
        assert_eq!(pose.x, 200.0);
        assert_eq!(pose.y, 600.0);
    }

    #[test]
    fn respawn_low_draw_uses_right_edge() {
        let view = Viewport::new(800.0, 600.0);
        let pose = respawn_pose(&cfg(), view, &mut Script::new(&[0.4, 0.5, 0.0, 0.0, 0.0]));
        assert_eq!(pose.x, 800.0);
        assert_eq!(pose.y, 650.0);
    }
}
