// particles.rs - Drifting sprite particles
//
// Poses, drifts and respawn budgets live in parallel arrays indexed by
// particle id. The budget table is owned here once, never per particle.

use super::{UNLIMITED, Viewport, initial_drift, initial_pose, respawn_pose};
use crate::config::ParticleConfig;
use crate::rng::Entropy;

/// Per-frame state of one particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    /// Scale; sprite edge is 40 * s px.
    pub s: f64,
    /// Rotation in radians.
    pub r: f64,
    pub a: f64,
}

/// Per-tick deltas, fixed when the particle is created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drift {
    pub dx: f64,
    pub dy: f64,
    pub dr: f64,
    pub da: f64,
}

impl Drift {
    /// Advance one tick. Alpha is not clamped here.
    #[inline]
    pub fn step(&self, p: Pose) -> Pose {
        Pose {
            x: p.x + self.dx,
            y: p.y + self.dy,
            s: p.s,
            r: p.r + self.dr,
            a: p.a - self.da,
        }
    }
}

pub struct Particles {
    pub pose: Vec<Pose>,
    pub drift: Vec<Drift>,
    /// Remaining respawns per particle, UNLIMITED for no cap.
    pub limit: Vec<i32>,
}

impl Particles {
    /// Spawn `cfg.particle_num` particles below the viewport.
    pub fn spawn(cfg: &ParticleConfig, view: Viewport, rng: &mut impl Entropy) -> Self {
        let n = cfg.particle_num;
        let mut pose = Vec::with_capacity(n);
        let mut drift = Vec::with_capacity(n);

        for _ in 0..n {
            pose.push(initial_pose(cfg, view, rng));
            drift.push(initial_drift(cfg, rng));
        }

        Self { pose, drift, limit: vec![cfg.limit_times; n] }
    }

    pub fn len(&self) -> usize {
        self.pose.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pose.is_empty()
    }

    /// Move every particle and respawn the ones that left the screen or
    /// faded out, as far as their budget allows. Exhausted particles keep
    /// moving and stay in the list.
    pub fn update(&mut self, cfg: &ParticleConfig, view: Viewport, rng: &mut impl Entropy) {
        for i in 0..self.len() {
            let p = self.drift[i].step(self.pose[i]);
            self.pose[i] = p;

            if view.contains(p.x, p.y) && p.a > 0.0 {
                continue;
            }

            match self.limit[i] {
                UNLIMITED => self.pose[i] = respawn_pose(cfg, view, rng),
                n if n > 0 => {
                    self.pose[i] = respawn_pose(cfg, view, rng);
                    self.limit[i] = n - 1;
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Range;
    use crate::rng::XorShift;
    use crate::rng::testing::Script;
    use pretty_assertions::assert_eq;

    const VIEW: Viewport = Viewport::new(800.0, 600.0);

    fn cfg(limit_times: i32) -> ParticleConfig {
        let mut cfg = ParticleConfig::default();
        cfg.particle_num = 1;
        cfg.limit_times = limit_times;
        cfg.opacity = Range::new(0.5, 0.5);
        cfg.size = Range::new(1.0, 1.0);
        cfg.speed.horizontal = Range::new(0.0, 0.0);
        cfg.speed.vertical = Range::new(10.0, 10.0);
        cfg.speed.rotation = 1.0;
        cfg.speed.fade_speed = 5.0;
        cfg
    }

    fn single(cfg: &ParticleConfig, pose: Pose) -> Particles {
        let mut list = Particles::spawn(cfg, VIEW, &mut Script::constant(0.5));
        list.pose[0] = pose;
        list
    }

    fn centre() -> Pose {
        Pose { x: 400.0, y: 300.0, s: 1.0, r: 0.0, a: 0.5 }
    }

    #[test]
    fn alpha_drops_by_fade_rate_without_clamp() {
        let cfg = cfg(-1);
        let mut list = single(&cfg, centre());
        list.pose[0].a = 0.03;
        let before = list.pose[0].a;
        let step = list.drift[0].step(list.pose[0]);
        assert_eq!(step.a, before - cfg.speed.fade_speed * 0.01);
        assert!(step.a < 0.0);
    }

    #[test]
    fn in_bounds_particle_only_moves() {
        let cfg = cfg(0);
        let mut list = single(&cfg, centre());
        list.update(&cfg, VIEW, &mut Script::constant(0.9));
        let expected = Pose { x: 400.0, y: 290.0, s: 1.0, r: 1.0 * 0.1, a: 0.5 - 5.0 * 0.01 };
        assert_eq!(list.pose[0], expected);
        assert_eq!(list.limit[0], 0);
    }

    #[test]
    fn unlimited_respawns_forever() {
        let cfg = cfg(-1);
        let mut list = single(&cfg, centre());
        let mut rng = XorShift::new(42);
        let mut respawns = 0;
        for _ in 0..5_000 {
            let before = list.drift[0].step(list.pose[0]);
            list.update(&cfg, VIEW, &mut rng);
            if list.pose[0] != before {
                respawns += 1;
            }
        }
        // Fading 0.05 per tick from 0.5 alone forces a reset every 10 ticks.
        assert!(respawns >= 500, "{respawns}");
        assert_eq!(list.limit[0], UNLIMITED);
    }

    #[test]
    fn bounded_budget_respawns_exactly_n_times() {
        let cfg = cfg(3);
        let mut list = single(&cfg, centre());
        let mut rng = XorShift::new(9);
        let mut respawns = 0;
        for _ in 0..2_000 {
            let budget = list.limit[0];
            list.update(&cfg, VIEW, &mut rng);
            if list.limit[0] < budget {
                respawns += 1;
            }
        }
        assert_eq!(respawns, 3);
        assert_eq!(list.limit[0], 0);
    }

    #[test]
    fn exhausted_particle_keeps_drifting_off_screen() {
        let cfg = cfg(0);
        let mut list = single(&cfg, Pose { x: 400.0, y: -95.0, s: 1.0, r: 0.0, a: 0.5 });
        list.update(&cfg, VIEW, &mut Script::constant(0.5));
        list.update(&cfg, VIEW, &mut Script::constant(0.5));
        assert_eq!(list.pose[0].y, -115.0);
        assert_eq!(list.len(), 1);
        assert_eq!(list.limit[0], 0);
    }

    #[test]
    fn edges_are_inclusive() {
        assert!(VIEW.contains(0.0, -100.0));
        assert!(VIEW.contains(800.0, 600.0));
        assert!(!VIEW.contains(800.1, 0.0));
        assert!(!VIEW.contains(0.0, -100.1));
    }

    #[test]
    fn spawn_fills_budget_table() {
        let mut cfg = cfg(4);
        cfg.particle_num = 3;
        let list = Particles::spawn(&cfg, VIEW, &mut XorShift::default());
        assert_eq!(list.len(), 3);
        assert_eq!(list.limit, vec![4, 4, 4]);
    }
}
