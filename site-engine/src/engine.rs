// engine.rs - Particle overlay lifecycle
//
// The caller owns the engine; there is no global instance. Init is split in
// two around the async image load:
//
//   begin_init()  -> Ticket        (sync, bumps the epoch)
//   ... await bitmap ...
//   finish_init(ticket, loaded, mount)
//
// stop() and every begin_init() bump the epoch, so a load that resolves
// after the engine moved on is dropped instead of mounting a second canvas.

use crate::config::ParticleConfig;
use crate::error::EngineError;
use crate::render::{self, Stage};
use crate::rng::{Entropy, XorShift};
use crate::sim::Particles;

/// Proof that an init was started at a given epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Ticket {
    epoch: u64,
}

pub struct ParticleEngine<S: Stage, E: Entropy = XorShift> {
    config: ParticleConfig,
    epoch: u64,
    running: bool,
    stage: Option<S>,
    particles: Option<Particles>,
    rng: E,
}

impl<S: Stage> ParticleEngine<S> {
    pub fn new(config: ParticleConfig) -> Self {
        Self::with_rng(config, XorShift::default())
    }
}

impl<S: Stage, E: Entropy> ParticleEngine<S, E> {
    pub fn with_rng(config: ParticleConfig, rng: E) -> Self {
        Self {
            config,
            epoch: 0,
            running: false,
            stage: None,
            particles: None,
            rng,
        }
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn particles(&self) -> Option<&Particles> {
        self.particles.as_ref()
    }

    pub fn particle_count(&self) -> usize {
        self.particles.as_ref().map_or(0, Particles::len)
    }

    /// Start an init. `None` when disabled or already running.
    pub fn begin_init(&mut self) -> Option<Ticket> {
        if !self.config.enable || self.running {
            return None;
        }
        self.epoch += 1;
        Some(Ticket { epoch: self.epoch })
    }

    /// Finish an init once the bitmap load settled.
    ///
    /// A stale ticket returns `Ok(false)` without calling `mount`, whatever
    /// the load outcome. A failed load is returned as-is and leaves the
    /// engine stopped. Otherwise `mount` builds the stage from the loaded
    /// bitmap, particles are spawned and drawn once, and the engine is
    /// running.
    pub fn finish_init<T, F>(
        &mut self,
        ticket: Ticket,
        loaded: Result<T, EngineError>,
        mount: F,
    ) -> Result<bool, EngineError>
    where
        F: FnOnce(&ParticleConfig, T) -> Result<S, EngineError>,
    {
        if ticket.epoch != self.epoch || self.running {
            log::debug!("particle init superseded (epoch {} < {})", ticket.epoch, self.epoch);
            return Ok(false);
        }
        let bitmap = loaded?;

        let mut stage = mount(&self.config, bitmap)?;
        let particles = Particles::spawn(&self.config, stage.viewport(), &mut self.rng);
        render::blit_all(&particles, &mut stage);

        log::info!(
            "particles started: {} sprites, limit {}",
            particles.len(),
            self.config.limit_times
        );
        self.stage = Some(stage);
        self.particles = Some(particles);
        self.running = true;
        Ok(true)
    }

    /// One animation tick. Returns whether another frame should be scheduled.
    pub fn frame(&mut self) -> bool {
        let (Some(stage), Some(particles)) = (self.stage.as_mut(), self.particles.as_mut()) else {
            return false;
        };
        if !self.running {
            return false;
        }

        particles.update(&self.config, stage.viewport(), &mut self.rng);
        render::draw(particles, stage);
        true
    }

    /// Tear down the overlay. Safe to call repeatedly.
    pub fn stop(&mut self) {
        self.epoch += 1;
        if let Some(mut stage) = self.stage.take() {
            stage.detach();
            log::info!("particles stopped");
        }
        self.particles = None;
        self.running = false;
    }

    /// Stop when running, otherwise start an init.
    pub fn toggle(&mut self) -> Option<Ticket> {
        if self.running {
            self.stop();
            None
        } else {
            self.begin_init()
        }
    }

    /// Swap the config. When the engine was running it is stopped and, if
    /// the new config is enabled, a fresh init is started.
    pub fn update_config(&mut self, config: ParticleConfig) -> Option<Ticket> {
        let was_running = self.running;
        if was_running {
            self.stop();
        }
        self.config = config;
        if was_running && self.config.enable {
            self.begin_init()
        } else {
            None
        }
    }
}
