// particles.rs - JS handle for the particle overlay
//
// The handle owns its engine; JS keeps it alive for as long as the overlay
// should exist. The animation loop holds an Rc to the same driver and stops
// rescheduling once the engine reports it is no longer running.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::render::{AnimationFrame, request_animation_frame};
use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{future_to_promise, spawn_local};

use super::canvas::{CanvasStage, load_image};
use crate::config::{PARTICLE_IMAGE, ParticleConfig};
use crate::engine::{ParticleEngine, Ticket};
use crate::error::EngineError;

struct Driver {
    engine: RefCell<ParticleEngine<CanvasStage>>,
    frame: RefCell<Option<AnimationFrame>>,
}

impl Driver {
    async fn launch(self: Rc<Self>, ticket: Ticket) -> Result<bool, EngineError> {
        let loaded = load_image(PARTICLE_IMAGE).await;
        let started = self
            .engine
            .borrow_mut()
            .finish_init(ticket, loaded, CanvasStage::mount);
        match started {
            Ok(true) => {
                self.schedule();
                Ok(true)
            }
            Ok(false) => Ok(false),
            Err(err) => {
                log::error!("particle init failed: {err}");
                Err(err)
            }
        }
    }

    /// Fire-and-forget variant for entry points that do not return a promise.
    fn relaunch(self: &Rc<Self>, ticket: Option<Ticket>) {
        if let Some(ticket) = ticket {
            let driver = Rc::clone(self);
            spawn_local(async move {
                let _ = driver.launch(ticket).await;
            });
        }
    }

    fn schedule(self: &Rc<Self>) {
        let driver = Rc::clone(self);
        let handle = request_animation_frame(move |_| driver.tick());
        *self.frame.borrow_mut() = Some(handle);
    }

    fn tick(self: &Rc<Self>) {
        self.frame.borrow_mut().take();
        let more = self.engine.borrow_mut().frame();
        if more {
            self.schedule();
        }
    }

    fn halt(&self) {
        self.frame.borrow_mut().take();
        self.engine.borrow_mut().stop();
    }
}

#[wasm_bindgen]
pub struct ParticleOverlay {
    driver: Rc<Driver>,
}

#[wasm_bindgen]
impl ParticleOverlay {
    /// `config` is the particle config as JSON text; omitted means defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<String>) -> Result<ParticleOverlay, JsValue> {
        let config = match config {
            Some(json) => ParticleConfig::from_json(&json)?,
            None => ParticleConfig::default(),
        };
        Ok(Self {
            driver: Rc::new(Driver {
                engine: RefCell::new(ParticleEngine::new(config)),
                frame: RefCell::new(None),
            }),
        })
    }

    /// Resolves `true` once the overlay is drawing, `false` when disabled,
    /// already running, or superseded by a later stop/init. Rejects when the
    /// bitmap fails to load.
    pub fn init(&self) -> Promise {
        // Ticket now, not inside the future: a stop() later in this turn
        // must be able to supersede it.
        let Some(ticket) = self.driver.engine.borrow_mut().begin_init() else {
            return Promise::resolve(&JsValue::FALSE);
        };
        let driver = Rc::clone(&self.driver);
        future_to_promise(async move {
            let started = driver.launch(ticket).await?;
            Ok(JsValue::from_bool(started))
        })
    }

    pub fn stop(&self) {
        self.driver.halt();
    }

    pub fn toggle(&self) {
        let ticket = self.driver.engine.borrow_mut().toggle();
        if ticket.is_none() {
            self.driver.frame.borrow_mut().take();
        }
        self.driver.relaunch(ticket);
    }

    #[wasm_bindgen(js_name = updateConfig)]
    pub fn update_config(&self, config: &str) -> Result<(), JsValue> {
        let config = ParticleConfig::from_json(config)?;
        self.driver.frame.borrow_mut().take();
        let ticket = self.driver.engine.borrow_mut().update_config(config);
        self.driver.relaunch(ticket);
        Ok(())
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.driver.engine.borrow().is_running()
    }

    #[wasm_bindgen(js_name = particleCount)]
    pub fn particle_count(&self) -> usize {
        self.driver.engine.borrow().particle_count()
    }
}

impl Drop for ParticleOverlay {
    fn drop(&mut self) {
        self.driver.halt();
    }
}
