// ============================================================================
// SITE ENGINE - Particle overlay and appearance settings for the blog
// ============================================================================
//
// Target-independent state lives in the modules below and is tested on the
// host. The wasm32 build adds the browser bindings and the exported JS API
// (`ParticleOverlay`, `AppearanceHandle`, language and date helpers).

pub mod config;
pub mod dates;
pub mod dom;
pub mod engine;
pub mod error;
pub mod language;
pub mod render;
pub mod rng;
pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{ParticleConfig, SiteConfig, ThemeMode, WallpaperMode};
pub use engine::{ParticleEngine, Ticket};
pub use error::EngineError;
pub use settings::Appearance;

#[cfg(target_arch = "wasm32")]
pub use web::{AppearanceHandle, ParticleOverlay};
