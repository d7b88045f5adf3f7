// settings/ - Persisted appearance: theme, wallpaper, hue
//
// `Appearance` owns one choreography per concern. Requests touch the page
// synchronously only to raise the guard; the host calls `on_frame` once per
// animation frame while `is_pending()` holds.

mod hue;
mod theme;
mod transition;
mod wallpaper;

pub use hue::{default_hue, hue, set_hue};
pub use theme::{ThemeTarget, resolves_dark};
pub use transition::{Choreography, Phase, Step};
pub use wallpaper::{MainOffset, banner_suppressed, current_mode, is_home};

use crate::config::{SiteConfig, ThemeMode, WallpaperMode};
use crate::dom::{Dom, Region, Store};

pub const HUE_KEY: &str = "hue";
pub const THEME_KEY: &str = "theme";
pub const WALLPAPER_KEY: &str = "wallpaperMode";

pub struct Appearance {
    site: SiteConfig,
    theme: Choreography<ThemeTarget>,
    wallpaper: Choreography<WallpaperMode>,
}

impl Appearance {
    pub fn new(site: SiteConfig) -> Self {
        Self { site, theme: Choreography::new(), wallpaper: Choreography::new() }
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    pub fn is_pending(&self) -> bool {
        self.theme.is_pending() || self.wallpaper.is_pending()
    }

    // ------------------------------------------------------------------
    // Theme
    // ------------------------------------------------------------------

    /// Stored preference, or the site default when missing or unreadable.
    pub fn stored_theme(&self, store: &impl Store) -> ThemeMode {
        store
            .get(THEME_KEY)
            .and_then(|t| t.parse().ok())
            .unwrap_or(self.site.default_theme)
    }

    pub fn set_theme(
        &mut self,
        mode: ThemeMode,
        store: &mut impl Store,
        dom: &mut impl Dom,
    ) -> bool {
        store.set(THEME_KEY, mode.as_str());
        self.apply_theme(mode, dom)
    }

    /// Queue `mode` for the next frame. `false` when the page already shows it.
    pub fn apply_theme(&mut self, mode: ThemeMode, dom: &mut impl Dom) -> bool {
        let Some(target) = theme::plan(mode, &*dom) else {
            return false;
        };
        if self.theme.request(target, target.flip) {
            dom.add_class(Region::Root, theme::THEME_GUARD);
        }
        true
    }

    // ------------------------------------------------------------------
    // Wallpaper
    // ------------------------------------------------------------------

    pub fn stored_wallpaper_mode(&self, store: &impl Store) -> WallpaperMode {
        store
            .get(WALLPAPER_KEY)
            .and_then(|m| m.parse().ok())
            .unwrap_or(self.site.wallpaper.mode)
    }

    pub fn set_wallpaper_mode(
        &mut self,
        mode: WallpaperMode,
        store: &mut impl Store,
        dom: &mut impl Dom,
    ) -> bool {
        store.set(WALLPAPER_KEY, mode.as_str());
        self.apply_wallpaper_mode(mode, dom)
    }

    /// Apply whatever is stored (page load).
    pub fn init_wallpaper_mode(&mut self, store: &impl Store, dom: &mut impl Dom) -> bool {
        let mode = self.stored_wallpaper_mode(store);
        self.apply_wallpaper_mode(mode, dom)
    }

    /// Queue `mode`. `false`, with the page untouched, when it is already
    /// the current mode.
    pub fn apply_wallpaper_mode(&mut self, mode: WallpaperMode, dom: &mut impl Dom) -> bool {
        if current_mode(&*dom, &self.site) == mode {
            return false;
        }
        if self.wallpaper.request(mode, true) {
            dom.add_class(Region::Root, wallpaper::WALLPAPER_GUARD);
        }
        dom.set_attribute(Region::Root, wallpaper::WALLPAPER_ATTR, mode.as_str());
        true
    }

    // ------------------------------------------------------------------
    // Frames
    // ------------------------------------------------------------------

    /// Run one frame of any pending transition. Returns whether another
    /// frame is needed.
    pub fn on_frame(&mut self, dom: &mut impl Dom) -> bool {
        match self.theme.advance() {
            Step::Nothing => {}
            Step::Apply(target) => theme::apply(target, dom),
            Step::ReleaseGuard => dom.remove_class(Region::Root, theme::THEME_GUARD),
        }
        match self.wallpaper.advance() {
            Step::Nothing => {}
            Step::Apply(mode) => wallpaper::apply(mode, &self.site, dom),
            Step::ReleaseGuard => dom.remove_class(Region::Root, wallpaper::WALLPAPER_GUARD),
        }
        self.is_pending()
    }
}
