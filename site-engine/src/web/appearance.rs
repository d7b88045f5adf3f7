// appearance.rs - JS handle for theme, wallpaper and hue
//
// Requests raise their guard class synchronously; the rest of the
// choreography is pumped one animation frame at a time until nothing is
// pending.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::render::{AnimationFrame, request_animation_frame};
use wasm_bindgen::prelude::*;

use super::page::{BrowserDom, LocalStore};
use crate::config::{SiteConfig, ThemeMode, WallpaperMode};
use crate::dates::LocalizedDate;
use crate::settings::{self, Appearance};

struct Shared {
    app: RefCell<Appearance>,
    dom: RefCell<BrowserDom>,
    store: RefCell<LocalStore>,
    frame: RefCell<Option<AnimationFrame>>,
}

impl Shared {
    fn pump(self: &Rc<Self>) {
        if self.frame.borrow().is_some() || !self.app.borrow().is_pending() {
            return;
        }
        let shared = Rc::clone(self);
        let handle = request_animation_frame(move |_| shared.on_frame());
        *self.frame.borrow_mut() = Some(handle);
    }

    fn on_frame(self: &Rc<Self>) {
        self.frame.borrow_mut().take();
        let more = self.app.borrow_mut().on_frame(&mut *self.dom.borrow_mut());
        if more {
            self.pump();
        }
    }
}

#[wasm_bindgen]
pub struct AppearanceHandle {
    shared: Rc<Shared>,
}

#[wasm_bindgen]
impl AppearanceHandle {
    /// `site` is the site config as JSON text; omitted means defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(site: Option<String>) -> Result<AppearanceHandle, JsValue> {
        let site = match site {
            Some(json) => SiteConfig::from_json(&json)?,
            None => SiteConfig::default(),
        };
        Ok(Self {
            shared: Rc::new(Shared {
                app: RefCell::new(Appearance::new(site)),
                dom: RefCell::new(BrowserDom::new()?),
                store: RefCell::new(LocalStore),
                frame: RefCell::new(None),
            }),
        })
    }

    #[wasm_bindgen(js_name = storedTheme)]
    pub fn stored_theme(&self) -> String {
        let store = self.shared.store.borrow();
        self.shared.app.borrow().stored_theme(&*store).to_string()
    }

    #[wasm_bindgen(js_name = setTheme)]
    pub fn set_theme(&self, mode: &str) -> Result<bool, JsValue> {
        let mode: ThemeMode = mode.parse()?;
        let queued = {
            let s = &self.shared;
            s.app
                .borrow_mut()
                .set_theme(mode, &mut *s.store.borrow_mut(), &mut *s.dom.borrow_mut())
        };
        self.shared.pump();
        Ok(queued)
    }

    #[wasm_bindgen(js_name = applyTheme)]
    pub fn apply_theme(&self, mode: &str) -> Result<bool, JsValue> {
        let mode: ThemeMode = mode.parse()?;
        let queued = {
            let s = &self.shared;
            s.app.borrow_mut().apply_theme(mode, &mut *s.dom.borrow_mut())
        };
        self.shared.pump();
        Ok(queued)
    }

    #[wasm_bindgen(js_name = storedWallpaperMode)]
    pub fn stored_wallpaper_mode(&self) -> String {
        let store = self.shared.store.borrow();
        self.shared.app.borrow().stored_wallpaper_mode(&*store).to_string()
    }

    #[wasm_bindgen(js_name = setWallpaperMode)]
    pub fn set_wallpaper_mode(&self, mode: &str) -> Result<bool, JsValue> {
        let mode: WallpaperMode = mode.parse()?;
        let queued = {
            let s = &self.shared;
            s.app
                .borrow_mut()
                .set_wallpaper_mode(mode, &mut *s.store.borrow_mut(), &mut *s.dom.borrow_mut())
        };
        self.shared.pump();
        Ok(queued)
    }

    #[wasm_bindgen(js_name = applyWallpaperMode)]
    pub fn apply_wallpaper_mode(&self, mode: &str) -> Result<bool, JsValue> {
        let mode: WallpaperMode = mode.parse()?;
        let queued = {
            let s = &self.shared;
            s.app.borrow_mut().apply_wallpaper_mode(mode, &mut *s.dom.borrow_mut())
        };
        self.shared.pump();
        Ok(queued)
    }

    #[wasm_bindgen(js_name = initWallpaperMode)]
    pub fn init_wallpaper_mode(&self) -> bool {
        let queued = {
            let s = &self.shared;
            s.app
                .borrow_mut()
                .init_wallpaper_mode(&*s.store.borrow(), &mut *s.dom.borrow_mut())
        };
        self.shared.pump();
        queued
    }

    /// Long-form date in the site's configured language.
    #[wasm_bindgen(js_name = formatDate)]
    pub fn format_date(&self, date: &str) -> Result<String, JsValue> {
        let localized = LocalizedDate::for_site(date, self.shared.app.borrow().site())?;
        Ok(super::spell_out(&localized))
    }

    #[wasm_bindgen(js_name = isPending)]
    pub fn is_pending(&self) -> bool {
        self.shared.app.borrow().is_pending()
    }

    pub fn hue(&self) -> i32 {
        settings::hue(&*self.shared.store.borrow(), &*self.shared.dom.borrow())
    }

    #[wasm_bindgen(js_name = setHue)]
    pub fn set_hue(&self, hue: i32) {
        let s = &self.shared;
        settings::set_hue(&mut *s.store.borrow_mut(), &mut *s.dom.borrow_mut(), hue);
    }

    #[wasm_bindgen(js_name = defaultHue)]
    pub fn default_hue(&self) -> i32 {
        settings::default_hue(&*self.shared.dom.borrow())
    }
}

impl Drop for AppearanceHandle {
    fn drop(&mut self) {
        self.shared.frame.borrow_mut().take();
    }
}
