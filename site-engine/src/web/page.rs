// page.rs - Live document and localStorage behind the Dom/Store traits

use gloo::storage::{LocalStorage, Storage as _};
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::dom::{Dom, Hook, Region, Store};
use crate::error::EngineError;

const MOBILE_BANNER: &str = r#".block.lg\:hidden[alt="Mobile banner image of the blog"]"#;

pub struct BrowserDom {
    window: Window,
    document: Document,
}

impl BrowserDom {
    pub fn new() -> Result<Self, EngineError> {
        let window = web_sys::window().ok_or_else(|| EngineError::Browser("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| EngineError::Browser("no document".into()))?;
        Ok(Self { window, document })
    }

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn element(&self, region: Region) -> Option<Element> {
        match region {
            Region::Root => self.document.document_element(),
            Region::Body => self.document.body().map(Into::into),
            Region::ConfigCarrier => self.document.get_element_by_id("config-carrier"),
            Region::BannerWrapper => self.document.get_element_by_id("banner-wrapper"),
            Region::Banner => self.document.get_element_by_id("banner"),
            Region::BannerCarousel => self.document.get_element_by_id("banner-carousel"),
            Region::CarouselItem(i) => self
                .element(Region::BannerCarousel)?
                .get_elements_by_class_name("carousel-item")
                .item(i as u32),
            Region::MobileBanner => self.query(MOBILE_BANNER),
            Region::Navbar => self.document.get_element_by_id("navbar"),
            Region::FullscreenWallpaper => self.query("[data-fullscreen-wallpaper]"),
            Region::MainContent => self.query(".absolute.w-full.z-30"),
        }
    }
}

impl Dom for BrowserDom {
    fn exists(&self, region: Region) -> bool {
        self.element(region).is_some()
    }

    fn has_class(&self, region: Region, class: &str) -> bool {
        self.element(region).is_some_and(|e| e.class_list().contains(class))
    }

    fn add_class(&mut self, region: Region, class: &str) {
        if let Some(e) = self.element(region) {
            let _ = e.class_list().add_1(class);
        }
    }

    fn remove_class(&mut self, region: Region, class: &str) {
        if let Some(e) = self.element(region) {
            let _ = e.class_list().remove_1(class);
        }
    }

    fn attribute(&self, region: Region, name: &str) -> Option<String> {
        self.element(region)?.get_attribute(name)
    }

    fn set_attribute(&mut self, region: Region, name: &str, value: &str) {
        if let Some(e) = self.element(region) {
            let _ = e.set_attribute(name, value);
        }
    }

    fn set_style(&mut self, region: Region, property: &str, value: &str) {
        let Some(el) = self.element(region) else { return };
        let Some(el) = el.dyn_ref::<HtmlElement>() else { return };
        let style = el.style();
        let _ = if value.is_empty() {
            style.remove_property(property).map(drop)
        } else {
            style.set_property(property, value)
        };
    }

    fn carousel_len(&self) -> usize {
        self.element(Region::BannerCarousel)
            .map_or(0, |c| c.get_elements_by_class_name("carousel-item").length() as usize)
    }

    fn viewport_width(&self) -> f64 {
        self.window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or_default()
    }

    fn pathname(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }

    fn prefers_dark(&self) -> bool {
        self.window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches())
    }

    fn invoke(&mut self, hook: Hook) -> bool {
        let Ok(value) = Reflect::get(&self.window, &JsValue::from_str(hook.global_name())) else {
            return false;
        };
        let Ok(func) = value.dyn_into::<Function>() else {
            return false;
        };
        if let Err(err) = func.call0(&self.window) {
            log::warn!("{} threw: {:?}", hook.global_name(), err);
        }
        true
    }
}

/// localStorage, raw strings (no JSON encoding).
pub struct LocalStore;

impl Store for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(err) = LocalStorage::raw().set_item(key, value) {
            log::warn!("localStorage write of {key} failed: {err:?}");
        }
    }
}
