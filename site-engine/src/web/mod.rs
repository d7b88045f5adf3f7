// web/ - wasm32 browser bindings
//
// Everything here is glue: web-sys/gloo implementations of the Dom, Store
// and Stage traits plus the exported JS API. Behaviour lives in the
// target-independent modules.

mod appearance;
mod canvas;
mod page;
mod particles;

pub use appearance::AppearanceHandle;
pub use canvas::{CANVAS_ID, CanvasStage, load_image};
pub use page::{BrowserDom, LocalStore};
pub use particles::ParticleOverlay;

use js_sys::{Date, Object, Reflect};
use wasm_bindgen::prelude::*;

use crate::dates::{self, LocalizedDate};
use crate::language;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
}

fn browser_languages() -> Vec<String> {
    let Some(navigator) = web_sys::window().map(|w| w.navigator()) else {
        return Vec::new();
    };
    let mut tags: Vec<String> = navigator
        .languages()
        .iter()
        .filter_map(|v| v.as_string())
        .collect();
    if tags.is_empty() {
        tags.extend(navigator.language());
    }
    tags
}

/// Site language: `configured` when supported, else the first supported
/// browser language, else English.
#[wasm_bindgen(js_name = siteLanguage)]
pub fn site_language(configured: Option<String>) -> String {
    language::site_language(configured.as_deref(), &browser_languages()).to_owned()
}

#[wasm_bindgen(js_name = detectBrowserLanguage)]
pub fn detect_browser_language(fallback: Option<String>) -> String {
    let fallback = fallback
        .as_deref()
        .and_then(language::find)
        .map_or(language::DEFAULT_BROWSER_FALLBACK, |l| l.code);
    language::detect_browser_language(&browser_languages(), fallback).to_owned()
}

#[wasm_bindgen(js_name = translateLanguage)]
pub fn translate_language(code: &str) -> String {
    language::translate_language_from_config(code).to_owned()
}

#[wasm_bindgen(js_name = configLanguage)]
pub fn config_language(translate_code: &str) -> String {
    language::config_language_from_translate(translate_code).to_owned()
}

#[wasm_bindgen(js_name = languageDisplayName)]
pub fn language_display_name(code: &str) -> String {
    language::language_display_name(code).to_owned()
}

/// Long-form date ("March 9, 2024", "2024年3月9日") in the locale of `lang`.
#[wasm_bindgen(js_name = formatDateI18n)]
pub fn format_date_i18n(date: &str, lang: Option<String>) -> Result<String, JsValue> {
    let localized = LocalizedDate::new(date, lang.as_deref())?;
    Ok(spell_out(&localized))
}

#[wasm_bindgen(js_name = formatDateToYYYYMMDD)]
pub fn format_date_yyyymmdd(date: &str) -> Result<String, JsValue> {
    Ok(dates::format_yyyymmdd(dates::parse_date(date)?))
}

pub(crate) fn spell_out(localized: &LocalizedDate) -> String {
    use chrono::Datelike as _;

    // Local midnight of the same calendar day, so the browser's time zone
    // cannot shift it.
    let d = localized.date;
    let day = Date::new_with_year_month_day(d.year() as u32, d.month0() as i32, d.day() as i32);

    let options = Object::new();
    for (key, value) in [("year", "numeric"), ("month", "long"), ("day", "numeric")] {
        let _ = Reflect::set(&options, &JsValue::from_str(key), &JsValue::from_str(value));
    }
    day.to_locale_date_string(localized.locale, &options).into()
}
