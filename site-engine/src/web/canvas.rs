// canvas.rs - Fixed full-window canvas overlay
//
// One canvas per running engine, appended to <body> on mount and removed on
// detach. The canvas is resized with the window; the sim reads the new size
// on its next tick.

use gloo::events::EventListener;
use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement, Window};

use crate::config::ParticleConfig;
use crate::error::EngineError;
use crate::render::{Sprite, Stage};
use crate::sim::Viewport;

pub const CANVAS_ID: &str = "canvas_particle";

fn browser(what: &str) -> impl FnOnce(JsValue) -> EngineError + '_ {
    move |err| EngineError::Browser(format!("{what}: {err:?}"))
}

pub struct CanvasStage {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    image: HtmlImageElement,
    resize: Option<EventListener>,
}

impl CanvasStage {
    pub fn mount(config: &ParticleConfig, image: HtmlImageElement) -> Result<Self, EngineError> {
        let window = web_sys::window().ok_or_else(|| EngineError::Browser("no window".into()))?;
        let document: Document = window
            .document()
            .ok_or_else(|| EngineError::Browser("no document".into()))?;
        let body = document
            .body()
            .ok_or_else(|| EngineError::Browser("no body".into()))?;

        let canvas: HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(browser("create canvas"))?
            .dyn_into()
            .map_err(|_| EngineError::Browser("canvas element has wrong type".into()))?;
        canvas.set_id(CANVAS_ID);
        canvas
            .set_attribute(
                "style",
                &format!(
                    "position: fixed; left: 0; top: 0; pointer-events: none; z-index: {};",
                    config.z_index
                ),
            )
            .map_err(browser("canvas style"))?;
        fit(&window, &canvas);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(browser("get 2d context"))?
            .ok_or_else(|| EngineError::Browser("2d context unavailable".into()))?
            .dyn_into()
            .map_err(|_| EngineError::Browser("2d context has wrong type".into()))?;

        body.append_child(&canvas).map_err(browser("append canvas"))?;

        let resize = {
            let win = window.clone();
            let canvas = canvas.clone();
            EventListener::new(&window, "resize", move |_event| fit(&win, &canvas))
        };

        Ok(Self { canvas, ctx, image, resize: Some(resize) })
    }
}

fn fit(window: &Window, canvas: &HtmlCanvasElement) {
    let px = |v: Result<JsValue, JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or_default() as u32
    };
    canvas.set_width(px(window.inner_width()));
    canvas.set_height(px(window.inner_height()));
}

impl Stage for CanvasStage {
    fn viewport(&self) -> Viewport {
        Viewport::new(self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn clear(&mut self) {
        let view = self.viewport();
        self.ctx.clear_rect(0.0, 0.0, view.w, view.h);
    }

    fn blit(&mut self, sprite: &Sprite) {
        let ctx = &self.ctx;
        ctx.save();
        let _ = ctx.translate(sprite.x, sprite.y);
        let _ = ctx.rotate(sprite.rotation);
        ctx.set_global_alpha(sprite.alpha);
        let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
            &self.image,
            0.0,
            0.0,
            sprite.size,
            sprite.size,
        );
        ctx.restore();
    }

    fn detach(&mut self) {
        // Dropping the listener unregisters it.
        self.resize = None;
        self.canvas.remove();
    }
}

/// Resolve once `src` has decoded. The element is never attached to the page.
pub async fn load_image(src: &str) -> Result<HtmlImageElement, EngineError> {
    let image = HtmlImageElement::new().map_err(browser("create image"))?;
    let pending = {
        let image = image.clone();
        let src = src.to_owned();
        Promise::new(&mut move |resolve, reject| {
            image.set_onload(Some(&resolve));
            image.set_onerror(Some(&reject));
            image.set_src(&src);
        })
    };

    JsFuture::from(pending)
        .await
        .map_err(|_| EngineError::ImageLoad(src.to_owned()))?;
    image.set_onload(None);
    image.set_onerror(None);
    Ok(image)
}
