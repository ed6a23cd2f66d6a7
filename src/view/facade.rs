//! WASM facade over the canvas view.
//!
//! Owns the shared application state behind `Rc<RefCell<_>>`, replays repaint
//! plans onto the 2D context, and wires the DOM events (canvas click, color
//! input). Store failures are logged to the browser console and swallowed;
//! the host page never sees an error surface.

use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, CanvasRenderingContext2d, HtmlCanvasElement, HtmlInputElement};

use crate::domain::GridConfig;
use super::ViewCore;

type SharedCore = Rc<RefCell<ViewCore>>;
type SharedSurface = Rc<RefCell<Option<CanvasRenderingContext2d>>>;

/// The pixel-art editor as seen from JS.
#[wasm_bindgen]
pub struct PixelCanvas {
    core: SharedCore,
    surface: SharedSurface,
}

#[wasm_bindgen]
impl PixelCanvas {
    /// Create an editor with the reference configuration (16x16 cells,
    /// 20 device pixels per cell, white fill).
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: Rc::new(RefCell::new(ViewCore::new(GridConfig::default()))),
            surface: Rc::new(RefCell::new(None)),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.core.borrow().config().width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.core.borrow().config().height
    }

    #[wasm_bindgen(getter)]
    pub fn cell_size(&self) -> u32 {
        self.core.borrow().config().cell_size
    }

    /// Currently selected draw color as `#RRGGBB`.
    #[wasm_bindgen(getter)]
    pub fn draw_color(&self) -> String {
        self.core.borrow().selected_color().css()
    }

    /// Look up the canvas and color-input elements, size the canvas, wire the
    /// events, then run the mount sequence and paint the initial grid.
    ///
    /// DOM lookup failures are returned to the host (a wiring bug on the
    /// page); store failures are logged and swallowed.
    pub fn mount(&self, canvas_id: &str, picker_id: &str) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str("canvas element not found"))?
            .dyn_into()?;
        let picker: HtmlInputElement = document
            .get_element_by_id(picker_id)
            .ok_or_else(|| JsValue::from_str("color input element not found"))?
            .dyn_into()?;

        {
            let config = *self.core.borrow().config();
            canvas.set_width(config.raster_width());
            canvas.set_height(config.raster_height());
        }

        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;
        self.surface.borrow_mut().replace(context);

        let core = Rc::clone(&self.core);
        let surface = Rc::clone(&self.surface);
        let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(
            move |ev: web_sys::MouseEvent| {
                click_at(&core, &surface, ev.offset_x(), ev.offset_y());
            },
        );
        canvas.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();

        let core = Rc::clone(&self.core);
        let on_input = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
            let Some(target) = ev.target() else { return };
            let Ok(input) = target.dyn_into::<HtmlInputElement>() else {
                return;
            };
            if let Err(err) = core.borrow_mut().set_selected_color(&input.value()) {
                log_failure("color picker", &err);
            }
        });
        picker.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
        on_input.forget();

        let mounted = self.core.borrow_mut().mount();
        match mounted {
            Ok(()) => repaint_surface(&self.core, &self.surface),
            Err(err) => log_failure("mount", &err),
        }
        Ok(())
    }

    /// Handle a pointer click at a raster position. Exposed for hosts that do
    /// their own event wiring instead of `mount`.
    pub fn handle_click(&self, px: i32, py: i32) {
        click_at(&self.core, &self.surface, px, py);
    }

    /// Set the draw color from a CSS `#RRGGBB` string. Bad input keeps the
    /// previous color.
    pub fn set_draw_color(&self, css: &str) {
        if let Err(err) = self.core.borrow_mut().set_selected_color(css) {
            log_failure("set_draw_color", &err);
        }
    }

    /// Repaint the whole grid from the last fetched rows.
    pub fn repaint(&self) {
        repaint_surface(&self.core, &self.surface);
    }

    /// Serialized row dump for host-side inspection, in fetch order.
    pub fn pixels_json(&self) -> String {
        serde_json::to_string(self.core.borrow().rows()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Packed ABGR colors in grid order, one `u32` per cell, for hosts that
    /// render from a raw buffer (e.g. `ImageData`).
    pub fn color_buffer(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(self.core.borrow().color_buffer())
    }
}

impl Default for PixelCanvas {
    fn default() -> Self {
        Self::new()
    }
}

/// Click path: translate to a cell, write the selected color, repaint.
/// Clicks outside the grid are dropped; store errors are logged and the
/// operation aborts without retry.
fn click_at(core: &SharedCore, surface: &SharedSurface, px: i32, py: i32) {
    let cell = core.borrow().cell_at(px, py);
    let Some((x, y)) = cell else { return };
    let drawn = core.borrow_mut().draw(x, y);
    match drawn {
        Ok(()) => repaint_surface(core, surface),
        Err(err) => log_failure("draw", &err),
    }
}

fn repaint_surface(core: &SharedCore, surface: &SharedSurface) {
    let surface = surface.borrow();
    let Some(ctx) = surface.as_ref() else { return };
    for fill in core.borrow().draw_list() {
        ctx.set_fill_style_str(&fill.color.css());
        ctx.fill_rect(
            fill.px as f64,
            fill.py as f64,
            fill.size as f64,
            fill.size as f64,
        );
    }
}

fn log_failure(context: &str, err: &dyn Display) {
    console::error_1(&format!("gridpaint: {context} failed: {err}").into());
}
