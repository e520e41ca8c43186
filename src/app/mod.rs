//! Browser shell around [`ClickerState`].
//!
//! Builds two full-viewport canvases (the persistent doodle layer and a
//! pointer-transparent effects layer) plus the DOM controls, routes browser
//! events into the state container as actions, performs the returned commands,
//! and drives the logical clock from `requestAnimationFrame`.
use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, Event, EventTarget, HtmlCanvasElement, HtmlElement,
    MouseEvent, TouchEvent, Window, window,
};

use crate::audio::Speaker;
use crate::config::ClickerConfig;
use crate::error::{ClickerError, Result};
use crate::state::{Action, ClickerState, Command, Viewport};
use crate::stroke::Point;

mod art;
mod overlay;
mod render;

use overlay::Overlay;

const DRAW_CANVAS_ID: &str = "dp-draw-canvas";
const FX_CANVAS_ID: &str = "dp-fx-canvas";

/// Runtime shell state (one per page).
struct Shell {
    state: ClickerState,
    speaker: Speaker,
    draw_ctx: CanvasRenderingContext2d,
    fx_canvas: HtmlCanvasElement,
    fx_ctx: CanvasRenderingContext2d,
    overlay: Overlay,
}

impl Shell {
    fn apply(&mut self, now: f64, action: Action) {
        let commands = self.state.dispatch(now, action);
        for command in commands {
            match command {
                Command::Play(cue) => self.speaker.play(cue),
                Command::Stroke { color, width, segments } => {
                    render::draw_stroke(&self.draw_ctx, &color, width, &segments)
                }
            }
        }
        self.overlay.sync(&self.state);
    }

    fn frame(&mut self, ts: f64) {
        self.apply(ts, Action::Tick);
        if let Err(err) = render::draw_effects(&self.fx_ctx, &self.state) {
            tracing::debug!(?err, "effects frame failed");
        }
    }

    fn resize(&mut self, viewport: Viewport) {
        // Only the effects layer follows the window; resizing the doodle layer would wipe it.
        size_canvas(&self.fx_canvas, viewport);
        self.apply(now_ms(), Action::Resize(viewport));
    }
}

thread_local! {
    static SHELL: RefCell<Option<Shell>> = RefCell::new(None);
}

fn with_shell(f: impl FnOnce(&mut Shell)) {
    SHELL.with(|cell| {
        if let Some(shell) = cell.borrow_mut().as_mut() {
            f(shell);
        }
    });
}

/// Feed an action to the mounted clicker; ignored before mount.
pub(crate) fn dispatch(action: Action) {
    with_shell(|shell| shell.apply(now_ms(), action));
}

pub(crate) fn listen(
    target: &EventTarget,
    kind: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<()> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .map_err(ClickerError::dom)?;
    closure.forget();
    Ok(())
}

pub(crate) fn mount(config: ClickerConfig) -> Result<()> {
    config.validate()?;
    if SHELL.with(|cell| cell.borrow().is_some()) {
        tracing::warn!("clicker already mounted; ignoring");
        return Ok(());
    }
    let win = window().ok_or(ClickerError::NoWindow)?;
    let doc = win.document().ok_or(ClickerError::NoDocument)?;
    let body = doc.body().ok_or(ClickerError::NoBody)?;

    overlay::install_styles(&doc)?;
    let viewport = viewport_of(&win);
    let draw_canvas = canvas(&doc, &body, DRAW_CANVAS_ID, "dp-canvas", viewport)?;
    let fx_canvas = canvas(&doc, &body, FX_CANVAS_ID, "dp-fx", viewport)?;
    let draw_ctx = context_2d(&draw_canvas)?;
    let fx_ctx = context_2d(&fx_canvas)?;
    render::prime(&draw_ctx, viewport);

    let overlay = Overlay::build(&doc, &body, &config)?;
    overlay.wire()?;
    wire_canvas(&draw_canvas)?;
    listen(&win, "resize", |_| {
        if let Some(w) = window() {
            let viewport = viewport_of(&w);
            with_shell(|shell| shell.resize(viewport));
        }
    })?;

    let now = now_ms();
    let speaker = Speaker::new(config.mlg_clip_url.clone(), config.mlg_clip_volume);
    let mut shell = Shell {
        state: ClickerState::new(config, seed(now)),
        speaker,
        draw_ctx,
        fx_canvas,
        fx_ctx,
        overlay,
    };
    shell.apply(now, Action::Resize(viewport));
    SHELL.with(|cell| cell.replace(Some(shell)));

    start_frame_loop();
    tracing::info!(width = viewport.width, height = viewport.height, "clicker mounted");
    Ok(())
}

// --- Pointer input ----------------------------------------------------------

fn mouse_point(evt: &Event) -> Option<Point> {
    let mouse = evt.dyn_ref::<MouseEvent>()?;
    Some(Point::new(f64::from(mouse.offset_x()), f64::from(mouse.offset_y())))
}

fn touch_point(canvas: &HtmlCanvasElement, evt: &Event) -> Option<Point> {
    let touch = evt.dyn_ref::<TouchEvent>()?.touches().get(0)?;
    let origin = canvas.get_bounding_client_rect();
    Some(Point::new(
        f64::from(touch.client_x()) - origin.left(),
        f64::from(touch.client_y()) - origin.top(),
    ))
}

fn pointer_moved(at: Point) {
    with_shell(|shell| {
        let keep_clear = shell.overlay.keep_clear();
        shell.apply(now_ms(), Action::PointerMove { at, keep_clear });
    });
}

fn wire_canvas(canvas: &HtmlCanvasElement) -> Result<()> {
    listen(canvas, "mousedown", |evt| {
        if let Some(at) = mouse_point(&evt) {
            dispatch(Action::PointerDown(at));
        }
    })?;
    listen(canvas, "mousemove", |evt| {
        if let Some(at) = mouse_point(&evt) {
            pointer_moved(at);
        }
    })?;

    let c = canvas.clone();
    listen(canvas, "touchstart", move |evt| {
        // suppress the emulated mouse events that would follow
        evt.prevent_default();
        if let Some(at) = touch_point(&c, &evt) {
            dispatch(Action::PointerDown(at));
        }
    })?;
    let c = canvas.clone();
    listen(canvas, "touchmove", move |evt| {
        evt.prevent_default();
        if let Some(at) = touch_point(&c, &evt) {
            pointer_moved(at);
        }
    })?;

    for kind in ["mouseup", "mouseleave", "touchend", "touchcancel"] {
        listen(canvas, kind, |_| dispatch(Action::PointerUp))?;
    }
    Ok(())
}

// --- Frame loop -------------------------------------------------------------

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn start_frame_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        with_shell(|shell| shell.frame(ts));
        request_frame(&f);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&g);
}

fn request_frame(callback: &FrameCallback) {
    if let (Some(w), Some(cb)) = (window(), callback.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

// --- Helpers ----------------------------------------------------------------

fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Seed for effect randomness; falls back to the clock without an entropy source.
fn seed(fallback: f64) -> u64 {
    let mut buf = [0u8; 8];
    match getrandom::getrandom(&mut buf) {
        Ok(()) => u64::from_le_bytes(buf),
        Err(err) => {
            tracing::warn!(%err, "no entropy source; seeding from clock");
            fallback.to_bits()
        }
    }
}

fn viewport_of(win: &Window) -> Viewport {
    let dim = |v: std::result::Result<JsValue, JsValue>, default: f64| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(default)
    };
    let fallback = Viewport::default();
    Viewport {
        width: dim(win.inner_width(), fallback.width),
        height: dim(win.inner_height(), fallback.height),
    }
}

fn size_canvas(canvas: &HtmlCanvasElement, viewport: Viewport) {
    canvas.set_width(viewport.width.max(1.0) as u32);
    canvas.set_height(viewport.height.max(1.0) as u32);
}

// Create / reuse a canvas by id.
fn canvas(
    doc: &Document,
    body: &HtmlElement,
    id: &str,
    class: &str,
    viewport: Viewport,
) -> Result<HtmlCanvasElement> {
    let canvas: HtmlCanvasElement = if let Some(el) = doc.get_element_by_id(id) {
        el.dyn_into().map_err(|_| ClickerError::Dom(format!("#{id} is not a canvas")))?
    } else {
        let c: HtmlCanvasElement = doc
            .create_element("canvas")
            .map_err(ClickerError::dom)?
            .dyn_into()
            .map_err(|_| ClickerError::Dom("created <canvas> is not a canvas".into()))?;
        c.set_id(id);
        body.append_child(&c).map_err(ClickerError::dom)?;
        c
    };
    canvas.set_class_name(class);
    size_canvas(&canvas, viewport);
    Ok(canvas)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(ClickerError::dom)?
        .ok_or(ClickerError::NoCanvasContext)?
        .dyn_into()
        .map_err(|_| ClickerError::NoCanvasContext)
}
