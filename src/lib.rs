//! Dopamine Button core crate.
//!
//! A big red button that counts clicks ("Dopamine Level") with silly sound and
//! visual feedback, floating over a full-screen doodle canvas. Gameplay lives in
//! [`state::ClickerState`], a plain reducer over a logical clock that builds and
//! tests natively; the `app` module is the thin browser shell that mounts the
//! DOM, forwards events and renders.

use wasm_bindgen::prelude::*;

pub mod audio;
pub mod config;
pub mod effects;
pub mod error;
pub mod state;
pub mod stroke;

mod app;

pub use config::ClickerConfig;
pub use error::ClickerError;
pub use state::{Action, ClickerState, Command, Viewport};
pub use stroke::{Point, Rect};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Route tracing to the browser console; a second init is harmless.
    #[cfg(target_arch = "wasm32")]
    let _ = tracing_wasm::try_set_as_global_default();
}

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

/// Mount the clicker with stock settings.
#[wasm_bindgen]
pub fn start_clicker() -> Result<(), JsValue> {
    app::mount(ClickerConfig::default())?;
    Ok(())
}

/// Mount the clicker with a JSON object overriding any [`ClickerConfig`] field.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_clicker_with_config(json: &str) -> Result<(), JsValue> {
    let config = ClickerConfig::from_json(json)?;
    app::mount(config)?;
    Ok(())
}
