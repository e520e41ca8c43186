//! Canvas drawing: strokes go to the persistent doodle layer, transient effects
//! are repainted on the effects layer every frame.

use std::f64::consts::{PI, TAU};

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::effects::{StarPose, intro, rainbow};
use crate::state::{ClickerState, Viewport};
use crate::stroke::CubicSegment;

type DrawResult = Result<(), JsValue>;

const BACKGROUND: &str = "#1e1e1e";
const STAR_FLOOR_PAD: f64 = 20.0;
const BANNER_INTRO_MS: f64 = 400.0;
const STAR_MESSAGE_INTRO_MS: f64 = 300.0;
const RAINBOW_PERIOD_MS: f64 = 1000.0;
const CHIP_SPIN_MS: f64 = 2000.0;

/// Paint the doodle layer background and brush defaults.
pub(crate) fn prime(ctx: &CanvasRenderingContext2d, viewport: Viewport) {
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    ctx.set_image_smoothing_enabled(true);
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, viewport.width, viewport.height);
}

/// Rasterize one batch of chained Bezier segments.
pub(crate) fn draw_stroke(ctx: &CanvasRenderingContext2d, color: &str, width: f64, segments: &[CubicSegment]) {
    let Some(first) = segments.first() else {
        return;
    };
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(width);
    ctx.begin_path();
    ctx.move_to(first.start.x, first.start.y);
    for s in segments {
        ctx.bezier_curve_to(s.c1.x, s.c1.y, s.c2.x, s.c2.y, s.end.x, s.end.y);
    }
    ctx.stroke();
}

/// Repaint every live effect for the state's current logical time.
pub(crate) fn draw_effects(ctx: &CanvasRenderingContext2d, state: &ClickerState) -> DrawResult {
    let vp = state.viewport();
    let now = state.now_ms();
    let cfg = state.config();
    ctx.clear_rect(0.0, 0.0, vp.width, vp.height);

    if let Some(banner) = state.mlg_banner() {
        draw_mlg_props(ctx, banner.age(now), vp)?;
    }

    let floor = vp.height + STAR_FLOOR_PAD;
    for star in state.stars().iter() {
        if let Some(pose) = star.item.pose(star.age(now), cfg.star_fall_ms, floor) {
            draw_star(ctx, pose, star.item.color)?;
        }
    }

    if let Some(m) = state.milestone() {
        let k = intro(m.age(now), BANNER_INTRO_MS);
        isolated(ctx, |ctx| {
            ctx.set_global_alpha(k);
            ctx.translate(vp.width / 2.0, vp.height * 0.8 + 50.0 * (1.0 - k))?;
            ctx.scale(k.max(0.01), k.max(0.01))?;
            ctx.set_font("bold 40px 'Poppins', sans-serif");
            ctx.set_text_align("center");
            ctx.set_text_baseline("middle");
            ctx.set_shadow_color("rgba(255, 142, 83, 0.5)");
            ctx.set_shadow_blur(15.0);
            ctx.set_fill_style_str("#FF8E53");
            ctx.fill_text(&cfg.milestone_text, 0.0, 0.0)
        })?;
    }

    if let Some(m) = state.star_message() {
        let k = intro(m.age(now), STAR_MESSAGE_INTRO_MS);
        isolated(ctx, |ctx| {
            ctx.set_global_alpha(k);
            ctx.set_font("bold 24px 'Poppins', sans-serif");
            ctx.set_text_align("right");
            ctx.set_text_baseline("middle");
            ctx.set_shadow_color("rgba(0, 0, 0, 0.3)");
            ctx.set_shadow_offset_x(2.0);
            ctx.set_shadow_offset_y(2.0);
            ctx.set_shadow_blur(4.0);
            ctx.set_fill_style_str("#FFD700");
            // slides 20px -> 40px to the right of its anchor
            let x = vp.width - 80.0 + 20.0 + 20.0 * k;
            ctx.fill_text(&cfg.star_message_text, x, m.item.y)
        })?;
    }

    ctx.set_text_align("left");
    ctx.set_text_baseline("top");

    ctx.set_font("bold 40px sans-serif");
    for marker in state.hit_markers().iter() {
        let life = marker.expires_ms - marker.born_ms;
        let fade = 1.0 - (marker.age(now) / life).clamp(0.0, 1.0);
        ctx.set_global_alpha(fade);
        ctx.set_fill_style_str("#000");
        ctx.fill_text(marker.item.glyph, marker.item.at.x + 2.0, marker.item.at.y + 2.0)?;
        ctx.set_fill_style_str("#fff");
        ctx.fill_text(marker.item.glyph, marker.item.at.x, marker.item.at.y)?;
    }
    ctx.set_global_alpha(1.0);

    ctx.set_font("bold 60px sans-serif");
    ctx.set_line_width(4.0);
    ctx.set_stroke_style_str("#000");
    for wow in state.wow_texts().iter() {
        ctx.set_fill_style_str(rainbow(wow.age(now), RAINBOW_PERIOD_MS));
        ctx.stroke_text(wow.item.text, wow.item.at.x, wow.item.at.y)?;
        ctx.fill_text(wow.item.text, wow.item.at.x, wow.item.at.y)?;
    }
    Ok(())
}

fn draw_star(ctx: &CanvasRenderingContext2d, pose: StarPose, color: &str) -> DrawResult {
    if pose.scale <= 0.0 {
        return Ok(());
    }
    isolated(ctx, |ctx| {
        ctx.translate(pose.at.x, pose.at.y)?;
        ctx.rotate(pose.rotation_deg.to_radians())?;
        ctx.scale(pose.scale, pose.scale)?;
        five_point_path(ctx, 10.0, 4.5);
        ctx.set_fill_style_str(color);
        ctx.fill();
        Ok(())
    })
}

/// Run `draw` between `save` and `restore`, restoring even when it fails.
fn isolated(
    ctx: &CanvasRenderingContext2d,
    draw: impl FnOnce(&CanvasRenderingContext2d) -> DrawResult,
) -> DrawResult {
    ctx.save();
    let result = draw(ctx);
    ctx.restore();
    result
}

fn five_point_path(ctx: &CanvasRenderingContext2d, outer: f64, inner: f64) {
    ctx.begin_path();
    for i in 0..10 {
        let r = if i % 2 == 0 { outer } else { inner };
        let a = -PI / 2.0 + f64::from(i) * PI / 5.0;
        let (x, y) = (r * a.cos(), r * a.sin());
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.close_path();
}

// Spinning chips and a soda can while the MLG banner is up.
fn draw_mlg_props(ctx: &CanvasRenderingContext2d, age_ms: f64, vp: Viewport) -> DrawResult {
    let spin = (age_ms / CHIP_SPIN_MS) * TAU;
    for (fx, fy, dir) in [(0.15, 0.25, 1.0), (0.85, 0.6, -1.0)] {
        isolated(ctx, |ctx| {
            ctx.translate(vp.width * fx, vp.height * fy)?;
            ctx.rotate(spin * dir)?;
            ctx.begin_path();
            ctx.move_to(0.0, -50.0);
            ctx.line_to(45.0, 30.0);
            ctx.line_to(-45.0, 30.0);
            ctx.close_path();
            ctx.set_fill_style_str("#FF8C1A");
            ctx.fill();
            ctx.set_line_width(4.0);
            ctx.set_stroke_style_str("#C2410C");
            ctx.stroke();
            Ok(())
        })?;
    }

    let (x, y) = (vp.width * 0.08, vp.height * 0.55);
    ctx.set_fill_style_str("#0B6E1F");
    ctx.fill_rect(x, y, 40.0, 75.0);
    ctx.set_fill_style_str("#A3E635");
    ctx.fill_rect(x, y + 25.0, 40.0, 20.0);
    ctx.set_fill_style_str("#C0C0C0");
    ctx.fill_rect(x + 4.0, y - 6.0, 32.0, 6.0);
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn context() -> CanvasRenderingContext2d {
        let doc = web_sys::window().unwrap().document().unwrap();
        let canvas: web_sys::HtmlCanvasElement =
            doc.create_element("canvas").unwrap().dyn_into().unwrap();
        canvas.get_context("2d").unwrap().unwrap().dyn_into().unwrap()
    }

    #[wasm_bindgen_test]
    fn failed_draw_still_restores_the_context() {
        let ctx = context();
        let result = isolated(&ctx, |ctx| {
            ctx.set_global_alpha(0.25);
            ctx.set_line_width(9.0);
            Err(JsValue::from_str("boom"))
        });
        assert!(result.is_err());
        assert_eq!(ctx.global_alpha(), 1.0);
        assert_eq!(ctx.line_width(), 1.0);
    }
}
