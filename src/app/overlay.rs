//! DOM controls layered over the drawing canvas: title, button, score, the
//! paint palette, toggles, the cute star and the dealer panel.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, MouseEvent};

use super::art::{DEALER_SVG, STYLE_ID, STYLESHEET};
use super::{dispatch, listen};
use crate::config::{ClickerConfig, PALETTE};
use crate::error::{ClickerError, Result};
use crate::state::{Action, ClickerState};
use crate::stroke::Rect;

const OPEN: &str = "dp-open";
const SELECTED: &str = "dp-selected";
const SHAKE: &str = "screen-shake";

/// What was last written to the DOM, so per-frame syncs stay cheap.
#[derive(Clone, Debug, PartialEq)]
struct Synced {
    score: u64,
    sound: bool,
    palette: bool,
    dealer: bool,
    color: String,
    line_width: u32,
    shaking: bool,
}

pub(crate) struct Overlay {
    body: HtmlElement,
    title: Element,
    button: Element,
    score: Element,
    sound_toggle: Element,
    palette_toggle: Element,
    dealer_toggle: Element,
    palette: Element,
    swatches: Vec<(&'static str, Element)>,
    size_label: Element,
    size_slider: HtmlInputElement,
    cute_star: Element,
    dealer: Element,
    dealer_input: HtmlInputElement,
    score_label: String,
    synced: RefCell<Option<Synced>>,
}

pub(crate) fn install_styles(doc: &Document) -> Result<()> {
    if doc.get_element_by_id(STYLE_ID).is_some() {
        return Ok(());
    }
    let head = doc.head().ok_or(ClickerError::NoDocument)?;
    let style = doc.create_element("style").map_err(ClickerError::dom)?;
    style.set_id(STYLE_ID);
    style.set_text_content(Some(STYLESHEET));
    head.append_child(&style).map_err(ClickerError::dom)?;
    Ok(())
}

fn child(doc: &Document, parent: &Element, tag: &str, class: &str, text: Option<&str>) -> Result<Element> {
    let el = doc.create_element(tag).map_err(ClickerError::dom)?;
    el.set_class_name(class);
    if text.is_some() {
        el.set_text_content(text);
    }
    parent.append_child(&el).map_err(ClickerError::dom)?;
    Ok(el)
}

fn input(doc: &Document, parent: &Element, class: &str) -> Result<HtmlInputElement> {
    child(doc, parent, "input", class, None)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| ClickerError::Dom("created <input> is not an HtmlInputElement".into()))
}

fn rect_of(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.right(), r.bottom())
}

impl Overlay {
    pub(crate) fn build(doc: &Document, body: &HtmlElement, config: &ClickerConfig) -> Result<Self> {
        let container = child(doc, body, "div", "dp-container", None)?;
        let title = child(doc, &container, "h1", "dp-title", Some(&config.title))?;
        let area = child(doc, &container, "div", "dp-button-area", None)?;
        let button = child(doc, &area, "button", "dp-button", Some(&config.button_label))?;
        let score = child(doc, &container, "div", "dp-score", None)?;

        let sound_toggle = child(doc, body, "button", "dp-sound", None)?;
        let palette_toggle = child(doc, body, "button", "dp-toggle dp-palette-toggle", None)?;
        let dealer_toggle = child(doc, body, "button", "dp-toggle dp-dealer-toggle", None)?;

        let palette = child(doc, body, "div", "dp-palette", None)?;
        let mut swatches = Vec::new();
        for row in PALETTE {
            let row_el = child(doc, &palette, "div", "dp-row", None)?;
            for &color in row.iter() {
                let swatch = child(doc, &row_el, "button", "dp-swatch", None)?;
                swatch
                    .set_attribute("style", &format!("background:{color}"))
                    .map_err(ClickerError::dom)?;
                swatch.set_attribute("aria-label", color).map_err(ClickerError::dom)?;
                swatches.push((color, swatch));
            }
        }
        let size_label = child(doc, &palette, "div", "dp-size-label", None)?;
        let size_slider = input(doc, &palette, "dp-size")?;
        size_slider.set_type("range");
        size_slider.set_min(&config.min_line_width.to_string());
        size_slider.set_max(&config.max_line_width.to_string());

        let cute_star = child(doc, body, "div", "dp-cute-star", Some("★"))?;

        let dealer = child(doc, body, "div", "dp-dealer", None)?;
        let portrait = child(doc, &dealer, "div", "", None)?;
        child(doc, &portrait, "div", "dp-dealer-title", Some("Dealer"))?;
        let character = child(doc, &portrait, "div", "dp-dealer-character", None)?;
        character.set_inner_html(DEALER_SVG);
        let dealer_input = input(doc, &dealer, "dp-dealer-input")?;
        dealer_input.set_type("text");
        dealer_input.set_placeholder("Type your message...");

        Ok(Self {
            body: body.clone(),
            title,
            button,
            score,
            sound_toggle,
            palette_toggle,
            dealer_toggle,
            palette,
            swatches,
            size_label,
            size_slider,
            cute_star,
            dealer,
            dealer_input,
            score_label: config.score_label.clone(),
            synced: RefCell::new(None),
        })
    }

    /// Hook every control up to the state container.
    pub(crate) fn wire(&self) -> Result<()> {
        listen(&self.button, "click", |_| dispatch(Action::Click))?;
        listen(&self.sound_toggle, "click", |_| dispatch(Action::ToggleSound))?;
        listen(&self.palette_toggle, "click", |_| dispatch(Action::TogglePalette))?;
        listen(&self.dealer_toggle, "click", |_| dispatch(Action::ToggleDealer))?;

        for (color, swatch) in &self.swatches {
            let color = *color;
            listen(swatch, "click", move |_| dispatch(Action::SelectColor(color.to_string())))?;
        }

        let slider = self.size_slider.clone();
        listen(&self.size_slider, "input", move |_| {
            // range inputs only yield integers; anything else is ignored
            if let Ok(width) = slider.value().parse::<u32>() {
                dispatch(Action::SetLineWidth(width));
            }
        })?;

        listen(&self.cute_star, "click", |evt| {
            evt.stop_propagation();
            if let Some(mouse) = evt.dyn_ref::<MouseEvent>() {
                dispatch(Action::PokeStar { y: f64::from(mouse.client_y()) });
            }
        })?;

        let text = self.dealer_input.clone();
        listen(&self.dealer_input, "input", move |_| dispatch(Action::DealerInput(text.value())))?;
        Ok(())
    }

    /// Screen rects strokes must stay away from.
    pub(crate) fn keep_clear(&self) -> Vec<Rect> {
        vec![rect_of(&self.title), rect_of(&self.button), rect_of(&self.score)]
    }

    /// Reflect state into the DOM; a no-op when nothing visible changed.
    pub(crate) fn sync(&self, state: &ClickerState) {
        let next = Synced {
            score: state.score(),
            sound: state.sound_enabled(),
            palette: state.palette_visible(),
            dealer: state.dealer_visible(),
            color: state.paint().color.clone(),
            line_width: state.paint().line_width,
            shaking: state.shaking(),
        };
        if self.synced.borrow().as_ref() == Some(&next) {
            return;
        }

        self.score
            .set_text_content(Some(&format!("{}: {}", self.score_label, next.score)));
        self.sound_toggle
            .set_text_content(Some(if next.sound { "🔊" } else { "🔇" }));
        self.palette_toggle.set_text_content(Some(if next.palette {
            "✕ Hide Paint"
        } else {
            "🎨 Show Paint"
        }));
        self.dealer_toggle.set_text_content(Some(if next.dealer {
            "✕ Hide Dealer"
        } else {
            "👽 Show Dealer"
        }));
        toggle_class(&self.palette_toggle, OPEN, next.palette);
        toggle_class(&self.palette, OPEN, next.palette);
        toggle_class(&self.dealer_toggle, OPEN, next.dealer);
        toggle_class(&self.dealer, OPEN, next.dealer);
        for (color, swatch) in &self.swatches {
            toggle_class(swatch, SELECTED, *color == next.color);
        }
        self.size_label
            .set_text_content(Some(&format!("Brush Size: {}px", next.line_width)));
        let width = next.line_width.to_string();
        if self.size_slider.value() != width {
            self.size_slider.set_value(&width);
        }
        toggle_class(&self.body, SHAKE, next.shaking);

        self.synced.replace(Some(next));
    }
}

fn toggle_class(el: &Element, class: &str, on: bool) {
    if let Err(err) = el.class_list().toggle_with_force(class, on) {
        tracing::debug!(class, ?err, "class toggle failed");
    }
}
