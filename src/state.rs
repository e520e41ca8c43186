//! Clicker state container.
//!
//! All UI state lives in [`ClickerState`] and changes only through
//! [`ClickerState::dispatch`]. Each dispatch first advances the logical clock
//! (promoting due scheduled effects and expiring old ones), then applies the
//! action and returns the side effects the browser shell must perform.

use crate::audio::{CLICK_VARIATIONS, SoundCue};
use crate::config::{ClickerConfig, HIT_MARKER_GLYPHS, STAR_COLORS, WOW_TEXTS};
use crate::effects::{
    Delayed, EffectId, EffectList, Expiring, HitMarker, Schedule, Star, StarMessage, WowText,
};
use crate::stroke::{CubicSegment, Point, Rect, StrokeTracker};

/// Stars spawn this far above the top edge.
const STAR_SPAWN_Y: f64 = -20.0;
/// Wow text stays this far inside the right/bottom edges.
const WOW_MARGIN_X: f64 = 200.0;
const WOW_MARGIN_Y: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 1280.0, height: 800.0 }
    }
}

/// Current brush.
#[derive(Clone, Debug, PartialEq)]
pub struct Paint {
    pub color: String,
    pub line_width: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Advance the clock only.
    Tick,
    Click,
    PointerDown(Point),
    /// `keep_clear` are the on-screen rects of controls strokes must avoid.
    PointerMove { at: Point, keep_clear: Vec<Rect> },
    PointerUp,
    SelectColor(String),
    SetLineWidth(u32),
    ToggleSound,
    TogglePalette,
    ToggleDealer,
    PokeStar { y: f64 },
    DealerInput(String),
    Resize(Viewport),
}

/// Side effects for the shell.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Play(SoundCue),
    Stroke { color: String, width: f64, segments: Vec<CubicSegment> },
}

pub struct ClickerState {
    config: ClickerConfig,
    rng: fastrand::Rng,
    next_id: u64,
    now_ms: f64,
    viewport: Viewport,

    score: u64,
    sound_enabled: bool,
    palette_visible: bool,
    dealer_visible: bool,
    dealer_message: String,
    paint: Paint,
    stroke: StrokeTracker,

    milestones: EffectList<()>,
    stars: EffectList<Star>,
    star_messages: EffectList<StarMessage>,
    hit_markers: EffectList<HitMarker>,
    wow_texts: EffectList<WowText>,
    mlg_banners: EffectList<()>,
    shakes: EffectList<()>,
    scheduled: Schedule<Delayed>,
}

// --- Milestone predicates ---------------------------------------------------

/// Sassy banner: the decimal score contains `pattern`.
pub fn is_sassy(score: u64, pattern: &str) -> bool {
    score.to_string().contains(pattern)
}

/// Star celebration: a positive multiple of `every`.
pub fn is_celebration(score: u64, every: u64) -> bool {
    score > 0 && every > 0 && score % every == 0
}

/// MLG bundle: the random roll (uniform in [0, 1)) beats `chance`, or the score
/// is a positive multiple of `every`.
pub fn is_mlg(score: u64, roll: f64, chance: f64, every: u64) -> bool {
    roll < chance || is_celebration(score, every)
}

impl ClickerState {
    pub fn new(config: ClickerConfig, seed: u64) -> Self {
        let paint = Paint {
            color: config.default_color.clone(),
            line_width: config.clamp_line_width(config.default_line_width),
        };
        Self {
            config,
            rng: fastrand::Rng::with_seed(seed),
            next_id: 0,
            now_ms: 0.0,
            viewport: Viewport::default(),
            score: 0,
            sound_enabled: true,
            palette_visible: false,
            dealer_visible: true,
            dealer_message: String::new(),
            paint,
            stroke: StrokeTracker::new(),
            milestones: EffectList::new(),
            stars: EffectList::new(),
            star_messages: EffectList::new(),
            hit_markers: EffectList::new(),
            wow_texts: EffectList::new(),
            mlg_banners: EffectList::new(),
            shakes: EffectList::new(),
            scheduled: Schedule::default(),
        }
    }

    /// Apply `action` at logical time `now_ms`. Time never runs backwards: an
    /// earlier timestamp is treated as the current time.
    pub fn dispatch(&mut self, now_ms: f64, action: Action) -> Vec<Command> {
        self.advance(now_ms);
        let mut commands = Vec::new();
        match action {
            Action::Tick => {}
            Action::Click => self.click(&mut commands),
            Action::PointerDown(at) => self.stroke.begin(at),
            Action::PointerMove { at, keep_clear } => {
                if let Some(segments) = self.stroke.extend(at, &keep_clear) {
                    commands.push(Command::Stroke {
                        color: self.paint.color.clone(),
                        width: f64::from(self.paint.line_width),
                        segments,
                    });
                }
            }
            Action::PointerUp => {
                self.stroke.end();
            }
            Action::SelectColor(color) => self.paint.color = color,
            Action::SetLineWidth(w) => self.paint.line_width = self.config.clamp_line_width(w),
            Action::ToggleSound => self.sound_enabled = !self.sound_enabled,
            Action::TogglePalette => self.palette_visible = !self.palette_visible,
            Action::ToggleDealer => self.dealer_visible = !self.dealer_visible,
            Action::PokeStar { y } => self.poke_star(y, &mut commands),
            Action::DealerInput(text) => self.dealer_message = text,
            Action::Resize(viewport) => self.viewport = viewport,
        }
        commands
    }

    fn advance(&mut self, now_ms: f64) {
        if now_ms > self.now_ms {
            self.now_ms = now_ms;
        }
        let now = self.now_ms;
        for pending in self.scheduled.take_due(now) {
            let id = self.next_id();
            match pending.effect {
                Delayed::HitMarker(m) => self.hit_markers.push(id, pending.due_ms, pending.expires_ms, m),
                Delayed::StarMessage(m) => {
                    self.star_messages.push(id, pending.due_ms, pending.expires_ms, m)
                }
            }
        }
        self.milestones.expire(now);
        self.stars.expire(now);
        self.star_messages.expire(now);
        self.hit_markers.expire(now);
        self.wow_texts.expire(now);
        self.mlg_banners.expire(now);
        self.shakes.expire(now);
    }

    fn next_id(&mut self) -> EffectId {
        self.next_id += 1;
        EffectId(self.next_id)
    }

    fn cue(&self, commands: &mut Vec<Command>, cue: SoundCue) {
        if self.sound_enabled {
            commands.push(Command::Play(cue));
        }
    }

    fn click(&mut self, commands: &mut Vec<Command>) {
        self.score += 1;
        let score = self.score;
        let now = self.now_ms;

        let variation = self.rng.usize(..CLICK_VARIATIONS.len());
        self.cue(commands, SoundCue::Click(variation));

        if is_sassy(score, &self.config.milestone_pattern) {
            tracing::debug!(score, "sassy milestone");
            self.cue(commands, SoundCue::Sassy);
            let id = self.next_id();
            self.milestones.push(id, now, now + self.config.milestone_ms, ());
        }

        if is_celebration(score, self.config.celebration_every) {
            tracing::debug!(score, "celebration");
            self.celebrate(commands);
        }

        let roll = self.rng.f64();
        if is_mlg(score, roll, self.config.mlg_chance, self.config.mlg_every) {
            tracing::debug!(score, roll, "mlg bundle");
            self.trigger_mlg(commands);
        }
    }

    fn celebrate(&mut self, commands: &mut Vec<Command>) {
        let now = self.now_ms;
        let expires = now + self.config.celebration_ms;
        for _ in 0..self.config.celebration_particles {
            let star = Star {
                x: self.rng.f64() * self.viewport.width,
                start_y: STAR_SPAWN_Y,
                rotation_deg: self.rng.f64() * 360.0,
                color: STAR_COLORS[self.rng.usize(..STAR_COLORS.len())],
                delay_ms: self.rng.f64() * self.config.star_max_delay_ms,
            };
            let id = self.next_id();
            self.stars.push(id, now, expires, star);
        }
        self.cue(commands, SoundCue::Celebration);
    }

    fn trigger_mlg(&mut self, commands: &mut Vec<Command>) {
        let now = self.now_ms;

        let id = self.next_id();
        self.shakes.push(id, now, now + self.config.shake_ms, ());
        self.cue(commands, SoundCue::Mlg);

        let wow = WowText {
            at: Point::new(
                self.rng.f64() * (self.viewport.width - WOW_MARGIN_X).max(0.0),
                self.rng.f64() * (self.viewport.height - WOW_MARGIN_Y).max(0.0),
            ),
            text: WOW_TEXTS[self.rng.usize(..WOW_TEXTS.len())],
        };
        let id = self.next_id();
        self.wow_texts.push(id, now, now + self.config.wow_ms, wow);

        let id = self.next_id();
        self.mlg_banners.push(id, now, now + self.config.mlg_banner_ms, ());

        for i in 0..self.config.hit_marker_count {
            let due = now + f64::from(i) * self.config.hit_marker_stagger_ms;
            let marker = HitMarker {
                at: Point::new(
                    self.rng.f64() * self.viewport.width,
                    self.rng.f64() * self.viewport.height,
                ),
                glyph: HIT_MARKER_GLYPHS[self.rng.usize(..HIT_MARKER_GLYPHS.len())],
            };
            self.scheduled
                .at(due, due + self.config.hit_marker_ms, Delayed::HitMarker(marker));
        }
        // The first marker is due immediately.
        self.advance(now);
    }

    fn poke_star(&mut self, y: f64, commands: &mut Vec<Command>) {
        let now = self.now_ms;
        self.star_messages.clear();
        self.scheduled.at(
            now + self.config.star_message_delay_ms,
            now + self.config.star_message_ms,
            Delayed::StarMessage(StarMessage { y }),
        );
        self.cue(commands, SoundCue::Ouch);
    }

    // --- Read access for rendering & tests ------------------------------------

    pub fn config(&self) -> &ClickerConfig {
        &self.config
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn palette_visible(&self) -> bool {
        self.palette_visible
    }

    pub fn dealer_visible(&self) -> bool {
        self.dealer_visible
    }

    pub fn dealer_message(&self) -> &str {
        &self.dealer_message
    }

    pub fn paint(&self) -> &Paint {
        &self.paint
    }

    pub fn is_drawing(&self) -> bool {
        self.stroke.is_active()
    }

    pub fn stroke_points(&self) -> &[Point] {
        self.stroke.points()
    }

    /// Newest sassy banner, if one is showing.
    pub fn milestone(&self) -> Option<&Expiring<()>> {
        self.milestones.latest()
    }

    pub fn stars(&self) -> &EffectList<Star> {
        &self.stars
    }

    pub fn star_message(&self) -> Option<&Expiring<StarMessage>> {
        self.star_messages.latest()
    }

    pub fn hit_markers(&self) -> &EffectList<HitMarker> {
        &self.hit_markers
    }

    pub fn wow_texts(&self) -> &EffectList<WowText> {
        &self.wow_texts
    }

    pub fn mlg_banner(&self) -> Option<&Expiring<()>> {
        self.mlg_banners.latest()
    }

    pub fn shaking(&self) -> bool {
        !self.shakes.is_empty()
    }

    /// Effects that are scheduled but not yet visible.
    pub fn scheduled_len(&self) -> usize {
        self.scheduled.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet() -> ClickerConfig {
        ClickerConfig { mlg_chance: 0.0, ..ClickerConfig::default() }
    }

    fn click_to(state: &mut ClickerState, target: u64, now: f64) -> Vec<Command> {
        let mut last = Vec::new();
        while state.score() < target {
            last = state.dispatch(now, Action::Click);
        }
        last
    }

    #[test]
    fn predicates() {
        assert!(is_sassy(69, "69"));
        assert!(is_sassy(1690, "69"));
        assert!(!is_sassy(96, "69"));
        assert!(!is_celebration(0, 100));
        assert!(is_celebration(300, 100));
        assert!(!is_celebration(301, 100));
        assert!(is_mlg(1000, 0.99, 0.01, 500));
        assert!(is_mlg(7, 0.001, 0.01, 500));
        assert!(!is_mlg(7, 0.5, 0.01, 500));
    }

    #[test]
    fn click_plays_a_variation_and_counts() {
        let mut s = ClickerState::new(quiet(), 7);
        let cmds = s.dispatch(0.0, Action::Click);
        assert_eq!(s.score(), 1);
        assert!(matches!(cmds.as_slice(), [Command::Play(SoundCue::Click(i))] if *i < CLICK_VARIATIONS.len()));
    }

    #[test]
    fn sixty_nine_shows_banner_and_sass() {
        let mut s = ClickerState::new(quiet(), 1);
        let cmds = click_to(&mut s, 69, 1000.0);
        assert!(cmds.contains(&Command::Play(SoundCue::Sassy)));
        assert!(s.milestone().is_some());
        s.dispatch(1000.0 + 1499.0, Action::Tick);
        assert!(s.milestone().is_some());
        s.dispatch(1000.0 + 1500.0, Action::Tick);
        assert!(s.milestone().is_none());
    }

    #[test]
    fn milestones_still_fire_when_muted() {
        let mut s = ClickerState::new(quiet(), 1);
        s.dispatch(0.0, Action::ToggleSound);
        let cmds = click_to(&mut s, 100, 0.0);
        assert!(cmds.is_empty());
        assert_eq!(s.stars().len(), 20);
    }

    #[test]
    fn hundred_spawns_stars_that_expire() {
        let mut s = ClickerState::new(quiet(), 3);
        s.dispatch(0.0, Action::Resize(Viewport { width: 400.0, height: 300.0 }));
        let cmds = click_to(&mut s, 100, 50.0);
        assert!(cmds.contains(&Command::Play(SoundCue::Celebration)));
        assert_eq!(s.stars().len(), 20);
        for star in s.stars().iter() {
            assert!((0.0..400.0).contains(&star.item.x));
            assert_eq!(star.item.start_y, -20.0);
            assert!((0.0..500.0).contains(&star.item.delay_ms));
            assert!(STAR_COLORS.contains(&star.item.color));
        }
        s.dispatch(3049.0, Action::Tick);
        assert_eq!(s.stars().len(), 20);
        s.dispatch(3050.0, Action::Tick);
        assert!(s.stars().is_empty());
    }

    #[test]
    fn five_hundred_triggers_the_mlg_bundle() {
        let mut s = ClickerState::new(quiet(), 11);
        let cmds = click_to(&mut s, 500, 0.0);
        assert!(cmds.contains(&Command::Play(SoundCue::Mlg)));
        assert!(s.shaking());
        assert_eq!(s.wow_texts().len(), 1);
        assert!(s.mlg_banner().is_some());
        // first marker immediately, the rest staggered
        assert_eq!(s.hit_markers().len(), 1);
        assert_eq!(s.scheduled_len(), 2);
        s.dispatch(100.0, Action::Tick);
        assert_eq!(s.hit_markers().len(), 2);
        s.dispatch(200.0, Action::Tick);
        assert_eq!(s.hit_markers().len(), 3);
        s.dispatch(500.0, Action::Tick);
        assert!(!s.shaking());
        assert_eq!(s.hit_markers().len(), 2);
        s.dispatch(700.0, Action::Tick);
        assert!(s.hit_markers().is_empty());
        s.dispatch(1000.0, Action::Tick);
        assert!(s.wow_texts().is_empty());
        assert!(s.mlg_banner().is_some());
        s.dispatch(2000.0, Action::Tick);
        assert!(s.mlg_banner().is_none());
    }

    #[test]
    fn certain_chance_triggers_on_every_click() {
        let cfg = ClickerConfig { mlg_chance: 1.0, ..ClickerConfig::default() };
        let mut s = ClickerState::new(cfg, 5);
        let cmds = s.dispatch(0.0, Action::Click);
        assert!(cmds.contains(&Command::Play(SoundCue::Mlg)));
        s.dispatch(10.0, Action::Click);
        assert_eq!(s.wow_texts().len(), 2);
    }

    #[test]
    fn wow_text_stays_inside_margins() {
        let cfg = ClickerConfig { mlg_chance: 1.0, ..ClickerConfig::default() };
        let mut s = ClickerState::new(cfg, 99);
        s.dispatch(0.0, Action::Resize(Viewport { width: 1000.0, height: 600.0 }));
        for i in 0..20 {
            s.dispatch(f64::from(i), Action::Click);
        }
        for w in s.wow_texts().iter() {
            assert!(w.item.at.x < 800.0 && w.item.at.y < 500.0);
            assert!(WOW_TEXTS.contains(&w.item.text));
        }
    }

    #[test]
    fn star_poke_shows_delayed_message() {
        let mut s = ClickerState::new(quiet(), 2);
        let cmds = s.dispatch(100.0, Action::PokeStar { y: 240.0 });
        assert_eq!(cmds, vec![Command::Play(SoundCue::Ouch)]);
        assert!(s.star_message().is_none());
        s.dispatch(110.0, Action::Tick);
        assert_eq!(s.star_message().map(|m| m.item.y), Some(240.0));
        s.dispatch(1099.0, Action::Tick);
        assert!(s.star_message().is_some());
        s.dispatch(1100.0, Action::Tick);
        assert!(s.star_message().is_none());
    }

    #[test]
    fn second_poke_replaces_the_visible_message() {
        let mut s = ClickerState::new(quiet(), 2);
        s.dispatch(0.0, Action::PokeStar { y: 10.0 });
        s.dispatch(20.0, Action::Tick);
        s.dispatch(500.0, Action::PokeStar { y: 90.0 });
        assert!(s.star_message().is_none());
        s.dispatch(510.0, Action::Tick);
        assert_eq!(s.star_message().map(|m| m.item.y), Some(90.0));
    }

    #[test]
    fn pointer_drag_emits_strokes_with_current_paint() {
        let mut s = ClickerState::new(quiet(), 0);
        s.dispatch(0.0, Action::SelectColor("#00ff00".into()));
        s.dispatch(0.0, Action::SetLineWidth(9));
        s.dispatch(0.0, Action::PointerDown(Point::new(0.0, 0.0)));
        let mut strokes = Vec::new();
        for x in [5.0, 10.0, 15.0, 20.0] {
            strokes.extend(s.dispatch(
                0.0,
                Action::PointerMove { at: Point::new(x, 0.0), keep_clear: vec![] },
            ));
        }
        assert_eq!(strokes.len(), 2);
        match &strokes[0] {
            Command::Stroke { color, width, segments } => {
                assert_eq!(color, "#00ff00");
                assert_eq!(*width, 9.0);
                assert_eq!(segments.len(), 2);
            }
            other => panic!("unexpected {other:?}"),
        }
        s.dispatch(0.0, Action::PointerUp);
        assert!(!s.is_drawing());
        assert!(s.stroke_points().is_empty());
    }

    #[test]
    fn moves_without_pointer_down_are_ignored() {
        let mut s = ClickerState::new(quiet(), 0);
        let cmds = s.dispatch(
            0.0,
            Action::PointerMove { at: Point::new(50.0, 50.0), keep_clear: vec![] },
        );
        assert!(cmds.is_empty());
        assert!(s.stroke_points().is_empty());
    }

    #[test]
    fn line_width_is_clamped() {
        let mut s = ClickerState::new(quiet(), 0);
        assert_eq!(s.paint().line_width, 4);
        s.dispatch(0.0, Action::SetLineWidth(0));
        assert_eq!(s.paint().line_width, 1);
        s.dispatch(0.0, Action::SetLineWidth(50));
        assert_eq!(s.paint().line_width, 20);
    }

    #[test]
    fn toggles_flip() {
        let mut s = ClickerState::new(quiet(), 0);
        assert!(s.sound_enabled() && !s.palette_visible() && s.dealer_visible());
        s.dispatch(0.0, Action::ToggleSound);
        s.dispatch(0.0, Action::TogglePalette);
        s.dispatch(0.0, Action::ToggleDealer);
        assert!(!s.sound_enabled() && s.palette_visible() && !s.dealer_visible());
        s.dispatch(0.0, Action::DealerInput("hi".into()));
        assert_eq!(s.dealer_message(), "hi");
    }

    #[test]
    fn clock_never_runs_backwards() {
        let mut s = ClickerState::new(quiet(), 0);
        s.dispatch(500.0, Action::Tick);
        s.dispatch(100.0, Action::Tick);
        assert_eq!(s.now_ms(), 500.0);
    }
}
