//! Tunables for the clicker. `Default` reproduces the stock toy; hosts may
//! override any subset through JSON when the `serde_json` feature is on.

use crate::error::{ClickerError, Result};

/// Paint palette rows shown in the color picker (brights, darks, greys).
pub const PALETTE: &[&[&str]] = &[
    &["#ff0000", "#ff9900", "#ffff00", "#00ff00", "#00ffff", "#0000ff", "#9900ff", "#ff00ff"],
    &["#990000", "#994c00", "#999900", "#009900", "#009999", "#000099", "#4c0099", "#990099"],
    &["#000000", "#404040", "#808080", "#bfbfbf", "#ffffff"],
];

/// Fill colors for celebration stars.
pub const STAR_COLORS: &[&str] = &["#FFD700", "#FFA500", "#FF69B4", "#00CED1", "#9370DB"];

/// Floating shout texts for the MLG bundle.
pub const WOW_TEXTS: &[&str] = &["WOW!", "OMG!", "BOOM!", "POW!", "KAPOW!"];

/// Hit marker glyphs.
pub const HIT_MARKER_GLYPHS: &[&str] = &["💥", "✨", "⚡"];

pub const DEFAULT_STROKE_COLOR: &str = "rgba(255, 142, 83, 0.6)";

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClickerConfig {
    // --- Labels ---
    pub title: String,
    pub button_label: String,
    pub score_label: String,
    pub milestone_text: String,
    pub star_message_text: String,

    // --- Paint ---
    pub default_color: String,
    pub default_line_width: u32,
    pub min_line_width: u32,
    pub max_line_width: u32,

    // --- Milestones ---
    /// Decimal substring that triggers the sassy banner.
    pub milestone_pattern: String,
    pub milestone_ms: f64,
    /// Celebrate every N clicks (N > 0).
    pub celebration_every: u64,
    pub celebration_particles: usize,
    pub celebration_ms: f64,
    /// Upper bound for a star's random start delay.
    pub star_max_delay_ms: f64,
    pub star_fall_ms: f64,

    // --- MLG bundle ---
    /// Per-click probability in [0, 1].
    pub mlg_chance: f64,
    pub mlg_every: u64,
    pub mlg_banner_ms: f64,
    pub shake_ms: f64,
    pub wow_ms: f64,
    pub hit_marker_count: u32,
    pub hit_marker_stagger_ms: f64,
    pub hit_marker_ms: f64,
    pub mlg_clip_url: String,
    pub mlg_clip_volume: f64,

    // --- Cute star ---
    pub star_message_delay_ms: f64,
    pub star_message_ms: f64,
}

impl Default for ClickerConfig {
    fn default() -> Self {
        Self {
            title: "Press for Dopamine!".into(),
            button_label: "Feel Good!".into(),
            score_label: "Dopamine Level".into(),
            milestone_text: "Nice! 😏".into(),
            star_message_text: "OUCH! 😣".into(),
            default_color: DEFAULT_STROKE_COLOR.into(),
            default_line_width: 4,
            min_line_width: 1,
            max_line_width: 20,
            milestone_pattern: "69".into(),
            milestone_ms: 1500.0,
            celebration_every: 100,
            celebration_particles: 20,
            celebration_ms: 3000.0,
            star_max_delay_ms: 500.0,
            star_fall_ms: 2000.0,
            mlg_chance: 0.01,
            mlg_every: 500,
            mlg_banner_ms: 2000.0,
            shake_ms: 500.0,
            wow_ms: 1000.0,
            hit_marker_count: 3,
            hit_marker_stagger_ms: 100.0,
            hit_marker_ms: 500.0,
            mlg_clip_url: "https://www.myinstants.com/media/sounds/wow.mp3".into(),
            mlg_clip_volume: 0.1,
            star_message_delay_ms: 10.0,
            star_message_ms: 1000.0,
        }
    }
}

impl ClickerConfig {
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_line_width == 0 || self.min_line_width > self.max_line_width {
            return Err(invalid("line width bounds must satisfy 0 < min <= max"));
        }
        if !(self.min_line_width..=self.max_line_width).contains(&self.default_line_width) {
            return Err(invalid("default_line_width outside [min_line_width, max_line_width]"));
        }
        if self.milestone_pattern.is_empty() {
            return Err(invalid("milestone_pattern must not be empty"));
        }
        if self.celebration_every == 0 || self.mlg_every == 0 {
            return Err(invalid("celebration_every and mlg_every must be positive"));
        }
        if !(0.0..=1.0).contains(&self.mlg_chance) {
            return Err(invalid("mlg_chance must lie in [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.mlg_clip_volume) {
            return Err(invalid("mlg_clip_volume must lie in [0, 1]"));
        }
        if self.star_message_delay_ms >= self.star_message_ms {
            return Err(invalid("star message would expire before it appears"));
        }
        let durations = [
            self.milestone_ms,
            self.celebration_ms,
            self.star_fall_ms,
            self.mlg_banner_ms,
            self.shake_ms,
            self.wow_ms,
            self.hit_marker_ms,
            self.star_message_ms,
        ];
        if durations.iter().any(|d| !d.is_finite() || *d <= 0.0) {
            return Err(invalid("effect durations must be positive"));
        }
        if self.star_max_delay_ms < 0.0 || self.hit_marker_stagger_ms < 0.0 {
            return Err(invalid("delays must not be negative"));
        }
        Ok(())
    }

    /// Clamp a requested brush width into the configured slider range.
    pub fn clamp_line_width(&self, width: u32) -> u32 {
        width.clamp(self.min_line_width, self.max_line_width)
    }
}

fn invalid(msg: &str) -> ClickerError {
    ClickerError::InvalidConfig(msg.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        ClickerConfig::default().validate().unwrap();
    }

    #[test]
    fn rejects_inverted_line_width_bounds() {
        let cfg = ClickerConfig {
            min_line_width: 10,
            max_line_width: 5,
            ..ClickerConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ClickerError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_zero_celebration_interval() {
        let cfg = ClickerConfig {
            celebration_every: 0,
            ..ClickerConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_chance() {
        let cfg = ClickerConfig {
            mlg_chance: 1.5,
            ..ClickerConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn clamps_line_width_to_slider_range() {
        let cfg = ClickerConfig::default();
        assert_eq!(cfg.clamp_line_width(0), 1);
        assert_eq!(cfg.clamp_line_width(7), 7);
        assert_eq!(cfg.clamp_line_width(99), 20);
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = ClickerConfig::from_json(r#"{ "celebration_every": 50, "title": "Click me" }"#)
            .unwrap();
        assert_eq!(cfg.celebration_every, 50);
        assert_eq!(cfg.title, "Click me");
        assert_eq!(cfg.milestone_pattern, "69");
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn json_is_validated() {
        let err = ClickerConfig::from_json(r#"{ "mlg_every": 0 }"#).unwrap_err();
        assert!(matches!(err, ClickerError::InvalidConfig(_)));
    }
}
