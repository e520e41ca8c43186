// Invariants for the static palettes and effect vocabularies.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

use dopamine_button::config::{HIT_MARKER_GLYPHS, PALETTE, STAR_COLORS, WOW_TEXTS};

fn is_hex_color(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[test]
fn palette_entries_are_unique_hex_colors() {
    let mut seen = HashSet::new();
    for (row_idx, row) in PALETTE.iter().enumerate() {
        assert!(!row.is_empty(), "palette row {} is empty", row_idx);
        for color in row.iter() {
            assert!(is_hex_color(color), "palette color '{}' is not #rrggbb", color);
            assert!(seen.insert(color.to_ascii_lowercase()), "duplicate palette color '{}'", color);
        }
    }
    assert_eq!(seen.len(), 21);
}

#[test]
fn star_colors_are_hex() {
    assert!(!STAR_COLORS.is_empty());
    for color in STAR_COLORS {
        assert!(is_hex_color(color), "star color '{}' is not #rrggbb", color);
    }
}

#[test]
fn shout_texts_are_loud() {
    for text in WOW_TEXTS {
        assert!(text.ends_with('!'), "wow text '{}' should end with '!'", text);
        assert_eq!(text.to_uppercase(), *text, "wow text '{}' should be uppercase", text);
    }
}

#[test]
fn hit_marker_glyphs_are_single_symbols() {
    for glyph in HIT_MARKER_GLYPHS {
        assert_eq!(glyph.chars().count(), 1, "glyph '{}' should be one char", glyph);
    }
}
