//! Color theme and glyphs for the nncalc TUI.
//!
//! Uses Kanagawa Wave palette by default with an optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use nncalc_engine::UiOptions;

/// Kanagawa Wave color palette constants.
mod colors {
    use super::Color;

    // === Backgrounds (Sumi Ink) ===
    pub const BG_DARK: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40); // sumiInk3
    pub const BG_BORDER: Color = Color::Rgb(84, 84, 109); // sumiInk6

    // === Foregrounds (Fuji) ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_SECONDARY: Color = Color::Rgb(200, 192, 147); // oldWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray
    pub const TEXT_DISABLED: Color = Color::Rgb(84, 84, 109); // sumiInk6

    // === Primary/Brand ===
    pub const PRIMARY: Color = Color::Rgb(149, 127, 184); // oniViolet

    // === Accent Colors ===
    pub const GREEN: Color = Color::Rgb(152, 187, 108); // springGreen
    pub const YELLOW: Color = Color::Rgb(230, 195, 132); // carpYellow
    pub const ORANGE: Color = Color::Rgb(255, 160, 102); // surimiOrange

    // === Semantic Aliases ===
    pub const WARNING: Color = YELLOW;
    pub const PEACH: Color = ORANGE;
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_disabled: Color,
    pub primary: Color,
    pub warning: Color,
    pub peach: Color,
    pub green: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            text_disabled: colors::TEXT_DISABLED,
            primary: colors::PRIMARY,
            warning: colors::WARNING,
            peach: colors::PEACH,
            green: colors::GREEN,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::Gray,
            text_disabled: Color::DarkGray,
            primary: Color::White,
            warning: Color::Yellow,
            peach: Color::Yellow,
            green: Color::Green,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for separators, truncation and spinners.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub separator: &'static str,
    pub ellipsis: &'static str,
    pub enter_key: &'static str,
    pub status_ready: &'static str,
    pub spinner_frames: &'static [&'static str],
}

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAMES_ASCII: &[&str] = &["|", "/", "-", "\\"];

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            separator: "|",
            ellipsis: "...",
            enter_key: "Ent",
            status_ready: "*",
            spinner_frames: SPINNER_FRAMES_ASCII,
        }
    } else {
        Glyphs {
            separator: "│",
            ellipsis: "…",
            enter_key: "⏎",
            status_ready: "●",
            spinner_frames: SPINNER_FRAMES,
        }
    }
}

/// When `reduced_motion` is enabled, returns a static glyph instead of cycling.
#[must_use]
pub fn spinner_frame(tick: usize, options: UiOptions) -> &'static str {
    let frames = glyphs(options).spinner_frames;
    if options.reduced_motion {
        frames[0]
    } else {
        frames[tick % frames.len()]
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn register_title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn register_value(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.peach)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_disabled(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_disabled)
            .add_modifier(Modifier::DIM)
    }
}

#[cfg(test)]
mod tests {
    use nncalc_engine::UiOptions;

    use super::{glyphs, spinner_frame};

    #[test]
    fn spinner_frame_cycles_without_reduced_motion() {
        let options = UiOptions::default();
        let frame0 = spinner_frame(0, options);
        let frame1 = spinner_frame(1, options);
        assert_ne!(frame0, frame1, "spinner should cycle through frames");
    }

    #[test]
    fn spinner_frame_static_with_reduced_motion() {
        let options = UiOptions {
            reduced_motion: true,
            ..UiOptions::default()
        };
        assert_eq!(spinner_frame(0, options), spinner_frame(1, options));
        assert_eq!(spinner_frame(0, options), spinner_frame(100, options));
    }

    #[test]
    fn ascii_glyphs_are_ascii() {
        let g = glyphs(UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        });
        for s in [g.separator, g.ellipsis, g.enter_key, g.status_ready] {
            assert!(s.is_ascii(), "{s:?} should be ascii");
        }
        assert!(g.spinner_frames.iter().all(|f| f.is_ascii()));
    }
}
