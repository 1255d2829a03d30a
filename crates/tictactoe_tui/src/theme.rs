//! Light and dark colour palettes.
//!
//! Theme state is purely presentational; the engine never sees it.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Which palette is active.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ThemeMode {
    /// Light background, saturated marks.
    Light,
    /// Dark background, softer marks.
    #[default]
    Dark,
}

impl ThemeMode {
    /// Label for the toggle hint: names the mode a toggle switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Dark",
            Self::Dark => "Light",
        }
    }

    /// Switches between `Light` and `Dark`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Colours for this mode.
    pub fn palette(self) -> Palette {
        match self {
            Self::Light => Palette::LIGHT,
            Self::Dark => Palette::DARK,
        }
    }
}

/// Colours used by the widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background.
    pub background: Color,
    /// Headings and marks on neutral cells.
    pub text: Color,
    /// Secondary text: hints, labels.
    pub subtext: Color,
    /// Title and focused borders.
    pub accent: Color,
    /// Unfocused borders and grid lines.
    pub border: Color,
    /// X marks and X score.
    pub x: Color,
    /// O marks and O score.
    pub o: Color,
    /// Tie score.
    pub tie: Color,
    /// Background of the winning line.
    pub winning_bg: Color,
    /// Background of the cursor cell.
    pub cursor_bg: Color,
    /// Background of the active history row.
    pub active_bg: Color,
    /// Status badge while a winner is shown.
    pub badge_winner: Color,
    /// Status badge on a draw.
    pub badge_draw: Color,
    /// Status badge while the game runs.
    pub badge_in_progress: Color,
    /// Footer messages about rejected actions.
    pub error: Color,
}

impl Palette {
    /// Light palette.
    pub const LIGHT: Palette = Palette {
        background: Color::Rgb(247, 250, 252),
        text: Color::Rgb(26, 32, 44),
        subtext: Color::Rgb(74, 85, 104),
        accent: Color::Rgb(128, 90, 213),
        border: Color::Rgb(203, 213, 224),
        x: Color::Rgb(49, 130, 206),
        o: Color::Rgb(229, 62, 62),
        tie: Color::Rgb(113, 128, 150),
        winning_bg: Color::Rgb(198, 246, 213),
        cursor_bg: Color::Rgb(237, 242, 247),
        active_bg: Color::Rgb(250, 245, 255),
        badge_winner: Color::Rgb(56, 161, 105),
        badge_draw: Color::Rgb(221, 107, 32),
        badge_in_progress: Color::Rgb(49, 130, 206),
        error: Color::Rgb(197, 48, 48),
    };

    /// Dark palette.
    pub const DARK: Palette = Palette {
        background: Color::Rgb(23, 25, 35),
        text: Color::Rgb(255, 255, 255),
        subtext: Color::Rgb(203, 213, 224),
        accent: Color::Rgb(183, 148, 244),
        border: Color::Rgb(74, 85, 104),
        x: Color::Rgb(99, 179, 237),
        o: Color::Rgb(252, 129, 129),
        tie: Color::Rgb(160, 174, 192),
        winning_bg: Color::Rgb(34, 84, 61),
        cursor_bg: Color::Rgb(45, 55, 72),
        active_bg: Color::Rgb(68, 51, 122),
        badge_winner: Color::Rgb(104, 211, 145),
        badge_draw: Color::Rgb(246, 173, 85),
        badge_in_progress: Color::Rgb(99, 179, 237),
        error: Color::Rgb(252, 129, 129),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use strum::IntoEnumIterator;
    use tracing_subscriber::fmt::format::FmtSpan;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuf {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_per_frame_helpers_emit_no_spans() {
        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_span_events(FmtSpan::NEW)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            for mode in ThemeMode::iter() {
                mode.toggle_label();
                mode.toggle();
                mode.palette();
            }
        });
        assert!(buf.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_toggle_round_trips() {
        for mode in ThemeMode::iter() {
            assert_ne!(mode.toggle(), mode);
            assert_eq!(mode.toggle().toggle(), mode);
            assert_eq!(mode.toggle_label(), match mode.toggle() {
                ThemeMode::Light => "Light",
                ThemeMode::Dark => "Dark",
            });
        }
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(ThemeMode::Light.palette(), ThemeMode::Dark.palette());
        assert_eq!(ThemeMode::Light.to_string(), "light");
    }
}
