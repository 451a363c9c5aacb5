//! Colors and shared styles

use std::sync::atomic::{AtomicU8, Ordering};

use ratatui::style::{Color, Modifier, Style};

// 0 = dark, 1 = light
static CURRENT_THEME: AtomicU8 = AtomicU8::new(0);

/// Switches the palette used by every later frame.
pub fn set_theme_index(index: u8) {
    CURRENT_THEME.store(index, Ordering::SeqCst);
}

/// Palette of the current theme.
pub fn colors() -> ThemeColors {
    match CURRENT_THEME.load(Ordering::SeqCst) {
        0 => ThemeColors::dark(),
        _ => ThemeColors::light(),
    }
}

#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
}

impl ThemeColors {
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(28, 30, 33),
            fg: Color::Rgb(214, 214, 208),
            border: Color::Rgb(66, 68, 72),
            border_focused: Color::Rgb(86, 156, 112),
            highlight: Color::Rgb(46, 110, 82),
            selected_bg: Color::Rgb(44, 84, 68),
            selected_fg: Color::White,
            success: Color::Rgb(120, 200, 140),
            warning: Color::Rgb(222, 178, 96),
            error: Color::Rgb(236, 118, 108),
            muted: Color::Rgb(130, 132, 128),
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(248, 247, 242),
            fg: Color::Rgb(48, 50, 46),
            border: Color::Rgb(200, 200, 192),
            border_focused: Color::Rgb(40, 120, 80),
            highlight: Color::Rgb(40, 120, 80),
            selected_bg: Color::Rgb(208, 232, 214),
            selected_fg: Color::Black,
            success: Color::Rgb(30, 128, 60),
            warning: Color::Rgb(168, 120, 0),
            error: Color::Rgb(200, 50, 50),
            muted: Color::Rgb(120, 120, 116),
        }
    }
}

/// Styles reused across pages and dialogs.
pub struct Styles;

impl Styles {
    pub fn border(focused: bool) -> Style {
        let c = colors();
        Style::default().fg(if focused { c.border_focused } else { c.border })
    }

    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default().fg(colors().fg).add_modifier(Modifier::BOLD)
    }

    pub fn statusbar() -> Style {
        let c = colors();
        Style::default().bg(c.highlight).fg(c.selected_fg)
    }

    pub fn hint_key() -> Style {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    pub fn hint_desc() -> Style {
        Style::default().fg(colors().muted)
    }

    pub fn muted() -> Style {
        Style::default().fg(colors().muted)
    }
}
