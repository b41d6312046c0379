//! Theme system for the TUI.
//!
//! Provides semantic color roles that map to ratatui `Style` values.
//! The `ThemeVariant` enum selects between Dark and Light palettes,
//! and `StyleMap` resolves role names to concrete styles.

use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

// ============================================================================
// Theme Variant
// ============================================================================

/// Available theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Dark,
    Light,
}

impl ThemeVariant {
    /// Parse a variant name from a string (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Build the `ColorPalette` for this variant.
    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Dark => ColorPalette::dark(),
            Self::Light => ColorPalette::light(),
        }
    }
}

// ============================================================================
// Color Palette — semantic roles to Style
// ============================================================================

/// A complete color palette mapping every semantic UI role to a `Style`.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    // -- Category tab row --
    pub tab_active: Style,
    pub tab_inactive: Style,

    // -- Post cards --
    pub post_header: Style,
    pub post_title: Style,
    pub post_body: Style,
    pub post_time: Style,

    // -- Comment cards --
    pub comment_user: Style,
    pub comment_body: Style,
    pub comment_time: Style,

    // -- Reaction counts --
    pub reaction_like: Style,
    pub reaction_dislike: Style,

    // -- Chrome --
    pub card_selected: Style,
    pub panel_border: Style,
    pub status_bar: Style,
}

impl ColorPalette {
    fn dark() -> Self {
        Self {
            tab_active: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::Gray),

            post_header: Style::default().add_modifier(Modifier::BOLD),
            post_title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            post_body: Style::default(),
            post_time: Style::default().fg(Color::DarkGray),

            comment_user: Style::default().fg(Color::Cyan),
            comment_body: Style::default().fg(Color::Gray),
            comment_time: Style::default().fg(Color::DarkGray),

            reaction_like: Style::default().fg(Color::Green),
            reaction_dislike: Style::default().fg(Color::Red),

            card_selected: Style::default().bg(Color::DarkGray).fg(Color::White),
            panel_border: Style::default(),
            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
        }
    }

    /// Light palette — adapted for light terminal backgrounds.
    fn light() -> Self {
        Self {
            tab_active: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::DarkGray),

            post_header: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            post_title: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            post_body: Style::default().fg(Color::Black),
            post_time: Style::default().fg(Color::DarkGray),

            comment_user: Style::default().fg(Color::Blue),
            comment_body: Style::default().fg(Color::DarkGray),
            comment_time: Style::default().fg(Color::DarkGray),

            reaction_like: Style::default().fg(Color::Green),
            reaction_dislike: Style::default().fg(Color::Red),

            card_selected: Style::default().bg(Color::Blue).fg(Color::White),
            panel_border: Style::default().fg(Color::DarkGray),
            status_bar: Style::default().bg(Color::White).fg(Color::Black),
        }
    }
}

// ============================================================================
// Style Map — string-keyed lookup
// ============================================================================

/// String-keyed style lookup.
///
/// Built from a `ColorPalette`, this allows resolving role names (e.g.
/// `"post_header"`) to their concrete `Style` at runtime.
#[derive(Debug, Clone)]
pub struct StyleMap {
    map: HashMap<&'static str, Style>,
}

/// All semantic role names, in declaration order.
const ROLE_NAMES: [&str; 14] = [
    "tab_active",
    "tab_inactive",
    "post_header",
    "post_title",
    "post_body",
    "post_time",
    "comment_user",
    "comment_body",
    "comment_time",
    "reaction_like",
    "reaction_dislike",
    "card_selected",
    "panel_border",
    "status_bar",
];

impl StyleMap {
    /// Build a `StyleMap` from a `ColorPalette`.
    pub fn from_palette(p: &ColorPalette) -> Self {
        let styles: [Style; 14] = [
            p.tab_active,
            p.tab_inactive,
            p.post_header,
            p.post_title,
            p.post_body,
            p.post_time,
            p.comment_user,
            p.comment_body,
            p.comment_time,
            p.reaction_like,
            p.reaction_dislike,
            p.card_selected,
            p.panel_border,
            p.status_bar,
        ];

        let mut map = HashMap::with_capacity(ROLE_NAMES.len());
        for (name, style) in ROLE_NAMES.iter().zip(styles.iter()) {
            map.insert(*name, *style);
        }

        Self { map }
    }

    /// Resolve a role name to its `Style`. Returns `Style::default()` for unknown roles.
    pub fn resolve(&self, role: &str) -> Style {
        self.map.get(role).copied().unwrap_or_default()
    }
}
