//! Theme system for the TUI.
//!
//! Provides semantic color roles that map to ratatui `Style` values.
//! The `ThemeVariant` enum selects between Dark and Light palettes,
//! and `StyleMap` resolves role names to concrete styles.

use crate::news::Category;
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

    /// Cycle to the next variant: Dark → Light → Dark.
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Human-readable name for status display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

// ============================================================================
// Newsroom colors
// ============================================================================

const BG_DEEP: Color = Color::Rgb(0x05, 0x0F, 0x08);
const BG_CARD: Color = Color::Rgb(0x0A, 0x1A, 0x0E);
const ACCENT_CYAN: Color = Color::Rgb(0x00, 0xE6, 0x76);
const ACCENT_VIOLET: Color = Color::Rgb(0x69, 0xF0, 0xAE);
const ACCENT_AMBER: Color = Color::Rgb(0xB9, 0xF6, 0xCA);
const TEXT_PRIMARY: Color = Color::Rgb(0xE8, 0xF5, 0xE9);
const TEXT_MUTED: Color = Color::Rgb(0x4A, 0x66, 0x55);
const LIVE: Color = Color::Rgb(0x00, 0xC8, 0x53);
const FOREST: Color = Color::Rgb(0x1B, 0x5E, 0x20);

// ============================================================================
// Color Palette — semantic roles to Style
// ============================================================================

/// A complete color palette mapping every semantic UI role to a `Style`.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    // -- Chrome --
    pub background: Style,
    pub app_title: Style,
    pub subtitle: Style,
    pub section_label: Style,
    pub badge: Style,
    pub status_bar: Style,

    // -- Category selector --
    pub chip_normal: Style,
    pub chip_selected: Style,
    pub chip_border: Style,
    pub chip_border_focused: Style,

    // -- Ticker card --
    pub ticker_border: Style,
    pub ticker_headline: Style,
    pub ticker_footer: Style,
    pub live_label: Style,
    pub live_dot_bright: Style,
    pub live_dot_dim: Style,

    // -- Category chips on the ticker --
    pub category_tech: Style,
    pub category_game: Style,
    pub category_ekonomi: Style,
    pub category_nasional: Style,
    pub category_trending: Style,
    pub category_other: Style,

    // -- Stats row --
    pub stat_border: Style,
    pub stat_label: Style,
    pub stat_count: Style,
    pub stat_platform: Style,
    pub status_ready: Style,
    pub status_loading: Style,
    pub status_failed: Style,

    // -- Action button --
    pub button: Style,
    pub button_focused: Style,
    pub button_disabled: Style,

    // -- Detail card --
    pub detail_border: Style,
    pub detail_heading: Style,
    pub detail_body: Style,
    pub detail_error: Style,
}

impl ColorPalette {
    /// Dark palette — deep green newsroom look.
    fn dark() -> Self {
        Self {
            background: Style::default().bg(BG_DEEP).fg(TEXT_PRIMARY),
            app_title: Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
            subtitle: Style::default().fg(TEXT_MUTED),
            section_label: Style::default()
                .fg(TEXT_MUTED)
                .add_modifier(Modifier::BOLD),
            badge: Style::default()
                .bg(LIVE)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            status_bar: Style::default().bg(BG_CARD).fg(TEXT_MUTED),

            chip_normal: Style::default().bg(BG_CARD).fg(TEXT_MUTED),
            chip_selected: Style::default()
                .fg(ACCENT_CYAN)
                .add_modifier(Modifier::BOLD),
            chip_border: Style::default().fg(TEXT_MUTED),
            chip_border_focused: Style::default().fg(ACCENT_CYAN),

            ticker_border: Style::default().fg(ACCENT_VIOLET),
            ticker_headline: Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
            ticker_footer: Style::default().fg(TEXT_MUTED),
            live_label: Style::default().fg(LIVE).add_modifier(Modifier::BOLD),
            live_dot_bright: Style::default().fg(LIVE),
            live_dot_dim: Style::default().fg(FOREST),

            category_tech: Style::default().fg(ACCENT_CYAN).add_modifier(Modifier::BOLD),
            category_game: Style::default().fg(ACCENT_VIOLET).add_modifier(Modifier::BOLD),
            category_ekonomi: Style::default().fg(ACCENT_AMBER).add_modifier(Modifier::BOLD),
            category_nasional: Style::default().fg(FOREST).add_modifier(Modifier::BOLD),
            category_trending: Style::default().fg(LIVE).add_modifier(Modifier::BOLD),
            category_other: Style::default().fg(TEXT_MUTED).add_modifier(Modifier::BOLD),

            stat_border: Style::default().fg(TEXT_MUTED),
            stat_label: Style::default().fg(TEXT_MUTED),
            stat_count: Style::default().fg(ACCENT_CYAN).add_modifier(Modifier::BOLD),
            stat_platform: Style::default().fg(ACCENT_AMBER).add_modifier(Modifier::BOLD),
            status_ready: Style::default().fg(LIVE).add_modifier(Modifier::BOLD),
            status_loading: Style::default()
                .fg(ACCENT_VIOLET)
                .add_modifier(Modifier::BOLD),
            status_failed: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),

            button: Style::default()
                .bg(ACCENT_VIOLET)
                .fg(BG_DEEP)
                .add_modifier(Modifier::BOLD),
            button_focused: Style::default()
                .bg(ACCENT_CYAN)
                .fg(BG_DEEP)
                .add_modifier(Modifier::BOLD),
            button_disabled: Style::default().bg(FOREST).fg(TEXT_PRIMARY),

            detail_border: Style::default().fg(ACCENT_CYAN),
            detail_heading: Style::default()
                .fg(ACCENT_CYAN)
                .add_modifier(Modifier::BOLD),
            detail_body: Style::default().fg(TEXT_PRIMARY),
            detail_error: Style::default().fg(Color::Red),
        }
    }

    /// Light palette — adapted for light terminal backgrounds.
    fn light() -> Self {
        Self {
            background: Style::default().fg(Color::Black),
            app_title: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            subtitle: Style::default().fg(Color::DarkGray),
            section_label: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            badge: Style::default()
                .bg(Color::Green)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            status_bar: Style::default().bg(Color::White).fg(Color::Black),

            chip_normal: Style::default().fg(Color::DarkGray),
            chip_selected: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            chip_border: Style::default().fg(Color::Gray),
            chip_border_focused: Style::default().fg(Color::Green),

            ticker_border: Style::default().fg(Color::Green),
            ticker_headline: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            ticker_footer: Style::default().fg(Color::DarkGray),
            live_label: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            live_dot_bright: Style::default().fg(Color::Green),
            live_dot_dim: Style::default().fg(Color::Gray),

            category_tech: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            category_game: Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            category_ekonomi: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            category_nasional: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            category_trending: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            category_other: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),

            stat_border: Style::default().fg(Color::Gray),
            stat_label: Style::default().fg(Color::DarkGray),
            stat_count: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            stat_platform: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            status_ready: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            status_loading: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            status_failed: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),

            button: Style::default()
                .bg(Color::Green)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            button_focused: Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            button_disabled: Style::default().bg(Color::Gray).fg(Color::DarkGray),

            detail_border: Style::default().fg(Color::Blue),
            detail_heading: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            detail_body: Style::default().fg(Color::Black),
            detail_error: Style::default().fg(Color::Red),
        }
    }
}

// ============================================================================
// Style Map — string-keyed lookup
// ============================================================================

/// String-keyed style lookup.
///
/// Built from a `ColorPalette`, this allows resolving role names (e.g.
/// `"ticker_headline"`) to their concrete `Style` at runtime.
#[derive(Debug, Clone)]
pub struct StyleMap {
    map: HashMap<&'static str, Style>,
}

/// All semantic role names, in declaration order.
const ROLE_NAMES: [&str; 36] = [
    "background",
    "app_title",
    "subtitle",
    "section_label",
    "badge",
    "status_bar",
    "chip_normal",
    "chip_selected",
    "chip_border",
    "chip_border_focused",
    "ticker_border",
    "ticker_headline",
    "ticker_footer",
    "live_label",
    "live_dot_bright",
    "live_dot_dim",
    "category_tech",
    "category_game",
    "category_ekonomi",
    "category_nasional",
    "category_trending",
    "category_other",
    "stat_border",
    "stat_label",
    "stat_count",
    "stat_platform",
    "status_ready",
    "status_loading",
    "status_failed",
    "button",
    "button_focused",
    "button_disabled",
    "detail_border",
    "detail_heading",
    "detail_body",
    "detail_error",
];

impl StyleMap {
    /// Build a `StyleMap` from a `ColorPalette`.
    pub fn from_palette(p: &ColorPalette) -> Self {
        let styles: [Style; 36] = [
            p.background,
            p.app_title,
            p.subtitle,
            p.section_label,
            p.badge,
            p.status_bar,
            p.chip_normal,
            p.chip_selected,
            p.chip_border,
            p.chip_border_focused,
            p.ticker_border,
            p.ticker_headline,
            p.ticker_footer,
            p.live_label,
            p.live_dot_bright,
            p.live_dot_dim,
            p.category_tech,
            p.category_game,
            p.category_ekonomi,
            p.category_nasional,
            p.category_trending,
            p.category_other,
            p.stat_border,
            p.stat_label,
            p.stat_count,
            p.stat_platform,
            p.status_ready,
            p.status_loading,
            p.status_failed,
            p.button,
            p.button_focused,
            p.button_disabled,
            p.detail_border,
            p.detail_heading,
            p.detail_body,
            p.detail_error,
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

/// Role name for a category chip. Placeholder headlines pass `None`.
pub fn category_role(category: Option<Category>) -> &'static str {
    match category {
        Some(Category::Tech) => "category_tech",
        Some(Category::Game) => "category_game",
        Some(Category::Ekonomi) => "category_ekonomi",
        Some(Category::Nasional) => "category_nasional",
        Some(Category::Trending) => "category_trending",
        _ => "category_other",
    }
}

// ============================================================================
// Tests
// ============================================================================
