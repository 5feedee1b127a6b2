// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the clipfind CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The detection tries
//! `CLIPFIND_THEME` first, then `COLORFGBG`, then defaults to dark. Respects
//! `NO_COLOR` and turns color off when stdout isn't a terminal.

use std::sync::OnceLock;

use clipfind::Span;

/// Width between the `│` borders.
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("CLIPFIND_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg", where a background of 7 or above (except 8) is a light one
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const UNDERLINE: &str = "\x1b[4m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const HIGHLIGHT: (u8, u8, u8) = (255, 215, 0);
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const HIGHLIGHT: (u8, u8, u8) = (152, 104, 1);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            rgb(match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            })
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(HIGHLIGHT);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply a theme color plus modifiers, or nothing without a color terminal.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Length on screen, ignoring ANSI escapes.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// `┌─ LABEL ─────┐`
pub fn section_top(label: &str) {
    let border = border();
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        reset(),
        label_part,
        border,
        "─".repeat(remaining),
        reset()
    );
}

/// `│ content     │`
pub fn row(content: &str) {
    let border = border();
    println!(
        "{}│{}{}{}│{}",
        border,
        reset(),
        pad_right(content, BOX_WIDTH),
        border,
        reset()
    );
}

/// `└─────────────┘`
pub fn section_bot() {
    let border = border();
    println!("{}└{}┘{}", border, "─".repeat(BOX_WIDTH), reset());
}

fn border() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// `[T0]` `[T1]` `[T2]`, colored by relevance.
pub fn tier_badge(tier: u8, render_down: bool) -> String {
    let label = format!("[T{}]", tier);
    if !use_colors() {
        return label;
    }
    // with the direction flipped, tier 2 is the strongest
    let strength = if render_down { tier } else { 2 - tier.min(2) };
    let color = match strength {
        0 => GREEN(),
        1 => YELLOW(),
        _ => GRAY(),
    };
    format!("{}{}{}{}", BOLD, color, label, RESET)
}

/// Paint the characters inside `spans`. Spans are inclusive character ranges
/// and must be ascending and disjoint; out-of-range parts are ignored.
pub fn highlight(text: &str, spans: &[Span]) -> String {
    if spans.is_empty() || !use_colors() {
        return mark_plain(text, spans);
    }
    paint(text, spans, &format!("{}{}", BOLD, HIGHLIGHT()), RESET)
}

/// Without colors, matches are bracketed: `the [quick] fox`.
fn mark_plain(text: &str, spans: &[Span]) -> String {
    paint(text, spans, "[", "]")
}

fn paint(text: &str, spans: &[Span], open: &str, close: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + spans.len() * (open.len() + close.len()));
    let mut cursor = 0;

    for &[start, end] in spans {
        if start < cursor || start > end || start >= chars.len() {
            continue;
        }
        let end = end.min(chars.len() - 1);
        out.extend(&chars[cursor..start]);
        out.push_str(open);
        out.extend(&chars[start..=end]);
        out.push_str(close);
        cursor = end + 1;
    }
    out.extend(&chars[cursor..]);
    out
}

/// Score with three decimals, dimmed.
pub fn score_value(score: f64) -> String {
    themed(GRAY, &[DIM], &format!("{:.3}", score))
}

/// Timestamp, underlined when colored.
pub fn timestamp(ts: &str) -> String {
    themed(BLUE, &[UNDERLINE], ts)
}
