// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the periodica CLI.
//!
//! OneDark colors on dark terminals, One Light on light ones. The theme comes
//! from `PERIODICA_THEME` if set, then the `COLORFGBG` hint some terminals
//! export, and defaults to dark. `NO_COLOR` and non-TTY stdout turn color off
//! entirely, so piping results into other tools gets plain text.

use periodica::MatchTier;
use std::sync::OnceLock;

/// Width between the │ borders of a result box.
pub const BOX_WIDTH: usize = 72;

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
    if let Ok(theme) = std::env::var("PERIODICA_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
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
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221);
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164);
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
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
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Theme color plus modifiers, or plain text when colors are off.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    paint(use_colors(), color_fn, modifiers, text)
}

fn paint(colors: bool, color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if colors {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Length as the terminal shows it: ANSI escapes take no columns.
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

/// Cut `text` to `max_chars`, marking the cut with an ellipsis.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// ┌─ LABEL ─────┐
pub fn section_top(label: &str) {
    println!("{}", box_top(label, use_colors()));
}

/// │ content     │
pub fn row(content: &str) {
    println!("{}", box_row(content, use_colors()));
}

/// └─────────────┘
pub fn section_bot() {
    println!("{}", box_bot(use_colors()));
}

fn box_top(label: &str, colors: bool) -> String {
    let label_part = format!("─ {} ", paint(colors, CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    format!(
        "{}{}{}",
        paint(colors, GRAY, &[], "┌"),
        label_part,
        paint(colors, GRAY, &[], &format!("{}┐", "─".repeat(remaining)))
    )
}

fn box_row(content: &str, colors: bool) -> String {
    let border = paint(colors, GRAY, &[], "│");
    format!("{}{}{}", border, pad_right(content, BOX_WIDTH), border)
}

fn box_bot(colors: bool) -> String {
    paint(colors, GRAY, &[], &format!("└{}┘", "─".repeat(BOX_WIDTH)))
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Tier name, colored from strong (green) to weak (gray).
fn tier_label(tier: Option<MatchTier>, colors: bool) -> String {
    let Some(tier) = tier else {
        return paint(colors, GRAY, &[], "-");
    };
    let color: fn() -> String = match tier {
        MatchTier::Exact => BRIGHT_GREEN,
        MatchTier::Prefix => GREEN,
        MatchTier::Substring => BLUE,
        MatchTier::Subsequence => MAGENTA,
        MatchTier::Fuzzy => YELLOW,
    };
    paint(colors, color, &[], tier.as_str())
}

/// Right-aligned score, bolder for stronger matches.
fn score_value(score: u32, colors: bool) -> String {
    let text = format!("{:>5}", score);
    match score {
        900.. => paint(colors, BRIGHT_GREEN, &[BOLD], &text),
        700..=899 => paint(colors, GREEN, &[], &text),
        1..=699 => paint(colors, YELLOW, &[], &text),
        0 => paint(colors, GRAY, &[], &text),
    }
}

/// One search hit: position, score, tier, name and formula in fixed columns.
pub fn search_row(
    position: usize,
    score: u32,
    tier: Option<MatchTier>,
    name: &str,
    formula: &str,
) -> String {
    search_row_with(position, score, tier, name, formula, use_colors())
}

fn search_row_with(
    position: usize,
    score: u32,
    tier: Option<MatchTier>,
    name: &str,
    formula: &str,
    colors: bool,
) -> String {
    // Pad by visible width; escape codes would otherwise eat into the columns.
    format!(
        "  {:>2}. {} {} {} {}",
        position,
        score_value(score, colors),
        pad_right(&tier_label(tier, colors), 11),
        pad_right(&truncate(name, 28), 28),
        paint(colors, CYAN, &[], formula),
    )
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
