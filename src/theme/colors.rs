//! Brand palette.
//!
//! The stylesheet mirrors these as CSS custom properties; keep both in step.

#![allow(dead_code)]

// === BRAND ===
pub const PRIMARY: &str = "#cc092f";
pub const PRIMARY_DARK: &str = "#a00725";
pub const PRIMARY_LIGHT: &str = "#fde8ec";

// === SURFACES ===
pub const BACKGROUND: &str = "#ffffff";
pub const MUTED: &str = "#f4f4f6";
pub const BORDER: &str = "#e4e4e7";

// === TEXT ===
pub const FOREGROUND: &str = "#1a1a2e";
pub const TEXT_MUTED: &str = "#6b7280";

// === SEMANTIC ===
pub const DESTRUCTIVE: &str = "#dc2626";
pub const SUCCESS: &str = "#16a34a";

/// Every palette entry, for checks against the stylesheet.
pub const ALL: [&str; 10] = [
    PRIMARY,
    PRIMARY_DARK,
    PRIMARY_LIGHT,
    BACKGROUND,
    MUTED,
    BORDER,
    FOREGROUND,
    TEXT_MUTED,
    DESTRUCTIVE,
    SUCCESS,
];
