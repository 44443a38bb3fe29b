//! Accent-driven style helpers shared by the dashboard components.
//!
//! Static layout lives in `assets/main.css`; only per-card tints are computed here.

use crate::domain::{Accent, Icon};

// ============================================
// ICONS
// ============================================

pub fn glyph_class(icon: Icon) -> String {
    format!("fa fa-{}", icon.glyph_name())
}

// ============================================
// ACCENT TINTS
// ============================================

/// Badge behind a KPI icon: the accent at low opacity.
pub fn badge_style(accent: Accent) -> String {
    format!("background-color: {};", accent.tint())
}

pub fn accent_text(accent: Accent) -> String {
    format!("color: {accent};")
}
