//! Color palette for the desktop app

/// Color palette for the application
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub bg_tertiary: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub border_light: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub highlight: &'static str,
    pub error: &'static str,
    pub success: &'static str,
    pub info: &'static str,
}

/// Ocean palette: blue primary, amber highlight
pub const OCEAN_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#ffffff",
    bg_secondary: "#f5f8fc",
    bg_tertiary: "#e8f0fe",
    text_primary: "#111827",
    text_secondary: "#4b5563",
    text_muted: "#9ca3af",
    border: "#dbe3ef",
    border_light: "#eef2f7",
    accent: "#2563eb",
    accent_text: "#ffffff",
    highlight: "#f59e0b",
    error: "#ef4444",
    success: "#10b981",
    info: "#3b82f6",
};

/// Palette used by every component
#[must_use]
pub const fn palette() -> &'static ColorPalette {
    &OCEAN_PALETTE
}
