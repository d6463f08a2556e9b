//! Catppuccin Mocha palette shared by both frontends, as RGBA.

pub type Rgba = (u8, u8, u8, f32);

pub const FALLBACK_BG: Rgba = (17, 17, 27, 1.0);
pub const DIM_OVERLAY: Rgba = (0, 0, 0, 0.4);
pub const FG: Rgba = (0xcd, 0xd6, 0xf4, 1.0);
pub const FG_DIM: Rgba = (0x6c, 0x70, 0x86, 1.0);
pub const ACCENT: Rgba = (0x89, 0xb4, 0xfa, 1.0);
pub const GREEN: Rgba = (0xa6, 0xe3, 0xa1, 1.0);
pub const RED: Rgba = (0xf3, 0x8b, 0xa8, 1.0);
pub const SURFACE: Rgba = (30, 30, 46, 0.95);
pub const FRAME_OUTLINE: Rgba = (137, 180, 250, 0.5);

/// Nerd Font glyph placed before the error text.
pub const ERROR_ICON: &str = "󰅜";
