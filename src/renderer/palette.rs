//! Colors for game elements

use crate::consts::PALETTE_LEN;

/// Linear RGBA, components in 0..=1
pub type Color = [f32; 4];

/// Opaque color from a 0xRRGGBB literal
pub const fn rgb(hex: u32) -> Color {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
        1.0,
    ]
}

/// Same color with a different alpha
pub const fn with_alpha(c: Color, alpha: f32) -> Color {
    [c[0], c[1], c[2], alpha]
}

/// CSS `rgba(...)` string for a color
pub fn css(c: Color) -> String {
    format!(
        "rgba({},{},{},{})",
        (c[0] * 255.0).round() as u8,
        (c[1] * 255.0).round() as u8,
        (c[2] * 255.0).round() as u8,
        c[3]
    )
}

/// Avatar colors, one per tier
pub const AVATAR_TIERS: [Color; PALETTE_LEN] = [
    rgb(0xffeb3b),
    rgb(0xff7043),
    rgb(0xff5252),
    rgb(0x7c4dff),
    rgb(0x29b6f6),
    rgb(0x66bb6a),
    rgb(0xffb74d),
    rgb(0xf06292),
];

pub const SKY: Color = rgb(0x70c5ce);
pub const CLOUD: Color = with_alpha(rgb(0xffffff), 0.18);
pub const GROUND: Color = rgb(0x8d6e63);
pub const OBSTACLE: Color = rgb(0x2e7d32);
pub const OBSTACLE_SHADE: Color = [0.0, 0.0, 0.0, 0.08];
pub const EYE: Color = rgb(0xffffff);
pub const PUPIL: Color = rgb(0x000000);
pub const WING: Color = rgb(0xffb74d);
pub const TEXT: Color = rgb(0xffffff);
pub const OVERLAY: Color = [0.0, 0.0, 0.0, 0.45];

/// Avatar color for a tier (out-of-range tiers use the last color)
pub fn avatar_color(tier: usize) -> Color {
    AVATAR_TIERS[tier.min(PALETTE_LEN - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_and_css() {
        let c = rgb(0xff7043);
        assert_eq!(c[0], 1.0);
        assert_eq!(css(c), "rgba(255,112,67,1)");
        assert_eq!(css(OVERLAY), "rgba(0,0,0,0.45)");
    }

    #[test]
    fn test_avatar_color_clamps() {
        assert_eq!(avatar_color(0), rgb(0xffeb3b));
        assert_eq!(avatar_color(99), rgb(0xf06292));
    }
}
