//! Packed ARGB color values.

use std::fmt;

use bytemuck::{Pod, Zeroable};

/// 32-bit color, packed as `0xAARRGGBB`.
///
/// The packed word is the single source of truth: equality and hashing key
/// on it, and the channel accessors are plain shifts and masks. Colors are
/// never mutated; the `with_*` methods derive new values.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct Color(pub u32);

impl Color {
    /// Fully transparent black.
    pub const CLEAR: Color = Color(0x0000_0000);
    /// Opaque black.
    pub const BLACK: Color = Color(0xFF00_0000);
    /// Opaque white.
    pub const WHITE: Color = Color(0xFFFF_FFFF);

    /// Pack 8-bit channels into a color.
    ///
    /// Each input is masked to 8 bits; out-of-range values truncate
    /// silently rather than erroring.
    pub const fn from_argb(a: u32, r: u32, g: u32, b: u32) -> Self {
        Color(((a & 0xff) << 24) | ((r & 0xff) << 16) | ((g & 0xff) << 8) | (b & 0xff))
    }

    /// Pack 8-bit RGB channels with an opacity in `[0, 1]`.
    pub fn from_rgbo(r: u32, g: u32, b: u32, opacity: f32) -> Self {
        Self::from_argb((opacity * 255.0) as u32, r, g, b)
    }

    /// Alpha channel, `0..=255`.
    pub const fn alpha(self) -> u32 {
        (self.0 >> 24) & 0xff
    }

    /// Red channel, `0..=255`.
    pub const fn red(self) -> u32 {
        (self.0 >> 16) & 0xff
    }

    /// Green channel, `0..=255`.
    pub const fn green(self) -> u32 {
        (self.0 >> 8) & 0xff
    }

    /// Blue channel, `0..=255`.
    pub const fn blue(self) -> u32 {
        self.0 & 0xff
    }

    /// Alpha expressed as an opacity in `[0, 1]`.
    pub fn opacity(self) -> f32 {
        self.alpha() as f32 / 255.0
    }

    /// New color with the alpha channel replaced.
    pub const fn with_alpha(self, a: u32) -> Self {
        Self::from_argb(a, self.red(), self.green(), self.blue())
    }

    /// New color with the red channel replaced.
    pub const fn with_red(self, r: u32) -> Self {
        Self::from_argb(self.alpha(), r, self.green(), self.blue())
    }

    /// New color with the green channel replaced.
    pub const fn with_green(self, g: u32) -> Self {
        Self::from_argb(self.alpha(), self.red(), g, self.blue())
    }

    /// New color with the blue channel replaced.
    pub const fn with_blue(self, b: u32) -> Self {
        Self::from_argb(self.alpha(), self.red(), self.green(), b)
    }

    /// New color with alpha set from an opacity in `[0, 1]`.
    pub fn with_opacity(self, opacity: f32) -> Self {
        self.with_alpha((opacity * 255.0).round() as u32)
    }

    /// 8-bit alpha for an animated opacity value.
    ///
    /// The input is clamped to `[0, 1]` before rounding, so the result is
    /// always a valid channel value.
    pub fn alpha_from_opacity(opacity: f32) -> u32 {
        (opacity.clamp(0.0, 1.0) * 255.0).round() as u32
    }

    /// Relative luminance of the color, ignoring alpha.
    ///
    /// Channels pass through the sRGB-to-linear curve before the weighted
    /// sum, matching what the renderer sees after linearization.
    pub fn compute_luminance(self) -> f32 {
        let r = linearize(self.red() as f32 / 255.0);
        let g = linearize(self.green() as f32 / 255.0);
        let b = linearize(self.blue() as f32 / 255.0);
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    /// Linear interpolation between two optional colors.
    ///
    /// A missing endpoint interpolates toward full transparency of the
    /// other, so fading a color in or out does not shift its hue.
    pub fn lerp(a: Option<Color>, b: Option<Color>, t: f32) -> Option<Color> {
        match (a, b) {
            (None, None) => None,
            (None, Some(b)) => Some(b.scale_alpha(t)),
            (Some(a), None) => Some(a.scale_alpha(1.0 - t)),
            (Some(a), Some(b)) => Some(Self::from_argb(
                lerp_channel(a.alpha(), b.alpha(), t),
                lerp_channel(a.red(), b.red(), t),
                lerp_channel(a.green(), b.green(), t),
                lerp_channel(a.blue(), b.blue(), t),
            )),
        }
    }

    /// Scale the alpha channel by `factor`, leaving RGB untouched.
    fn scale_alpha(self, factor: f32) -> Self {
        self.with_alpha(((self.alpha() as f32 * factor).round() as i64).clamp(0, 255) as u32)
    }

    /// Normalized RGBA components for the engine renderer.
    pub fn to_f32_rgba(self) -> [f32; 4] {
        [
            self.red() as f32 / 255.0,
            self.green() as f32 / 255.0,
            self.blue() as f32 / 255.0,
            self.alpha() as f32 / 255.0,
        ]
    }

    /// 8-bit RGBA components.
    pub const fn to_rgba8(self) -> [u8; 4] {
        [
            self.red() as u8,
            self.green() as u8,
            self.blue() as u8,
            self.alpha() as u8,
        ]
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color(0x{:08X})", self.0)
    }
}

/// sRGB-to-linear transfer curve for one normalized channel.
fn linearize(component: f32) -> f32 {
    if component <= 0.03928 {
        component / 12.92
    } else {
        ((component + 0.055) / 1.055).powf(2.4)
    }
}

/// Channel interpolation with truncation toward zero, clamped to a byte.
fn lerp_channel(a: u32, b: u32, t: f32) -> u32 {
    let v = a as f32 + (b as f32 - a as f32) * t;
    (v as i64).clamp(0, 255) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_extraction() {
        let c = Color::from_argb(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.alpha(), 0x12);
        assert_eq!(c.red(), 0x34);
        assert_eq!(c.green(), 0x56);
        assert_eq!(c.blue(), 0x78);
        assert_eq!(c.0, 0x1234_5678);
    }

    #[test]
    fn test_out_of_range_channels_truncate() {
        // 300 = 0x12C, masked to 0x2C.
        let c = Color::from_argb(300, 300, 300, 300);
        assert_eq!(c, Color(0x2C2C_2C2C));
        assert_eq!(Color::BLACK.with_red(0x1FF).red(), 0xFF);
    }

    #[test]
    fn test_with_alpha_identity() {
        let c = Color(0x8040_2010);
        assert_eq!(c.with_alpha(c.alpha()), c);
    }

    #[test]
    fn test_with_channel_preserves_others() {
        let c = Color(0xFF11_2233).with_green(0x99);
        assert_eq!(c, Color(0xFF11_9933));
    }

    #[test]
    fn test_from_rgbo_truncates_opacity() {
        // 0.5 * 255 = 127.5 truncates to 127.
        assert_eq!(Color::from_rgbo(0, 0, 0, 0.5).alpha(), 127);
        assert_eq!(Color::from_rgbo(10, 20, 30, 1.0), Color(0xFF0A_141E));
        assert_eq!(Color::from_rgbo(0, 0, 0, 0.0).alpha(), 0);
    }

    #[test]
    fn test_with_opacity_rounds() {
        assert_eq!(Color::BLACK.with_opacity(0.5).alpha(), 128);
        assert_eq!(Color::BLACK.with_opacity(1.0), Color::BLACK);
        assert_eq!(Color::BLACK.with_opacity(0.0).alpha(), 0);
    }

    #[test]
    fn test_alpha_from_opacity_clamps_and_rounds() {
        assert_eq!(Color::alpha_from_opacity(0.0), 0);
        assert_eq!(Color::alpha_from_opacity(1.0), 255);
        assert_eq!(Color::alpha_from_opacity(0.5), 128);
        assert_eq!(Color::alpha_from_opacity(-2.0), 0);
        assert_eq!(Color::alpha_from_opacity(3.0), 255);
    }

    #[test]
    fn test_luminance_extremes() {
        assert!((Color::WHITE.compute_luminance() - 1.0).abs() < 1e-6);
        assert_eq!(Color::BLACK.compute_luminance(), 0.0);
    }

    #[test]
    fn test_luminance_mid_gray_follows_srgb_curve() {
        let lum = Color(0xFF7F_7F7F).compute_luminance();
        assert!(lum > 0.0 && lum < 1.0);
        // ((127/255 + 0.055) / 1.055) ^ 2.4
        assert!((lum - 0.2122).abs() < 1e-3);
    }

    #[test]
    fn test_luminance_linear_segment_below_threshold() {
        // 5/255 is below the 0.03928 threshold, so the linear branch applies.
        let c = 5.0 / 255.0;
        let expected = c / 12.92;
        assert!((Color(0xFF05_0505).compute_luminance() - expected).abs() < 1e-7);
    }

    #[test]
    fn test_lerp_both_none() {
        assert_eq!(Color::lerp(None, None, 0.3), None);
    }

    #[test]
    fn test_lerp_one_none_scales_alpha() {
        let a = Color(0xFF11_2233);
        assert_eq!(Color::lerp(Some(a), None, 0.25), Some(a.scale_alpha(0.75)));
        assert_eq!(Color::lerp(None, Some(a), 0.25), Some(a.scale_alpha(0.25)));
        // At t = 0 a missing `b` leaves `a` untouched.
        assert_eq!(Color::lerp(Some(a), None, 0.0), Some(a));
    }

    #[test]
    fn test_lerp_interpolates_channels_independently() {
        let a = Color::from_argb(0, 0, 100, 200);
        let b = Color::from_argb(255, 50, 200, 100);
        let mid = Color::lerp(Some(a), Some(b), 0.5).unwrap();
        assert_eq!(mid.alpha(), 127); // 127.5 truncates
        assert_eq!(mid.red(), 25);
        assert_eq!(mid.green(), 150);
        assert_eq!(mid.blue(), 150);
        assert_eq!(Color::lerp(Some(a), Some(b), 0.0), Some(a));
        assert_eq!(Color::lerp(Some(a), Some(b), 1.0), Some(b));
    }

    #[test]
    fn test_lerp_clamps_extrapolation() {
        let a = Color::from_argb(200, 200, 200, 200);
        let b = Color::from_argb(100, 100, 100, 100);
        let c = Color::lerp(Some(a), Some(b), 2.0).unwrap();
        assert_eq!(c, Color::from_argb(0, 0, 0, 0));
    }

    #[test]
    fn test_conversions() {
        let c = Color::from_argb(255, 255, 0, 0);
        assert_eq!(c.to_rgba8(), [255, 0, 0, 255]);
        assert_eq!(c.to_f32_rgba(), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(c.opacity(), 1.0);
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", Color(0xFF00_1122)), "Color(0xFF001122)");
    }
}
