//! Linear color to packed 32-bit pixel conversion.
//!
//! Pixels are packed R in the lowest byte through A in the highest. There is
//! no gamma curve: channels are clamped and truncated straight to 8 bits.

use lumen_math::Vec4;

/// Map a channel in [0, 1] to a byte by truncating `v * 255`.
///
/// Out-of-range input is clamped first; NaN maps to 0.
#[inline]
pub fn quantize_channel(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0) as u8
}

/// Convert a linear RGBA color to a packed pixel.
pub fn convert_to_rgba(color: Vec4) -> u32 {
    let r = quantize_channel(color.x) as u32;
    let g = quantize_channel(color.y) as u32;
    let b = quantize_channel(color.z) as u32;
    let a = quantize_channel(color.w) as u32;

    (a << 24) | (b << 16) | (g << 8) | r
}

/// Split a packed pixel back into `[r, g, b, a]` bytes.
#[inline]
pub fn unpack_rgba(pixel: u32) -> [u8; 4] {
    pixel.to_le_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_truncates() {
        assert_eq!(quantize_channel(0.0), 0);
        assert_eq!(quantize_channel(1.0), 255);
        assert_eq!(quantize_channel(0.5), 127);
        assert_eq!(quantize_channel(0.999), 254);
    }

    #[test]
    fn test_quantize_matches_floor() {
        for i in 0..=1000 {
            let v = i as f32 / 1000.0;
            assert_eq!(quantize_channel(v), (v * 255.0).floor() as u8, "v = {v}");
        }
    }

    #[test]
    fn test_quantize_clamps_out_of_range() {
        assert_eq!(quantize_channel(-0.5), 0);
        assert_eq!(quantize_channel(7.0), 255);
        assert_eq!(quantize_channel(f32::INFINITY), 255);
        assert_eq!(quantize_channel(f32::NAN), 0);
    }

    #[test]
    fn test_channel_order() {
        let pixel = convert_to_rgba(Vec4::new(1.0, 0.0, 0.0, 0.0));
        assert_eq!(pixel, 0x0000_00FF);

        let pixel = convert_to_rgba(Vec4::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(pixel, 0xFF00_0000);

        let pixel = convert_to_rgba(Vec4::new(0.2, 0.4, 0.6, 1.0));
        assert_eq!(unpack_rgba(pixel), [51, 102, 153, 255]);
    }

    #[test]
    fn test_opaque_black() {
        assert_eq!(convert_to_rgba(Vec4::new(0.0, 0.0, 0.0, 1.0)), 0xFF00_0000);
    }
}
