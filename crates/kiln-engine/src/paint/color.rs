/// Straight-alpha RGBA color with `f32` components in `[0, 1]`.
///
/// The shell only ever uses colors for surface clears, so there is no
/// premultiplication; conversion for the GPU happens in [`Color::to_wgpu`].
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// The default background the render hook clears to.
    pub const CORNFLOWER_BLUE: Color = Color::rgb8(100, 149, 237);

    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    /// Creates an opaque color from byte components (`0`–`255`).
    #[inline]
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba8(r, g, b, 255)
    }

    /// Creates a color from byte components (`0`–`255`).
    #[inline]
    pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Creates a color from `f32` components, clamped to `[0, 1]`.
    #[inline]
    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Converts to the `f64` color wgpu clear ops take.
    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb8_is_opaque() {
        assert_eq!(Color::rgb8(0, 0, 0).a, 1.0);
    }

    #[test]
    fn rgba_clamps() {
        let c = Color::rgba(2.0, -1.0, 0.5, 1.5);
        assert_eq!(c, Color { r: 1.0, g: 0.0, b: 0.5, a: 1.0 });
    }

    #[test]
    fn cornflower_matches_bytes() {
        let c = Color::CORNFLOWER_BLUE;
        assert!((c.r - 100.0 / 255.0).abs() < f32::EPSILON);
        assert!((c.g - 149.0 / 255.0).abs() < f32::EPSILON);
        assert!((c.b - 237.0 / 255.0).abs() < f32::EPSILON);
        assert_eq!(c.a, 1.0);
    }
}
