/// Straight-alpha sRGB color as understood by Canvas2D style strings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: [u8; 3],
    pub alpha: f64,
}

impl Rgba {
    pub const fn new(rgb: [u8; 3], alpha: f64) -> Self {
        Self { rgb, alpha }
    }

    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// CSS `rgba(r, g, b, a)` string; alpha is clamped into \[0, 1\].
    pub fn css(&self) -> String {
        let [r, g, b] = self.rgb;
        format!("rgba({}, {}, {}, {})", r, g, b, self.alpha.clamp(0.0, 1.0))
    }
}

impl From<([u8; 3], f64)> for Rgba {
    fn from((rgb, alpha): ([u8; 3], f64)) -> Self {
        Self::new(rgb, alpha)
    }
}
