//! Unit types: Dp and its conversion to pixels

/// Density-independent pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    pub fn to_px(&self, density: f32) -> f32 {
        self.0 * density
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dp_scales_with_density() {
        assert_eq!(Dp(600.0).to_px(2.0), 1200.0);
        assert_eq!(Dp(8.0).to_px(1.33), 8.0 * 1.33);
    }
}
