/// Easing curves for scroll animations.
///
/// Every curve maps `[0, 1]` onto `[0, 1]`, is monotonic, and hits both
/// endpoints exactly.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// Constant velocity.
    Linear,
    /// `1 - (1 - t)^2`: fast start, gentle settle.
    #[default]
    QuadraticOut,
    /// Exponential "viscous fluid" curve used by platform scrollers.
    ViscousFluid,
}

const VISCOUS_FLUID_SCALE: f32 = 8.0;

impl Easing {
    /// Apply the easing function to a linear fraction, clamped to `[0, 1]`.
    pub fn transform(&self, fraction: f32) -> f32 {
        let t = fraction.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadraticOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv
            }
            Easing::ViscousFluid => {
                if t >= 1.0 {
                    1.0
                } else {
                    (viscous_fluid(t) / viscous_fluid(1.0)).min(1.0)
                }
            }
        }
    }
}

fn viscous_fluid(t: f32) -> f32 {
    let x = t * VISCOUS_FLUID_SCALE;
    if x < 1.0 {
        x - (1.0 - (-x).exp())
    } else {
        // Value of the first segment at x == 1, so both pieces join.
        let start = (-1.0f32).exp();
        start + (1.0 - (1.0 - x).exp()) * (1.0 - start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 3] = [Easing::Linear, Easing::QuadraticOut, Easing::ViscousFluid];

    #[test]
    fn curves_hit_both_endpoints() {
        for easing in ALL {
            assert_eq!(easing.transform(0.0), 0.0, "{easing:?} start");
            assert!((easing.transform(1.0) - 1.0).abs() < 1e-6, "{easing:?} end");
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in ALL {
            let mut previous = 0.0;
            for step in 0..=100 {
                let value = easing.transform(step as f32 / 100.0);
                assert!(value + 1e-6 >= previous, "{easing:?} regressed at {step}");
                previous = value;
            }
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(Easing::QuadraticOut.transform(-0.5), 0.0);
        assert_eq!(Easing::QuadraticOut.transform(3.0), 1.0);
    }
}
