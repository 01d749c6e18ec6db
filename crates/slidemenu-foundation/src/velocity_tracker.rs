//! Release-velocity estimation for horizontal drags.
//!
//! Impulse strategy: each pair of neighbouring samples imparts kinetic energy,
//! and the accumulated energy is converted back into a velocity. This weighs
//! the most recent motion without the jitter of a two-point difference.

/// Ring buffer capacity.
const HISTORY_SIZE: usize = 20;

/// Samples older than this (relative to the newest) are ignored.
const HORIZON_MS: u64 = 100;

/// A gap this long between neighbouring samples means the pointer had stopped.
pub const ASSUME_STOPPED_MS: u64 = 40;

#[derive(Clone, Copy, Debug)]
struct Sample {
    time_ms: u64,
    position: f32,
}

/// Tracks one coordinate of a pointer over time.
#[derive(Clone, Debug)]
pub struct VelocityTracker {
    samples: [Option<Sample>; HISTORY_SIZE],
    /// Slot of the newest sample.
    head: usize,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            head: 0,
        }
    }

    pub fn add_movement(&mut self, time_ms: u64, position: f32) {
        self.head = (self.head + 1) % HISTORY_SIZE;
        self.samples[self.head] = Some(Sample { time_ms, position });
    }

    pub fn is_empty(&self) -> bool {
        self.samples[self.head].is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Newest-first walk over the stored samples.
    fn newest_first(&self) -> impl Iterator<Item = Sample> + '_ {
        (0..HISTORY_SIZE)
            .map(move |back| self.samples[(self.head + HISTORY_SIZE - back) % HISTORY_SIZE])
            .map_while(|sample| sample)
    }

    /// Velocity in units per second, or 0.0 with fewer than two usable samples.
    pub fn velocity(&self) -> f32 {
        let Some(newest) = self.samples[self.head] else {
            return 0.0;
        };

        let mut window = [Sample {
            time_ms: 0,
            position: 0.0,
        }; HISTORY_SIZE];
        let mut count = 0;
        let mut newer = newest;
        for sample in self.newest_first() {
            let age = newest.time_ms.saturating_sub(sample.time_ms);
            let gap = newer.time_ms.saturating_sub(sample.time_ms);
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }
            window[count] = sample;
            count += 1;
            newer = sample;
        }

        if count < 2 {
            return 0.0;
        }

        // `window` is newest-first; replay it oldest-first.
        let mut work = 0.0f32;
        let mut first_segment = true;
        for pair in window[..count].windows(2).rev() {
            let (newer, older) = (pair[0], pair[1]);
            let dt = newer.time_ms.saturating_sub(older.time_ms);
            if dt == 0 {
                continue;
            }
            let segment_velocity = (newer.position - older.position) / dt as f32;
            let previous_velocity = energy_to_velocity(work);
            work += (segment_velocity - previous_velocity) * segment_velocity.abs();
            if first_segment {
                work *= 0.5;
                first_segment = false;
            }
        }

        energy_to_velocity(work) * 1000.0
    }

    /// Velocity in units per second, clamped to `±max_velocity`.
    pub fn velocity_clamped(&self, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }

        let velocity = self.velocity();
        if velocity.is_nan() {
            return 0.0;
        }
        velocity.clamp(-max_velocity, max_velocity)
    }
}

/// `E = v^2 / 2` with unit mass, sign preserved.
#[inline]
fn energy_to_velocity(energy: f32) -> f32 {
    energy.signum() * (2.0 * energy.abs()).sqrt()
}

#[cfg(test)]
#[path = "tests/velocity_tracker_tests.rs"]
mod tests;
