//! Session Clock
//!
//! Accumulates frame deltas into the elapsed play time shown on the HUD.

use serde::{Deserialize, Serialize};

/// Elapsed play time in seconds.
///
/// Only ever grows. A fresh clock is created when a session is (re)built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionClock {
    elapsed: f64,
}

impl SessionClock {
    /// A clock at zero.
    pub const fn new() -> Self {
        Self { elapsed: 0.0 }
    }

    /// Add one frame delta. Negative and non-finite deltas are dropped.
    pub fn advance(&mut self, delta_seconds: f32) {
        if delta_seconds.is_finite() && delta_seconds > 0.0 {
            self.elapsed += f64::from(delta_seconds);
        }
    }

    /// Elapsed seconds.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Whole minutes and seconds of the floored elapsed time.
    pub fn minutes_seconds(&self) -> (u64, u64) {
        let whole = self.elapsed.floor() as u64;
        (whole / 60, whole % 60)
    }

    /// Elapsed time as zero-padded `MM:SS`.
    pub fn format_mm_ss(&self) -> String {
        let (mins, secs) = self.minutes_seconds();
        format!("{mins:02}:{secs:02}")
    }
}
