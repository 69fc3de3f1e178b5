//! Timing values passed to update hooks

/// Snapshot of simulation time for one admitted tick.
///
/// `elapsed` is always the fixed tick interval, so game logic advances by the
/// same amount every tick regardless of how late the frame was.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GameTime {
    /// Seconds advanced by this tick
    pub elapsed: f64,
    /// Total simulated seconds since the loop started
    pub total: f64,
    /// Zero-based index of this tick
    pub tick: u64,
}

impl GameTime {
    pub fn new(elapsed: f64, total: f64, tick: u64) -> Self {
        Self {
            elapsed,
            total,
            tick,
        }
    }

    /// Elapsed seconds as `f32`, for drawing and particle math
    pub fn elapsed_f32(&self) -> f32 {
        self.elapsed as f32
    }
}
