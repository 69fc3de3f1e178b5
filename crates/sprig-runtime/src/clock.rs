//! Frame clock with a fixed tick and a capped catch-up policy

use sprig_core::{GameTime, Result, SprigError};
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Slack for comparing float time samples against the tick interval, so a
/// sample landing on a tick boundary is admitted despite rounding (sleeps
/// are truncated to whole nanoseconds).
const TICK_EPSILON: f64 = 1e-6;

/// Default number of ticks admitted per drawn frame
pub const DEFAULT_MAX_CATCH_UP_TICKS: u32 = 5;

/// Source of wall-clock samples and the frame limiter's sleep
pub trait TimeSource {
    /// Seconds since an arbitrary fixed origin
    fn now(&self) -> f64;

    /// Block for about `duration`
    fn sleep(&self, duration: Duration);
}

/// Real time: `Instant` for samples, `thread::sleep` for yielding
#[derive(Debug)]
pub struct SystemTimeSource {
    origin: Instant,
}

impl SystemTimeSource {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemTimeSource {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Hand-driven time for tests and replays. Clones share the same clock;
/// `sleep` advances it instead of blocking.
#[derive(Debug, Clone, Default)]
pub struct ManualTimeSource {
    now: Rc<Cell<f64>>,
}

impl ManualTimeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, seconds: f64) {
        self.now.set(seconds);
    }

    pub fn advance(&self, seconds: f64) {
        self.now.set(self.now.get() + seconds);
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> f64 {
        self.now.get()
    }

    fn sleep(&self, duration: Duration) {
        self.advance(duration.as_secs_f64());
    }
}

/// Turns wall-clock samples into fixed simulation ticks and measures the
/// presented frame rate.
///
/// Ticks are admitted only once a full tick interval has passed since the
/// last admitted tick. Each admitted tick moves `previous_sample` forward by
/// exactly one interval, so cadence does not drift. If a frame runs so long
/// that more than `max_catch_up_ticks` are owed, only the cap is admitted
/// and the rest of the backlog is dropped by resynchronising to the current
/// sample.
#[derive(Debug, Clone)]
pub struct FrameClock {
    target_fps: f64,
    inverse_target_frame: f64,
    measured_fps: f64,
    current_sample: f64,
    previous_sample: f64,
    /// Seconds accumulated towards the next whole-second fps update
    frame_accumulator: f64,
    frames_this_second: u32,
    last_frame_sample: Option<f64>,
    max_catch_up_ticks: u32,
    ticks: u64,
    dropped_ticks: u64,
    started: bool,
}

impl Default for FrameClock {
    /// 60 ticks per second
    fn default() -> Self {
        Self {
            target_fps: 60.0,
            inverse_target_frame: 1.0 / 60.0,
            measured_fps: 0.0,
            current_sample: 0.0,
            previous_sample: 0.0,
            frame_accumulator: 0.0,
            frames_this_second: 0,
            last_frame_sample: None,
            max_catch_up_ticks: DEFAULT_MAX_CATCH_UP_TICKS,
            ticks: 0,
            dropped_ticks: 0,
            started: false,
        }
    }
}

impl FrameClock {
    pub fn new(target_fps: f64) -> Result<Self> {
        let mut clock = Self::default();
        clock.set_target_frames_per_second(target_fps)?;
        Ok(clock)
    }

    /// Set the tick rate. Non-positive or non-finite rates are rejected.
    pub fn set_target_frames_per_second(&mut self, rate: f64) -> Result<()> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(SprigError::InvalidFrameRate(rate));
        }
        self.target_fps = rate;
        self.inverse_target_frame = 1.0 / rate;
        Ok(())
    }

    pub fn set_max_catch_up_ticks(&mut self, max: u32) -> Result<()> {
        if max == 0 {
            return Err(SprigError::InvalidConfig(
                "max_catch_up_ticks must be at least 1".to_string(),
            ));
        }
        self.max_catch_up_ticks = max;
        Ok(())
    }

    pub fn target_fps(&self) -> f64 {
        self.target_fps
    }

    /// Minimum seconds between admitted ticks (1 / target fps)
    pub fn inverse_target_frame(&self) -> f64 {
        self.inverse_target_frame
    }

    pub fn max_catch_up_ticks(&self) -> u32 {
        self.max_catch_up_ticks
    }

    /// Frames presented during the last whole second
    pub fn measured_fps(&self) -> f64 {
        self.measured_fps
    }

    /// Ticks admitted since start
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    /// Ticks discarded by the catch-up cap since start
    pub fn dropped_ticks(&self) -> u64 {
        self.dropped_ticks
    }

    /// Anchor the clock at `now`; the first tick is admitted one interval later
    pub fn reset(&mut self, now: f64) {
        self.current_sample = now;
        self.previous_sample = now;
        self.frame_accumulator = 0.0;
        self.frames_this_second = 0;
        self.last_frame_sample = None;
        self.started = true;
    }

    /// Feed a time sample and return how many ticks to run before drawing
    pub fn advance(&mut self, now: f64) -> u32 {
        if !self.started {
            self.reset(now);
            return 0;
        }

        self.current_sample = now;
        let delta = now - self.previous_sample;
        if delta + TICK_EPSILON < self.inverse_target_frame {
            return 0;
        }

        let owed = ((delta + TICK_EPSILON) / self.inverse_target_frame).floor() as u64;
        let cap = u64::from(self.max_catch_up_ticks);
        if owed > cap {
            let dropped = owed - cap;
            self.dropped_ticks += dropped;
            self.previous_sample = now;
            log::debug!("frame ran long: dropping {dropped} tick(s) of backlog");
            self.max_catch_up_ticks
        } else {
            self.previous_sample += owed as f64 * self.inverse_target_frame;
            owed as u32
        }
    }

    /// Seconds until the next tick is due, for the frame limiter's sleep
    pub fn time_until_next_tick(&self, now: f64) -> Duration {
        let due = self.previous_sample + self.inverse_target_frame;
        Duration::from_secs_f64((due - now).max(0.0))
    }

    /// Timing values for the next admitted tick
    pub fn next_tick(&mut self) -> GameTime {
        let time = GameTime::new(
            self.inverse_target_frame,
            (self.ticks + 1) as f64 * self.inverse_target_frame,
            self.ticks,
        );
        self.ticks += 1;
        time
    }

    /// Count one presented frame at sample `now`. Returns true when the
    /// measured rate was refreshed (once per whole second).
    pub fn record_frame(&mut self, now: f64) -> bool {
        let elapsed = match self.last_frame_sample {
            Some(last) => (now - last).max(0.0),
            None => 0.0,
        };
        self.last_frame_sample = Some(now);

        self.frames_this_second += 1;
        self.frame_accumulator += elapsed;
        if self.frame_accumulator >= 1.0 {
            self.measured_fps = f64::from(self.frames_this_second);
            self.frames_this_second = 0;
            self.frame_accumulator = 0.0;
            return true;
        }
        false
    }
}
