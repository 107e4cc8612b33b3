//! Time-based fill animation.
//!
//! The driver itself is a pure step function over elapsed wall-clock time;
//! the host's paint loop decides when ticks happen and may deliver them at
//! irregular intervals. Every `start` bumps an epoch, and ticks carrying a
//! stale epoch are ignored outright, so a superseded run can never write
//! state after a restart.

/// Displayed value a fresh run interpolates from.
pub const START_VALUE: f64 = 1.0;

/// Animation lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running,
    Completed,
}

/// Token identifying one animation run. Ticks must present the token of the
/// run they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Epoch(u64);

#[derive(Debug)]
pub struct AnimationDriver {
    duration_ms: u64,
    state: DriverState,
    epoch: u64,
}

impl AnimationDriver {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            state: DriverState::Idle,
            epoch: 0,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Begins a fresh linear run from [`START_VALUE`] to the maximum,
    /// superseding any run in flight. The epoch stays monotonic across
    /// reconfiguration so tokens from old runs never collide with new ones.
    pub fn start(&mut self) -> Epoch {
        self.epoch += 1;
        self.state = DriverState::Running;
        Epoch(self.epoch)
    }

    /// Invalidates the current run and returns to `Idle` without starting a
    /// new one.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.state = DriverState::Idle;
    }

    /// Replaces the animation duration; any run in flight is invalidated.
    pub fn reconfigure(&mut self, duration_ms: u64) {
        self.duration_ms = duration_ms;
        self.reset();
    }

    /// One tick: the interpolated value for `elapsed_ms` since the run began,
    /// or `None` when the tick is stale (wrong epoch) or the driver is not
    /// running. Reaching the duration completes the run.
    pub fn advance(&mut self, epoch: Epoch, elapsed_ms: f64, max_value: f64) -> Option<f64> {
        if epoch.0 != self.epoch || self.state != DriverState::Running {
            return None;
        }
        let duration = self.duration_ms as f64;
        let fraction = (elapsed_ms / duration).clamp(0.0, 1.0);
        if elapsed_ms >= duration {
            self.state = DriverState::Completed;
        }
        Some(START_VALUE + (max_value - START_VALUE) * fraction)
    }
}
