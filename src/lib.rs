//! A circular balance meter widget.
//!
//! The gauge renders a 270-degree arc that fills from zero up to a configured
//! maximum balance, with the formatted amount, a "remaining" label, and a
//! per-day maximum underneath. The core is host-agnostic: it exposes
//! [`BalanceMeter::configure`], [`BalanceMeter::start_animation`], and
//! [`BalanceMeter::render`], and an external paint loop feeds it elapsed time
//! through [`BalanceMeter::advance`]. Rendering targets the [`Surface`]
//! trait; [`FrameSurface`] rasterizes into an RGBA framebuffer and
//! [`SceneRecorder`] records draw calls for headless use.

pub mod angle;
pub mod animation;
pub mod config;
pub mod error;
pub mod model;
pub mod raster;
pub mod render;
pub mod surface;

pub use animation::{AnimationDriver, DriverState, Epoch};
pub use config::{Color, MeterConfig};
pub use error::{MeterError, Result};
pub use model::{GaugeModel, GaugeState};
pub use raster::FrameSurface;
pub use render::render_gauge;
pub use surface::{DrawCall, Rect, SceneRecorder, StrokeStyle, Surface, TextStyle};

/// The meter: a [`GaugeModel`] driven by an [`AnimationDriver`]. All three
/// public operations the widget offers live here.
#[derive(Debug)]
pub struct BalanceMeter {
    model: GaugeModel,
    driver: AnimationDriver,
}

impl BalanceMeter {
    /// Builds a meter from a validated configuration.
    pub fn new(config: MeterConfig) -> Result<Self> {
        let driver = AnimationDriver::new(config.animation_duration_ms);
        Ok(Self {
            model: GaugeModel::new(config)?,
            driver,
        })
    }

    /// Replaces the configuration. Fails on an invalid config, leaving the
    /// previous configuration in place; on success any animation in flight is
    /// superseded and the displayed value re-clamped to the new maximum.
    pub fn configure(&mut self, config: MeterConfig) -> Result<()> {
        config.validate()?;
        self.driver.reconfigure(config.animation_duration_ms);
        let value = self.model.current_value();
        self.model = GaugeModel::new(config)?;
        self.model.set_current_value(value);
        Ok(())
    }

    /// Starts the fill animation from its initial value, superseding any run
    /// in flight. Returns the token the host must present with every tick.
    pub fn start_animation(&mut self) -> Epoch {
        self.model.set_current_value(animation::START_VALUE);
        self.driver.start()
    }

    /// One animation tick at `elapsed_ms` since the run identified by
    /// `epoch` began. Returns `true` when the displayed value changed and a
    /// repaint is needed; stale or post-completion ticks return `false` and
    /// leave state untouched.
    pub fn advance(&mut self, epoch: Epoch, elapsed_ms: f64) -> bool {
        match self
            .driver
            .advance(epoch, elapsed_ms, self.model.config().max_value)
        {
            Some(value) => {
                self.model.set_current_value(value);
                true
            }
            None => false,
        }
    }

    /// Draws the gauge onto `surface` from current state. Read-only; calling
    /// it twice with unchanged state issues identical draw calls.
    pub fn render<S: Surface>(&self, surface: &mut S) {
        render_gauge(&self.model, surface);
    }

    pub fn model(&self) -> &GaugeModel {
        &self.model
    }

    pub fn driver_state(&self) -> DriverState {
        self.driver.state()
    }
}
