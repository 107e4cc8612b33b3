//! Gauge state: the current balance and its derived swept angle.

use crate::angle;
use crate::config::MeterConfig;
use crate::error::Result;

/// Displayed value and its derived arc sweep, kept consistent as a pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeState {
    current_value: f64,
    swept_angle: f64,
}

impl GaugeState {
    pub fn current_value(&self) -> f64 {
        self.current_value
    }

    pub fn swept_angle(&self) -> f64 {
        self.swept_angle
    }
}

/// Configuration plus current gauge state. Purely computational; rendering
/// reads it, the animation driver writes it.
#[derive(Debug, Clone)]
pub struct GaugeModel {
    config: MeterConfig,
    state: GaugeState,
}

impl GaugeModel {
    pub fn new(config: MeterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: GaugeState {
                current_value: 0.0,
                swept_angle: 0.0,
            },
        })
    }

    /// Clamps `value` to `[0, max_value]` and recomputes the swept angle in
    /// the same step, so the pair is never stale.
    pub fn set_current_value(&mut self, value: f64) {
        let clamped = value.clamp(0.0, self.config.max_value);
        self.state = GaugeState {
            current_value: clamped,
            swept_angle: angle::sweep_angle(clamped, self.config.max_value),
        };
    }

    pub fn config(&self) -> &MeterConfig {
        &self.config
    }

    pub fn state(&self) -> GaugeState {
        self.state
    }

    pub fn current_value(&self) -> f64 {
        self.state.current_value
    }

    pub fn swept_angle(&self) -> f64 {
        self.state.swept_angle
    }

    /// The current balance as displayed, e.g. `"1,500.50"`.
    pub fn formatted_value(&self) -> String {
        format_amount(self.state.current_value, self.config.group_separator)
    }

    /// The maximum balance as displayed, e.g. `"3,000.00"`.
    pub fn formatted_max(&self) -> String {
        format_amount(self.config.max_value, self.config.group_separator)
    }
}

/// Formats an amount with exactly two fraction digits and digit grouping.
/// Values here are always non-negative: the model clamps at zero.
pub fn format_amount(value: f64, group: char) -> String {
    let raw = format!("{value:.2}");
    let (int_part, frac_part) = raw.split_once('.').unwrap_or((raw.as_str(), "00"));
    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(raw.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(group);
        }
        grouped.push(*c);
    }
    format!("{grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::MAX_SWEEP_DEG;
    use approx::assert_relative_eq;

    fn model(max: f64) -> GaugeModel {
        GaugeModel::new(MeterConfig::builder().max_value(max).build()).unwrap()
    }

    #[test]
    fn starts_at_zero() {
        let m = model(3000.0);
        assert_eq!(m.current_value(), 0.0);
        assert_eq!(m.swept_angle(), 0.0);
    }

    #[test]
    fn values_above_max_are_clamped() {
        let mut m = model(3000.0);
        m.set_current_value(4000.0);
        assert_eq!(m.current_value(), 3000.0);
        assert_relative_eq!(m.swept_angle(), MAX_SWEEP_DEG);
    }

    #[test]
    fn values_below_zero_are_clamped() {
        let mut m = model(3000.0);
        m.set_current_value(-5.0);
        assert_eq!(m.current_value(), 0.0);
        assert_eq!(m.swept_angle(), 0.0);
    }

    #[test]
    fn sweep_tracks_every_update() {
        let mut m = model(3000.0);
        m.set_current_value(1500.5);
        assert_relative_eq!(m.swept_angle(), 1500.5 / 3000.0 * MAX_SWEEP_DEG);
        m.set_current_value(750.0);
        assert_relative_eq!(m.swept_angle(), 67.5);
    }

    #[test]
    fn amounts_get_two_fraction_digits_and_grouping() {
        assert_eq!(format_amount(3000.0, ','), "3,000.00");
        assert_eq!(format_amount(1500.5, ','), "1,500.50");
        assert_eq!(format_amount(0.0, ','), "0.00");
        assert_eq!(format_amount(999.999, ','), "1,000.00");
        assert_eq!(format_amount(1234567.89, ','), "1,234,567.89");
        assert_eq!(format_amount(12.3, ','), "12.30");
    }

    #[test]
    fn grouping_separator_is_configurable() {
        assert_eq!(format_amount(1234.5, '.'), "1.234.50");
        assert_eq!(format_amount(1234.5, ' '), "1 234.50");
    }

    #[test]
    fn formatted_strings_come_from_state_and_config() {
        let mut m = model(3000.0);
        m.set_current_value(1500.5);
        assert_eq!(m.formatted_value(), "1,500.50");
        assert_eq!(m.formatted_max(), "3,000.00");
    }
}
