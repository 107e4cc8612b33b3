use bon::Builder;

use crate::error::{MeterError, Result};

/// Color representation for meter elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn as_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

/// Light gray used for the background arc and the "remaining" label.
pub const LIGHT_GRAY: Color = Color::new(0xcc, 0xcc, 0xcc);

/// Configuration for the balance meter, fixed once accepted by
/// [`BalanceMeter::configure`](crate::BalanceMeter::configure).
///
/// The builder defaults mirror the hosting application's styling defaults:
/// a 3000.00 maximum balance, a 15 px stroke, and a blue meter arc. The
/// currency symbol defaults to the generic currency sign; hosts are expected
/// to supply their own glyph.
#[derive(Debug, Clone, Builder)]
pub struct MeterConfig {
    /// Upper bound of the meter; the arc is full at this balance.
    #[builder(default = 3000.00)]
    pub max_value: f64,
    /// Stroke width of both arcs, also the inset of the layout bounds.
    #[builder(default = 15.0)]
    pub stroke_width: f32,
    #[builder(default = LIGHT_GRAY)]
    pub background_color: Color,
    #[builder(default = Color::new(0x00, 0x00, 0xff))]
    pub meter_color: Color,
    #[builder(default = "\u{00a4}".to_string())]
    pub currency_symbol: String,
    /// Unit shown in the "per day" label under the gauge.
    #[builder(default = "GHS".to_string())]
    pub unit_label: String,
    #[builder(default = Color::new(0x00, 0x00, 0x00))]
    pub text_color: Color,
    #[builder(default = LIGHT_GRAY)]
    pub remaining_text_color: Color,
    #[builder(default = 70.0)]
    pub balance_text_size: f32,
    #[builder(default = 50.0)]
    pub remaining_text_size: f32,
    #[builder(default = 50.0)]
    pub max_label_text_size: f32,
    /// Digit-group separator used when formatting amounts.
    #[builder(default = ',')]
    pub group_separator: char,
    /// Wall-clock duration of the fill animation.
    #[builder(default = 3000)]
    pub animation_duration_ms: u64,
}

impl MeterConfig {
    /// Rejects configurations the meter cannot be rendered or animated with.
    pub fn validate(&self) -> Result<()> {
        if !(self.max_value > 0.0) {
            return Err(MeterError::InvalidConfig {
                field: "max_value",
                value: self.max_value,
            });
        }
        if !(self.stroke_width > 0.0) {
            return Err(MeterError::InvalidConfig {
                field: "stroke_width",
                value: f64::from(self.stroke_width),
            });
        }
        Ok(())
    }
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
