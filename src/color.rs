use plotters::style::RGBColor;

use crate::error::FinanceError;

/// Factor applied to a series' base color to derive its earnings color.
pub const EARNINGS_COLOR_SCALE: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 128, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses HTML color syntax, e.g. `#1f77b4`, `#f80`, `rgb(31, 119, 180)` or a CSS color name
    /// such as `red`.
    pub fn parse(input: &str) -> Result<Self, FinanceError> {
        let color =
            colorgrad::Color::from_html(input.trim()).map_err(|_| FinanceError::InvalidColor {
                input: input.to_string(),
            })?;
        let [red, green, blue, _alpha] = color.to_rgba8();
        Ok(Self { red, green, blue })
    }

    /// Multiplies every channel by `factor`, saturating at 0 and 255.
    /// Factors above 1 brighten the color, factors below 1 darken it.
    pub fn scale(self, factor: f64) -> Self {
        let scale_channel = |channel: u8| (f64::from(channel) * factor).clamp(0.0, 255.0) as u8;
        Self {
            red: scale_channel(self.red),
            green: scale_channel(self.green),
            blue: scale_channel(self.blue),
        }
    }
}

impl From<Rgb> for RGBColor {
    fn from(color: Rgb) -> Self {
        RGBColor(color.red, color.green, color.blue)
    }
}
