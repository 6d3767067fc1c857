//! Console appearance settings mutated by the built-in commands.

use bevy::prelude::*;

use crate::core::Rgb;

/// Default console font size in points.
pub const DEFAULT_FONT_SIZE: i32 = 11;

/// Console appearance settings.
///
/// Mutated by the built-in `:colors` and `:fontsize` commands; UI layers
/// read it to style themselves.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Background color of the console window.
    pub background: Rgb,
    /// Color of output text.
    pub output_text: Rgb,
    /// Color of input text.
    pub input_text: Rgb,
    /// Font size in points.
    pub font_size: i32,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            background: Rgb::new(26, 26, 26),
            output_text: Rgb::new(230, 230, 230),
            input_text: Rgb::new(255, 211, 149),
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl ConsoleConfig {
    /// Reset all colors to their defaults. The font size is kept.
    pub fn reset_colors(&mut self) {
        let defaults = Self::default();
        self.background = defaults.background;
        self.output_text = defaults.output_text;
        self.input_text = defaults.input_text;
    }

    /// Get the background color as a Bevy color.
    pub fn background_color(&self) -> Color {
        self.background.into()
    }

    /// Get the output text color as a Bevy color.
    pub fn output_text_color(&self) -> Color {
        self.output_text.into()
    }

    /// Get the input text color as a Bevy color.
    pub fn input_text_color(&self) -> Color {
        self.input_text.into()
    }
}
