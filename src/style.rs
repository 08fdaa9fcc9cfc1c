///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use druid::{Color, Data};
use druid_color_thesaurus::{blue, white};
use serde::Deserialize;

pub const DEFAULT_AXIS_WIDTH: f64 = 3.0;
pub const DEFAULT_POINTER_WIDTH: f64 = 7.0;
pub const DEFAULT_POINTER_COLOR: Color = Color::rgb8(0xff, 0x44, 0x44);

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// IndicatorStyle
///
///////////////////////////////////////////////////////////////////////////////////////////////////

/// Selects how the dial is drawn. Angles always grow clockwise.
///
/// * `Horizontal`: inscribed circle, 0° points at 3 o'clock, a short tick marks
///   the pointer's orientation.
/// * `Vertical`: inscribed circle, 0° points at 12 o'clock, a disc marks the tip.
/// * `Rect`: the whole widget is the background, the pointer runs corner to corner.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Data, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorStyle {
    #[default]
    #[serde(alias = "circle")]
    Horizontal,
    Vertical,
    Rect,
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// DisplayConfig
///
///////////////////////////////////////////////////////////////////////////////////////////////////
#[derive(Clone, Debug)]
pub struct DisplayConfig {
    pub style: IndicatorStyle,
    pub horizontal_axis: bool,
    pub vertical_axis: bool,
    pub background_color: Color,
    pub axis_color: Color,
    pub axis_width: f64,
    pub pointer_color: Color,
    pub pointer_width: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            style: IndicatorStyle::default(),
            horizontal_axis: true,
            vertical_axis: true,
            background_color: blue::ARGENTINIAN_BLUE,
            axis_color: white::ALABASTER,
            axis_width: DEFAULT_AXIS_WIDTH,
            pointer_color: DEFAULT_POINTER_COLOR,
            pointer_width: DEFAULT_POINTER_WIDTH,
        }
    }
}

impl DisplayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn any_axis(&self) -> bool {
        self.horizontal_axis || self.vertical_axis
    }
}
