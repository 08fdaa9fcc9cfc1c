///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Modules
///
///////////////////////////////////////////////////////////////////////////////////////////////////
pub mod config;
pub mod indicator;
pub mod render;
pub mod rotation;
pub mod style;

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Exports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
pub use config::{ConfigError, IndicatorConfig};
pub use indicator::{
    RotationIndicator, ROTATE, SET_ANIMATION_DURATION, SET_ANIMATION_ENABLED, SET_HORIZONTAL_AXIS, SET_ROTATION,
    SET_STYLE, SET_VERTICAL_AXIS,
};
pub use render::{render, DialGeometry, DialPainter, DrawCommand};
pub use rotation::{RotationController, RotationData, RotationState, Transition, TransitionPhase};
pub use style::{DisplayConfig, IndicatorStyle};
