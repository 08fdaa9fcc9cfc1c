//! A dial widget with a rotating pointer.

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use druid::piet::{LineCap, StrokeStyle};
use druid::widget::prelude::*;
use druid::{Color, Command, Data, Selector};

use crate::render::{render, DrawCommand};
use crate::rotation::{RotationState, TransitionPhase};
use crate::style::{DisplayConfig, IndicatorStyle};

//////////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Command Selectors
///
/////////////////////////////////////////////////////////////////////////////////////////////////////
pub const SET_ROTATION: Selector<f64> = Selector::new("rotation-indicator.set-rotation");
pub const ROTATE: Selector<f64> = Selector::new("rotation-indicator.rotate");
pub const SET_ANIMATION_ENABLED: Selector<bool> = Selector::new("rotation-indicator.set-animation-enabled");
pub const SET_ANIMATION_DURATION: Selector<u64> = Selector::new("rotation-indicator.set-animation-duration");
pub const SET_STYLE: Selector<IndicatorStyle> = Selector::new("rotation-indicator.set-style");
pub const SET_HORIZONTAL_AXIS: Selector<bool> = Selector::new("rotation-indicator.set-horizontal-axis");
pub const SET_VERTICAL_AXIS: Selector<bool> = Selector::new("rotation-indicator.set-vertical-axis");

const DEFAULT_SIZE: f64 = 100.0;

//////////////////////////////////////////////////////////////////////////////////////////////////////
///
/// RotationIndicator Widget
///
/////////////////////////////////////////////////////////////////////////////////////////////////////

/// Shows an angle as a pointer over a circular or rectangular background.
///
/// The indicator owns its state; it does not read the app data. Drive it with
/// the command selectors in this module (or wrap it in a
/// [`RotationController`](crate::rotation::RotationController) to follow a
/// data field). The plain setters are for configuring the widget before it is
/// added to a window; they do not schedule a repaint by themselves.
pub struct RotationIndicator {
    state: RotationState,
    config: DisplayConfig,
}

impl Default for RotationIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl RotationIndicator {
    pub fn new() -> Self {
        Self {
            state: RotationState::new(),
            config: DisplayConfig::new(),
        }
    }

    pub fn with_style(mut self, style: IndicatorStyle) -> Self {
        self.config.style = style;
        self
    }

    pub fn with_animation_enabled(mut self, enabled: bool) -> Self {
        self.state.set_animation_enabled(enabled);
        self
    }

    pub fn with_animation_duration(mut self, duration_ms: u64) -> Self {
        self.state.set_animation_duration(duration_ms);
        self
    }

    pub fn with_axes(mut self, horizontal: bool, vertical: bool) -> Self {
        self.config.horizontal_axis = horizontal;
        self.config.vertical_axis = vertical;
        self
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.config.background_color = color;
        self
    }

    pub fn with_axis_color(mut self, color: Color) -> Self {
        self.config.axis_color = color;
        self
    }

    pub fn with_axis_width(mut self, width: f64) -> Self {
        self.config.axis_width = width;
        self
    }

    pub fn with_pointer_color(mut self, color: Color) -> Self {
        self.config.pointer_color = color;
        self
    }

    pub fn with_pointer_width(mut self, width: f64) -> Self {
        self.config.pointer_width = width;
        self
    }

    // Rotation
    pub fn set_rotation(&mut self, degrees: f64) {
        self.state.set_rotation(degrees);
    }

    pub fn rotate(&mut self, delta: f64) {
        self.state.rotate(delta);
    }

    /// The angle currently on screen, which trails the target while animating.
    pub fn rotation(&self) -> f64 {
        self.state.rotation()
    }

    pub fn target_rotation(&self) -> f64 {
        self.state.target_rotation()
    }

    pub fn phase(&self) -> TransitionPhase {
        self.state.phase()
    }

    // Animation
    pub fn set_animation_enabled(&mut self, enabled: bool) {
        self.state.set_animation_enabled(enabled);
    }

    pub fn is_animation_enabled(&self) -> bool {
        self.state.is_animation_enabled()
    }

    pub fn set_animation_duration(&mut self, duration_ms: u64) {
        self.state.set_animation_duration(duration_ms);
    }

    pub fn animation_duration(&self) -> u64 {
        self.state.animation_duration()
    }

    // Display
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: DisplayConfig) {
        self.config = config;
    }

    pub fn set_style(&mut self, style: IndicatorStyle) {
        log::debug!("rotation indicator style: {:?}", style);
        self.config.style = style;
    }

    pub fn style(&self) -> IndicatorStyle {
        self.config.style
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.config.background_color = color;
    }

    pub fn set_axis_color(&mut self, color: Color) {
        self.config.axis_color = color;
    }

    pub fn set_axis_width(&mut self, width: f64) {
        self.config.axis_width = width;
    }

    pub fn set_pointer_color(&mut self, color: Color) {
        self.config.pointer_color = color;
    }

    pub fn set_pointer_width(&mut self, width: f64) {
        self.config.pointer_width = width;
    }

    pub fn set_horizontal_axis_enabled(&mut self, enabled: bool) {
        self.config.horizontal_axis = enabled;
    }

    pub fn is_horizontal_axis_enabled(&self) -> bool {
        self.config.horizontal_axis
    }

    pub fn set_vertical_axis_enabled(&mut self, enabled: bool) {
        self.config.vertical_axis = enabled;
    }

    pub fn is_vertical_axis_enabled(&self) -> bool {
        self.config.vertical_axis
    }

    pub fn draw_commands(&self, size: Size) -> Vec<DrawCommand> {
        render(self.state.rotation(), &self.config, size)
    }

    /// Applies one of this module's commands. Returns `false` for anything else.
    pub fn apply_command(&mut self, cmd: &Command) -> bool {
        if let Some(degrees) = cmd.get(SET_ROTATION) {
            self.set_rotation(*degrees);
        } else if let Some(delta) = cmd.get(ROTATE) {
            self.rotate(*delta);
        } else if let Some(enabled) = cmd.get(SET_ANIMATION_ENABLED) {
            self.set_animation_enabled(*enabled);
        } else if let Some(duration) = cmd.get(SET_ANIMATION_DURATION) {
            self.set_animation_duration(*duration);
        } else if let Some(style) = cmd.get(SET_STYLE) {
            self.set_style(*style);
        } else if let Some(enabled) = cmd.get(SET_HORIZONTAL_AXIS) {
            self.set_horizontal_axis_enabled(*enabled);
        } else if let Some(enabled) = cmd.get(SET_VERTICAL_AXIS) {
            self.set_vertical_axis_enabled(*enabled);
        } else {
            return false;
        }
        true
    }
}

impl<T: Data> Widget<T> for RotationIndicator {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, _data: &mut T, _env: &Env) {
        match event {
            Event::Command(cmd) => {
                if self.apply_command(cmd) {
                    if self.state.is_animating() {
                        ctx.request_anim_frame();
                    }
                    ctx.request_paint();
                    ctx.set_handled();
                }
            }
            Event::AnimFrame(interval) => {
                if self.state.advance(*interval) {
                    ctx.request_anim_frame();
                }
                ctx.request_paint();
            }
            _ => {}
        }
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, _data: &T, _env: &Env) {
        if let LifeCycle::WidgetAdded = event {
            if self.state.is_animating() {
                ctx.request_anim_frame();
            }
        }
    }

    fn update(&mut self, _ctx: &mut UpdateCtx, _old_data: &T, _data: &T, _env: &Env) {}

    fn layout(&mut self, _ctx: &mut LayoutCtx, bc: &BoxConstraints, _data: &T, _env: &Env) -> Size {
        bc.debug_check("RotationIndicator");

        if bc.is_width_bounded() && bc.is_height_bounded() {
            bc.max()
        } else {
            bc.constrain(Size::new(DEFAULT_SIZE, DEFAULT_SIZE))
        }
    }

    fn paint(&mut self, ctx: &mut PaintCtx, _data: &T, _env: &Env) {
        let size = ctx.size();
        let round_cap = StrokeStyle::new().line_cap(LineCap::Round);
        let commands = self.draw_commands(size);

        ctx.with_save(|ctx| {
            ctx.clip(size.to_rect());
            for command in commands {
                match command {
                    DrawCommand::FillRect { rect, color } => ctx.fill(rect, &color),
                    DrawCommand::FillCircle { circle, color } => ctx.fill(circle, &color),
                    DrawCommand::StrokeLine { line, color, width, round_cap: true } => {
                        ctx.stroke_styled(line, &color, width, &round_cap)
                    }
                    DrawCommand::StrokeLine { line, color, width, round_cap: false } => {
                        ctx.stroke(line, &color, width)
                    }
                }
            }
        });
    }
}
