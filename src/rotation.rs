///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use std::f64::consts::PI;

use druid::{widget::Controller, Data, Env, LifeCycle, LifeCycleCtx, UpdateCtx, Widget};

use crate::indicator::SET_ROTATION;

pub const DEFAULT_DURATION_MS: u64 = 200;

const NANOS_PER_MILLI: u64 = 1_000_000;

/// Accelerate-decelerate curve: slow at both ends, fastest in the middle.
pub fn accelerate_decelerate(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    ((t + 1.0) * PI).cos() / 2.0 + 0.5
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Transition
///
///////////////////////////////////////////////////////////////////////////////////////////////////
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Transition {
    from: f64,
    to: f64,
    elapsed_nanos: u64,
    duration_nanos: u64,
}

impl Transition {
    pub fn new(from: f64, to: f64, duration_ms: u64) -> Self {
        Self {
            from,
            to,
            elapsed_nanos: 0,
            duration_nanos: duration_ms.saturating_mul(NANOS_PER_MILLI),
        }
    }

    pub fn from(&self) -> f64 {
        self.from
    }

    pub fn to(&self) -> f64 {
        self.to
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_nanos >= self.duration_nanos
    }

    pub fn fraction(&self) -> f64 {
        if self.duration_nanos == 0 {
            return 1.0;
        }
        (self.elapsed_nanos as f64 / self.duration_nanos as f64).min(1.0)
    }

    pub fn value(&self) -> f64 {
        if self.is_finished() {
            // Land on the end value exactly, not on whatever the curve rounds to.
            return self.to;
        }
        self.from + (self.to - self.from) * accelerate_decelerate(self.fraction())
    }

    pub fn advance(&mut self, interval_nanos: u64) -> f64 {
        self.elapsed_nanos = self.elapsed_nanos.saturating_add(interval_nanos);
        self.value()
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// RotationState
///
///////////////////////////////////////////////////////////////////////////////////////////////////
#[derive(Clone, Copy, PartialEq, Eq, Debug, Data)]
pub enum TransitionPhase {
    Idle,
    Animating,
}

/// Displayed angle plus the angle it is heading to.
///
/// Angles are in degrees, clockwise, unbounded. With animation disabled the two
/// are always equal. With animation enabled `target` moves immediately on every
/// request while `current` follows it through a [`Transition`] driven by
/// [`RotationState::advance`].
#[derive(Clone, PartialEq, Debug)]
pub struct RotationState {
    current: f64,
    target: f64,
    animation_enabled: bool,
    duration_ms: u64,
    transition: Option<Transition>,
}

impl Default for RotationState {
    fn default() -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            animation_enabled: true,
            duration_ms: DEFAULT_DURATION_MS,
            transition: None,
        }
    }
}

impl RotationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rotation(&self) -> f64 {
        self.current
    }

    pub fn target_rotation(&self) -> f64 {
        self.target
    }

    pub fn set_rotation(&mut self, angle: f64) {
        if !self.animation_enabled {
            self.current = angle;
            self.target = angle;
            return;
        }
        let start = self.current;
        self.target = angle;
        self.start_transition(start, self.target);
    }

    pub fn rotate(&mut self, delta: f64) {
        if !self.animation_enabled {
            self.current += delta;
            self.target = self.current;
            return;
        }
        self.target += delta;
        self.start_transition(self.current, self.target);
    }

    pub fn is_animation_enabled(&self) -> bool {
        self.animation_enabled
    }

    pub fn set_animation_enabled(&mut self, enabled: bool) {
        self.animation_enabled = enabled;
        if !enabled {
            self.cancel();
        }
    }

    pub fn animation_duration(&self) -> u64 {
        self.duration_ms
    }

    pub fn set_animation_duration(&mut self, duration_ms: u64) {
        self.duration_ms = duration_ms;
    }

    pub fn phase(&self) -> TransitionPhase {
        match self.transition {
            Some(_) => TransitionPhase::Animating,
            None => TransitionPhase::Idle,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    /// Drops the in-flight transition, leaving `current` where it got to.
    pub fn cancel(&mut self) {
        if let Some(transition) = self.transition.take() {
            log::trace!(
                "rotation transition {:.2} -> {:.2} cancelled at {:.2}",
                transition.from(),
                transition.to(),
                self.current
            );
        }
    }

    /// Moves the in-flight transition forward. Returns `true` while more frames
    /// are needed.
    pub fn advance(&mut self, interval_nanos: u64) -> bool {
        let Some(transition) = self.transition.as_mut() else {
            return false;
        };
        self.current = transition.advance(interval_nanos);
        if transition.is_finished() {
            self.transition = None;
            return false;
        }
        true
    }

    fn start_transition(&mut self, from: f64, to: f64) {
        // A new request replaces the old transition outright, no blending.
        self.cancel();
        log::trace!("rotation transition {:.2} -> {:.2} over {}ms", from, to, self.duration_ms);
        self.transition = Some(Transition::new(from, to, self.duration_ms));
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// RotationData
///
///////////////////////////////////////////////////////////////////////////////////////////////////
pub trait RotationData {
    fn get_rotation(&self) -> f64;
    fn set_rotation(&mut self, rotation: f64);
}

impl RotationData for f64 {
    fn get_rotation(&self) -> f64 {
        *self
    }

    fn set_rotation(&mut self, rotation: f64) {
        *self = rotation;
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// RotationController
///
///////////////////////////////////////////////////////////////////////////////////////////////////

/// Forwards changes of the bound data's rotation to the wrapped indicator as
/// absolute rotation requests.
pub struct RotationController {
    last_rotation: Option<f64>,
}

impl RotationController {
    pub fn new() -> Self {
        Self { last_rotation: None }
    }
}

impl Default for RotationController {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Data + RotationData, W: Widget<T>> Controller<T, W> for RotationController {
    fn lifecycle(&mut self, child: &mut W, ctx: &mut LifeCycleCtx, event: &LifeCycle, data: &T, env: &Env) {
        if let LifeCycle::WidgetAdded = event {
            let rotation = data.get_rotation();
            self.last_rotation = Some(rotation);
            ctx.submit_command(SET_ROTATION.with(rotation).to(ctx.widget_id()));
        }
        child.lifecycle(ctx, event, data, env);
    }

    fn update(&mut self, child: &mut W, ctx: &mut UpdateCtx, old_data: &T, data: &T, env: &Env) {
        let rotation = data.get_rotation();
        let changed = match self.last_rotation {
            Some(last) => last != rotation,
            None => old_data.get_rotation() != rotation,
        };

        if changed {
            self.last_rotation = Some(rotation);
            ctx.submit_command(SET_ROTATION.with(rotation).to(ctx.widget_id()));
        }

        child.update(ctx, old_data, data, env);
    }
}
