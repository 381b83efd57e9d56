//! Step-bounded color transitions
//!
//! [`shift_color`] moves every channel of a color at most `step` units toward
//! a goal. Calling it once per rendered frame produces a linear fade that
//! never overshoots. [`StepTransition`] keeps the state for such a fade.

use crate::color::{Color, pack_rgbw};
use crate::math8::step8;

/// Arithmetic used for the downward branch of a shift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShiftMode {
    /// Decrease by `step`, clamped at the goal
    #[default]
    Symmetric,
    /// Decrease by the goal value instead of `step`, as the first WS2811
    /// bindings did. A channel fading toward zero never moves.
    Legacy,
}

/// Advance `color` one step toward `goal`
///
/// Each of the W, R, G and B channels moves by at most `step` and stops at
/// the goal value. With `step == 0` the color never changes.
pub const fn shift_color(color: Color, goal: Color, step: u8) -> Color {
    Color::rgbw(
        step8(color.red(), goal.red(), step),
        step8(color.green(), goal.green(), step),
        step8(color.blue(), goal.blue(), step),
        step8(color.white(), goal.white(), step),
    )
}

/// Advance `color` one step toward `goal` with the legacy arithmetic
///
/// Rising channels behave like [`shift_color`]. A falling channel that would
/// not pass the goal becomes `current - goal`, computed on unsigned 32-bit
/// values.
pub const fn shift_color_legacy(color: Color, goal: Color, step: u32) -> Color {
    let c = color.raw();
    let g = goal.raw();
    pack_rgbw(
        legacy_channel((c >> 16) & 0xFF, (g >> 16) & 0xFF, step),
        legacy_channel((c >> 8) & 0xFF, (g >> 8) & 0xFF, step),
        legacy_channel(c & 0xFF, g & 0xFF, step),
        legacy_channel((c >> 24) & 0xFF, (g >> 24) & 0xFF, step),
    )
}

const fn legacy_channel(current: u32, target: u32, step: u32) -> u32 {
    if current < target {
        let next = current.saturating_add(step);
        if next > target { target } else { next }
    } else if current > target {
        if current.wrapping_sub(step) < target {
            target
        } else {
            current - target
        }
    } else {
        current
    }
}

/// Shift `color` toward `goal` using the given arithmetic
#[allow(clippy::cast_lossless)]
pub const fn shift_color_with(mode: ShiftMode, color: Color, goal: Color, step: u8) -> Color {
    match mode {
        ShiftMode::Symmetric => shift_color(color, goal, step),
        ShiftMode::Legacy => shift_color_legacy(color, goal, step as u32),
    }
}

/// Color fade driven by repeated [`shift_color`] steps
///
/// Unlike a timed transition there is no clock: every [`tick`](Self::tick)
/// advances one step, so the caller's render cadence sets the fade speed.
#[derive(Debug, Clone)]
pub struct StepTransition {
    /// Current color
    current: Color,
    /// Goal color (None if no transition in progress)
    target: Option<Color>,
    /// Maximum per-channel change per tick
    step: u8,
    mode: ShiftMode,
}

impl StepTransition {
    /// Create a resting transition at `initial`
    pub const fn new(initial: Color, step: u8) -> Self {
        Self {
            current: initial,
            target: None,
            step,
            mode: ShiftMode::Symmetric,
        }
    }

    /// Use a different shift arithmetic
    pub const fn with_mode(mut self, mode: ShiftMode) -> Self {
        self.mode = mode;
        self
    }

    /// Get current color
    pub const fn current(&self) -> Color {
        self.current
    }

    /// Get goal color, if a transition is in progress
    pub const fn target(&self) -> Option<Color> {
        self.target
    }

    pub const fn step(&self) -> u8 {
        self.step
    }

    /// Change the per-tick step, keeping the current goal
    pub const fn set_step(&mut self, step: u8) {
        self.step = step;
    }

    /// Check if a transition is in progress
    pub const fn is_transitioning(&self) -> bool {
        self.target.is_some()
    }

    /// Start fading toward `goal`
    ///
    /// A zero step would never arrive, so the color jumps immediately.
    pub fn set(&mut self, goal: Color) {
        if self.step == 0 || goal == self.current {
            self.current = goal;
            self.target = None;
        } else {
            self.target = Some(goal);
        }
    }

    /// Apply one step and return the new current color
    pub fn tick(&mut self) -> Color {
        let Some(target) = self.target else {
            return self.current;
        };

        let next = shift_color_with(self.mode, self.current, target, self.step);
        if next == target {
            self.target = None;
        } else if next == self.current {
            // Legacy arithmetic can stall before reaching the goal
            self.current = target;
            self.target = None;
            return target;
        }
        self.current = next;
        next
    }
}
