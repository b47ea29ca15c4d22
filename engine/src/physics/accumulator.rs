//! Physics clock turning frame delta times into simulation steps
//!
//! Rendered frames arrive at whatever rate the display allows. The clock
//! decides how many physics steps of which length each frame gets, so that a
//! hitch never feeds the solver one huge step.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// How frame time is turned into physics steps
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TimestepMode {
    /// Constant-length steps, with leftover time carried to the next frame
    Fixed {
        /// Length of one step in seconds
        step: f32,
        /// Most steps a single frame may run
        max_steps: u32,
    },
    /// One step per frame, as long as the frame took, but never longer than `max_dt`
    Clamped { max_dt: f32 },
}

impl Default for TimestepMode {
    fn default() -> Self {
        TimestepMode::Fixed {
            step: 1.0 / 60.0,
            max_steps: 8,
        }
    }
}

/// Steps to run for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepPlan {
    pub steps: u32,
    pub step_dt: f32,
}

impl StepPlan {
    pub const NONE: StepPlan = StepPlan {
        steps: 0,
        step_dt: 0.0,
    };
}

/// Physics accumulator for managing fixed timestep updates
#[derive(Debug, Clone)]
pub struct PhysicsAccumulator {
    mode: TimestepMode,
    /// Accumulated time since last physics update
    accumulated: f32,
}

impl PhysicsAccumulator {
    pub fn new(mode: TimestepMode) -> Self {
        Self {
            mode,
            accumulated: 0.0,
        }
    }

    /// Add a frame's delta time and return the steps to perform
    pub fn accumulate(&mut self, delta_time: f32) -> StepPlan {
        // Negative or NaN deltas come from clock hiccups and carry no time
        let delta_time = if delta_time.is_finite() {
            delta_time.max(0.0)
        } else {
            0.0
        };

        match self.mode {
            TimestepMode::Fixed { step, max_steps } => {
                self.accumulated += delta_time;

                let budget = step * max_steps as f32;
                let steps = if self.accumulated > budget {
                    warn!(
                        "Physics accumulator too large: {} seconds. Clamping to prevent spiral of death.",
                        self.accumulated
                    );
                    // Time beyond the cap is dropped, not carried
                    self.accumulated = 0.0;
                    max_steps
                } else {
                    let steps = ((self.accumulated / step) as u32).min(max_steps);
                    // Keep float drift from producing a tiny negative remainder
                    self.accumulated = (self.accumulated - steps as f32 * step).max(0.0);
                    steps
                };

                StepPlan {
                    steps,
                    step_dt: step,
                }
            }
            TimestepMode::Clamped { max_dt } => {
                if delta_time <= 0.0 {
                    return StepPlan::NONE;
                }
                if delta_time > max_dt {
                    warn!(delta_time, max_dt, "Frame delta clamped");
                }
                StepPlan {
                    steps: 1,
                    step_dt: delta_time.min(max_dt),
                }
            }
        }
    }

    /// How far between physics steps we are, in `[0, 1)`; always 0 for clamped steps
    pub fn interpolation_alpha(&self) -> f32 {
        match self.mode {
            TimestepMode::Fixed { step, .. } => self.accumulated / step,
            TimestepMode::Clamped { .. } => 0.0,
        }
    }

    /// Reset the accumulator to zero
    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }

    /// Get the current accumulated time
    pub fn accumulated_time(&self) -> f32 {
        self.accumulated
    }
}

impl Default for PhysicsAccumulator {
    fn default() -> Self {
        Self::new(TimestepMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_60hz() -> PhysicsAccumulator {
        PhysicsAccumulator::new(TimestepMode::Fixed {
            step: 1.0 / 60.0,
            max_steps: 8,
        })
    }

    #[test]
    fn test_accumulator_basic() {
        let mut acc = fixed_60hz();

        let plan = acc.accumulate(1.0 / 30.0); // 2 frames worth
        assert_eq!(plan.steps, 2);
        assert!(acc.interpolation_alpha() < 0.001);

        let plan = acc.accumulate(1.0 / 120.0); // Half a frame
        assert_eq!(plan.steps, 0);
        assert!((acc.interpolation_alpha() - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_accumulator_spiral_of_death() {
        let mut acc = fixed_60hz();

        let plan = acc.accumulate(1.0);
        assert_eq!(plan.steps, 8);
        assert!(acc.accumulated_time() < 1.0 / 60.0);
    }

    #[test]
    fn test_capped_frame_runs_every_allowed_step() {
        for step in [1.0 / 60.0, 1.0 / 30.0, 1.0 / 144.0, 0.1, 0.007] {
            for max_steps in 1..=16 {
                let mut acc = PhysicsAccumulator::new(TimestepMode::Fixed { step, max_steps });
                let plan = acc.accumulate(10.0);
                assert_eq!(plan.steps, max_steps, "step {step}, max_steps {max_steps}");
                assert_eq!(acc.accumulated_time(), 0.0);
            }
        }
    }

    #[test]
    fn test_zero_delta_runs_no_steps() {
        let mut acc = fixed_60hz();
        assert_eq!(acc.accumulate(0.0).steps, 0);

        let mut clamped = PhysicsAccumulator::new(TimestepMode::Clamped { max_dt: 0.05 });
        assert_eq!(clamped.accumulate(0.0), StepPlan::NONE);
    }

    #[test]
    fn test_invalid_delta_is_ignored() {
        let mut acc = fixed_60hz();
        assert_eq!(acc.accumulate(-1.0).steps, 0);
        assert_eq!(acc.accumulate(f32::NAN).steps, 0);
        assert_eq!(acc.accumulated_time(), 0.0);
    }

    #[test]
    fn test_clamped_mode_caps_spikes() {
        let mut acc = PhysicsAccumulator::new(TimestepMode::Clamped { max_dt: 0.05 });

        let plan = acc.accumulate(0.5);
        assert_eq!(plan.steps, 1);
        assert_eq!(plan.step_dt, 0.05);

        let plan = acc.accumulate(0.01);
        assert_eq!(plan.step_dt, 0.01);
    }

    #[test]
    fn test_reset() {
        let mut acc = fixed_60hz();
        acc.accumulate(1.0 / 120.0);
        acc.reset();
        assert_eq!(acc.accumulated_time(), 0.0);
    }
}
