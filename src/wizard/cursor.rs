//! Step / sub-step cursor for a wizard
//!
//! A cursor is a plain `(step, sub_step)` pair. Every navigation primitive
//! returns the next cursor or a [`NavigationError`]; the caller decides whether
//! to keep the old one. Both counters are 1-based.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shape of a wizard as seen by the cursor: how many steps exist and how many
/// sub-steps each of them has.
pub trait StepBounds {
    /// Number of top-level steps (always at least 1 for a usable wizard)
    fn total_steps(&self) -> u32;

    /// Number of sub-steps for a 1-based step; 1 for steps without sub-steps
    fn sub_steps(&self, step: u32) -> u32;
}

/// Reasons a navigation request is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("step {requested} is outside 1..={total}")]
    StepOutOfRange { requested: u32, total: u32 },

    #[error("already at the first step")]
    AtFirstStep,

    #[error("already at the last step ({total})")]
    AtLastStep { total: u32 },

    #[error("sub-step {requested} is outside 1..={limit} for step {step}")]
    SubStepOutOfRange { step: u32, requested: u32, limit: u32 },

    #[error("already at the first sub-step of step {step}")]
    AtFirstSubStep { step: u32 },

    #[error("already at the last sub-step ({limit}) of step {step}")]
    AtLastSubStep { step: u32, limit: u32 },
}

/// Position inside a wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkflowCursor {
    pub step: u32,
    pub sub_step: u32,
}

impl Default for WorkflowCursor {
    fn default() -> Self {
        Self::START
    }
}

impl WorkflowCursor {
    /// Where every freshly mounted wizard begins
    pub const START: WorkflowCursor = WorkflowCursor {
        step: 1,
        sub_step: 1,
    };

    /// Jump to step `n`; the sub-step resets to 1.
    pub fn go_to_step(
        self,
        n: u32,
        bounds: &(impl StepBounds + ?Sized),
    ) -> Result<Self, NavigationError> {
        let total = bounds.total_steps();
        if n == 0 || n > total {
            return Err(NavigationError::StepOutOfRange {
                requested: n,
                total,
            });
        }
        Ok(Self {
            step: n,
            sub_step: 1,
        })
    }

    pub fn next_step(self, bounds: &(impl StepBounds + ?Sized)) -> Result<Self, NavigationError> {
        let total = bounds.total_steps();
        if self.step >= total {
            return Err(NavigationError::AtLastStep { total });
        }
        Ok(Self {
            step: self.step + 1,
            sub_step: 1,
        })
    }

    pub fn prev_step(self) -> Result<Self, NavigationError> {
        if self.step <= 1 {
            return Err(NavigationError::AtFirstStep);
        }
        Ok(Self {
            step: self.step - 1,
            sub_step: 1,
        })
    }

    /// Jump to sub-step `n` of the current step.
    pub fn go_to_sub_step(
        self,
        n: u32,
        bounds: &(impl StepBounds + ?Sized),
    ) -> Result<Self, NavigationError> {
        let limit = bounds.sub_steps(self.step);
        if n == 0 || n > limit {
            return Err(NavigationError::SubStepOutOfRange {
                step: self.step,
                requested: n,
                limit,
            });
        }
        Ok(Self {
            step: self.step,
            sub_step: n,
        })
    }

    pub fn next_sub_step(
        self,
        bounds: &(impl StepBounds + ?Sized),
    ) -> Result<Self, NavigationError> {
        let limit = bounds.sub_steps(self.step);
        if self.sub_step >= limit {
            return Err(NavigationError::AtLastSubStep {
                step: self.step,
                limit,
            });
        }
        Ok(Self {
            step: self.step,
            sub_step: self.sub_step + 1,
        })
    }

    pub fn prev_sub_step(self) -> Result<Self, NavigationError> {
        if self.sub_step <= 1 {
            return Err(NavigationError::AtFirstSubStep { step: self.step });
        }
        Ok(Self {
            step: self.step,
            sub_step: self.sub_step - 1,
        })
    }

    /// Fraction of the wizard behind this cursor, 0.0 on the first step and
    /// 1.0 on the last.
    pub fn progress(&self, bounds: &(impl StepBounds + ?Sized)) -> f64 {
        let total = bounds.total_steps();
        if total <= 1 {
            return 1.0;
        }
        let done = self.step.clamp(1, total) - 1;
        f64::from(done) / f64::from(total - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Five steps; step 3 has four sub-steps, the rest have one.
    struct Fixed;

    impl StepBounds for Fixed {
        fn total_steps(&self) -> u32 {
            5
        }

        fn sub_steps(&self, step: u32) -> u32 {
            if step == 3 {
                4
            } else {
                1
            }
        }
    }

    fn at(step: u32, sub_step: u32) -> WorkflowCursor {
        WorkflowCursor { step, sub_step }
    }

    #[test]
    fn test_default_is_start() {
        assert_eq!(WorkflowCursor::default(), at(1, 1));
    }

    #[test]
    fn test_go_to_step_resets_sub_step() {
        let next = at(3, 4).go_to_step(5, &Fixed).unwrap();
        assert_eq!(next, at(5, 1));
    }

    #[test]
    fn test_go_to_step_rejects_zero_and_overflow() {
        assert_eq!(
            at(2, 1).go_to_step(0, &Fixed),
            Err(NavigationError::StepOutOfRange {
                requested: 0,
                total: 5
            })
        );
        assert_eq!(
            at(2, 1).go_to_step(6, &Fixed),
            Err(NavigationError::StepOutOfRange {
                requested: 6,
                total: 5
            })
        );
    }

    #[test]
    fn test_next_step_stops_at_last() {
        assert_eq!(at(4, 1).next_step(&Fixed), Ok(at(5, 1)));
        assert_eq!(
            at(5, 1).next_step(&Fixed),
            Err(NavigationError::AtLastStep { total: 5 })
        );
    }

    #[test]
    fn test_prev_step_stops_at_first() {
        assert_eq!(at(3, 2).prev_step(), Ok(at(2, 1)));
        assert_eq!(at(1, 1).prev_step(), Err(NavigationError::AtFirstStep));
    }

    #[test]
    fn test_sub_step_bounds_follow_current_step() {
        assert_eq!(at(3, 1).go_to_sub_step(4, &Fixed), Ok(at(3, 4)));
        assert_eq!(
            at(2, 1).go_to_sub_step(2, &Fixed),
            Err(NavigationError::SubStepOutOfRange {
                step: 2,
                requested: 2,
                limit: 1
            })
        );
        assert_eq!(
            at(3, 4).next_sub_step(&Fixed),
            Err(NavigationError::AtLastSubStep { step: 3, limit: 4 })
        );
        assert_eq!(
            at(3, 1).prev_sub_step(),
            Err(NavigationError::AtFirstSubStep { step: 3 })
        );
    }

    #[test]
    fn test_progress() {
        assert!((at(1, 1).progress(&Fixed) - 0.0).abs() < f64::EPSILON);
        assert!((at(3, 1).progress(&Fixed) - 0.5).abs() < f64::EPSILON);
        assert!((at(5, 1).progress(&Fixed) - 1.0).abs() < f64::EPSILON);
    }
}
