//! Show and hide transitions.
//!
//! A tooltip fades in after it is shown and fades out when dismissed. The
//! host drives the animation clock through [`Transition::advance`] and reads
//! [`Transition::opacity`] for every frame.
//!
//! ```text
//! Hidden --show--> Appearing --advance--> Visible --dismiss--> Disappearing --advance--> Dismissed
//! ```
//!
//! The placement captured by [`Transition::show`] stays fixed while the
//! tooltip is animating; a new layout is only accepted once it is fully
//! visible.

use std::fmt;

use log::{debug, trace};
use thiserror::Error;

use signpost_core::placement::PlacementResult;

use crate::config::BehaviorConfig;

/// Lifecycle phase of a presented tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Hidden,
    Appearing,
    Visible,
    Disappearing,
    Dismissed,
}

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Appearing => "appearing",
            Self::Visible => "visible",
            Self::Disappearing => "disappearing",
            Self::Dismissed => "dismissed",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An operation that the current phase does not allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("placement is locked while the tooltip is {0}")]
    PlacementLocked(Phase),

    #[error("cannot show a tooltip that is {0}")]
    AlreadyShown(Phase),

    #[error("cannot lay out a tooltip that is {0}")]
    NotPresented(Phase),
}

/// Fade state machine for one tooltip.
#[derive(Debug, Clone)]
pub struct Transition {
    phase: Phase,
    duration: f32,
    elapsed: f32,
    placement: Option<PlacementResult>,
}

impl Transition {
    /// Creates a hidden transition with a fade of `duration` seconds.
    pub fn new(duration: f32) -> Self {
        Self {
            phase: Phase::Hidden,
            duration: duration.max(0.0),
            elapsed: 0.0,
            placement: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Fade duration in seconds.
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// The placement captured when the tooltip was shown.
    pub fn placement(&self) -> Option<&PlacementResult> {
        self.placement.as_ref()
    }

    /// Returns true while fading in or out.
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Appearing | Phase::Disappearing)
    }

    /// Current opacity of the dialog, arrow and backdrop.
    pub fn opacity(&self) -> f32 {
        match self.phase {
            Phase::Hidden | Phase::Dismissed => 0.0,
            Phase::Visible => 1.0,
            Phase::Appearing => self.progress(),
            Phase::Disappearing => 1.0 - self.progress(),
        }
    }

    /// Starts fading in with `placement` locked in.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::AlreadyShown`] unless the tooltip is hidden.
    pub fn show(&mut self, placement: PlacementResult) -> Result<(), TransitionError> {
        if self.phase != Phase::Hidden {
            return Err(TransitionError::AlreadyShown(self.phase));
        }
        self.placement = Some(placement);
        self.elapsed = 0.0;
        self.enter(Phase::Appearing);
        self.settle();
        Ok(())
    }

    /// Advances the animation clock by `elapsed` seconds and returns the
    /// resulting phase.
    pub fn advance(&mut self, elapsed: f32) -> Phase {
        if self.is_animating() && elapsed > 0.0 {
            self.elapsed += elapsed;
            trace!(phase = self.phase.name(), opacity = self.opacity(); "Transition advanced");
            self.settle();
        }
        self.phase
    }

    /// Starts fading out.
    ///
    /// Dismissing while fading in reverses from the current opacity. Returns
    /// false if the tooltip is already fading out or dismissed.
    pub fn dismiss(&mut self) -> bool {
        match self.phase {
            Phase::Hidden => {
                self.enter(Phase::Dismissed);
                true
            }
            Phase::Appearing => {
                self.elapsed = self.duration * (1.0 - self.progress());
                self.enter(Phase::Disappearing);
                self.settle();
                true
            }
            Phase::Visible => {
                self.elapsed = 0.0;
                self.enter(Phase::Disappearing);
                self.settle();
                true
            }
            Phase::Disappearing | Phase::Dismissed => false,
        }
    }

    /// Replaces the placement of a fully visible tooltip, e.g. after a
    /// rotation.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::PlacementLocked`] while animating and
    /// [`TransitionError::NotPresented`] when hidden or dismissed.
    pub fn relayout(&mut self, placement: PlacementResult) -> Result<(), TransitionError> {
        match self.phase {
            Phase::Visible => {
                self.placement = Some(placement);
                Ok(())
            }
            Phase::Appearing | Phase::Disappearing => {
                Err(TransitionError::PlacementLocked(self.phase))
            }
            Phase::Hidden | Phase::Dismissed => Err(TransitionError::NotPresented(self.phase)),
        }
    }

    fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Completes the running fade once the clock has reached its duration.
    fn settle(&mut self) {
        if self.progress() < 1.0 {
            return;
        }
        match self.phase {
            Phase::Appearing => self.enter(Phase::Visible),
            Phase::Disappearing => self.enter(Phase::Dismissed),
            _ => {}
        }
    }

    fn enter(&mut self, phase: Phase) {
        debug!(from = self.phase.name(), to = phase.name(); "Transition phase changed");
        self.phase = phase;
        if !self.is_animating() {
            self.elapsed = 0.0;
        }
    }
}

impl From<&BehaviorConfig> for Transition {
    fn from(behavior: &BehaviorConfig) -> Self {
        Self::new(behavior.show_hide_animation_duration())
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use signpost_core::{
        geometry::{Bounds, Size},
        placement::{PlacementConfig, solve},
    };

    use super::*;

    fn check_opacity_monotonic(duration: f32, steps: Vec<f32>) -> Result<(), TestCaseError> {
        let placement = solve(
            Bounds::new(10.0, 10.0, 40.0, 40.0),
            Size::new(100.0, 60.0),
            Bounds::new(0.0, 0.0, 375.0, 812.0),
            &PlacementConfig::default(),
        );
        let mut transition = Transition::new(duration);
        transition.show(placement).map_err(|err| TestCaseError::fail(err.to_string()))?;

        let mut previous = transition.opacity();
        for step in &steps {
            transition.advance(*step);
            let opacity = transition.opacity();
            prop_assert!(opacity >= previous, "{opacity} < {previous} while appearing");
            previous = opacity;
        }

        transition.dismiss();
        let mut previous = transition.opacity();
        for step in &steps {
            transition.advance(*step);
            let opacity = transition.opacity();
            prop_assert!(opacity <= previous, "{opacity} > {previous} while disappearing");
            previous = opacity;
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn opacity_is_monotonic(
            duration in 0.0f32..2.0,
            steps in prop::collection::vec(0.0f32..0.5, 0..20),
        ) {
            check_opacity_monotonic(duration, steps)?;
        }
    }
}
