//! Tap handling and the one-shot dismiss callback.
//!
//! [`Dismissal`] turns taps on a [`Presentation`] into handler calls and
//! dismissals. The host's on-dismiss callback runs at most once, no matter
//! how many close triggers arrive while the tooltip fades out.

use std::fmt;

use log::debug;

use signpost_core::{content::ContentItem, geometry::Point};

use crate::{
    config::BehaviorConfig,
    presentation::{Presentation, TapTarget},
};

/// Why a tooltip was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    BackgroundTap,
    CloseButton,
    TopAction,
    Action,
}

/// Result of a tap on a presented tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// The tooltip was dismissed by this tap.
    Dismissed(DismissReason),
    /// A button handler ran; the tooltip stays up.
    Invoked(TapTarget),
    /// The tap had no effect.
    Ignored,
}

type DismissCallback = Box<dyn FnOnce(DismissReason)>;

/// One-shot dismissal for a single presented tooltip.
pub struct Dismissal {
    background_tap_closable: bool,
    on_dismiss: Option<DismissCallback>,
    reason: Option<DismissReason>,
}

impl Dismissal {
    /// Creates a dismissal that honors background taps per `behavior`.
    pub fn new(behavior: &BehaviorConfig) -> Self {
        Self {
            background_tap_closable: behavior.is_background_tap_closable(),
            on_dismiss: None,
            reason: None,
        }
    }

    /// Sets the callback run on the first dismissal.
    pub fn with_callback(mut self, on_dismiss: impl FnOnce(DismissReason) + 'static) -> Self {
        self.on_dismiss = Some(Box::new(on_dismiss));
        self
    }

    /// Returns the reason of the dismissal, once it happened.
    pub fn reason(&self) -> Option<DismissReason> {
        self.reason
    }

    pub fn is_dismissed(&self) -> bool {
        self.reason.is_some()
    }

    /// Dismisses the tooltip.
    ///
    /// Returns true on the first call. Later calls are ignored and return
    /// false.
    pub fn trigger(&mut self, reason: DismissReason) -> bool {
        if let Some(first) = self.reason {
            debug!(reason:? = reason, first:? = first; "Tooltip already dismissed, ignoring");
            return false;
        }

        debug!(reason:?; "Dismissing tooltip");
        self.reason = Some(reason);
        if let Some(on_dismiss) = self.on_dismiss.take() {
            on_dismiss(reason);
        }
        true
    }

    /// Routes a tap at screen `point`.
    ///
    /// Background taps dismiss only when enabled; taps on the dialog body
    /// never do. The close button dismisses. Action buttons and the top
    /// action run their handlers and leave dismissal to the host. Taps after
    /// dismissal are ignored.
    pub fn handle_tap(&mut self, presentation: &Presentation, point: Point) -> TapOutcome {
        if self.is_dismissed() {
            return TapOutcome::Ignored;
        }

        let target = presentation.hit_test(point);
        debug!(target:?, point:?; "Tap received");

        match target {
            TapTarget::Background if self.background_tap_closable => {
                self.dismiss_with(DismissReason::BackgroundTap)
            }
            TapTarget::Background | TapTarget::Dialog => TapOutcome::Ignored,
            TapTarget::CloseButton => self.dismiss_with(DismissReason::CloseButton),
            TapTarget::TopAction => match presentation.top_action() {
                Some((top_action, _)) => {
                    top_action.invoke();
                    TapOutcome::Invoked(target)
                }
                None => TapOutcome::Ignored,
            },
            TapTarget::Action { item, action } => {
                let handler = match presentation.items().get(item) {
                    Some(ContentItem::Actions(actions)) => actions
                        .actions()
                        .nth(action)
                        .and_then(|action| action.handler()),
                    _ => None,
                };
                match handler {
                    Some(handler) => {
                        handler.invoke();
                        TapOutcome::Invoked(target)
                    }
                    None => TapOutcome::Ignored,
                }
            }
        }
    }

    fn dismiss_with(&mut self, reason: DismissReason) -> TapOutcome {
        if self.trigger(reason) {
            TapOutcome::Dismissed(reason)
        } else {
            TapOutcome::Ignored
        }
    }
}

impl fmt::Debug for Dismissal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dismissal")
            .field("background_tap_closable", &self.background_tap_closable)
            .field("has_callback", &self.on_dismiss.is_some())
            .field("reason", &self.reason)
            .finish()
    }
}
